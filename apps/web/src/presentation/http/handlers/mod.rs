pub mod docs;
pub mod health;
pub mod page;
pub mod previews;
pub mod stylize;
pub mod uploads;
pub mod workspace;
