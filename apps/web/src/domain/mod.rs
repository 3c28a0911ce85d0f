pub mod image;
pub mod shared;
pub mod workspace;
