pub mod select_image;
pub mod stylize_image;
