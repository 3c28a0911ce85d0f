pub mod session;
pub mod style_transfer;
