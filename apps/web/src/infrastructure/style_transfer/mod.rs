pub mod remote_style_transfer;
pub mod traits;
