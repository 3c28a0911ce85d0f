pub mod data_url;

pub use data_url::DataUrl;
