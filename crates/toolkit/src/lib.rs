pub mod dto;
pub mod error;
pub mod models;
pub mod services;

pub use models::{NameFormat, ParsedName};
pub use services::name_formatting::NameFormatter;
