use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolkitError {
    #[error("Unknown name format: {0}")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, ToolkitError>;
