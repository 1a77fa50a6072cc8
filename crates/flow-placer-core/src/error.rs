use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlacerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Raw direction tag outside `{0 = horizontal, 1 = vertical}`.
    /// Only ever raised as a panic payload by the tag-based factory.
    #[error("unknown grow direction tag {0}; this is a bug in the caller")]
    InvalidDirectionTag(u8),
}

pub type Result<T> = std::result::Result<T, PlacerError>;
