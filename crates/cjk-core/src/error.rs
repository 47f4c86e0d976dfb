use thiserror::Error;

#[derive(Error, Debug)]
pub enum CjkError {
    #[error("Input too large: {len} bytes exceeds the {limit} byte limit")]
    InputTooLarge { len: usize, limit: usize },
    #[error("Invalid display mode: {0}")]
    InvalidMode(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CjkError>;
