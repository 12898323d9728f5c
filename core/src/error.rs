use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedbackError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed cache file: {0}")]
    MalformedCache(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type FeedbackResult<T> = Result<T, FeedbackError>;
