/// Errors raised while building or mining multi-time-interval sequences.
#[derive(thiserror::Error, Debug)]
pub enum MiningError {
    #[error("Invalid bucket: {0}")]
    InvalidBucket(String),

    #[error("Support is undefined for an empty database")]
    EmptyDatabase,

    #[error("Malformed pattern: {0}")]
    MalformedPattern(String),

    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type MiningResult<T> = Result<T, MiningError>;
