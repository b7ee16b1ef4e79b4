use thiserror::Error;

#[derive(Error, Debug)]
pub enum TutorError {
    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    #[error("Ambiguous id '{0}': matches more than one item, use a longer prefix")]
    AmbiguousId(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TutorError>;
