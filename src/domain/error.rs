use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Vector dimension {actual} does not match store dimension {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Model fetch error: {0}")]
    Fetch(String),
}

impl From<sqlx::Error> for DomainError {
    fn from(e: sqlx::Error) -> Self {
        DomainError::Database(e.to_string())
    }
}
