use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum BitacoraError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Entry not found: {0}")]
    NotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, BitacoraError>;
