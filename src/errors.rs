use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid member: {0}")]
    Invalid(String),

    #[error("member not found: {0}")]
    NotFound(i64),

    #[error("storage error: {0}")]
    IO(#[from] IOError),

    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("configuration error: {0}")]
    Config(String),
}

#[derive(Debug, Error)]
pub enum IOError {
    #[error("IO error: {0}")]
    Error(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
    #[error("encoding error: {0}")]
    EncodingError(String),
    #[error("{0}")]
    Msg(String),
}

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("query failed: {0}")]
    Query(String),
    #[error("corrupted row {0}: {1}")]
    CorruptedRow(i64, String),
}

impl From<std::io::Error> for IOError {
    fn from(e: std::io::Error) -> Self {
        IOError::Error(e.to_string())
    }
}

impl From<serde_json::Error> for IOError {
    fn from(e: serde_json::Error) -> Self {
        IOError::SerializationError(e.to_string())
    }
}

impl From<csv::Error> for IOError {
    fn from(e: csv::Error) -> Self {
        IOError::SerializationError(e.to_string())
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(e: sqlx::Error) -> Self {
        DatabaseError::Query(e.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Database(DatabaseError::from(e))
    }
}
