use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Resource not found")]
    NotFound,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("{0}")]
    Validation(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Internal server error")]
    InternalServerError,
}
