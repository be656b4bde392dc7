/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by storage and statistics operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
