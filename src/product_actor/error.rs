use thiserror::Error;

/// First rule an update payload broke. The `Display` text is what callers
/// see in the error `details`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field} must be >= {min}")]
    BelowMinimum { field: &'static str, min: i64 },
    #[error("{field} length must be <= {max}")]
    TooLong { field: &'static str, max: usize },
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("No product with id {0}")]
    NotFound(i64),
    #[error("Product ID must be a positive integer")]
    InvalidId(String),
    #[error("Request body must be valid JSON")]
    MalformedBody(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Path productId must match body product_id")]
    IdMismatch { path: i64, body: i64 },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

