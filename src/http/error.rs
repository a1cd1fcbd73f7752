use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::product_actor::ProductError;

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: &'static str,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub details: String,
}

/// HTTP-facing error. Each variant carries the `details` text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Product not found")]
    NotFound(String),
    #[error("The provided input data is invalid")]
    InvalidInput(String),
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "PRODUCT_NOT_FOUND",
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "Product not found",
            ApiError::InvalidInput(_) => "The provided input data is invalid",
            ApiError::Internal(_) => "Internal server error",
        }
    }

    pub fn details(&self) -> &str {
        match self {
            ApiError::NotFound(d) | ApiError::InvalidInput(d) | ApiError::Internal(d) => d,
        }
    }

    pub fn body(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.code(),
            message: self.message(),
            details: self.details().to_string(),
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ProductError::InvalidId(_)
            | ProductError::MalformedBody(_)
            | ProductError::Validation(_)
            | ProductError::IdMismatch { .. } => ApiError::InvalidInput(err.to_string()),
            ProductError::ActorCommunicationError(_) => {
                error!(error = %err, "Product store unavailable");
                // Store internals stay out of the response body.
                ApiError::Internal(String::new())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status().is_client_error() {
            warn!(code = self.code(), details = self.details(), "Request rejected");
        }
        (self.status(), Json(self.body())).into_response()
    }
}
