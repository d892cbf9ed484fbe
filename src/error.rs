//! Error types for the RAG service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for RAG operations
pub type Result<T> = std::result::Result<T, Error>;

/// RAG service errors
#[derive(Debug, Error)]
pub enum Error {
    /// Document not found in storage
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Extraction yielded no usable text
    #[error("No text could be extracted from '{0}'")]
    EmptyContent(String),

    /// Chunking or service parameters violate preconditions
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed client request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Embedding or generation backend failure
    #[error("Provider error: {0}")]
    Provider(String),

    /// Text decoding failure (bad UTF-8, unreadable PDF)
    #[error("Decode error: {0}")]
    Decode(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a provider error
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            Error::NotFound(name) => (
                StatusCode::NOT_FOUND,
                "not_found",
                format!("Document not found: {}", name),
            ),
            Error::EmptyContent(name) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "empty_content",
                format!("No text could be extracted from '{}'", name),
            ),
            Error::InvalidConfig(msg) => (StatusCode::BAD_REQUEST, "config_error", msg.clone()),
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            Error::Provider(msg) => (StatusCode::BAD_GATEWAY, "provider_error", msg.clone()),
            Error::Decode(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "decode_error",
                msg.clone(),
            ),
            Error::Io(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "io_error",
                err.to_string(),
            ),
            Error::Json(err) => (StatusCode::BAD_REQUEST, "json_error", err.to_string()),
            Error::Http(err) => (StatusCode::BAD_GATEWAY, "http_error", err.to_string()),
            Error::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
