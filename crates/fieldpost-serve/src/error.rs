//! Error types for the HTTP layer.
//!
//! Errors are rendered as short plain-text responses. Client errors get a
//! specific message; infrastructure errors are logged in full and answer
//! with a generic body so no detail leaks to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// HTTP layer error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The path id was malformed or no matching blog row exists.
    #[error("blog not found")]
    BlogNotFound,

    /// The supplied password does not match the blog's stored hash.
    #[error("access denied")]
    AccessDenied,

    /// Store or hashing failure from the domain layer.
    #[error("core error: {0}")]
    Core(#[from] fieldpost_core::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::BlogNotFound => (StatusCode::NOT_FOUND, "Blog not found"),
            Self::AccessDenied => (StatusCode::FORBIDDEN, "Access denied"),
            Self::Core(err) => {
                tracing::error!(error = %err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, body).into_response()
    }
}
