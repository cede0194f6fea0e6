//! Page error types with IntoResponse.
//!
//! This is a user-facing HTML service: misses render the 404 view, and
//! everything else degrades to a terse plain-text body. Post creation
//! failures share one uniform body regardless of cause; the cause is
//! logged, never surfaced.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::DbError;
use crate::models::ValidationError;
use crate::render;

/// Uniform body for every post-creation failure.
pub const CREATE_ERROR_TEXT: &str = "Error creating post. Slug may already exist.";

/// Any reason a post creation can fail. All of them map to the same
/// response.
#[derive(Debug, thiserror::Error)]
pub enum CreationError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] DbError),
}

/// Error type for page handlers.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Unknown slug or unmatched path (404 page).
    #[error("not found")]
    NotFound,

    /// Post creation failed (uniform text body).
    #[error("creation failed: {0}")]
    Creation(#[from] CreationError),

    /// Store failure outside the creation path (500, logged).
    #[error("database error: {0}")]
    Database(#[from] DbError),

    /// Session store failure (500, logged).
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound => {
                (StatusCode::NOT_FOUND, render::not_found_page()).into_response()
            }
            Self::Creation(err) => {
                tracing::warn!(error = %err, "post creation failed");
                (StatusCode::CONFLICT, CREATE_ERROR_TEXT).into_response()
            }
            Self::Database(err) => {
                tracing::error!(error = %err, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
            Self::Session(err) => {
                tracing::error!(error = %err, "session store error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
        }
    }
}
