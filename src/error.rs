//! Error types for camcade-scores
//!
//! Every handler returns `ApiResult<T>`; `ApiError` maps onto the HTTP
//! status codes and error codes of the leaderboard API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Game identifier not in the configured set (400)
    #[error("Unknown game: {0}")]
    UnknownGame(String),

    /// Score failed to parse to a finite, non-negative integer (400)
    #[error("Invalid score: {0}")]
    InvalidScore(String),

    /// Admin key missing or wrong (401)
    #[error("Unauthorized")]
    Unauthorized,

    /// Database error (500). Detail is logged, never sent to the client.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::UnknownGame(game) => (
                StatusCode::BAD_REQUEST,
                "UNKNOWN_GAME",
                format!("Unknown game: {}", game),
            ),
            ApiError::InvalidScore(msg) => (
                StatusCode::BAD_REQUEST,
                "INVALID_SCORE",
                format!("Invalid score: {}", msg),
            ),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Invalid or missing admin key".to_string(),
            ),
            ApiError::Database(ref err) => {
                // Log the real failure; the client only sees a generic message
                error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
