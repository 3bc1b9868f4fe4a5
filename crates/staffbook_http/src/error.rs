//! HTTP error taxonomy and response mapping.
//!
//! | Variant | Status | Body |
//! |---|---|---|
//! | `Validation` | 400 | `{"error", "violations": [{field, message}]}` |
//! | `MalformedBody` | 400 | `{"error"}` |
//! | `NotFound` | 404 | `{"error"}` |
//! | `Internal` | 500 | `{"error": "internal server error"}` |

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde_json::json;
use staffbook_core::{RepoError, ValidationErrors};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ApiError {
    /// Well-formed payload that breaks field rules.
    Validation(ValidationErrors),
    /// Body or path that could not be decoded.
    MalformedBody(String),
    NotFound(String),
    /// Store or runtime failure; details are logged, not returned.
    Internal(String),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::MalformedBody(message) | Self::NotFound(message) => write!(f, "{message}"),
            Self::Internal(message) => write!(f, "internal error: {message}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(_) => Self::NotFound(value.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::MalformedBody(value.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(value: PathRejection) -> Self {
        Self::MalformedBody(value.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": errors.to_string(),
                    "violations": errors.violations(),
                })),
            )
                .into_response(),
            Self::MalformedBody(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            Self::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            Self::Internal(message) => {
                error!("event=http_error module=http status=error error={message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
