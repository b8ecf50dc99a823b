//! HTTP-facing errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use launchdash_core::errors::error_code::{self, DashErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Unknown input: {0}")]
    UnknownInput(String),

    #[error("Unknown output: {0}")]
    UnknownOutput(String),
}

impl DashErrorCode for ServerError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownInput(_) => error_code::UNKNOWN_INPUT,
            Self::UnknownOutput(_) => error_code::UNKNOWN_OUTPUT,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    code: &'static str,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::UnknownInput(_) => StatusCode::BAD_REQUEST,
            Self::UnknownOutput(_) => StatusCode::NOT_FOUND,
        };
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.error_code(),
        };
        (status, Json(body)).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
