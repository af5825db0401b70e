//! Error responses for the media endpoint.
//!
//! Callers see `{ "error": ... }`. Server-side failures get a fixed
//! message; the underlying error is logged here and never echoed back.

use crate::error::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const MISSING_PARAMETERS_MESSAGE: &str = "Missing database ID or token";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch media posts";
pub const UPSTREAM_FAILURE_CODE: &str = "upstream_failure";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request named no usable database or token.
    BadRequest(String),
    /// Notion could not be reached or answered with an error.
    Upstream,
    /// Anything else.
    Internal,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream => StatusCode::BAD_GATEWAY,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::MissingCredentials => {
                log::debug!("Rejected media request without database ID or token");
                Self::BadRequest(MISSING_PARAMETERS_MESSAGE.to_string())
            }
            AppError::Validation(reason) => {
                log::debug!("Rejected media request: {}", reason);
                Self::BadRequest(reason.to_string())
            }
            err if err.is_upstream() => {
                log::error!("Notion request failed: {}", err);
                Self::Upstream
            }
            err => {
                log::error!("Media request failed: {}", err);
                Self::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            Self::BadRequest(message) => ErrorBody {
                error: message,
                code: None,
            },
            Self::Upstream => ErrorBody {
                error: FETCH_FAILED_MESSAGE.to_string(),
                code: Some(UPSTREAM_FAILURE_CODE),
            },
            Self::Internal => ErrorBody {
                error: FETCH_FAILED_MESSAGE.to_string(),
                code: None,
            },
        };

        (status, Json(body)).into_response()
    }
}
