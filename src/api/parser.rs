// src/api/parser.rs
//! Turns raw Notion responses into typed values or typed errors.

use super::client::ApiResponse;
use super::responses::{NotionError, PaginatedResponse, QueryDatabaseResponse};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use crate::model::PageRecord;
use reqwest::StatusCode;

/// Parse any Notion API response, success or error.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success_body(&result.data, &result.url)
    } else {
        parse_error_body(&result.data, result.status, &result.url)
    }
}

fn parse_success_body<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse {
            url: url.to_string(),
            message: format!("{} (body: {})", e, preview(body)),
        }
    })
}

fn parse_error_body<T>(body: &str, status: StatusCode, url: &str) -> Result<T, AppError> {
    if let Ok(notion_error) = serde_json::from_str::<NotionError>(body) {
        log::warn!(
            "Notion rejected request to {} with {} ({}), request id {:?}",
            url,
            notion_error.code,
            status,
            notion_error.request_id
        );
        return Err(AppError::NotionService {
            code: NotionErrorCode::from_api_response(&notion_error.code),
            message: notion_error.message,
            status,
        });
    }

    // Fallback to generic error with HTTP status code
    Err(AppError::NotionService {
        code: NotionErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}", status, url),
        status,
    })
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let cut: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", cut)
    } else {
        body.to_string()
    }
}

/// Parse one page of a database query.
pub fn parse_query_response(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<PageRecord>, AppError> {
    let response: QueryDatabaseResponse = parse_api_response(result)?;
    Ok(response)
}
