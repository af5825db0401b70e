use super::response::{ApiError, MISSING_PARAMETERS_MESSAGE};
use super::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

/// Query string of `GET /api/media`. Both fields fall back to the
/// server's configured defaults when absent.
#[derive(Debug, Default, Deserialize)]
pub struct MediaQuery {
    pub db: Option<String>,
    pub token: Option<String>,
}

/// `GET /api/media?db=<database_id>&token=<access_token>`
pub async fn get_media(
    State(state): State<AppState>,
    query: Result<Query<MediaQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // Unreadable query strings (e.g. a repeated `db`) still get a JSON body
    let Query(query) = query.map_err(|_| {
        log::debug!("Rejected media request with an unreadable query string");
        ApiError::BadRequest(MISSING_PARAMETERS_MESSAGE.to_string())
    })?;

    let posts = state
        .fetcher
        .fetch_media_posts(query.db.as_deref(), query.token.as_deref())
        .await?;

    Ok(([(header::CACHE_CONTROL, "no-store")], Json(posts)))
}

/// `GET /health`
pub async fn health() -> &'static str {
    "ok"
}
