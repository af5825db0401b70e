// src/api/client.rs
//! Thin HTTP client wrapper for the Notion API.
//!
//! One `reqwest::Client` (and its connection pool) is shared by every
//! request; the bearer token is attached per call since each widget embed
//! may supply its own.

use super::pagination::fetch_all_pages;
use super::parser::parse_query_response;
use super::types::DatabaseQuery;
use crate::constants::{NOTION_API_BASE_URL, NOTION_API_VERSION};
use crate::error::AppError;
use crate::model::PageRecord;
use crate::types::{ApiKey, DatabaseId};
use reqwest::{header, Client, Response};
use serde::Serialize;
use std::time::Duration;

/// Connection settings for [`NotionHttpClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// API root, without a trailing slash.
    pub base_url: String,
    /// Upper bound for a single Notion round-trip. `None` waits forever.
    pub timeout: Option<Duration>,
    /// Cap on query round-trips per fetch. `None` follows every cursor.
    pub max_pages: Option<u32>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: NOTION_API_BASE_URL.to_string(),
            timeout: None,
            max_pages: None,
        }
    }
}

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: String,
    max_pages: Option<u32>,
}

impl NotionHttpClient {
    pub fn new(options: &ClientOptions) -> Result<Self, AppError> {
        let mut builder = Client::builder().default_headers(Self::create_headers());
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            max_pages: options.max_pages,
        })
    }

    /// Headers shared by every Notion request.
    fn create_headers() -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_API_VERSION),
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers
    }

    fn bearer(credential: &ApiKey) -> Result<header::HeaderValue, AppError> {
        let mut value = header::HeaderValue::from_str(&format!("Bearer {}", credential.as_str()))
            .map_err(|_| {
                AppError::Validation(crate::types::ValidationError::InvalidApiKey {
                    reason: "token cannot be sent as an HTTP header".to_string(),
                })
            })?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Makes a POST request with JSON body to the specified endpoint.
    pub async fn post<T: Serialize>(
        &self,
        endpoint: &str,
        credential: &ApiKey,
        body: &T,
    ) -> Result<Response, AppError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, Self::bearer(credential)?)
            .json(body)
            .send()
            .await?;

        log::debug!("POST {} -> {}", url, response.status());
        Ok(response)
    }
}

#[async_trait::async_trait]
impl super::NotionRepository for NotionHttpClient {
    async fn query_database(
        &self,
        database: &DatabaseId,
        credential: &ApiKey,
        query: &DatabaseQuery,
    ) -> Result<Vec<PageRecord>, AppError> {
        let endpoint = format!("databases/{}/query", database.to_hyphenated());
        log::info!("Querying Notion database {}", database);

        let endpoint = endpoint.as_str();
        fetch_all_pages(
            move |page_size, cursor| {
                let body = query.with_cursor(page_size, cursor);
                async move {
                    let response = self.post(endpoint, credential, &body).await?;
                    let result = extract_response_text(response).await?;
                    parse_query_response(result)
                }
            },
            self.max_pages,
        )
        .await
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
