//! Client side of `GET /api/media`.

use crate::model::MediaPost;
use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // The URL carries the token, so it is stripped before wrapping
    #[error("Request failed: {0}")]
    Request(reqwest::Error),

    #[error("Media endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.without_url())
    }
}

/// Database and token the widget was embedded with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetQuery {
    pub db: Option<String>,
    pub token: Option<String>,
}

impl WidgetQuery {
    pub fn new(db: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            db: Some(db.into()),
            token: Some(token.into()),
        }
    }

    /// Reads `db` and `token` from the embedding page's query string.
    pub fn from_embed_url(page_url: &str) -> Result<Self, FeedError> {
        let url = Url::parse(page_url)?;
        let mut query = Self::default();
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "db" if query.db.is_none() => query.db = Some(value.into_owned()),
                "token" if query.token.is_none() => query.token = Some(value.into_owned()),
                _ => {}
            }
        }
        Ok(query)
    }

    /// Both values, when present and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let db = self.db.as_deref().filter(|s| !s.is_empty())?;
        let token = self.token.as_deref().filter(|s| !s.is_empty())?;
        Some((db, token))
    }
}

#[async_trait]
pub trait MediaFeed: Send + Sync {
    async fn fetch(&self, db: &str, token: &str) -> Result<Vec<MediaPost>, FeedError>;
}

/// [`MediaFeed`] backed by a running media endpoint.
#[derive(Debug, Clone)]
pub struct HttpMediaFeed {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpMediaFeed {
    /// `base_url` is the server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: &str) -> Result<Self, FeedError> {
        let endpoint = Url::parse(&format!("{}/api/media", base_url.trim_end_matches('/')))?;
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn request_url(&self, db: &str, token: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("db", db)
            .append_pair("token", token);
        url
    }
}

#[async_trait]
impl MediaFeed for HttpMediaFeed {
    async fn fetch(&self, db: &str, token: &str) -> Result<Vec<MediaPost>, FeedError> {
        let response = self
            .client
            .get(self.request_url(db, token))
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status));
        }

        Ok(response.json::<Vec<MediaPost>>().await?)
    }
}
