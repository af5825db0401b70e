//! Fetches a Notion database and classifies every page into a [`MediaPost`].

mod attachments;
mod dates;
mod mapper;

pub use attachments::{classify_attachment, select_media, AttachmentKind, MediaSelection};
pub use dates::display_date;
pub use mapper::map_page;

use crate::api::{DatabaseQuery, NotionRepository};
use crate::config::{NotionDefaults, PropertyNames};
use crate::error::AppError;
use crate::model::MediaPost;
use crate::types::{ApiKey, DatabaseId};
use std::sync::Arc;

/// Queries a database and maps its pages to media posts.
///
/// Holds the fallback database and token it was configured with; values
/// passed to [`MediaFetcher::fetch_media_posts`] override them.
#[derive(Clone)]
pub struct MediaFetcher {
    repository: Arc<dyn NotionRepository>,
    defaults: NotionDefaults,
    properties: PropertyNames,
}

impl MediaFetcher {
    pub fn new(
        repository: Arc<dyn NotionRepository>,
        defaults: NotionDefaults,
        properties: PropertyNames,
    ) -> Self {
        Self {
            repository,
            defaults,
            properties,
        }
    }

    pub fn properties(&self) -> &PropertyNames {
        &self.properties
    }

    /// Resolves the database and token, then fetches and classifies.
    ///
    /// An empty database yields `Ok(vec![])`; any upstream failure is an
    /// error, never an empty list.
    pub async fn fetch_media_posts(
        &self,
        database: Option<&str>,
        token: Option<&str>,
    ) -> Result<Vec<MediaPost>, AppError> {
        let (database, credential) = self.defaults.resolve(database, token)?;
        self.fetch_resolved(&database, &credential).await
    }

    pub async fn fetch_resolved(
        &self,
        database: &DatabaseId,
        credential: &ApiKey,
    ) -> Result<Vec<MediaPost>, AppError> {
        let query = DatabaseQuery::newest_first(self.properties.publish_date.clone());
        let pages = self
            .repository
            .query_database(database, credential, &query)
            .await?;

        if let Some(first) = pages.first() {
            log::debug!(
                "First record {} has properties: {}",
                first.id,
                first.properties.names().collect::<Vec<_>>().join(", ")
            );
        }

        let posts: Vec<MediaPost> = pages
            .iter()
            .map(|page| map_page(page, &self.properties))
            .collect();

        log::info!(
            "Mapped {} media post(s) from database {}",
            posts.len(),
            database
        );
        Ok(posts)
    }
}
