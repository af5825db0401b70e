// src/api/types.rs
//! Request types for the database query endpoint.

use crate::constants::NOTION_API_PAGE_SIZE;
use serde::Serialize;

/// Body of `POST /databases/{id}/query`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseQuery {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<SortSpec>,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
}

impl DatabaseQuery {
    /// Query sorted by a date property, newest first.
    pub fn newest_first(property: impl Into<String>) -> Self {
        Self {
            sorts: vec![SortSpec {
                property: property.into(),
                direction: SortDirection::Descending,
            }],
            page_size: NOTION_API_PAGE_SIZE,
            start_cursor: None,
        }
    }

    /// The same query resumed at a pagination cursor.
    pub fn with_cursor(&self, page_size: u32, cursor: Option<String>) -> Self {
        Self {
            sorts: self.sorts.clone(),
            page_size,
            start_cursor: cursor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortSpec {
    pub property: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_body_shape() {
        let query = DatabaseQuery::newest_first("Publish date");
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            serde_json::json!({
                "sorts": [{"property": "Publish date", "direction": "descending"}],
                "page_size": 100
            })
        );

        let resumed = query.with_cursor(50, Some("cursor-2".to_string()));
        assert_eq!(
            serde_json::to_value(&resumed).unwrap()["start_cursor"],
            serde_json::json!("cursor-2")
        );
        assert_eq!(resumed.sorts, query.sorts);
    }
}
