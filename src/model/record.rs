//! Raw Notion page records as returned by a database query.
//!
//! The property bag is dynamically typed on the wire. Only the property
//! types the classifier reads are modelled; everything else collapses into
//! [`PropertyValue::Unsupported`] so that an unfamiliar column never breaks
//! a fetch.

use indexmap::IndexMap;
use serde::Deserialize;

/// One row of a Notion database.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageRecord {
    pub id: String,
    pub created_time: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub properties: PageProperties,
}

/// Page properties keyed by column name, in upstream order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PageProperties(IndexMap<String, PropertyValue>);

impl PageProperties {
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.0.get(name)
    }

    /// Column names, for diagnostics.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Segments of a title-typed property. `None` if the column is absent
    /// or has another type.
    pub fn title(&self, name: &str) -> Option<&[RichTextItem]> {
        match self.get(name)? {
            PropertyValue::Title { title } => Some(title),
            _ => None,
        }
    }

    /// The value of a date-typed property, if set.
    pub fn date(&self, name: &str) -> Option<&DateValue> {
        match self.get(name)? {
            PropertyValue::Date { date } => date.as_ref(),
            _ => None,
        }
    }

    /// Attachments of a files-typed property.
    pub fn files(&self, name: &str) -> Option<&[FileAttachment]> {
        match self.get(name)? {
            PropertyValue::Files { files } => Some(files),
            _ => None,
        }
    }
}

impl FromIterator<(String, PropertyValue)> for PageProperties {
    fn from_iter<I: IntoIterator<Item = (String, PropertyValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The property types the classifier understands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title {
        #[serde(default)]
        title: Vec<RichTextItem>,
    },
    RichText {
        #[serde(default)]
        rich_text: Vec<RichTextItem>,
    },
    Date {
        #[serde(default)]
        date: Option<DateValue>,
    },
    Files {
        #[serde(default)]
        files: Vec<FileAttachment>,
    },
    #[serde(other)]
    Unsupported,
}

/// Rich text segment; only the rendered text is kept.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RichTextItem {
    #[serde(default)]
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
}

impl RichTextItem {
    pub fn plain_text(text: &str) -> Self {
        Self {
            plain_text: text.to_string(),
            href: None,
        }
    }
}

/// Date property value. `start` is either a calendar date or an RFC 3339
/// timestamp; it is kept verbatim and interpreted by the classifier.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DateValue {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
}

/// An entry of a files property: either uploaded to Notion (`file`) or an
/// external link (`external`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileAttachment {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub file: Option<HostedFile>,
    #[serde(default)]
    pub external: Option<ExternalFile>,
}

impl FileAttachment {
    /// The URL the attachment is served from, whichever way it was attached.
    pub fn source_url(&self) -> Option<&str> {
        let hosted = self.file.as_ref().and_then(|f| f.url.as_deref());
        let external = self.external.as_ref().and_then(|f| f.url.as_deref());
        hosted
            .filter(|url| !url.is_empty())
            .or_else(|| external.filter(|url| !url.is_empty()))
    }

    pub fn hosted(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: Some("file".to_string()),
            file: Some(HostedFile {
                url: Some(url.to_string()),
                expiry_time: None,
            }),
            external: None,
        }
    }

    pub fn external(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: Some("external".to_string()),
            file: None,
            external: Some(ExternalFile {
                url: Some(url.to_string()),
            }),
        }
    }
}

/// A file uploaded to Notion. The URL is signed and expires.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HostedFile {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub expiry_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExternalFile {
    #[serde(default)]
    pub url: Option<String>,
}
