use super::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static URL_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:[/-])([a-fA-F0-9]{32}|[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{12})(?:[/?#]|$)",
    )
    .expect("Notion ID regex is valid")
});

/// Identifier of the Notion database a widget reads from.
///
/// Accepts the 32-character hex form, the hyphenated UUID form, or a Notion
/// URL that ends in either, and stores the canonical non-hyphenated form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatabaseId(String);

impl DatabaseId {
    /// Parses the formats a user may paste into an embed URL.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let cleaned = input.trim().trim_end_matches('/');

        if cleaned.is_empty() {
            return Err(ValidationError::EmptyField("database id"));
        }

        if cleaned.starts_with("http://") || cleaned.starts_with("https://") {
            return Self::extract_from_url(cleaned);
        }

        if cleaned.len() == 32 {
            return Self::from_hex(cleaned);
        }

        // Dashes only at 8-4-4-4-12 positions
        if cleaned.len() == 36 && Self::is_uuid_layout(cleaned) {
            return Self::from_hex(&cleaned.replace('-', ""));
        }

        Err(ValidationError::InvalidId(format!(
            "Could not parse Notion database ID from: {}",
            input
        )))
    }

    /// Returns the canonical non-hyphenated ID.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the hyphenated UUID format used in API paths.
    pub fn to_hyphenated(&self) -> String {
        format!(
            "{}-{}-{}-{}-{}",
            &self.0[0..8],
            &self.0[8..12],
            &self.0[12..16],
            &self.0[16..20],
            &self.0[20..32]
        )
    }

    fn is_uuid_layout(input: &str) -> bool {
        input
            .char_indices()
            .all(|(i, c)| matches!(i, 8 | 13 | 18 | 23) == (c == '-'))
    }

    fn from_hex(hex: &str) -> Result<Self, ValidationError> {
        if hex.len() == 32 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(DatabaseId(hex.to_lowercase()))
        } else {
            Err(ValidationError::InvalidId(
                "ID must contain only hexadecimal characters".to_string(),
            ))
        }
    }

    fn extract_from_url(url: &str) -> Result<Self, ValidationError> {
        URL_ID_REGEX
            .captures(url)
            .and_then(|captures| captures.get(1))
            .map(|id_match| id_match.as_str().replace('-', ""))
            .ok_or_else(|| ValidationError::InvalidId(format!("No valid ID found in URL: {}", url)))
            .and_then(|id| Self::from_hex(&id))
    }
}

impl fmt::Display for DatabaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for DatabaseId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DatabaseId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DatabaseId::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parsing() {
        let id = DatabaseId::parse("550e8400e29b41d4a716446655440000").unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");

        let id = DatabaseId::parse("550E8400-E29B-41D4-A716-446655440000").unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");

        let id = DatabaseId::parse(
            "https://www.notion.so/acme/Content-Calendar-550e8400e29b41d4a716446655440000?v=1",
        )
        .unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");
    }

    #[test]
    fn test_invalid_ids() {
        assert!(DatabaseId::parse("too-short").is_err());
        assert!(DatabaseId::parse("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz").is_err());
        assert_eq!(
            DatabaseId::parse("   ").unwrap_err(),
            ValidationError::EmptyField("database id")
        );
        assert!(DatabaseId::parse("https://www.notion.so/no-id-here").is_err());
    }

    #[test]
    fn test_misplaced_dashes_are_rejected() {
        assert!(DatabaseId::parse("550e8400e29b41d4a716446655440000----").is_err());
        assert!(DatabaseId::parse("550e-8400e29b-41d4a716-446655440000").is_err());
        assert!(DatabaseId::parse("550e8400-e29b-41d4-a716-4466554400-0").is_err());
        assert!(DatabaseId::parse("550e8400-e29b-41d4-a716-446655440000").is_ok());
    }

    #[test]
    fn test_to_hyphenated() {
        let id = DatabaseId::parse("550e8400e29b41d4a716446655440000").unwrap();
        assert_eq!(id.to_hyphenated(), "550e8400-e29b-41d4-a716-446655440000");
    }
}
