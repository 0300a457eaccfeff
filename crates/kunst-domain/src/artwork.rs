//! Artwork domain model

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::placeholder::PlaceholderClass;

/// Whether a piece is in the collection or on the wishlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ArtworkStatus {
    #[default]
    Owned,
    Wishlist,
}

impl ArtworkStatus {
    /// Stored string form (also the wire form in backup documents).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owned => "owned",
            Self::Wishlist => "wishlist",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "owned" => Some(Self::Owned),
            "wishlist" => Some(Self::Wishlist),
            _ => None,
        }
    }

    /// Badge text for the detail panel.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Owned => "In Collection",
            Self::Wishlist => "Wishlist",
        }
    }
}

/// A single catalog entry: one physical or desired piece.
///
/// Field names serialize in camelCase so backup documents stay compatible
/// with the original export format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: String,
    pub status: ArtworkStatus,
    /// May be empty; the UI shows "Untitled" in that case.
    #[serde(default)]
    pub title: String,
    /// May be empty; the UI shows "Unknown artist" in that case.
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub personal_note: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    /// Ids of collections this piece belongs to. Set semantics, order
    /// irrelevant. Entries may dangle after a collection is deleted.
    #[serde(default)]
    pub collections: Vec<String>,
    /// Embedded image payload (data URI). Display falls back to
    /// `placeholder_class` when absent.
    #[serde(default)]
    pub image_data: Option<String>,
    #[serde(default)]
    pub placeholder_class: PlaceholderClass,
    /// Creation time in epoch milliseconds. Set once, never mutated;
    /// default sort key for the visible list.
    pub created_at: i64,
}

impl Artwork {
    /// Create a new unsaved artwork with default values: fresh id, owned
    /// status, empty fields, a randomly chosen placeholder, creation time now.
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            status: ArtworkStatus::Owned,
            title: String::new(),
            artist: String::new(),
            year: None,
            medium: None,
            dimensions: None,
            location: None,
            personal_note: None,
            source_url: None,
            collections: Vec::new(),
            image_data: None,
            placeholder_class: PlaceholderClass::random(),
            created_at: Utc::now().timestamp_millis(),
        }
    }
}

impl Default for Artwork {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_roundtrip() {
        for status in [ArtworkStatus::Owned, ArtworkStatus::Wishlist] {
            assert_eq!(ArtworkStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ArtworkStatus::parse("sold"), None);
    }

    #[test]
    fn new_artwork_defaults() {
        let art = Artwork::new();
        assert_eq!(art.status, ArtworkStatus::Owned);
        assert!(art.title.is_empty());
        assert!(art.collections.is_empty());
        assert!(art.image_data.is_none());
        assert!(art.created_at > 0);
    }

    #[test]
    fn new_artworks_get_unique_ids() {
        let a = Artwork::new();
        let b = Artwork::new();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serde_uses_camel_case_wire_names() {
        let mut art = Artwork::new();
        art.personal_note = Some("Bought at Art Rotterdam".into());
        art.source_url = Some("https://example.com/artwork".into());

        let json = serde_json::to_string(&art).unwrap();
        assert!(json.contains("\"personalNote\""));
        assert!(json.contains("\"sourceUrl\""));
        assert!(json.contains("\"imageData\""));
        assert!(json.contains("\"placeholderClass\""));
        assert!(json.contains("\"createdAt\""));

        let back: Artwork = serde_json::from_str(&json).unwrap();
        assert_eq!(art, back);
    }

    #[test]
    fn deserializes_original_backup_record() {
        // Record shape as written by the original exporter
        let json = r#"{
            "id": "art-1",
            "status": "owned",
            "title": "Composition in Ochre",
            "artist": "Maria van den Berg",
            "year": 2023,
            "medium": "Oil on canvas",
            "dimensions": "80 x 100 cm",
            "location": "Living room, east wall",
            "personalNote": null,
            "sourceUrl": null,
            "collections": ["col-1"],
            "imageData": null,
            "placeholderClass": "placeholder-1",
            "createdAt": 1700000000000
        }"#;
        let art: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(art.id, "art-1");
        assert_eq!(art.status, ArtworkStatus::Owned);
        assert_eq!(art.year, Some(2023));
        assert_eq!(art.collections, vec!["col-1".to_string()]);
        assert_eq!(art.placeholder_class, PlaceholderClass::One);
    }
}
