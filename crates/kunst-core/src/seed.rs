//! First-launch sample data.
//!
//! An empty catalog gets a handful of example collections and artworks so
//! the grid is not a blank page on first open. Seeding runs once; any
//! existing artwork suppresses it.

use chrono::Utc;

use kunst_domain::{Artwork, ArtworkStatus, Collection, PlaceholderClass};
use kunst_store::{CatalogStore, ImportMode, StoreError};

const DAY_MS: i64 = 86_400_000;

/// The sample collections.
pub fn sample_collections() -> Vec<Collection> {
    [
        ("col-1", "Living Room", 0),
        ("col-2", "Office", 1),
        ("col-3", "To Research", 2),
        ("col-4", "Dutch Artists", 3),
    ]
    .into_iter()
    .map(|(id, name, sort_order)| Collection {
        id: id.to_string(),
        name: name.to_string(),
        sort_order,
    })
    .collect()
}

/// The sample artworks, with creation times spread over the past weeks.
pub fn sample_artworks() -> Vec<Artwork> {
    let now = Utc::now().timestamp_millis();
    let base = |id: &str, status, placeholder, days_ago: i64| Artwork {
        id: id.to_string(),
        status,
        placeholder_class: placeholder,
        created_at: now - DAY_MS * days_ago,
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
    };

    vec![
        Artwork {
            title: "Composition in Ochre".into(),
            artist: "Maria van den Berg".into(),
            year: Some(2023),
            medium: Some("Oil on canvas".into()),
            dimensions: Some("80 × 100 cm".into()),
            location: Some("Living room, east wall".into()),
            personal_note: Some(
                "Found this at Art Rotterdam 2023. The warm ochre tones reminded me of late \
                 summer afternoons in Provence."
                    .into(),
            ),
            collections: vec!["col-1".into()],
            ..base("art-1", ArtworkStatus::Owned, PlaceholderClass::One, 30)
        },
        Artwork {
            title: "Nocturne #7".into(),
            artist: "James Chen".into(),
            year: Some(2022),
            medium: Some("Acrylic on panel".into()),
            dimensions: Some("60 × 80 cm".into()),
            location: Some("Office, behind desk".into()),
            personal_note: Some("Bought directly from the artist's studio in Rotterdam.".into()),
            collections: vec!["col-2".into()],
            ..base("art-2", ArtworkStatus::Owned, PlaceholderClass::Two, 60)
        },
        Artwork {
            title: "Untitled (Red Series)".into(),
            artist: "Unknown".into(),
            personal_note: Some(
                "Saw this at Stedelijk Museum. Need to find out more about the artist.".into(),
            ),
            collections: vec!["col-3".into()],
            ..base("art-3", ArtworkStatus::Wishlist, PlaceholderClass::Three, 14)
        },
        Artwork {
            title: "Horizon Lines IV".into(),
            artist: "Sophie Bakker".into(),
            year: Some(2024),
            medium: Some("Mixed media on canvas".into()),
            dimensions: Some("120 × 90 cm".into()),
            location: Some("Living room, main wall".into()),
            collections: vec!["col-1".into(), "col-4".into()],
            ..base("art-4", ArtworkStatus::Owned, PlaceholderClass::Four, 7)
        },
        Artwork {
            title: "Study in Grey".into(),
            artist: "Anna Kowalski".into(),
            year: Some(2021),
            medium: Some("Archival print".into()),
            dimensions: Some("40 × 50 cm".into()),
            personal_note: Some("Seen at gallery weekend. Edition of 25.".into()),
            source_url: Some("https://example.com/artwork".into()),
            collections: vec!["col-3".into()],
            ..base("art-5", ArtworkStatus::Wishlist, PlaceholderClass::Five, 21)
        },
        Artwork {
            title: "Growth".into(),
            artist: "Lena de Vries".into(),
            year: Some(2023),
            medium: Some("Bronze sculpture".into()),
            dimensions: Some("35 × 20 × 20 cm".into()),
            location: Some("Office, shelf".into()),
            collections: vec!["col-2".into(), "col-4".into()],
            ..base("art-6", ArtworkStatus::Owned, PlaceholderClass::Six, 45)
        },
    ]
}

/// Seed the sample data into an empty store. Returns whether seeding
/// happened.
pub fn seed_if_empty(store: &dyn CatalogStore) -> Result<bool, StoreError> {
    if store.count_artworks(None)? > 0 {
        return Ok(false);
    }
    store.apply_snapshot(&sample_collections(), &sample_artworks(), ImportMode::Merge)?;
    tracing::debug!("seeded sample catalog");
    Ok(true)
}
