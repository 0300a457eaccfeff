//! Backup codec integration tests: export/import round trips and the
//! merge/replace policies.

mod common;

use common::{artwork, store};
use kunst_core::{
    export_document, import_document, parse_document, seed_if_empty, to_json, BackupError,
    ImportMode,
};
use kunst_domain::{ArtworkStatus, Collection};
use kunst_store::CatalogStore;

#[test]
fn replace_round_trip_restores_store() {
    let original = store();
    seed_if_empty(&original).unwrap();

    // Include an artwork with an embedded image so the document proves
    // itself self-contained.
    let mut with_image = artwork("art-img", ArtworkStatus::Owned, 999);
    with_image.image_data = Some("data:image/png;base64,iVBORw0KGgo=".into());
    original.put_artwork(&with_image).unwrap();

    let json = to_json(&export_document(&original).unwrap()).unwrap();

    let restored = store();
    let document = parse_document(&json).unwrap();
    import_document(&restored, &document, ImportMode::Replace).unwrap();

    assert_eq!(
        restored.all_artworks().unwrap(),
        original.all_artworks().unwrap()
    );
    assert_eq!(
        restored.collections_ordered().unwrap(),
        original.collections_ordered().unwrap()
    );
}

#[test]
fn merge_keeps_existing_replace_takes_incoming() {
    let json = {
        let source = store();
        let mut incoming = artwork("X", ArtworkStatus::Wishlist, 50);
        incoming.title = "Incoming".into();
        source.put_artwork(&incoming).unwrap();
        to_json(&export_document(&source).unwrap()).unwrap()
    };
    let document = parse_document(&json).unwrap();

    // Merge mode: the existing record with id X is untouched.
    let target = store();
    let mut existing = artwork("X", ArtworkStatus::Owned, 10);
    existing.title = "Existing".into();
    target.put_artwork(&existing).unwrap();

    import_document(&target, &document, ImportMode::Merge).unwrap();
    let after_merge = target.get_artwork("X").unwrap().unwrap();
    assert_eq!(after_merge.title, "Existing");
    assert_eq!(after_merge.status, ArtworkStatus::Owned);

    // Replace mode on the same store: only the incoming record survives.
    import_document(&target, &document, ImportMode::Replace).unwrap();
    let after_replace = target.get_artwork("X").unwrap().unwrap();
    assert_eq!(after_replace.title, "Incoming");
    assert_eq!(target.count_artworks(None).unwrap(), 1);
}

#[test]
fn import_reports_document_count_not_written_count() {
    let target = store();
    let colliding = artwork("dup", ArtworkStatus::Owned, 1);
    target.put_artwork(&colliding).unwrap();

    let source = store();
    source.put_artwork(&colliding).unwrap();
    source
        .put_artwork(&artwork("fresh", ArtworkStatus::Owned, 2))
        .unwrap();
    let document = export_document(&source).unwrap();

    // "dup" collides and is dropped, but the report still counts it.
    let count = import_document(&target, &document, ImportMode::Merge).unwrap();
    assert_eq!(count, 2);
    assert_eq!(target.count_artworks(None).unwrap(), 2);
}

#[test]
fn malformed_document_mutates_nothing() {
    let target = store();
    seed_if_empty(&target).unwrap();
    let before = target.all_artworks().unwrap();

    for bad in [
        "not json at all",
        r#"{"collections": []}"#,
        r#"{"artworks": []}"#,
        r#"{"version": 99, "collections": [], "artworks": []}"#,
    ] {
        assert!(matches!(
            parse_document(bad),
            Err(BackupError::InvalidFormat(_) | BackupError::UnsupportedVersion(_))
        ));
    }

    assert_eq!(target.all_artworks().unwrap(), before);
}

#[test]
fn reads_document_in_original_export_format() {
    let json = r#"{
        "exportedAt": "2024-03-01T10:00:00.000Z",
        "version": 1,
        "collections": [
            { "id": "col-1", "name": "Living Room", "sortOrder": 0 }
        ],
        "artworks": [
            {
                "id": "art-1",
                "status": "wishlist",
                "title": "Study in Grey",
                "artist": "Anna Kowalski",
                "year": 2021,
                "medium": "Archival print",
                "dimensions": "40 × 50 cm",
                "location": null,
                "personalNote": "Seen at gallery weekend.",
                "sourceUrl": "https://example.com/artwork",
                "collections": ["col-1"],
                "imageData": null,
                "placeholderClass": "placeholder-5",
                "createdAt": 1709280000000
            }
        ]
    }"#;

    let document = parse_document(json).unwrap();
    let target = store();
    let count = import_document(&target, &document, ImportMode::Merge).unwrap();
    assert_eq!(count, 1);

    let art = target.get_artwork("art-1").unwrap().unwrap();
    assert_eq!(art.status, ArtworkStatus::Wishlist);
    assert_eq!(art.personal_note.as_deref(), Some("Seen at gallery weekend."));
    assert_eq!(art.collections, vec!["col-1".to_string()]);

    let collections = target.collections_ordered().unwrap();
    assert_eq!(
        collections,
        vec![Collection {
            id: "col-1".into(),
            name: "Living Room".into(),
            sort_order: 0,
        }]
    );
}
