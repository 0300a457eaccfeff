//! Domain types for the kunst art-collection catalog
//!
//! This crate provides the canonical models shared by the store and core:
//! - Artwork: a single catalog entry, owned or wished-for
//! - Collection: a user-named grouping of artworks
//! - ArtworkStatus: closed owned/wishlist state
//! - PlaceholderClass: the fixed set of fallback visuals for image-less pieces

pub mod artwork;
pub mod collection;
pub mod placeholder;

pub use artwork::*;
pub use collection::*;
pub use placeholder::*;
