//! Fallback visuals for artworks without an embedded image.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the six fixed placeholder styles.
///
/// Assigned once at creation and stable for the artwork's lifetime, so an
/// image-less piece keeps the same look across sessions. Serialized as the
/// CSS class name (`placeholder-1` .. `placeholder-6`) the grid renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PlaceholderClass {
    #[default]
    #[serde(rename = "placeholder-1")]
    One,
    #[serde(rename = "placeholder-2")]
    Two,
    #[serde(rename = "placeholder-3")]
    Three,
    #[serde(rename = "placeholder-4")]
    Four,
    #[serde(rename = "placeholder-5")]
    Five,
    #[serde(rename = "placeholder-6")]
    Six,
}

impl PlaceholderClass {
    pub const ALL: [PlaceholderClass; 6] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
    ];

    /// CSS class name used by the grid and detail renderers.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::One => "placeholder-1",
            Self::Two => "placeholder-2",
            Self::Three => "placeholder-3",
            Self::Four => "placeholder-4",
            Self::Five => "placeholder-5",
            Self::Six => "placeholder-6",
        }
    }

    /// Parse a stored class name. Unknown values map to `None`.
    pub fn from_css_class(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.css_class() == s)
    }

    /// Uniform pick from the fixed set, used when creating a new artwork.
    pub fn random() -> Self {
        let idx = rand::thread_rng().gen_range(0..Self::ALL.len());
        Self::ALL[idx]
    }
}
