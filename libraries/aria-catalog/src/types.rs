//! Wire types for the catalog API.

use aria_core::{Track, TrackId};
use serde::Deserialize;

/// Catalog connection configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog API, e.g. `https://catalog.example.com`
    pub base_url: String,
}

impl CatalogConfig {
    /// Create a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// Track record as the catalog API serves it.
///
/// Kept separate from the domain [`Track`] so catalog schema drift stays
/// contained in this crate.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogTrack {
    /// Catalog-assigned track identifier
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub author: String,

    /// Streamable audio URL
    pub audio_url: String,

    /// Artwork image URL
    #[serde(default)]
    pub artwork_url: Option<String>,

    /// Track duration in seconds
    #[serde(default)]
    pub duration_secs: Option<f64>,

    /// Lyrics, when the catalog has them
    #[serde(default)]
    pub lyrics: Option<String>,
}

impl From<CatalogTrack> for Track {
    fn from(wire: CatalogTrack) -> Self {
        Self {
            id: TrackId::new(wire.id),
            title: wire.title,
            author: wire.author,
            audio_url: wire.audio_url,
            artwork_url: wire.artwork_url,
            duration_secs: wire.duration_secs,
            lyrics: wire.lyrics,
        }
    }
}
