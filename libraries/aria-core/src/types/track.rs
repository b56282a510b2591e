/// Track domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Denormalized track record from the catalog service
///
/// Carries everything the transport UI needs to render and play a track:
/// display metadata, the streamable audio URL, artwork, and lyrics when
/// the catalog has them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub author: String,

    /// Streamable audio URL
    pub audio_url: String,

    /// Artwork image URL
    pub artwork_url: Option<String>,

    /// Track duration in seconds
    pub duration_secs: Option<f64>,

    /// Synchronized or plain lyrics
    pub lyrics: Option<String>,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(
        id: TrackId,
        title: impl Into<String>,
        author: impl Into<String>,
        audio_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            audio_url: audio_url.into(),
            artwork_url: None,
            duration_secs: None,
            lyrics: None,
        }
    }

    /// Get the track duration as a Duration
    ///
    /// Returns `None` when the catalog omitted the duration or reported
    /// a value that cannot be a length of audio.
    pub fn duration(&self) -> Option<Duration> {
        self.duration_secs
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
            .map(Duration::from_secs_f64)
    }

    /// Set the track duration from a Duration
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_secs = Some(duration.as_secs_f64());
    }
}
