//! Per-track resume offsets
//!
//! Last known playback position for every track seen this session, so
//! re-selecting a track can resume mid-song. Entries are never evicted;
//! the map lives and dies with the session.

use aria_core::TrackId;
use std::collections::HashMap;
use std::time::Duration;

/// Last playback position per track
#[derive(Debug, Clone, Default)]
pub struct ResumePositions {
    positions: HashMap<TrackId, Duration>,
}

impl ResumePositions {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the elapsed position for a track, replacing any previous one
    pub fn record(&mut self, id: TrackId, position: Duration) {
        self.positions.insert(id, position);
    }

    /// Last recorded position for a track
    pub fn position(&self, id: &TrackId) -> Option<Duration> {
        self.positions.get(id).copied()
    }

    /// Number of tracks with a recorded position
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if no positions have been recorded
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Forget all recorded positions
    pub fn clear(&mut self) {
        self.positions.clear();
    }
}
