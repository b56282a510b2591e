//! Play queue
//!
//! The ordered list of track ids forming the current playback context
//! (an album, a playlist, a search result set). The queue only stores
//! ids and answers ordering questions; which track is active lives in
//! the player store, and the active track need not be a queue member.

use aria_core::TrackId;

/// Ordered playback queue
#[derive(Debug, Clone, Default)]
pub struct Queue {
    ids: Vec<TrackId>,
}

impl Queue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue wholesale
    ///
    /// No membership check against the active track; a track can play
    /// outside any queue context.
    pub fn replace(&mut self, ids: Vec<TrackId>) {
        self.ids = ids;
    }

    /// Remove all tracks from the queue
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// All track ids in play order
    pub fn ids(&self) -> &[TrackId] {
        &self.ids
    }

    /// Number of tracks in the queue
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Position of a track in the queue
    pub fn position(&self, id: &TrackId) -> Option<usize> {
        self.ids.iter().position(|entry| entry == id)
    }

    /// Track at the given position
    pub fn get(&self, index: usize) -> Option<&TrackId> {
        self.ids.get(index)
    }

    /// First track in the queue
    pub fn first(&self) -> Option<&TrackId> {
        self.ids.first()
    }

    /// Last track in the queue
    pub fn last(&self) -> Option<&TrackId> {
        self.ids.last()
    }

    /// Track following `current` in queue order
    ///
    /// A `current` that is absent from the queue (or no current at all)
    /// resolves to the queue head. Returns `None` past the end of the
    /// queue; wrapping is the caller's decision.
    pub fn next_after(&self, current: Option<&TrackId>) -> Option<&TrackId> {
        let next_index = match current.and_then(|id| self.position(id)) {
            Some(index) => index + 1,
            None => 0,
        };
        self.ids.get(next_index)
    }

    /// Track preceding `current` in queue order
    ///
    /// Wraps to the queue tail when `current` is at the head, absent
    /// from the queue, or unset. Returns `None` only on an empty queue.
    pub fn previous_before(&self, current: Option<&TrackId>) -> Option<&TrackId> {
        match current.and_then(|id| self.position(id)) {
            Some(index) if index > 0 => self.ids.get(index - 1),
            _ => self.ids.last(),
        }
    }
}
