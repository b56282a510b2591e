//! Player store - the playback state machine
//!
//! Single source of truth for playback selection and transport state:
//! queue, active track, back-navigation history, per-track resume
//! offsets, and the persisted preference whitelist (volume, shuffle,
//! repeat). One instance is constructed at application start and
//! injected into whatever owns the UI event loop; every mutation runs
//! to completion on that loop, so state transitions are atomic without
//! locking.
//!
//! No operation here can fail. Lookups that miss degrade to no-ops or
//! wraparound, and preference writes that fail at the storage layer are
//! logged and swallowed.

use crate::history::History;
use crate::prefs::{persist_field, PlayerPrefs, KEY_REPEAT, KEY_SHUFFLE, KEY_VOLUME};
use crate::queue::Queue;
use crate::resume::ResumePositions;
use crate::shuffle;
use crate::types::RepeatMode;
use aria_core::{PreferenceStore, Track, TrackId};
use std::time::Duration;
use tracing::debug;

/// Central playback state
///
/// Composes the transient playback fields (queue, active track, song
/// details, playing flag, history, resume offsets) with the persisted
/// preferences. Only the preferences survive a restart; every transient
/// field starts from its default, so a fresh session never auto-resumes
/// audio.
pub struct PlayerStore {
    // Transient playback state
    queue: Queue,
    active: Option<TrackId>,
    song: Option<Track>,
    playing: bool,
    history: History,
    resume: ResumePositions,

    // Persisted preferences
    prefs: PlayerPrefs,
    prefs_store: Box<dyn PreferenceStore>,
}

impl PlayerStore {
    /// Create the store, restoring persisted preferences
    ///
    /// Transient fields start empty regardless of what a previous
    /// session left behind.
    pub fn new(prefs_store: Box<dyn PreferenceStore>) -> Self {
        let prefs = PlayerPrefs::restore(prefs_store.as_ref());
        debug!(
            volume = prefs.volume,
            shuffle = prefs.shuffle,
            repeat = %prefs.repeat,
            "restored player preferences"
        );

        Self {
            queue: Queue::new(),
            active: None,
            song: None,
            playing: false,
            history: History::new(),
            resume: ResumePositions::new(),
            prefs,
            prefs_store,
        }
    }

    // === Queries ===

    /// Track ids in play order
    pub fn queue(&self) -> &[TrackId] {
        self.queue.ids()
    }

    /// Currently active track id
    pub fn active_track(&self) -> Option<&TrackId> {
        self.active.as_ref()
    }

    /// Denormalized metadata for the active track
    pub fn song(&self) -> Option<&Track> {
        self.song.as_ref()
    }

    /// Transport state
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Output gain in [0.0, 1.0]
    pub fn volume(&self) -> f32 {
        self.prefs.volume
    }

    /// Shuffle mode toggle
    pub fn is_shuffle(&self) -> bool {
        self.prefs.shuffle
    }

    /// Repeat policy
    pub fn repeat(&self) -> RepeatMode {
        self.prefs.repeat
    }

    /// Back-navigation trail, oldest first
    pub fn history(&self) -> &[TrackId] {
        self.history.entries()
    }

    /// Last recorded playback position for a track
    pub fn resume_position(&self, id: &TrackId) -> Option<Duration> {
        self.resume.position(id)
    }

    // === Selection ===

    /// Select a track and start playing it
    ///
    /// The previously active track (if different) is pushed onto the
    /// history trail so "go back" can return to it.
    pub fn play_track(&mut self, id: TrackId) {
        self.activate(id, false);
    }

    /// Select a track popped from the history trail
    ///
    /// Same transition as [`play_track`](Self::play_track) except the
    /// trail is left untouched: merely walking history must not grow it.
    pub fn replay_track(&mut self, id: TrackId) {
        self.activate(id, true);
    }

    /// The one transition that changes the active track
    ///
    /// History is recorded here and only here, and only when the active
    /// track actually changes; re-activating the same track never pushes
    /// a duplicate entry.
    fn activate(&mut self, id: TrackId, from_history: bool) {
        if !from_history {
            if let Some(previous) = &self.active {
                if *previous != id {
                    self.history.push(previous.clone());
                }
            }
        }

        debug!(track = %id, from_history, "track activated");
        self.active = Some(id);
        self.playing = true;
    }

    // === Mutations ===

    /// Replace the play queue wholesale
    pub fn set_queue(&mut self, ids: Vec<TrackId>) {
        self.queue.replace(ids);
    }

    /// Replace the denormalized metadata for the current track
    ///
    /// No cross-check against the active id; the caller decides what
    /// "current" means while a fetch is in flight.
    pub fn set_song(&mut self, song: Track) {
        self.song = Some(song);
    }

    /// Set the transport flag only; no other side effects
    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Push a track onto the history trail
    pub fn push_history(&mut self, id: TrackId) {
        self.history.push(id);
    }

    /// Pop the most recent history entry
    ///
    /// Returns `None` on an empty trail and leaves state unchanged.
    pub fn pop_history(&mut self) -> Option<TrackId> {
        self.history.pop()
    }

    /// Record the elapsed playback position for a track
    pub fn record_seek(&mut self, id: TrackId, position: Duration) {
        self.resume.record(id, position);
    }

    /// Clear all transient playback state
    ///
    /// Queue, active track, song details, history, and resume offsets
    /// are dropped and the transport stops. Volume, shuffle, and repeat
    /// are preferences, not playback state, and stay as they are.
    pub fn reset(&mut self) {
        debug!("player state reset");
        self.queue.clear();
        self.active = None;
        self.song = None;
        self.playing = false;
        self.history.clear();
        self.resume.clear();
    }

    // === Preferences ===

    /// Set output gain, clamped to [0.0, 1.0]
    pub fn set_volume(&mut self, volume: f32) {
        self.prefs.volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            1.0
        };
        persist_field(self.prefs_store.as_ref(), KEY_VOLUME, &self.prefs.volume);
    }

    /// Toggle shuffle mode
    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.prefs.shuffle = shuffle;
        persist_field(self.prefs_store.as_ref(), KEY_SHUFFLE, &self.prefs.shuffle);
    }

    /// Set the repeat policy
    pub fn set_repeat(&mut self, repeat: RepeatMode) {
        self.prefs.repeat = repeat;
        persist_field(self.prefs_store.as_ref(), KEY_REPEAT, &self.prefs.repeat);
    }

    // === Transport navigation ===

    /// Advance to the next track
    ///
    /// Resolution order, first match wins:
    /// 1. repeat-one restarts the active track
    /// 2. shuffle draws a uniformly random queue member (immediate
    ///    repeats included)
    /// 3. the next track in queue order
    /// 4. repeat-all wraps to the queue head
    /// 5. otherwise playback stops where it is
    ///
    /// An empty queue is always a no-op.
    pub fn next(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        if self.prefs.repeat == RepeatMode::One {
            if let Some(id) = self.active.clone() {
                self.activate(id, false);
            }
            return;
        }

        if self.prefs.shuffle {
            if let Some(id) = shuffle::pick_random(self.queue.ids()).cloned() {
                self.activate(id, false);
            }
            return;
        }

        if let Some(id) = self.queue.next_after(self.active.as_ref()).cloned() {
            self.activate(id, false);
            return;
        }

        if self.prefs.repeat == RepeatMode::All {
            if let Some(id) = self.queue.first().cloned() {
                self.activate(id, false);
            }
        }
    }

    /// Step back to the previous track in queue order
    ///
    /// Wraps from the queue head to the tail. Shuffle and repeat mode
    /// are ignored here; only `next` honors them. An empty queue is a
    /// no-op.
    pub fn previous(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        if let Some(id) = self.queue.previous_before(self.active.as_ref()).cloned() {
            self.activate(id, false);
        }
    }
}

impl std::fmt::Debug for PlayerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerStore")
            .field("queue_len", &self.queue.len())
            .field("active", &self.active)
            .field("playing", &self.playing)
            .field("history_len", &self.history.len())
            .field("prefs", &self.prefs)
            .finish_non_exhaustive()
    }
}
