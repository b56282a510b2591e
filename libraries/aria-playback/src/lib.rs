//! Aria - Player State Machine
//!
//! The playback core of the Aria streaming front-end: one store owning
//! the play queue, the active track, back-navigation history, per-track
//! resume offsets, shuffle/repeat modes, and volume.
//!
//! This crate provides:
//! - Deterministic next/previous selection under shuffle and repeat
//! - A back-navigation history trail distinct from queue order
//! - Per-track resume offsets for mid-song re-selection
//! - Selective persistence: volume, shuffle, and repeat survive a
//!   reload; everything else starts fresh (no auto-resumed audio)
//!
//! The store is platform-agnostic: it never touches an audio element or
//! the network. The UI layer feeds it events (play, next, previous,
//! seek, toggle shuffle/repeat) and reads its state to render transport
//! controls; catalog fetches arrive as finished results via `set_song`
//! and `set_queue`.
//!
//! # Example
//!
//! ```rust
//! use aria_playback::{PlayerStore, RepeatMode};
//! use aria_core::TrackId;
//! use aria_storage::MemoryStore;
//!
//! let mut player = PlayerStore::new(Box::new(MemoryStore::new()));
//!
//! player.set_queue(vec![
//!     TrackId::new("trk-1"),
//!     TrackId::new("trk-2"),
//!     TrackId::new("trk-3"),
//! ]);
//! player.set_repeat(RepeatMode::All);
//! player.play_track(TrackId::new("trk-1"));
//!
//! player.next();
//! assert_eq!(player.active_track(), Some(&TrackId::new("trk-2")));
//! ```

mod history;
mod prefs;
mod queue;
mod resume;
mod shuffle;
mod store;
mod types;

// Public exports
pub use history::History;
pub use prefs::{PlayerPrefs, KEY_REPEAT, KEY_SHUFFLE, KEY_VOLUME};
pub use queue::Queue;
pub use resume::ResumePositions;
pub use store::PlayerStore;
pub use types::RepeatMode;
