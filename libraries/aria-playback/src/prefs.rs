//! Persisted player preferences
//!
//! Exactly three fields survive a reload: volume, shuffle, and repeat
//! mode. Each lives under its own settings key and is written by its
//! own setter, so one preference changing never rewrites the others.
//! Everything else the player tracks is transient and starts from its
//! default on the next session, which is what keeps a reloaded page
//! from resuming audio on its own.

use crate::types::RepeatMode;
use aria_core::PreferenceStore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Settings key for output gain
pub const KEY_VOLUME: &str = "player.volume";

/// Settings key for the shuffle toggle
pub const KEY_SHUFFLE: &str = "player.shuffle";

/// Settings key for the repeat mode
pub const KEY_REPEAT: &str = "player.repeat";

/// The persisted preference whitelist
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerPrefs {
    /// Output gain in [0.0, 1.0]
    pub volume: f32,

    /// Shuffle mode toggle
    pub shuffle: bool,

    /// Repeat policy
    pub repeat: RepeatMode,
}

impl Default for PlayerPrefs {
    fn default() -> Self {
        Self {
            volume: 1.0,
            shuffle: false,
            repeat: RepeatMode::Off,
        }
    }
}

impl PlayerPrefs {
    /// Restore preferences from durable storage
    ///
    /// Missing or malformed values fall back to their defaults field by
    /// field; restoration never fails.
    pub fn restore(store: &dyn PreferenceStore) -> Self {
        let defaults = Self::default();
        Self {
            volume: load_field(store, KEY_VOLUME, defaults.volume).clamp(0.0, 1.0),
            shuffle: load_field(store, KEY_SHUFFLE, defaults.shuffle),
            repeat: load_field(store, KEY_REPEAT, defaults.repeat),
        }
    }
}

fn load_field<T: DeserializeOwned>(store: &dyn PreferenceStore, key: &str, default: T) -> T {
    match store.load(key) {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!(key, %err, "ignoring malformed preference");
                default
            }
        },
        Ok(None) => default,
        Err(err) => {
            warn!(key, %err, "failed to load preference");
            default
        }
    }
}

/// Write one preference field to durable storage
///
/// Storage failures are logged and swallowed: the in-memory value stays
/// authoritative and playback carries on.
pub(crate) fn persist_field<T: Serialize>(store: &dyn PreferenceStore, key: &str, value: &T) {
    let json = match serde_json::to_value(value) {
        Ok(json) => json,
        Err(err) => {
            warn!(key, %err, "failed to serialize preference");
            return;
        }
    };

    if let Err(err) = store.save(key, &json) {
        warn!(key, %err, "failed to persist preference");
    }
}
