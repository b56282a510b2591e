//! Aria - Preference Storage
//!
//! Durable key-value storage backing the player's persisted preferences.
//!
//! Values are JSON-serialized, keyed by dotted setting names
//! (`player.volume`, `player.shuffle`, ...). Two implementations of
//! [`aria_core::PreferenceStore`] are provided:
//!
//! - [`JsonFileStore`]: all settings in one JSON object file, written
//!   atomically (temp file + rename)
//! - [`MemoryStore`]: process-local map for tests and headless embedding
//!
//! # Example
//!
//! ```rust,no_run
//! use aria_core::PreferenceStore;
//! use aria_storage::JsonFileStore;
//!
//! # fn main() -> aria_core::Result<()> {
//! let store = JsonFileStore::new("/home/user/.config/aria/settings.json");
//! store.save("player.volume", &serde_json::json!(0.8))?;
//!
//! let volume = store.load("player.volume")?;
//! assert_eq!(volume, Some(serde_json::json!(0.8)));
//! # Ok(())
//! # }
//! ```

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
