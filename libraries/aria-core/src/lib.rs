//! Aria Core
//!
//! Core types, traits, and error handling shared across the Aria
//! streaming front-end.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `TrackId`, `Track`
//! - **Collaborator Traits**: `PreferenceStore`, `SessionProvider`
//! - **Error Handling**: Unified `AriaError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use aria_core::types::{Track, TrackId};
//!
//! let track = Track::new(
//!     TrackId::new("trk-42"),
//!     "Night Drive",
//!     "Mira Vale",
//!     "https://cdn.example.com/audio/trk-42.mp3",
//! );
//!
//! assert_eq!(track.id.as_str(), "trk-42");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{AriaError, Result};
pub use traits::{PreferenceStore, SessionProvider};
pub use types::{Track, TrackId};
