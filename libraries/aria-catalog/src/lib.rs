//! Aria Catalog Client
//!
//! HTTP client for the third-party catalog API that Aria aggregates
//! tracks from.
//!
//! The catalog is read-only from Aria's point of view: look up a track
//! by id, search by term, list an artist's tracks. Lookups that miss
//! are empty results, not faults, and the `*_or_empty` variants extend
//! that to transport failures so callers feeding the player never see
//! an error surface.
//!
//! # Example
//!
//! ```ignore
//! use aria_catalog::{CatalogClient, CatalogConfig};
//!
//! let client = CatalogClient::new(CatalogConfig::new("https://catalog.example.com"))?;
//!
//! let results = client.search("night drive").await?;
//! println!("found {} tracks", results.len());
//!
//! let track = client.get_track(&"trk-42".into()).await?;
//! ```

mod client;
mod error;
mod types;

// Re-export main types
pub use client::CatalogClient;
pub use error::{CatalogError, Result};
pub use types::{CatalogConfig, CatalogTrack};
