//! Domain types for Aria

mod ids;
mod track;

pub use ids::TrackId;
pub use track::Track;
