/// ID types for Aria entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// Track identifier
///
/// Assigned by the catalog service; Aria never mints track ids itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Create a new track ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TrackId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_id_round_trip() {
        let id = TrackId::new("trk-1");
        assert_eq!(id.as_str(), "trk-1");
        assert_eq!(id.to_string(), "trk-1");

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"trk-1\"");

        let back: TrackId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
