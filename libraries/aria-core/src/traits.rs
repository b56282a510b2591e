/// Collaborator traits for Aria
use crate::error::Result;

/// Durable key-value preference storage
///
/// Implementers persist small JSON-serialized values (volume, shuffle,
/// repeat mode) across sessions. Both operations are synchronous: the
/// player store persists from inside its own mutations, which run to
/// completion on the UI event loop.
pub trait PreferenceStore: Send + Sync {
    /// Load the value stored under `key`
    ///
    /// Returns `Ok(None)` if the key has never been written.
    fn load(&self, key: &str) -> Result<Option<serde_json::Value>>;

    /// Store `value` under `key`, replacing any previous value
    fn save(&self, key: &str, value: &serde_json::Value) -> Result<()>;
}

/// Authentication/session state
///
/// UI consumers consult this before allowing playback to start. The
/// player store itself never checks it; gating is a presentation concern.
pub trait SessionProvider: Send + Sync {
    /// Whether a user is currently signed in
    fn is_authenticated(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysSignedIn;

    impl SessionProvider for AlwaysSignedIn {
        fn is_authenticated(&self) -> bool {
            true
        }
    }

    #[test]
    fn session_provider_object_safe() {
        let session: Box<dyn SessionProvider> = Box::new(AlwaysSignedIn);
        assert!(session.is_authenticated());
    }
}
