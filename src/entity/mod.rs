pub mod registry;
pub mod remote_player;
pub mod snapshot;

pub use registry::PlayerRegistry;
pub use remote_player::RemotePlayer;
pub use snapshot::{ContactState, LocalPlayer};

use serde::{Deserialize, Serialize};

/// Stable identifier of a participant, assigned by the messaging layer.
///
/// Session ids are opaque strings. The derived lexicographic `Ord` is the
/// total order used by the call-negotiation tie-break, so both sides of a
/// pair rank themselves identically without coordination.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PeerId(String);

impl PeerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PeerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peer_id_total_order() {
        let a = PeerId::new("aaa");
        let b = PeerId::new("aab");
        assert!(b > a);
        assert!(!(a > b));
        assert_eq!(a, PeerId::new("aaa"));
    }

    #[test]
    fn test_peer_id_map_key() {
        use std::collections::HashMap;
        let mut map: HashMap<PeerId, &str> = HashMap::new();
        map.insert(PeerId::new("s1"), "alice");
        assert_eq!(map.get(&PeerId::new("s1")), Some(&"alice"));
    }
}
