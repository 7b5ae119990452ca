//! Immutable view of the local player for negotiation
//!
//! The negotiator never reads a live, mutable local-player object. The
//! embedding client captures the relevant fields once per tick into a
//! [`LocalPlayer`] snapshot, which keeps the decision procedure pure and
//! testable in isolation.

use glam::Vec2;

use super::PeerId;

/// Collision facts about the local player's body, produced by the
/// external physics collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactState {
    /// Body is embedded inside another collider.
    pub embedded: bool,
    /// Body is touching at least one other collider.
    pub touching: bool,
}

impl ContactState {
    /// True when the body has no contact at all. Calls are only torn down
    /// while clear, so normal shared jostling never drops a call.
    pub fn clear(&self) -> bool {
        !self.embedded && !self.touching
    }
}

/// Per-tick snapshot of the local player's negotiation-relevant fields.
#[derive(Debug, Clone)]
pub struct LocalPlayer {
    pub id: PeerId,
    pub position: Vec2,
    pub ready_to_connect: bool,
    pub media_connected: bool,
    pub contact: ContactState,
}

impl LocalPlayer {
    pub fn new(id: PeerId, position: Vec2) -> Self {
        Self {
            id,
            position,
            ready_to_connect: false,
            media_connected: false,
            contact: ContactState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contact_is_clear() {
        assert!(ContactState::default().clear());
    }

    #[test]
    fn test_any_contact_is_not_clear() {
        assert!(!ContactState { embedded: true, touching: false }.clear());
        assert!(!ContactState { embedded: false, touching: true }.clear());
        assert!(!ContactState { embedded: true, touching: true }.clear());
    }

    #[test]
    fn test_snapshot_defaults() {
        let local = LocalPlayer::new(PeerId::new("me"), Vec2::new(1.0, 2.0));
        assert!(!local.ready_to_connect);
        assert!(!local.media_connected);
        assert!(local.contact.clear());
    }
}
