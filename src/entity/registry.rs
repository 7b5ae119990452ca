//! Peer lifecycle bookkeeping
//!
//! Owns every [`RemotePlayer`] for the lifetime of that peer's presence.
//! Creation and destruction are driven by the external lifecycle
//! collaborator (join/leave messages); field updates are routed here by
//! the messaging glue.

use ahash::AHashMap;
use serde_json::Value;

use super::{PeerId, RemotePlayer};
use crate::error::{PresenceError, Result};
use crate::events::{Outbox, SignalEvent};

/// All currently-present remote participants, keyed by peer id.
#[derive(Debug, Default)]
pub struct PlayerRegistry {
    players: AHashMap<PeerId, RemotePlayer>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a newly-announced peer at its spawn position.
    pub fn create(&mut self, id: PeerId, name: impl Into<String>, x: f32, y: f32) -> Result<()> {
        if self.players.contains_key(&id) {
            return Err(PresenceError::DuplicatePeer(id));
        }
        let player = RemotePlayer::new(id.clone(), name, x, y);
        log::info!("peer joined: {} ({})", player.display_name, id);
        self.players.insert(id, player);
        Ok(())
    }

    /// Remove a departed peer.
    ///
    /// If a call was still active, this emits the same `PeerDisconnected`
    /// event as a negotiated terminate - the signaling layer must release
    /// the media session either way.
    pub fn destroy(&mut self, id: &PeerId, outbox: &mut Outbox) -> Result<RemotePlayer> {
        let player = self
            .players
            .remove(id)
            .ok_or_else(|| PresenceError::UnknownPeer(id.clone()))?;
        log::info!("peer left: {} ({})", player.display_name, id);
        if player.call_active {
            outbox.push(SignalEvent::PeerDisconnected(id.clone()));
        }
        Ok(player)
    }

    /// Route one inbound field update to its peer.
    pub fn apply_update(&mut self, id: &PeerId, field: &str, value: &Value) -> Result<()> {
        let player = self
            .players
            .get_mut(id)
            .ok_or_else(|| PresenceError::UnknownPeer(id.clone()))?;
        player.apply_update(field, value);
        Ok(())
    }

    pub fn get(&self, id: &PeerId) -> Option<&RemotePlayer> {
        self.players.get(id)
    }

    pub fn get_mut(&mut self, id: &PeerId) -> Option<&mut RemotePlayer> {
        self.players.get_mut(id)
    }

    pub fn players(&self) -> impl Iterator<Item = &RemotePlayer> {
        self.players.values()
    }

    pub fn players_mut(&mut self) -> impl Iterator<Item = &mut RemotePlayer> {
        self.players.values_mut()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_and_get() {
        let mut registry = PlayerRegistry::new();
        registry.create(PeerId::new("s1"), "alice", 10.0, 20.0).unwrap();
        assert_eq!(registry.len(), 1);

        let player = registry.get(&PeerId::new("s1")).unwrap();
        assert_eq!(player.display_name, "alice");
        assert_eq!(player.position.x, 10.0);
    }

    #[test]
    fn test_duplicate_create_rejected() {
        let mut registry = PlayerRegistry::new();
        registry.create(PeerId::new("s1"), "alice", 0.0, 0.0).unwrap();
        let err = registry.create(PeerId::new("s1"), "alice2", 0.0, 0.0);
        assert!(matches!(err, Err(PresenceError::DuplicatePeer(_))));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_destroy_without_call_is_silent() {
        let mut registry = PlayerRegistry::new();
        let mut outbox = Outbox::new();
        registry.create(PeerId::new("s1"), "alice", 0.0, 0.0).unwrap();
        registry.destroy(&PeerId::new("s1"), &mut outbox).unwrap();
        assert!(registry.is_empty());
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_destroy_releases_active_call() {
        let mut registry = PlayerRegistry::new();
        let mut outbox = Outbox::new();
        registry.create(PeerId::new("s1"), "alice", 0.0, 0.0).unwrap();
        registry.get_mut(&PeerId::new("s1")).unwrap().call_active = true;

        registry.destroy(&PeerId::new("s1"), &mut outbox).unwrap();
        let events: Vec<_> = outbox.drain().collect();
        assert_eq!(events, vec![SignalEvent::PeerDisconnected(PeerId::new("s1"))]);
    }

    #[test]
    fn test_destroy_unknown_peer() {
        let mut registry = PlayerRegistry::new();
        let mut outbox = Outbox::new();
        let err = registry.destroy(&PeerId::new("ghost"), &mut outbox);
        assert!(matches!(err, Err(PresenceError::UnknownPeer(_))));
    }

    #[test]
    fn test_update_routing() {
        let mut registry = PlayerRegistry::new();
        registry.create(PeerId::new("s1"), "alice", 0.0, 0.0).unwrap();
        registry
            .apply_update(&PeerId::new("s1"), "x", &json!(55.0))
            .unwrap();
        assert_eq!(registry.get(&PeerId::new("s1")).unwrap().target_position.x, 55.0);

        let err = registry.apply_update(&PeerId::new("ghost"), "x", &json!(1.0));
        assert!(matches!(err, Err(PresenceError::UnknownPeer(_))));
    }
}
