//! Outbound side effects of call negotiation
//!
//! The negotiator never talks to the signaling layer directly. It pushes
//! typed events into an [`Outbox`] that the embedding client drains once
//! per tick and forwards to its transport.

use crate::entity::PeerId;
use serde::{Deserialize, Serialize};

/// A side effect requested from the signaling collaborator.
///
/// Exactly one event is emitted per successful call-state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalEvent {
    /// Open a peer media session with this participant.
    CallRequested(PeerId),
    /// An active session with this participant has ended.
    PeerDisconnected(PeerId),
}

impl SignalEvent {
    /// The peer this event concerns.
    pub fn peer(&self) -> &PeerId {
        match self {
            SignalEvent::CallRequested(id) | SignalEvent::PeerDisconnected(id) => id,
        }
    }
}

/// Per-tick queue of pending side effects.
#[derive(Debug, Default)]
pub struct Outbox {
    events: Vec<SignalEvent>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: SignalEvent) {
        log::debug!("queued signal event: {:?}", event);
        self.events.push(event);
    }

    /// Drain all pending events, oldest first.
    pub fn drain(&mut self) -> std::vec::Drain<'_, SignalEvent> {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order() {
        let mut outbox = Outbox::new();
        outbox.push(SignalEvent::CallRequested(PeerId::new("a")));
        outbox.push(SignalEvent::PeerDisconnected(PeerId::new("b")));
        assert_eq!(outbox.len(), 2);

        let events: Vec<_> = outbox.drain().collect();
        assert_eq!(events[0], SignalEvent::CallRequested(PeerId::new("a")));
        assert_eq!(events[1], SignalEvent::PeerDisconnected(PeerId::new("b")));
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_event_peer_accessor() {
        let event = SignalEvent::CallRequested(PeerId::new("abc"));
        assert_eq!(event.peer(), &PeerId::new("abc"));
    }
}
