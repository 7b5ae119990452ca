//! Symmetric call negotiation
//!
//! Both peers of a pair run this procedure independently, once per tick,
//! against their own view of the pair's state. The id tie-break
//! guarantees exactly one side issues the initiate action; the shared
//! cooldown timer prevents open/close storms. No coordinator exists.

use crate::config::NegotiationConfig;
use crate::entity::{LocalPlayer, RemotePlayer};
use crate::events::{Outbox, SignalEvent};
use crate::world::{ZoneId, ZoneLayout};

/// Outcome of one evaluation of a peer pair. At most one non-`None`
/// decision is produced per tick per pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    None,
    Initiate,
    Terminate,
}

/// Two peers are call-eligible when they share a room, or are both in
/// the hallway. The hallway is one shared room for call purposes; a
/// room-to-hallway pairing never connects.
fn proximity_ok(local_zone: ZoneId, remote_zone: ZoneId) -> bool {
    if local_zone.is_hallway() || remote_zone.is_hallway() {
        local_zone.is_hallway() && remote_zone.is_hallway()
    } else {
        local_zone == remote_zone
    }
}

/// Decide whether to open or close the call with one remote peer.
///
/// Pure over the two snapshots; [`apply`] performs the transition.
///
/// Initiate requires, all at once: no active call, cooldown elapsed, both
/// peers ready, local media live, the local id winning the tie-break, and
/// the proximity rule. Terminate requires: active call, cooldown elapsed,
/// local body contact clear, and not both peers inside the exclusion
/// zone.
pub fn evaluate(
    local: &LocalPlayer,
    remote: &RemotePlayer,
    cfg: &NegotiationConfig,
    zones: &ZoneLayout,
) -> Decision {
    if remote.connection_cooldown_ms < cfg.cooldown_ms {
        return Decision::None;
    }

    if !remote.call_active {
        // Only the peer with the greater id initiates, so exactly one of
        // the two symmetric evaluations acts.
        let tie_break = local.id > remote.id;
        let eligible = local.ready_to_connect
            && remote.ready_to_connect
            && local.media_connected
            && tie_break
            && proximity_ok(zones.zone_of(local.position), zones.zone_of(remote.position));
        if eligible {
            return Decision::Initiate;
        }
    } else {
        let both_excluded =
            cfg.exclusion.contains(local.position) && cfg.exclusion.contains(remote.position);
        if local.contact.clear() && !both_excluded {
            return Decision::Terminate;
        }
    }

    Decision::None
}

/// Carry out a decision: flip the call state, reset the shared cooldown,
/// and queue the single outbound side effect.
pub fn apply(decision: Decision, remote: &mut RemotePlayer, outbox: &mut Outbox) {
    match decision {
        Decision::None => {}
        Decision::Initiate => {
            debug_assert!(!remote.call_active);
            remote.call_active = true;
            remote.connection_cooldown_ms = 0.0;
            log::info!("initiating call with peer {}", remote.id);
            outbox.push(SignalEvent::CallRequested(remote.id.clone()));
        }
        Decision::Terminate => {
            debug_assert!(remote.call_active);
            remote.call_active = false;
            remote.connection_cooldown_ms = 0.0;
            log::info!("ending call with peer {}", remote.id);
            outbox.push(SignalEvent::PeerDisconnected(remote.id.clone()));
        }
    }
}
