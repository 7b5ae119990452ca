//! Fixed-rate simulation tick - reconciliation and call negotiation
//!
//! Everything runs single-threaded inside one tick driven by an external
//! frame scheduler; nothing blocks or suspends. Inbound field updates
//! land on the peer records between ticks; each tick reads whatever was
//! most recently applied.

pub mod negotiate;
pub mod reconcile;

pub use negotiate::{evaluate, Decision};
pub use reconcile::reconcile;

use crate::config::PresenceConfig;
use crate::entity::{LocalPlayer, PlayerRegistry};
use crate::events::Outbox;

/// Run one simulation tick over every live remote peer.
///
/// Per peer: accumulate the pair's cooldown timer, advance the rendered
/// position, then evaluate and apply the call decision. At most one
/// outbound side effect is queued per peer per tick.
pub fn tick(
    registry: &mut PlayerRegistry,
    local: &LocalPlayer,
    cfg: &PresenceConfig,
    elapsed_ms: f32,
    now_ms: f64,
    outbox: &mut Outbox,
) {
    for player in registry.players_mut() {
        player.connection_cooldown_ms += elapsed_ms;
        reconcile(player, &cfg.movement, elapsed_ms, now_ms);
        let decision = negotiate::evaluate(local, player, &cfg.negotiation, &cfg.zones);
        negotiate::apply(decision, player, outbox);
    }
}
