//! Dead-reckoning reconciliation
//!
//! Network position updates arrive sparse and out of order; rendering
//! needs continuous motion. Each tick the rendered position advances
//! toward the last authoritative position at a fixed speed - constant
//! velocity, not eased - and snaps outright when reconciliation has
//! stalled long enough that chasing would look worse than teleporting.

use glam::Vec2;

use crate::config::MovementConfig;
use crate::entity::RemotePlayer;

/// Advance one peer's rendered position by one tick.
///
/// Returns the velocity applied this tick (zero on either snap path).
///
/// # Behavior
/// - **Staleness**: if a previous reconciliation exists and more than
///   `snap_after_ms` has passed since it, the position snaps straight to
///   the target and no velocity is applied. Bounds visual drift when
///   ticks stall (peer lag, inactive client) without an unbounded chase.
/// - **Axis snap**: an axis whose remaining distance is below this tick's
///   travel distance lands exactly on the target - no overshoot.
/// - **Diagonal**: when both axes move, the velocity vector is
///   renormalized so its magnitude is exactly `speed`; diagonal motion is
///   not faster than axis-aligned motion.
pub fn reconcile(
    player: &mut RemotePlayer,
    cfg: &MovementConfig,
    elapsed_ms: f32,
    now_ms: f64,
) -> Vec2 {
    if let Some(last) = player.last_reconcile_ms {
        if now_ms - last > cfg.snap_after_ms {
            player.position = player.target_position;
            player.last_reconcile_ms = Some(now_ms);
            return Vec2::ZERO;
        }
    }

    let delta = cfg.speed * elapsed_ms / 1000.0;
    let mut dx = player.target_position.x - player.position.x;
    let mut dy = player.target_position.y - player.position.y;

    if dx.abs() < delta {
        player.position.x = player.target_position.x;
        dx = 0.0;
    }
    if dy.abs() < delta {
        player.position.y = player.target_position.y;
        dy = 0.0;
    }

    let mut velocity = Vec2::ZERO;
    if dx > 0.0 {
        velocity.x = cfg.speed;
    } else if dx < 0.0 {
        velocity.x = -cfg.speed;
    }
    if dy > 0.0 {
        velocity.y = cfg.speed;
    } else if dy < 0.0 {
        velocity.y = -cfg.speed;
    }
    if velocity.x != 0.0 && velocity.y != 0.0 {
        velocity = velocity.normalize() * cfg.speed;
    }

    player.position += velocity * (elapsed_ms / 1000.0);
    player.last_reconcile_ms = Some(now_ms);
    velocity
}
