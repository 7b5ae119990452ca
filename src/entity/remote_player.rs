//! Per-peer presence state synchronized from the network
//!
//! A [`RemotePlayer`] is the local client's record of one remote
//! participant. Inbound field updates mutate it asynchronously relative to
//! the simulation tick; each field is written independently, so an update
//! may move `x` without touching `y`. The reconciler is the only writer of
//! `position`, the negotiator the only writer of `call_active`.

use glam::Vec2;
use serde_json::Value;

use super::PeerId;

/// Depth shift applied on top of the y-sort when the peer is sitting.
///
/// Sitting poses overlap the furniture sprite, so the draw order is nudged
/// per facing direction: a peer sitting facing up is drawn behind the
/// chair back, the other directions in front of it.
fn sit_depth_shift(direction: &str) -> f32 {
    match direction {
        "up" => -10.0,
        "down" | "left" | "right" => 10.0,
        _ => 0.0,
    }
}

/// State record for one remote participant.
#[derive(Debug, Clone)]
pub struct RemotePlayer {
    pub id: PeerId,
    pub display_name: String,

    /// Rendered position, advanced toward `target_position` once per tick.
    pub position: Vec2,
    /// Last received authoritative position. Written by inbound updates only.
    pub target_position: Vec2,

    /// Last received animation key, format `"{texture}_{state}_{direction}"`.
    pub animation_key: String,

    pub ready_to_connect: bool,
    pub media_connected: bool,

    /// Whether a media call with this peer is currently open.
    /// Written only by the negotiator (and registry teardown).
    pub call_active: bool,

    /// Elapsed time since the last call-state transition for this pair.
    /// Accumulates every tick, reset to zero exactly at transitions.
    pub connection_cooldown_ms: f32,

    /// Timestamp of the previous reconciliation. `None` until the first
    /// reconcile runs, which disables the staleness snap (no baseline yet).
    pub last_reconcile_ms: Option<f64>,
}

impl RemotePlayer {
    pub fn new(id: PeerId, name: impl Into<String>, x: f32, y: f32) -> Self {
        let position = Vec2::new(x, y);
        Self {
            id,
            display_name: name.into(),
            position,
            target_position: position,
            animation_key: String::new(),
            ready_to_connect: false,
            media_connected: false,
            call_active: false,
            connection_cooldown_ms: 0.0,
            last_reconcile_ms: None,
        }
    }

    /// Apply one inbound field update from the messaging layer.
    ///
    /// Updates arrive in arbitrary order and are applied as independent
    /// per-field writes. A value of the wrong type is dropped for that
    /// field only; unknown field names are ignored. Nothing here fails:
    /// a dropped update is superseded by the next one.
    pub fn apply_update(&mut self, field: &str, value: &Value) {
        match field {
            "name" => match value {
                Value::String(s) => self.display_name = s.clone(),
                _ => self.drop_field(field, value),
            },
            "x" => match value.as_f64() {
                Some(n) => self.target_position.x = n as f32,
                None => self.drop_field(field, value),
            },
            "y" => match value.as_f64() {
                Some(n) => self.target_position.y = n as f32,
                None => self.drop_field(field, value),
            },
            "anim" => match value {
                Value::String(s) => self.animation_key = s.clone(),
                _ => self.drop_field(field, value),
            },
            "readyToConnect" => match value {
                Value::Bool(b) => self.ready_to_connect = *b,
                _ => self.drop_field(field, value),
            },
            "videoConnected" => match value {
                Value::Bool(b) => self.media_connected = *b,
                _ => self.drop_field(field, value),
            },
            _ => log::debug!("peer {}: ignoring unknown field {:?}", self.id, field),
        }
    }

    fn drop_field(&self, field: &str, value: &Value) {
        log::debug!(
            "peer {}: dropping field {:?} with mismatched value {:?}",
            self.id,
            field,
            value
        );
    }

    /// Draw-order depth for the renderer.
    ///
    /// Entities y-sort; a sitting pose additionally shifts by a fixed
    /// offset keyed on the facing direction so the peer interleaves
    /// correctly with the furniture. Output attribute only - no
    /// reconciliation invariant depends on it.
    pub fn render_depth(&self) -> f32 {
        let mut parts = self.animation_key.split('_');
        let _texture = parts.next();
        let state = parts.next();
        let direction = parts.next();

        let shift = match (state, direction) {
            (Some("sit"), Some(dir)) => sit_depth_shift(dir),
            _ => 0.0,
        };
        self.position.y + shift
    }
}
