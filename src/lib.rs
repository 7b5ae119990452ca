//! # Copresence - client-side presence core for a shared 2D space
//!
//! Keeps a smooth view of every remote participant's position via
//! dead-reckoning reconciliation, and decides - independently on each
//! client, with no central coordinator - when a direct peer media
//! connection should be opened or closed.

pub mod config;
pub mod entity;
pub mod error;
pub mod events;
pub mod simulation;
pub mod world;

/// Common imports for internal use
pub mod prelude {
    pub use crate::config::PresenceConfig;
    pub use crate::entity::{LocalPlayer, PeerId, PlayerRegistry, RemotePlayer};
    pub use crate::events::{Outbox, SignalEvent};
    pub use crate::world::{ZoneId, ZoneLayout};
    pub use glam::Vec2;
}
