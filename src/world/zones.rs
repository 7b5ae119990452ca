//! Coordinate-to-zone classification
//!
//! The shared space is partitioned into four rectangular rooms by two axis
//! thresholds, with a shared hallway as the fallback zone. Zones exist
//! only to answer one question: are two peers close enough, in the
//! social sense, that a call between them should be open?

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Discrete region of the shared space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneId {
    Room1,
    Room2,
    Room3,
    Room4,
    Hallway,
}

impl ZoneId {
    /// The hallway acts as one shared room for call purposes, regardless
    /// of exact coordinates.
    pub fn is_hallway(&self) -> bool {
        matches!(self, ZoneId::Hallway)
    }
}

/// Axis thresholds partitioning the plane into the four rooms.
///
/// Map-layout data, not algorithm: other deployments may carve the space
/// differently, so the thresholds load from configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ZoneLayout {
    pub split_x: f32,
    pub split_y: f32,
}

impl Default for ZoneLayout {
    fn default() -> Self {
        Self {
            split_x: 400.0,
            split_y: 400.0,
        }
    }
}

impl ZoneLayout {
    /// Classify a position. Deterministic, pure, and total over the plane.
    ///
    /// The quadrant test covers every coordinate, so `Hallway` is only
    /// reachable as the explicit fallback; it is kept for future
    /// non-rectangular topologies where the rooms stop tiling the plane.
    pub fn zone_of(&self, pos: Vec2) -> ZoneId {
        if pos.x < self.split_x && pos.y < self.split_y {
            return ZoneId::Room1;
        }
        if pos.x >= self.split_x && pos.y < self.split_y {
            return ZoneId::Room2;
        }
        if pos.x < self.split_x && pos.y >= self.split_y {
            return ZoneId::Room3;
        }
        if pos.x >= self.split_x && pos.y >= self.split_y {
            return ZoneId::Room4;
        }
        ZoneId::Hallway
    }
}

/// Half-open rectangle (`x < max_x`, `y > min_y`) modeling the designated
/// always-connected social area: calls between two peers who are both
/// inside never terminate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExclusionZone {
    pub max_x: f32,
    pub min_y: f32,
}

impl Default for ExclusionZone {
    fn default() -> Self {
        Self {
            max_x: 610.0,
            min_y: 515.0,
        }
    }
}

impl ExclusionZone {
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x < self.max_x && pos.y > self.min_y
    }
}
