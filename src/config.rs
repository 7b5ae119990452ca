//! Presence configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `config.ron` file (if exists)
//! 3. Environment variables prefixed with `COPRESENCE_`
//!
//! Example environment variable: `COPRESENCE_MOVEMENT__SPEED=150`
//!
//! The defaults reproduce the deployed map layout exactly (room split at
//! 400/400, exclusion rectangle at 610/515, 750 ms timers, 200 u/s
//! movement); behavioral-compatibility tests pin them.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::world::{ExclusionZone, ZoneLayout};

/// Main presence configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PresenceConfig {
    #[serde(default)]
    pub movement: MovementConfig,

    #[serde(default)]
    pub negotiation: NegotiationConfig,

    #[serde(default)]
    pub zones: ZoneLayout,
}

/// Dead-reckoning reconciliation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementConfig {
    /// Fixed interpolation speed toward the target position, units/sec
    pub speed: f32,
    /// Reconciliation gap after which the rendered position snaps straight
    /// to the target instead of chasing it, in milliseconds
    pub snap_after_ms: f64,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 200.0,
            snap_after_ms: 750.0,
        }
    }
}

/// Call negotiation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NegotiationConfig {
    /// Minimum elapsed time between two call-state transitions for the
    /// same peer pair, in milliseconds
    pub cooldown_ms: f32,
    /// Always-connected social area; termination is suppressed while both
    /// peers are inside
    pub exclusion: ExclusionZone,
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 750.0,
            exclusion: ExclusionZone::default(),
        }
    }
}

impl PresenceConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `config.ron` file (if exists)
    /// 3. Environment variables prefixed with `COPRESENCE_` (highest priority)
    pub fn load() -> Result<Self> {
        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("movement.speed", 200.0)?
            .set_default("movement.snap_after_ms", 750.0)?
            .set_default("negotiation.cooldown_ms", 750.0)?
            .set_default("negotiation.exclusion.max_x", 610.0)?
            .set_default("negotiation.exclusion.min_y", 515.0)?
            .set_default("zones.split_x", 400.0)?
            .set_default("zones.split_y", 400.0)?
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name("config")
                    .format(config::FileFormat::Ron)
                    .required(false),
            )
            // Layer 3: Environment variables (COPRESENCE_MOVEMENT__SPEED, etc.)
            .add_source(Environment::with_prefix("COPRESENCE").separator("__"));

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_deployed_constants() {
        let config = PresenceConfig::default();
        assert_eq!(config.movement.speed, 200.0);
        assert_eq!(config.movement.snap_after_ms, 750.0);
        assert_eq!(config.negotiation.cooldown_ms, 750.0);
        assert_eq!(config.negotiation.exclusion.max_x, 610.0);
        assert_eq!(config.negotiation.exclusion.min_y, 515.0);
        assert_eq!(config.zones.split_x, 400.0);
        assert_eq!(config.zones.split_y, 400.0);
    }

    #[test]
    fn test_load_config_with_defaults() {
        // Should load defaults when no config file exists
        let config = PresenceConfig::load().expect("Failed to load config");
        assert_eq!(config.movement.speed, 200.0);
        assert_eq!(config.negotiation.cooldown_ms, 750.0);
    }

    #[test]
    fn test_ron_round_trip() {
        let config = PresenceConfig::default();
        let text = ron::to_string(&config).expect("serialize");
        let back: PresenceConfig = ron::from_str(&text).expect("deserialize");
        assert_eq!(back.zones.split_x, config.zones.split_x);
        assert_eq!(back.negotiation.exclusion.max_x, config.negotiation.exclusion.max_x);
    }
}
