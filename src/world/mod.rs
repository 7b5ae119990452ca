pub mod zones;

pub use zones::{ExclusionZone, ZoneId, ZoneLayout};
