use crate::grid::Arena;
use rollblock_common::{CellCoord, Orientation};
use serde::{Deserialize, Serialize};

/// Roll speed that reproduces 2 degrees per frame at 60 frames per second.
pub const DEFAULT_DEGREES_PER_SECOND: f32 = 120.0;

/// What to do with a roll whose resting footprint would leave the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundsPolicy {
    /// Accept every roll; the block may leave the arena indefinitely.
    #[default]
    Unbounded,
    /// Refuse rolls that would end with any footprint cell off the arena.
    Reject,
}

impl BoundsPolicy {
    /// Whether a block resting at `anchor` in `orientation` is allowed.
    pub fn admits(self, arena: &Arena, orientation: Orientation, anchor: CellCoord) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Reject => arena.fits(orientation, anchor),
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollConfig {
    /// Rotation speed of a roll in degrees per second.
    pub degrees_per_second: f32,
    /// Anchor cell of the block at start.
    pub initial_cell: CellCoord,
    pub initial_orientation: Orientation,
    pub bounds: BoundsPolicy,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            degrees_per_second: DEFAULT_DEGREES_PER_SECOND,
            initial_cell: CellCoord::new(5, 5),
            initial_orientation: Orientation::Standing,
            bounds: BoundsPolicy::Unbounded,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("roll speed must be a positive finite number of degrees per second, got {0}")]
    InvalidSpeed(f32),
    #[error("initial block {orientation} at {cell} does not fit the arena")]
    StartOutOfBounds {
        cell: CellCoord,
        orientation: Orientation,
    },
}

impl RollConfig {
    pub fn validate(&self, arena: &Arena) -> Result<(), ConfigError> {
        if !self.degrees_per_second.is_finite() || self.degrees_per_second <= 0.0 {
            return Err(ConfigError::InvalidSpeed(self.degrees_per_second));
        }
        if !self
            .bounds
            .admits(arena, self.initial_orientation, self.initial_cell)
        {
            return Err(ConfigError::StartOutOfBounds {
                cell: self.initial_cell,
                orientation: self.initial_orientation,
            });
        }
        Ok(())
    }

    /// Parse a JSON configuration. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RollConfig::default();
        assert_eq!(config.degrees_per_second, 120.0);
        assert_eq!(config.initial_cell, CellCoord::new(5, 5));
        assert_eq!(config.initial_orientation, Orientation::Standing);
        assert_eq!(config.bounds, BoundsPolicy::Unbounded);
        assert!(config.validate(&Arena::new()).is_ok());
    }

    #[test]
    fn rejects_bad_speed() {
        let arena = Arena::new();
        for speed in [0.0, -10.0, f32::NAN, f32::INFINITY] {
            let config = RollConfig {
                degrees_per_second: speed,
                ..RollConfig::default()
            };
            assert!(matches!(
                config.validate(&arena),
                Err(ConfigError::InvalidSpeed(_))
            ));
        }
    }

    #[test]
    fn start_off_arena_only_matters_when_rejecting() {
        let arena = Arena::new();
        let mut config = RollConfig {
            initial_cell: CellCoord::new(20, 5),
            ..RollConfig::default()
        };
        assert!(config.validate(&arena).is_ok());
        config.bounds = BoundsPolicy::Reject;
        assert!(matches!(
            config.validate(&arena),
            Err(ConfigError::StartOutOfBounds { .. })
        ));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let text = r#"{ "bounds": "reject", "degrees_per_second": 240.0 }"#;
        let config = RollConfig::from_json(text).unwrap();
        assert_eq!(config.bounds, BoundsPolicy::Reject);
        assert_eq!(config.degrees_per_second, 240.0);
        assert_eq!(config.initial_cell, CellCoord::new(5, 5));
    }

    #[test]
    fn json_cell_and_orientation() {
        let config = RollConfig::from_json(
            r#"{ "initial_cell": { "x": 2, "z": 7 }, "initial_orientation": "LyingAlongZ" }"#,
        )
        .unwrap();
        assert_eq!(config.initial_cell, CellCoord::new(2, 7));
        assert_eq!(config.initial_orientation, Orientation::LyingAlongZ);
    }
}
