//! Scenario configuration for the headless simulation.
//!
//! Scenarios are JSON documents. Every field has a default, so `{}` describes
//! an empty 100×100 world that runs for 60 ticks.
//!
//! ```json
//! {
//!   "world": { "width": 64, "height": 48 },
//!   "ticks": 120,
//!   "movers": [
//!     { "x": 10, "y": 10, "speed": 0.75, "direction": 30.0, "policy": "bounce" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::error::MotionError;
use crate::host::WorldSize;
use crate::plugin::EdgePolicy;

/// Failure loading or validating a scenario.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The scenario file could not be read.
    #[error("failed to read scenario {path:?}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The scenario is not valid JSON for [`SimulationConfig`].
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),
    /// The configured world has a non-positive dimension.
    #[error("invalid world: {0}")]
    World(#[from] MotionError),
}

/// Size of the simulated world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Width in cells.
    pub width: i32,
    /// Height in cells.
    pub height: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
        }
    }
}

/// Initial state of one mover.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MoverConfig {
    /// Starting column.
    pub x: i32,
    /// Starting row.
    pub y: i32,
    /// Initial speed in cells per tick.
    pub speed: f64,
    /// Initial heading in degrees.
    pub direction: f64,
    /// Behaviour at the world edge.
    pub policy: EdgePolicy,
    /// Optional per-tick speed factor.
    pub decay: Option<f64>,
}

impl Default for MoverConfig {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            speed: 1.0,
            direction: 0.0,
            policy: EdgePolicy::default(),
            decay: None,
        }
    }
}

/// A complete simulation scenario.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// World extent.
    pub world: WorldConfig,
    /// Number of ticks to run.
    pub ticks: u32,
    /// Movers to spawn, in order.
    pub movers: Vec<MoverConfig>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            ticks: 60,
            movers: Vec::new(),
        }
    }
}

impl SimulationConfig {
    /// Parse a scenario from a JSON string.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed input and
    /// [`ConfigError::World`] for a degenerate world.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.world_size()?;
        Ok(config)
    }

    /// Read and parse a scenario file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise
    /// the errors of [`SimulationConfig::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        let json = fs::read_to_string(path_ref).map_err(|source| ConfigError::Io {
            path: path_ref.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Validated world extent.
    ///
    /// # Errors
    /// Returns [`MotionError::DegenerateWorld`] when either dimension is not
    /// positive.
    pub const fn world_size(&self) -> Result<WorldSize, MotionError> {
        WorldSize::new(self.world.width, self.world.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = SimulationConfig::from_json("{}").expect("valid scenario");
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn mover_fields_default_individually() {
        let config = SimulationConfig::from_json(r#"{"movers": [{"x": 4, "policy": "stop"}]}"#)
            .expect("valid scenario");
        let mover = config.movers.first().copied().expect("one mover");
        assert_eq!(mover.x, 4);
        assert_eq!(mover.policy, EdgePolicy::Stop);
        assert!((mover.speed - 1.0).abs() < f64::EPSILON);
        assert_eq!(mover.decay, None);
    }

    #[test]
    fn world_dimensions_default_individually() {
        let config =
            SimulationConfig::from_json(r#"{"world": {"width": 64}}"#).expect("valid scenario");
        assert_eq!(
            config.world,
            WorldConfig {
                width: 64,
                height: 100
            }
        );
    }

    #[test]
    fn rejects_degenerate_world() {
        let err = SimulationConfig::from_json(r#"{"world": {"width": 0, "height": 5}}"#)
            .expect_err("zero width");
        assert!(matches!(
            err,
            ConfigError::World(MotionError::DegenerateWorld { width: 0, height: 5 })
        ));
    }
}
