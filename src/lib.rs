#![cfg_attr(docsrs, feature(doc_cfg))]
//! Sub-pixel precise motion for entities on an integer grid.
//!
//! Hosts only render integer cells, so [`PreciseMover`] tracks the exact
//! position and a [`Vector`] velocity, integrates them every tick, applies a
//! boundary policy, and projects the result onto the host's grid through
//! [`GridHost`]. The [`plugin`] module wires movers into a Bevy app.
pub mod config;
pub mod constants;
pub mod error;
pub mod host;
pub mod logging;
pub mod mover;
pub mod numeric;
pub mod plugin;
pub mod simulation;
pub mod vector;
pub use constants::*;

// Re-export commonly used items
pub use config::{ConfigError, MoverConfig, SimulationConfig, WorldConfig};
pub use error::MotionError;
pub use host::{GridActor, GridHost, GridPoint, WorldSize};
pub use logging::init as init_logging;
pub use mover::{calc_distance, PreciseMover};
pub use plugin::{
    Admitted, Decay, EdgePolicy, GridHostView, GridPosition, MotionPlugin, WorldBounds,
};
pub use simulation::{MoverSnapshot, Simulation};
pub use vector::Vector;

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use smoothmove::prelude::*;
    //! ```

    pub use crate::EdgePolicy;
    pub use crate::GridActor;
    pub use crate::GridHost;
    pub use crate::GridPoint;
    pub use crate::MotionPlugin;
    pub use crate::PreciseMover;
    pub use crate::Vector;
    pub use crate::WorldSize;
}
