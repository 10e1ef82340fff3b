//! Error types raised by world-relative motion operations.

use thiserror::Error;

/// Failure raised when a mover cannot be reconciled against its world.
///
/// Both variants indicate an integration bug in the host rather than a
/// condition the simulation is expected to recover from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MotionError {
    /// The host entity has not been admitted into a world yet.
    #[error("entity is not part of a world")]
    OutsideWorld,
    /// A world was described with a non-positive dimension.
    #[error("world size {width}x{height} is degenerate")]
    DegenerateWorld {
        /// Requested width in cells.
        width: i32,
        /// Requested height in cells.
        height: i32,
    },
}
