//! Motion constants shared by the vector and mover logic.

/// Speeds below this value are snapped to zero by
/// [`PreciseMover::accelerate`](crate::PreciseMover::accelerate).
///
/// Without the cutoff a repeatedly decayed vector would approach zero
/// asymptotically and never come to rest.
pub const DEAD_ZONE_SPEED: f64 = 0.15;
/// Heading, in degrees, of a neutral vector.
pub const DEFAULT_DIRECTION_DEGREES: f64 = 0.0;
/// Degrees in a full turn.
pub const FULL_TURN_DEGREES: f64 = 360.0;
/// Number of unit advances performed by a plain tick.
pub const DEFAULT_STEPS: i32 = 1;
/// Distance, in cells, that a stopped mover is pulled back inside the edge.
pub const EDGE_INSET: i32 = 1;
