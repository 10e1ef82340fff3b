//! Utility helpers for tests.
//!
//! Fixtures build worlds, hosts, and admitted movers; the assertion helpers
//! check the exact-to-grid projection with readable failure messages.
pub mod motion;

pub use motion::{actor_at, admitted_mover, mover_at_exact, world};

use approx::relative_eq;
use smoothmove::numeric::floor_toward_zero;
use smoothmove::{GridHost, PreciseMover};

/// Assert that the host sits on the truncated projection of the mover.
///
/// # Panics
/// Panics with both positions if the projection does not hold.
pub fn assert_projected<H: GridHost>(mover: &PreciseMover, host: &H) {
    let (x, y) = mover.exact_position();
    let grid = host.grid_position();
    assert_eq!(
        (grid.x, grid.y),
        (floor_toward_zero(x), floor_toward_zero(y)),
        "host at {grid:?} is not the projection of exact ({x}, {y})"
    );
}

/// Assert that the mover's exact position is `(x, y)` within `1e-9`.
///
/// # Panics
/// Panics with the actual position if either coordinate differs.
pub fn assert_exact(mover: &PreciseMover, x: f64, y: f64) {
    let (actual_x, actual_y) = mover.exact_position();
    assert!(
        relative_eq!(actual_x, x, epsilon = 1e-9) && relative_eq!(actual_y, y, epsilon = 1e-9),
        "expected exact ({x}, {y}), got ({actual_x}, {actual_y})"
    );
}
