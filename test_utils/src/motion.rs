//! Convenience constructors for worlds, hosts, and movers used in tests.

use smoothmove::{GridActor, GridPoint, PreciseMover, Vector, WorldSize};

/// Create a world, panicking on a degenerate size.
///
/// # Examples
/// ```
/// use test_utils::world;
/// let w = world(50, 40);
/// assert_eq!(w.width(), 50);
/// ```
///
/// # Panics
/// Panics if either dimension is not positive.
pub fn world(width: i32, height: i32) -> WorldSize {
    WorldSize::new(width, height).unwrap_or_else(|e| panic!("test world: {e}"))
}

/// Create an actor at cell `(x, y)` inside `world`.
pub fn actor_at(world: WorldSize, x: i32, y: i32) -> GridActor {
    GridActor::in_world(world, GridPoint::new(x, y))
}

/// Create a mover moving by `(vx, vy)` per step and admit it at the actor's
/// current cell.
pub fn admitted_mover(actor: &GridActor, vx: f64, vy: f64) -> PreciseMover {
    let mut mover = PreciseMover::with_movement(Vector::new(vx, vy));
    mover.enter_world(actor);
    mover
}

/// Create an admitted mover placed at the exact position `(x, y)`.
///
/// # Examples
/// ```
/// use smoothmove::{GridHost, GridPoint, Vector};
/// use test_utils::{mover_at_exact, world};
/// let (mover, actor) = mover_at_exact(world(10, 10), 2.5, 3.75, Vector::neutral());
/// assert_eq!(actor.grid_position(), GridPoint::new(2, 3));
/// assert_eq!(mover.exact_position(), (2.5, 3.75));
/// ```
pub fn mover_at_exact(
    world: WorldSize,
    x: f64,
    y: f64,
    movement: Vector,
) -> (PreciseMover, GridActor) {
    let mut actor = GridActor::in_world(world, GridPoint::default());
    let mut mover = PreciseMover::with_movement(movement);
    mover.enter_world(&actor);
    mover.set_location(&mut actor, x, y);
    (mover, actor)
}
