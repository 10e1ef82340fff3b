//! Sub-pixel precise movement for entities on an integer grid.
//!
//! A [`PreciseMover`] keeps the authoritative position of an entity as a pair
//! of `f64` values and projects it onto the host's grid whenever it changes.
//! Every position update funnels through [`PreciseMover::set_location`], which
//! is the only place the projection happens.

use std::ops::Sub;

use bevy_ecs::component::Component;
use glam::DVec2;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::constants::{DEAD_ZONE_SPEED, DEFAULT_STEPS, EDGE_INSET};
use crate::error::MotionError;
use crate::host::{GridHost, GridPoint};
use crate::numeric::floor_toward_zero;
use crate::vector::Vector;

/// Exact position and velocity of a grid entity.
///
/// The mover does not own its host. Operations that need the host's grid
/// position or world take it as an argument, so the same mover works with a
/// [`GridActor`](crate::GridActor), an ECS adapter, or a test double.
///
/// # Examples
/// ```
/// use smoothmove::{GridActor, GridHost, GridPoint, PreciseMover, Vector, WorldSize};
///
/// let world = WorldSize::new(100, 100).unwrap();
/// let mut actor = GridActor::in_world(world, GridPoint::new(10, 10));
/// let mut mover = PreciseMover::with_movement(Vector::new(0.4, 0.0));
/// mover.enter_world(&actor);
///
/// mover.advance(&mut actor).unwrap();
/// mover.advance(&mut actor).unwrap();
/// assert_eq!(actor.grid_position(), GridPoint::new(10, 10));
/// mover.advance(&mut actor).unwrap();
/// assert_eq!(actor.grid_position(), GridPoint::new(11, 10));
/// ```
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PreciseMover {
    exact: ExactPoint,
    movement: Vector,
}

/// Exact coordinates of a mover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
struct ExactPoint {
    x: f64,
    y: f64,
}

impl From<ExactPoint> for DVec2 {
    fn from(point: ExactPoint) -> Self {
        Self::new(point.x, point.y)
    }
}

impl PreciseMover {
    /// Create a stationary mover.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_movement(Vector::neutral())
    }

    /// Create a mover with an initial movement vector.
    #[must_use]
    pub const fn with_movement(movement: Vector) -> Self {
        Self {
            exact: ExactPoint { x: 0.0, y: 0.0 },
            movement,
        }
    }

    /// Seed the exact position from the host's current grid position.
    ///
    /// Call once when the host is added to a world. Construction can happen
    /// before the host has a position worth reading.
    pub fn enter_world<H: GridHost + ?Sized>(&mut self, host: &H) {
        self.enter_world_at(host.grid_position());
    }

    /// Seed the exact position from an already known grid cell.
    pub fn enter_world_at(&mut self, cell: GridPoint) {
        let GridPoint { x, y } = cell;
        self.exact = ExactPoint {
            x: f64::from(x),
            y: f64::from(y),
        };
        debug!("mover entered world at ({x}, {y})");
    }

    /// Advance one step inside a bounded world.
    ///
    /// # Errors
    /// Returns [`MotionError::OutsideWorld`] if the host has no world.
    pub fn advance<H: GridHost + ?Sized>(&mut self, host: &mut H) -> Result<(), MotionError> {
        self.advance_by(host, DEFAULT_STEPS)
    }

    /// Advance `steps` unit moves inside a bounded world.
    ///
    /// Each axis is checked independently: a candidate coordinate outside
    /// `[0, width)` or `[0, height)` is discarded and that axis keeps its
    /// current value. The movement vector is never changed here.
    ///
    /// # Errors
    /// Returns [`MotionError::OutsideWorld`] if the host has no world.
    pub fn advance_by<H: GridHost + ?Sized>(
        &mut self,
        host: &mut H,
        steps: i32,
    ) -> Result<(), MotionError> {
        let world = host.require_world()?;
        let mut next = self.candidate(steps);
        if !world.contains_x(next.x) {
            trace!("rejected x update to {} outside width {}", next.x, world.width());
            next.x = self.exact.x;
        }
        if !world.contains_y(next.y) {
            trace!("rejected y update to {} outside height {}", next.y, world.height());
            next.y = self.exact.y;
        }
        self.set_location(host, next.x, next.y);
        Ok(())
    }

    /// Advance `steps` unit moves without any boundary check.
    ///
    /// Suitable for hosts whose world wraps or scrolls instead of ending.
    pub fn advance_unbounded_by<H: GridHost + ?Sized>(&mut self, host: &mut H, steps: i32) {
        let next = self.candidate(steps);
        self.set_location(host, next.x, next.y);
    }

    fn candidate(&self, steps: i32) -> DVec2 {
        DVec2::from(self.exact) + DVec2::from(self.movement) * f64::from(steps)
    }

    /// Set the exact position and place the host on the projected cell.
    ///
    /// This is the only operation that writes to the host's grid position.
    pub fn set_location<H: GridHost + ?Sized>(&mut self, host: &mut H, x: f64, y: f64) {
        self.exact = ExactPoint { x, y };
        host.place(GridPoint::new(floor_toward_zero(x), floor_toward_zero(y)));
    }

    /// Set the position from integer cell coordinates.
    pub fn set_grid_location<H: GridHost + ?Sized>(&mut self, host: &mut H, x: i32, y: i32) {
        self.set_location(host, f64::from(x), f64::from(y));
    }

    /// Add `force` to the current movement.
    pub fn add_force(&mut self, force: Vector) {
        self.movement += force;
    }

    /// Scale the speed by `factor`, keeping the direction.
    ///
    /// Factors below one slow the mover down. Once the resulting speed falls
    /// below [`DEAD_ZONE_SPEED`] the movement snaps to neutral.
    pub fn accelerate(&mut self, factor: f64) {
        self.movement.scale(factor);
        if self.movement.length() < DEAD_ZONE_SPEED {
            if !self.movement.is_neutral() {
                debug!("speed {} inside dead zone, stopping", self.movement.length());
            }
            self.movement.set_neutral();
        }
    }

    /// Current speed in cells per step.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.movement.length()
    }

    /// Set the speed, keeping the direction.
    pub fn set_speed(&mut self, speed: f64) {
        self.movement.set_length(speed);
    }

    /// Point the movement along `degrees`; any angle is normalised first.
    pub fn set_direction(&mut self, degrees: f64) {
        self.movement.set_direction(degrees);
    }

    /// Copy of the current movement vector.
    #[must_use]
    pub const fn movement(&self) -> Vector {
        self.movement
    }

    /// Returns `true` when the host sits on (or beyond) any world edge.
    ///
    /// # Errors
    /// Returns [`MotionError::OutsideWorld`] if the host has no world.
    pub fn at_world_edge<H: GridHost + ?Sized>(&self, host: &H) -> Result<bool, MotionError> {
        let world = host.require_world()?;
        let GridPoint { x, y } = host.grid_position();
        Ok(world.on_horizontal_edge(x) || world.on_vertical_edge(y))
    }

    /// Reflect off the world edge the host is touching.
    ///
    /// A left or right edge reverses the horizontal component; otherwise a
    /// top or bottom edge reverses the vertical one. In a corner only the
    /// horizontal component is reversed. Nothing happens away from the edges.
    ///
    /// # Errors
    /// Returns [`MotionError::OutsideWorld`] if the host has no world.
    pub fn bounce_at_edge<H: GridHost + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> Result<(), MotionError> {
        let world = host.require_world()?;
        let GridPoint { x, y } = host.grid_position();
        if world.on_horizontal_edge(x) {
            self.bounce_horizontal(host);
        } else if world.on_vertical_edge(y) {
            self.bounce_vertical(host);
        }
        Ok(())
    }

    /// Snap to the host's cell and reverse the horizontal component.
    pub fn bounce_horizontal<H: GridHost + ?Sized>(&mut self, host: &mut H) {
        self.recommit_grid_position(host);
        self.movement.revert_horizontal();
    }

    /// Snap to the host's cell and reverse the vertical component.
    pub fn bounce_vertical<H: GridHost + ?Sized>(&mut self, host: &mut H) {
        self.recommit_grid_position(host);
        self.movement.revert_vertical();
    }

    fn recommit_grid_position<H: GridHost + ?Sized>(&mut self, host: &mut H) {
        let GridPoint { x, y } = host.grid_position();
        self.set_grid_location(host, x, y);
    }

    /// Stop dead at the world edge and step one cell back inside.
    ///
    /// Edges are checked left, right, top, bottom; only the first one touched
    /// is corrected and the other axis keeps its exact value.
    ///
    /// # Errors
    /// Returns [`MotionError::OutsideWorld`] if the host has no world.
    pub fn stop_at_world_edge<H: GridHost + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> Result<(), MotionError> {
        if !self.at_world_edge(host)? {
            return Ok(());
        }
        let world = host.require_world()?;
        self.set_speed(0.0);
        let GridPoint { x, y } = host.grid_position();
        let inset = f64::from(EDGE_INSET);
        if x <= 0 {
            self.set_location(host, inset, self.exact.y);
        } else if x >= world.width() - 1 {
            self.set_location(host, f64::from(world.width() - 1 - EDGE_INSET), self.exact.y);
        } else if y <= 0 {
            self.set_location(host, self.exact.x, inset);
        } else {
            self.set_location(host, self.exact.x, f64::from(world.height() - 1 - EDGE_INSET));
        }
        Ok(())
    }

    /// Neutralise the movement without touching the position.
    pub fn stop(&mut self) {
        self.movement.set_neutral();
    }

    /// Exact horizontal coordinate.
    #[must_use]
    pub const fn exact_x(&self) -> f64 {
        self.exact.x
    }

    /// Exact vertical coordinate.
    #[must_use]
    pub const fn exact_y(&self) -> f64 {
        self.exact.y
    }

    /// Exact position as a `(x, y)` pair.
    #[must_use]
    pub const fn exact_position(&self) -> (f64, f64) {
        (self.exact.x, self.exact.y)
    }

    /// Returns `true` when the exact position lies within `tolerance` of the
    /// target cell. The boundary is inclusive; a negative or NaN tolerance is
    /// never satisfied.
    #[must_use]
    pub fn has_reached_destination(&self, target_x: i32, target_y: i32, tolerance: f64) -> bool {
        let dx = calc_distance(self.exact.x, f64::from(target_x));
        let dy = calc_distance(self.exact.y, f64::from(target_y));
        dx.hypot(dy) <= tolerance
    }
}

/// Signed displacement from `a` to `b`, i.e. `b - a`.
///
/// The result is not an absolute distance: `calc_distance(5.0, 3.0)` is
/// `-2.0`. Works for both exact and grid coordinates.
///
/// # Examples
/// ```
/// use smoothmove::calc_distance;
/// assert_eq!(calc_distance(5.0, 3.0), -2.0);
/// assert_eq!(calc_distance(2, 7), 5);
/// ```
#[must_use]
pub fn calc_distance<T: Sub<Output = T>>(a: T, b: T) -> T {
    b - a
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{GridActor, WorldSize};

    fn actor_at(x: i32, y: i32) -> GridActor {
        let world = WorldSize::new(20, 20).expect("valid world");
        GridActor::in_world(world, GridPoint::new(x, y))
    }

    #[test]
    fn enter_world_seeds_exact_position() {
        let actor = actor_at(7, 3);
        let mut mover = PreciseMover::new();
        mover.enter_world(&actor);
        assert_eq!(mover.exact_position(), (7.0, 3.0));
    }

    #[test]
    fn enter_world_at_seeds_from_a_bare_cell() {
        let mut mover = PreciseMover::with_movement(Vector::new(0.5, 0.0));
        mover.enter_world_at(GridPoint::new(-2, 9));
        assert_eq!(mover.exact_position(), (-2.0, 9.0));
        assert!((mover.speed() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn fractional_moves_accumulate() {
        let mut actor = actor_at(0, 0);
        let mut mover = PreciseMover::with_movement(Vector::new(0.25, 0.5));
        mover.enter_world(&actor);
        mover.advance_by(&mut actor, 4).expect("in world");
        assert_eq!(mover.exact_position(), (1.0, 2.0));
        assert_eq!(actor.grid_position(), GridPoint::new(1, 2));
    }

    #[test]
    fn advance_without_world_fails() {
        let mut actor = GridActor::detached(GridPoint::new(1, 1));
        let mut mover = PreciseMover::with_movement(Vector::new(1.0, 0.0));
        assert_eq!(mover.advance(&mut actor), Err(MotionError::OutsideWorld));
        assert_eq!(actor.grid_position(), GridPoint::new(1, 1));
    }

    #[test]
    fn unbounded_advance_leaves_world() {
        let mut actor = actor_at(19, 19);
        let mut mover = PreciseMover::with_movement(Vector::new(1.5, 1.5));
        mover.enter_world(&actor);
        mover.advance_unbounded_by(&mut actor, 2);
        assert_eq!(actor.grid_position(), GridPoint::new(22, 22));
    }

    #[test]
    fn bounce_recommits_grid_cell() {
        let mut actor = actor_at(0, 5);
        let mut mover = PreciseMover::with_movement(Vector::new(-1.0, 0.5));
        mover.set_location(&mut actor, 0.75, 5.5);
        mover.bounce_at_edge(&mut actor).expect("in world");
        assert_eq!(mover.exact_position(), (0.0, 5.0));
        assert!((mover.movement().x() - 1.0).abs() < f64::EPSILON);
        assert!((mover.movement().y() - 0.5).abs() < f64::EPSILON);
    }
}
