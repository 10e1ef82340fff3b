//! Interface between a mover and the entity that hosts it.
//!
//! The host owns the integer grid position the outside world renders, and
//! knows the size of the world it lives in. [`PreciseMover`] only ever talks
//! to it through [`GridHost`].
//!
//! [`PreciseMover`]: crate::PreciseMover

use serde::{Deserialize, Serialize};

use crate::error::MotionError;

/// Integer cell coordinate on the host grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl GridPoint {
    /// Create a new grid point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Dimensions of a bounded world, in cells.
///
/// Valid positions lie in `[0, width) × [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WorldSize {
    width: i32,
    height: i32,
}

impl WorldSize {
    /// Create a world size, rejecting non-positive dimensions.
    ///
    /// # Errors
    /// Returns [`MotionError::DegenerateWorld`] when either dimension is zero
    /// or negative.
    ///
    /// # Examples
    /// ```
    /// use smoothmove::{MotionError, WorldSize};
    /// assert!(WorldSize::new(640, 480).is_ok());
    /// assert_eq!(
    ///     WorldSize::new(0, 480),
    ///     Err(MotionError::DegenerateWorld { width: 0, height: 480 })
    /// );
    /// ```
    pub const fn new(width: i32, height: i32) -> Result<Self, MotionError> {
        if width <= 0 || height <= 0 {
            return Err(MotionError::DegenerateWorld { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in cells.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Returns `true` when `x` lies in `[0, width)`.
    #[must_use]
    pub fn contains_x(&self, x: f64) -> bool {
        (0.0..f64::from(self.width)).contains(&x)
    }

    /// Returns `true` when `y` lies in `[0, height)`.
    #[must_use]
    pub fn contains_y(&self, y: f64) -> bool {
        (0.0..f64::from(self.height)).contains(&y)
    }

    /// Returns `true` when column `x` is on or beyond the left or right edge.
    #[must_use]
    pub const fn on_horizontal_edge(&self, x: i32) -> bool {
        x <= 0 || x >= self.width - 1
    }

    /// Returns `true` when row `y` is on or beyond the top or bottom edge.
    #[must_use]
    pub const fn on_vertical_edge(&self, y: i32) -> bool {
        y <= 0 || y >= self.height - 1
    }
}

/// Host entity a [`PreciseMover`](crate::PreciseMover) is composed into.
pub trait GridHost {
    /// Size of the world the entity currently lives in, if any.
    fn world_size(&self) -> Option<WorldSize>;

    /// Integer position as tracked by the host.
    fn grid_position(&self) -> GridPoint;

    /// Place the entity at an integer position.
    fn place(&mut self, point: GridPoint);

    /// Size of the world, or [`MotionError::OutsideWorld`] when there is none.
    ///
    /// # Errors
    /// Returns [`MotionError::OutsideWorld`] if [`GridHost::world_size`]
    /// reports no world.
    fn require_world(&self) -> Result<WorldSize, MotionError> {
        self.world_size().ok_or(MotionError::OutsideWorld)
    }
}

/// Minimal standalone host: an integer position and an optional world.
///
/// # Examples
/// ```
/// use smoothmove::{GridActor, GridHost, GridPoint, WorldSize};
/// let world = WorldSize::new(10, 10).unwrap();
/// let actor = GridActor::in_world(world, GridPoint::new(3, 4));
/// assert_eq!(actor.grid_position(), GridPoint::new(3, 4));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridActor {
    position: GridPoint,
    world: Option<WorldSize>,
}

impl GridActor {
    /// Create an actor that has not yet been added to a world.
    #[must_use]
    pub const fn detached(position: GridPoint) -> Self {
        Self {
            position,
            world: None,
        }
    }

    /// Create an actor already living in `world`.
    #[must_use]
    pub const fn in_world(world: WorldSize, position: GridPoint) -> Self {
        Self {
            position,
            world: Some(world),
        }
    }

    /// Move the actor into `world`, keeping its current position.
    pub const fn join(&mut self, world: WorldSize) {
        self.world = Some(world);
    }

    /// Remove the actor from its world.
    pub const fn leave(&mut self) {
        self.world = None;
    }
}

impl GridHost for GridActor {
    fn world_size(&self) -> Option<WorldSize> {
        self.world
    }

    fn grid_position(&self) -> GridPoint {
        self.position
    }

    fn place(&mut self, point: GridPoint) {
        self.position = point;
    }
}
