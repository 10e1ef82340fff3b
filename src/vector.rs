//! Two-dimensional movement vector.
//!
//! [`Vector`] stores Cartesian components together with the heading they were
//! last pointing along. The heading survives while the vector is neutral so a
//! stopped mover can be given a speed again without losing its direction.
use std::ops::{Add, AddAssign, MulAssign, Neg};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DIRECTION_DEGREES;
use crate::numeric::normalise_degrees;

/// Velocity or force acting on a mover, in cells per step.
///
/// Directions are reported in degrees within `[0, 360)`, measured from the
/// positive x axis towards the positive y axis.
///
/// # Examples
/// ```
/// use smoothmove::Vector;
/// let mut v = Vector::new(3.0, 4.0);
/// assert!((v.length() - 5.0).abs() < 1e-12);
/// v.set_length(10.0);
/// assert!((v.x() - 6.0).abs() < 1e-12);
/// assert!((v.y() - 8.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(from = "VectorRepr", into = "VectorRepr")]
pub struct Vector {
    components: DVec2,
    heading: f64,
}

/// Serialised form of a [`Vector`].
#[derive(Serialize, Deserialize)]
struct VectorRepr {
    x: f64,
    y: f64,
    #[serde(default)]
    direction: f64,
}

impl From<VectorRepr> for Vector {
    fn from(repr: VectorRepr) -> Self {
        let mut vector = Self {
            components: DVec2::new(repr.x, repr.y),
            heading: normalise_degrees(repr.direction),
        };
        vector.sync_heading();
        vector
    }
}

impl From<Vector> for VectorRepr {
    fn from(vector: Vector) -> Self {
        Self {
            x: vector.components.x,
            y: vector.components.y,
            direction: vector.heading,
        }
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::neutral()
    }
}

impl Vector {
    /// A vector with no length, heading along [`DEFAULT_DIRECTION_DEGREES`].
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            components: DVec2::ZERO,
            heading: DEFAULT_DIRECTION_DEGREES,
        }
    }

    /// Build a vector from Cartesian components.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self::from(DVec2::new(x, y))
    }

    /// Build a vector pointing along `direction` degrees with the given length.
    ///
    /// # Examples
    /// ```
    /// use smoothmove::Vector;
    /// let v = Vector::from_polar(90.0, 2.0);
    /// assert!(v.x().abs() < 1e-12);
    /// assert!((v.y() - 2.0).abs() < 1e-12);
    /// assert!((v.direction() - 90.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn from_polar(direction: f64, length: f64) -> Self {
        let mut vector = Self::neutral();
        vector.set_direction(direction);
        vector.set_length(length);
        vector
    }

    /// Horizontal component.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.components.x
    }

    /// Vertical component.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.components.y
    }

    /// Euclidean length of the vector.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.components.length()
    }

    /// Heading in degrees within `[0, 360)`.
    ///
    /// A neutral vector reports the heading it last had, or
    /// [`DEFAULT_DIRECTION_DEGREES`] after [`Vector::set_neutral`].
    #[must_use]
    pub const fn direction(&self) -> f64 {
        self.heading
    }

    /// Returns `true` when both components are zero.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.components == DVec2::ZERO
    }

    /// Multiply both components by `factor`.
    ///
    /// Negative factors reverse the vector. A zero factor neutralises the
    /// components but keeps the recorded heading.
    pub fn scale(&mut self, factor: f64) {
        self.components *= factor;
        self.sync_heading();
    }

    /// Rescale to `length` while keeping the current heading.
    ///
    /// Negative lengths are clamped to zero. On a neutral vector the recorded
    /// heading is used.
    pub fn set_length(&mut self, length: f64) {
        let clamped = length.max(0.0);
        let unit = self
            .components
            .try_normalize()
            .unwrap_or_else(|| unit_for(self.heading));
        self.components = unit * clamped;
    }

    /// Rotate to `degrees` while keeping the current length.
    ///
    /// Any angle is accepted and normalised into `[0, 360)`. Rotating a
    /// neutral vector only changes the recorded heading.
    pub fn set_direction(&mut self, degrees: f64) {
        self.heading = normalise_degrees(degrees);
        self.components = unit_for(self.heading) * self.length();
    }

    /// Negate the horizontal component.
    pub fn revert_horizontal(&mut self) {
        self.components.x = -self.components.x;
        self.sync_heading();
    }

    /// Negate the vertical component.
    pub fn revert_vertical(&mut self) {
        self.components.y = -self.components.y;
        self.sync_heading();
    }

    /// Reset to the neutral vector.
    pub fn set_neutral(&mut self) {
        *self = Self::neutral();
    }

    fn sync_heading(&mut self) {
        if !self.is_neutral() {
            let radians = self.components.y.atan2(self.components.x);
            self.heading = normalise_degrees(radians.to_degrees());
        }
    }
}

fn unit_for(degrees: f64) -> DVec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    DVec2::new(cos, sin)
}

/// Vectors compare by their components; the heading a neutral vector
/// remembers does not take part.
impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl From<DVec2> for Vector {
    fn from(components: DVec2) -> Self {
        let mut vector = Self {
            components,
            heading: DEFAULT_DIRECTION_DEGREES,
        };
        vector.sync_heading();
        vector
    }
}

impl From<Vector> for DVec2 {
    fn from(vector: Vector) -> Self {
        vector.components
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, other: Self) {
        self.components += other.components;
        self.sync_heading();
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, factor: f64) {
        self.scale(factor);
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.scale(-1.0);
        self
    }
}
