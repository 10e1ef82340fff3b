//! Numeric conversion helpers used across the project.
//!
//! The exact-to-grid projection lives here so that every conversion from
//! sub-pixel coordinates to host cells goes through one named function.

use crate::constants::FULL_TURN_DEGREES;

/// Truncate `value` toward zero and convert it into the `i32` grid domain.
///
/// Values beyond the `i32` range saturate at its bounds and NaN maps to `0`.
///
/// # Examples
/// ```
/// use smoothmove::numeric::floor_toward_zero;
/// assert_eq!(floor_toward_zero(99.9), 99);
/// assert_eq!(floor_toward_zero(-0.5), 0);
/// assert_eq!(floor_toward_zero(-1.5), -1);
/// ```
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is truncated and clamped to the i32 bounds before casting."
)]
#[must_use]
pub fn floor_toward_zero(value: f64) -> i32 {
    if value.is_nan() {
        return 0;
    }
    let truncated = value.trunc();
    let clamped = truncated.clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    clamped as i32
}

/// Normalise an angle in degrees into `[0, 360)`.
///
/// Any number of whole turns is removed, so `720.0` maps to `0.0` and
/// `-90.0` maps to `270.0`.
///
/// # Examples
/// ```
/// use smoothmove::numeric::normalise_degrees;
/// assert_eq!(normalise_degrees(-720.0), 0.0);
/// assert_eq!(normalise_degrees(450.0), 90.0);
/// ```
#[must_use]
pub fn normalise_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(FULL_TURN_DEGREES);
    // `rem_euclid` rounds tiny negative inputs up to a full turn.
    if wrapped >= FULL_TURN_DEGREES {
        0.0
    } else {
        wrapped
    }
}
