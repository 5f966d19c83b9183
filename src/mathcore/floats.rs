//! `mathcore::floats` submodule implements several consts, functions and traits that help in
//! work with `f32` type.
//!
//! [`almost_equal`] function and [`EPSILON`] const are dealing with floating point equality.
//!
//! [`FloatOperations`] trait and [`SNAP_THRESHOLD`] const clean up noise left by float
//! operations (trigonometry mostly).
//!

/// Constant that is used in floating point equality.
///
/// It represents amount of difference that is allowed for two `f32` values to still be considered
/// equal.
///
pub const EPSILON: f32 = 0.00001;
/// This function implements floating point equality for `ggmath` crate.
///
/// It is used for implementing `PartialEq` on types that are based on float.
/// Tolerance is [`EPSILON`]; see [`almost_equal_with`] for details.
///
/// # Example
/// ```rust
/// # use ggmath::mathcore::floats::almost_equal;
/// assert!(almost_equal(0.15 + 0.15, 0.1 + 0.2));
/// assert!(almost_equal(0.0, 1e-7));
/// assert!(!almost_equal(1.0, 1.001));
/// ```
///
pub fn almost_equal(a: f32, b: f32) -> bool {
    almost_equal_with(a, b, EPSILON)
}
/// Floating point equality with custom tolerance.
///
/// Tolerance is absolute for values that are smaller than 1.0 and relative for bigger ones,
/// so comparisons near zero do not collapse into exact equality.
/// NaN is never equal to anything, infinities are equal only to themselves.
///
/// # Example
/// ```rust
/// # use ggmath::mathcore::floats::almost_equal_with;
/// assert!(almost_equal_with(1000.0, 1000.05, 0.0001));
/// assert!(!almost_equal_with(0.0, 0.01, 0.0001));
/// assert!(!almost_equal_with(f32::NAN, f32::NAN, 1.0));
/// ```
///
pub fn almost_equal_with(a: f32, b: f32, epsilon: f32) -> bool {
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }

    let diff = (a - b).abs();
    let norm = (a.abs() + b.abs()).min(f32::MAX);
    diff <= epsilon * norm.max(1.0)
}

/// Largest distance from a whole number of `10^-digits` steps that [`FloatOperations::snap_to`]
/// still treats as float noise.
///
pub const SNAP_THRESHOLD: f32 = 0.0001;
/// [`FloatOperations`] trait defines rounding helpers for float-based values.
///
pub trait FloatOperations {
    /// Snaps value to the nearest multiple of `10^-digits` if it is closer than
    /// [`SNAP_THRESHOLD`] steps to it. Otherwise value is returned unchanged.
    ///
    /// Snapped zeros are always positive.
    ///
    fn snap_to(self, digits: i32) -> Self;

    /// Rounds to given amount of digits after floating point.
    ///
    /// Passing negative number shifts floating point to the left.
    ///
    fn round_to(self, digits: i32) -> Self;
}
impl FloatOperations for f32 {
    /// Snaps value that is almost a multiple of `10^-digits`.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::mathcore::floats::FloatOperations;
    /// assert!((-0.0_f32).snap_to(0).is_sign_positive());
    /// assert_eq!(0.00009_f32.snap_to(0), 0.0);
    /// assert_eq!(0.99999_f32.snap_to(0), 1.0);
    /// assert_eq!(0.200009_f32.snap_to(1), 0.2);
    /// assert_eq!(0.5_f32.snap_to(0), 0.5);
    /// ```
    ///
    fn snap_to(self, digits: i32) -> Self {
        let scale: f32 = 10_f32.powi(digits);
        let scaled: f32 = self * scale;
        let nearest: f32 = scaled.round();
        if (scaled - nearest).abs() < SNAP_THRESHOLD {
            // `+ 0.0` turns -0.0 into 0.0.
            nearest / scale + 0.0
        } else {
            self
        }
    }

    /// Rounds to given amount of digits after floating point.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::mathcore::floats::FloatOperations;
    /// assert_eq!(12.345_f32.round_to(-1), 10.0);
    /// assert_eq!(0.57735_f32.round_to(2), 0.58);
    /// ```
    ///
    fn round_to(self, digits: i32) -> Self {
        let scale: f32 = 10_f32.powi(digits);
        (self * scale).round() / scale
    }
}
impl<T: FloatOperations, const N: usize> FloatOperations for [T; N] {
    fn snap_to(self, digits: i32) -> Self {
        self.map(|elem| elem.snap_to(digits))
    }

    fn round_to(self, digits: i32) -> Self {
        self.map(|elem| elem.round_to(digits))
    }
}
