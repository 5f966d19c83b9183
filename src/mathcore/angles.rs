//! `mathcore::angles` submodule implements [`Angle`] newtype and thin trigonometric
//! helpers that convert between angles and two-dimensional vectors.
//!
//! All trigonometry is delegated to `f32` methods. Vector conversions snap sine and cosine
//! to [`TRIG_DIGITS`] digits, so multiples of right angle give exact axes.
//!

use crate::mathcore::{
    floats::{FloatOperations, EPSILON},
    vectors::Vector2,
};
use serde::{Deserialize, Serialize};
use std::{
    f32::consts::{FRAC_PI_2, PI, TAU},
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

/// Digits after floating point that sine and cosine are snapped to in vector conversions.
///
pub const TRIG_DIGITS: i32 = 3;

/// [`Angle`] is a newtype that restricts angle values to [0.0; TAU).
/// If given value is not finite, 0.0 will be set as angle value.
///
/// Underlying value is stored in radians. Angles are measured counterclockwise from
/// the positive X axis.
///
/// # Example
/// ```rust
/// # use ggmath::mathcore::angles::Angle;
/// # use std::f32::consts::FRAC_PI_2;
/// let angle: Angle = Angle::from_radians(-FRAC_PI_2);
/// assert_eq!(angle, Angle::from_degrees(270.0));
/// assert_eq!(angle.radians(), 3.0 * FRAC_PI_2);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialOrd)]
pub struct Angle(f32);
impl Angle {
    /// Zero angle.
    ///
    pub const ZERO: Angle = Angle(0.0);
    /// Right angle.
    ///
    pub const DEG90: Angle = Angle(FRAC_PI_2);
    /// Straight angle.
    ///
    pub const DEG180: Angle = Angle(PI);
    /// Angle that corresponds to 270 degrees.
    ///
    pub const DEG270: Angle = Angle(3.0 * FRAC_PI_2);

    /// Normalizes given angle (in radians) to [0.0; TAU).
    ///
    fn normalize(angle: f32) -> f32 {
        if !angle.is_finite() {
            return 0.0;
        }
        let normalized: f32 = angle.rem_euclid(TAU);
        // `rem_euclid` may round up to `TAU` for tiny negative inputs.
        if normalized >= TAU {
            0.0
        } else {
            normalized
        }
    }

    /// Initializes angle from radians.
    ///
    pub fn from_radians(radians: f32) -> Self {
        Angle(Self::normalize(radians))
    }
    /// Initializes angle from degrees.
    ///
    pub fn from_degrees(degrees: f32) -> Self {
        Angle::from_radians(degrees.to_radians())
    }

    /// Returns angle of the vector, measured from the positive X axis.
    ///
    /// Zero vector has zero angle.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::mathcore::{angles::Angle, vectors::Vector2};
    /// assert_eq!(Angle::of(Vector2::new(0.0, 5.0)), Angle::DEG90);
    /// assert_eq!(Angle::of(Vector2::new(-1.0, 0.0)), Angle::DEG180);
    /// assert_eq!(Angle::of(Vector2::ZERO), Angle::ZERO);
    /// ```
    ///
    pub fn of(vector: Vector2) -> Self {
        Angle::from_radians(vector.y.atan2(vector.x))
    }
    /// Returns unsigned angle between two vectors in [0.0; PI].
    ///
    /// If any of the vectors is zero, zero angle is returned.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::mathcore::{angles::Angle, vectors::Vector2};
    /// let angle: Angle = Angle::between(Vector2::new(1.0, -2.0), Vector2::new(-2.0, 1.0));
    /// assert_eq!(angle.degrees().round(), 143.0);
    /// ```
    ///
    pub fn between(a: Vector2, b: Vector2) -> Self {
        let magnitudes: f32 = a.magnitude() * b.magnitude();
        if magnitudes == 0.0 {
            return Angle::ZERO;
        }
        let cos: f32 = (a.dot_product(b) / magnitudes).clamp(-1.0, 1.0);
        Angle::from_radians(cos.acos())
    }

    /// Returns angle value in radians.
    ///
    pub fn radians(&self) -> f32 {
        self.0
    }
    /// Returns angle value in degrees.
    ///
    pub fn degrees(&self) -> f32 {
        self.0.to_degrees()
    }

    /// Returns sine of angle.
    ///
    pub fn sin(&self) -> f32 {
        self.0.sin()
    }
    /// Returns cosine of angle.
    ///
    pub fn cos(&self) -> f32 {
        self.0.cos()
    }
    /// Returns tangent of angle.
    ///
    pub fn tan(&self) -> f32 {
        self.0.tan()
    }
    /// Returns sine and cosine of angle packed in tuple.
    ///
    pub fn sin_cos(&self) -> (f32, f32) {
        self.0.sin_cos()
    }
    /// Sine and cosine snapped to [`TRIG_DIGITS`].
    ///
    fn snapped_sin_cos(&self) -> (f32, f32) {
        let (sin, cos): (f32, f32) = self.sin_cos();
        (sin.snap_to(TRIG_DIGITS), cos.snap_to(TRIG_DIGITS))
    }

    /// Returns unit vector that points in the direction of this angle.
    ///
    pub fn direction(&self) -> Vector2 {
        Vector2::from_angle(*self)
    }
}
impl FloatOperations for Angle {
    fn snap_to(self, digits: i32) -> Self {
        Angle::from_radians(self.0.snap_to(digits))
    }

    fn round_to(self, digits: i32) -> Self {
        Angle::from_radians(self.0.round_to(digits))
    }
}
impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Angle::from_radians(-self.0)
    }
}
impl Add<Self> for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Angle::from_radians(self.0 + rhs.0)
    }
}
impl Sub<Self> for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Angle::from_radians(self.0 - rhs.0)
    }
}
impl Mul<f32> for Angle {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Angle::from_radians(self.0 * rhs)
    }
}
impl Div<f32> for Angle {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Angle::from_radians(self.0 / rhs)
    }
}
impl AddAssign<Self> for Angle {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl SubAssign<Self> for Angle {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl PartialEq for Angle {
    /// Angles are compared along the circle, so values on both sides of zero can be equal.
    ///
    fn eq(&self, other: &Self) -> bool {
        let diff: f32 = (self.0 - other.0).abs();
        diff.min(TAU - diff) <= EPSILON * (self.0 + other.0).max(1.0)
    }
}

impl Vector2 {
    /// Initializes unit vector that points in the direction of `angle`.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::mathcore::{angles::Angle, vectors::Vector2};
    /// assert_eq!(Vector2::from_angle(Angle::DEG90), Vector2::UNIT_Y);
    /// ```
    ///
    pub fn from_angle(angle: Angle) -> Self {
        let (sin, cos): (f32, f32) = angle.snapped_sin_cos();
        Vector2::new(cos, sin)
    }

    /// Returns vector rotated counterclockwise by `angle`.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::mathcore::{angles::Angle, vectors::Vector2};
    /// let rotated: Vector2 = Vector2::new(3.0, 1.0).rotated(Angle::DEG180);
    /// assert_eq!(rotated.elements(), [-3.0, -1.0]);
    /// ```
    ///
    pub fn rotated(self, angle: Angle) -> Self {
        let (sin, cos): (f32, f32) = angle.snapped_sin_cos();
        Vector2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

#[cfg(test)]
mod tests {
    use super::Angle;
    use crate::mathcore::{floats::almost_equal, vectors::Vector2};
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

    #[test]
    fn angle() {
        assert_eq!(Angle::from_degrees(450.0), Angle::DEG90);
        assert_eq!(Angle::from_degrees(-90.0), Angle::DEG270);
        assert_eq!(Angle::from_radians(f32::NAN), Angle::ZERO);
        assert_eq!(Angle::from_radians(f32::INFINITY), Angle::ZERO);
        assert!(Angle::from_radians(-1e-9).radians() < std::f32::consts::TAU);

        assert!(almost_equal(Angle::DEG90.degrees(), 90.0));
        assert!(almost_equal(Angle::DEG90.sin(), 1.0));
        assert!(almost_equal(Angle::from_radians(FRAC_PI_4).tan(), 1.0));
        assert_eq!(Angle::DEG90.sin_cos(), (Angle::DEG90.sin(), Angle::DEG90.cos()));

        assert_eq!(Angle::DEG90 + Angle::DEG180, Angle::DEG270);
        assert_eq!(Angle::DEG90 - Angle::DEG180, Angle::DEG270);
        assert_eq!(-Angle::DEG90, Angle::DEG270);
        assert_eq!(Angle::DEG90 * 2.0, Angle::DEG180);
        assert_eq!(Angle::DEG180 / 2.0, Angle::DEG90);

        let mut angle: Angle = Angle::ZERO;
        angle += Angle::DEG270;
        angle -= Angle::DEG180;
        assert_eq!(angle, Angle::DEG90);
    }

    #[test]
    fn vectors() {
        assert_eq!(Angle::of(Vector2::new(1.0, 1.0)), Angle::from_radians(FRAC_PI_4));
        assert_eq!(Angle::of(Vector2::new(0.0, -3.0)), Angle::DEG270);
        assert_eq!(Angle::between(Vector2::UNIT_X, Vector2::UNIT_Y), Angle::DEG90);
        assert_eq!(Angle::between(Vector2::UNIT_X, -Vector2::UNIT_X), Angle::DEG180);
        assert_eq!(Angle::between(Vector2::UNIT_X, Vector2::ZERO), Angle::ZERO);

        let direction: Vector2 = Angle::from_radians(FRAC_PI_2).direction();
        assert!(direction.approx_eq(Vector2::UNIT_Y, 1e-6));
        assert!(almost_equal(Vector2::from_angle(Angle::DEG180).magnitude(), 1.0));

        let rotated: Vector2 = Vector2::new(0.0, 2.0).rotated(Angle::DEG90);
        assert!(rotated.approx_eq(Vector2::new(-2.0, 0.0), 1e-6));
    }

    #[test]
    fn right_angles() {
        let up: Vector2 = Vector2::from_angle(Angle::DEG90);
        assert_eq!(up.elements(), [0.0, 1.0]);
        assert!(up.x.is_sign_positive());
        assert_eq!(Vector2::from_angle(Angle::DEG180).elements(), [-1.0, 0.0]);
        assert_eq!(Vector2::from_angle(Angle::DEG270).elements(), [0.0, -1.0]);
        assert_eq!(Vector2::new(0.0, 2.0).rotated(Angle::DEG90).elements(), [-2.0, 0.0]);

        let diagonal: Vector2 = Vector2::from_angle(Angle::from_radians(FRAC_PI_4));
        assert_eq!(diagonal.x, FRAC_PI_4.cos());
    }

    #[test]
    fn wraparound() {
        let almost_full: Angle = Angle::from_radians(TAU - 1e-6);
        assert!(almost_full.radians() > 6.0);
        assert_eq!(almost_full, Angle::ZERO);
        assert_eq!(Angle::ZERO, almost_full);
        assert_eq!(Angle::from_radians(1e-6), almost_full);
        assert_eq!(Angle::from_degrees(-0.00001), Angle::ZERO);

        assert_ne!(Angle::DEG90, Angle::DEG270);
        assert_ne!(Angle::ZERO, Angle::DEG180);
        assert_ne!(Angle::from_radians(0.01), Angle::from_radians(TAU - 0.01));
    }
}
