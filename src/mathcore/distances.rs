//! `mathcore::distances` submodule implements distance and range checks between points.
//!
//! Range checks compare squared values, so they do not take square roots.
//! Squares are taken in `f64`, where they cannot overflow for finite `f32` points and ranges.
//!

use crate::mathcore::vectors::{Vector2, Vector3};

/// [`Distance`] trait defines distance functions between points.
///
/// # Example
/// ```rust
/// # use ggmath::mathcore::{distances::Distance, vectors::Vector2};
/// let a: Vector2 = Vector2::new(0.0, 0.0);
/// let b: Vector2 = Vector2::new(3.0, 4.0);
/// assert_eq!(a.distance(b), 5.0);
/// assert!(a.is_within(b, 5.0));
/// assert!(a.is_beyond(b, 4.9));
/// ```
///
pub trait Distance: Copy {
    /// Returns squared distance between points in double precision.
    ///
    fn sqr_distance_f64(self, other: Self) -> f64;

    /// Returns squared distance between points.
    ///
    fn sqr_distance(self, other: Self) -> f32 {
        self.sqr_distance_f64(other) as f32
    }
    /// Returns distance between points.
    ///
    fn distance(self, other: Self) -> f32 {
        self.sqr_distance_f64(other).sqrt() as f32
    }

    /// Returns `true` if points are not farther than `range` from each other.
    ///
    /// Negative and NaN ranges are never satisfied.
    ///
    fn is_within(self, other: Self, range: f32) -> bool {
        range >= 0.0 && self.sqr_distance_f64(other) <= f64::from(range).powi(2)
    }
    /// Returns `true` if points are strictly farther than `range` from each other.
    ///
    /// Negative ranges are always satisfied, NaN ranges are never satisfied.
    ///
    fn is_beyond(self, other: Self, range: f32) -> bool {
        if range < 0.0 {
            return true;
        }
        self.sqr_distance_f64(other) > f64::from(range).powi(2)
    }
}
/// Sums squared component differences in double precision.
///
fn wide_sqr_distance<const N: usize>(a: [f32; N], b: [f32; N]) -> f64 {
    a.iter().zip(b.iter()).fold(0.0, |acc, (a, b)| {
        let d: f64 = f64::from(*b) - f64::from(*a);
        acc + d * d
    })
}
impl Distance for Vector2 {
    fn sqr_distance_f64(self, other: Self) -> f64 {
        wide_sqr_distance(self.elements(), other.elements())
    }
}
impl Distance for Vector3 {
    fn sqr_distance_f64(self, other: Self) -> f64 {
        wide_sqr_distance(self.elements(), other.elements())
    }
}

impl Vector3 {
    /// Returns distance between points projected on the ground plane (height is ignored).
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::mathcore::vectors::Vector3;
    /// let a: Vector3 = Vector3::new(0.0, 100.0, 0.0);
    /// let b: Vector3 = Vector3::new(3.0, -7.0, 4.0);
    /// assert_eq!(a.planar_distance(b), 5.0);
    /// ```
    ///
    pub fn planar_distance(self, other: Self) -> f32 {
        self.flat().distance(other.flat())
    }
    /// Range check on the ground plane (height is ignored).
    ///
    pub fn is_within_planar(self, other: Self, range: f32) -> bool {
        self.flat().is_within(other.flat(), range)
    }
}

#[cfg(test)]
mod tests {
    use super::Distance;
    use crate::mathcore::{
        floats::almost_equal,
        vectors::{Vector2, Vector3},
    };

    #[test]
    fn distances() {
        let a: Vector3 = Vector3::new(1.0, 2.0, 3.0);
        let b: Vector3 = Vector3::new(3.0, 4.0, 4.0);
        assert_eq!(a.sqr_distance(b), 9.0);
        assert_eq!(a.distance(b), 3.0);
        assert_eq!(b.distance(a), 3.0);
        assert_eq!(a.distance(a), 0.0);
        assert!(almost_equal(a.planar_distance(b), 5.0_f32.sqrt()));

        assert_eq!(Vector2::new(-1.0, -1.0).distance(Vector2::new(2.0, 3.0)), 5.0);
    }

    #[test]
    fn ranges() {
        let a: Vector2 = Vector2::ZERO;
        let b: Vector2 = Vector2::new(0.0, 2.0);
        assert!(a.is_within(b, 2.0));
        assert!(a.is_within(b, 3.0));
        assert!(!a.is_within(b, 1.99));
        assert!(!a.is_within(b, -2.0));
        assert!(!a.is_within(b, f32::NAN));
        assert!(a.is_within(a, 0.0));
        assert!(a.is_within(b, f32::INFINITY));

        assert!(!a.is_beyond(b, 2.0));
        assert!(a.is_beyond(b, 1.99));
        assert!(a.is_beyond(a, -1.0));
        assert!(!a.is_beyond(b, f32::NAN));

        let c: Vector3 = Vector3::new(0.0, 50.0, 0.0);
        let d: Vector3 = Vector3::new(1.0, 0.0, 0.0);
        assert!(c.is_within_planar(d, 1.0));
        assert!(!c.is_within(d, 1.0));
    }

    #[test]
    fn large_ranges() {
        let a: Vector2 = Vector2::ZERO;
        let far: Vector2 = Vector2::new(1e30, 0.0);
        assert!(!a.is_within(far, 2e19));
        assert!(a.is_beyond(far, 2e19));
        assert!(a.is_within(far, 2e30));
        assert!(!a.is_beyond(far, 2e30));
        assert!(a.is_within(far, f32::MAX));
        assert!(almost_equal(a.distance(far), 1e30));

        let opposite: Vector3 = Vector3::splat(f32::MAX);
        assert!(!(-opposite).is_within(opposite, f32::MAX));
        assert!((-opposite).is_beyond(opposite, f32::MAX));

        let tiny: Vector2 = Vector2::new(1e-30, 0.0);
        assert!(!a.is_within(tiny, 1e-31));
        assert!(a.is_beyond(tiny, 1e-31));
        assert!(a.is_within(tiny, 1e-30));
    }
}
