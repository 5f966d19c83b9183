//! `mathcore::directions` submodule computes unit direction between two points.
//!
//! # Degenerate input
//! Direction between two coincident points is undefined, so plain `(to - from).normalized()`
//! would produce NaN. Every function here returns the zero vector instead:
//! zero vector means "there is no meaningful direction" and it is the same for every call site
//! and both dimensionalities.
//!
//! The check is `squared_length <= 0.0`, which only holds when every component of the displacement
//! is exactly zero. There is no tolerance involved: length is computed in `f64`, so distinct
//! finite points always get a unit vector, however close or far apart they are.
//!
//! # Non-finite input
//! Unchecked functions ([`safe_direction`], [`direction2`], [`direction3`]) do not validate input,
//! NaN and infinities go through float arithmetic as is.
//! Checked functions ([`try_direction2`], [`try_direction3`]) reject such input
//! with [`DirectionError`].
//!

use crate::mathcore::{
    settings::{MathSettings, NonFinitePolicy},
    vectors::{Point2, Point3, Vector2, Vector3},
};
use log::{debug, trace};
use thiserror::Error;

/// Returns unit direction from `from` to `to`, or zero array if points coincide.
///
/// This function holds the policy for every other direction helper,
/// arity only changes number of components.
///
/// # Example
/// ```rust
/// # use ggmath::mathcore::directions::safe_direction;
/// assert_eq!(safe_direction([0.0, 0.0], [3.0, 0.0]), [1.0, 0.0]);
/// assert_eq!(safe_direction([5.0, 5.0], [5.0, 5.0]), [0.0, 0.0]);
/// assert_eq!(safe_direction([1.0, 2.0, 3.0], [1.0, 2.0, 1.0]), [0.0, 0.0, -1.0]);
/// ```
///
pub fn safe_direction<const N: usize>(from: [f32; N], to: [f32; N]) -> [f32; N] {
    // Squares of finite `f32` displacements neither overflow nor underflow in `f64`.
    let mut displacement: [f64; N] = [0.0; N];
    for (d, (f, t)) in displacement.iter_mut().zip(from.iter().zip(to.iter())) {
        *d = f64::from(*t) - f64::from(*f);
    }

    let sqr_length: f64 = displacement.iter().fold(0.0, |acc, d| acc + d * d);
    if sqr_length <= 0.0 {
        trace!("direction between coincident points {from:?}, falling back to zero vector");
        return [0.0; N];
    }

    let inv_length: f64 = 1.0 / sqr_length.sqrt();
    displacement.map(|d| (d * inv_length) as f32)
}

/// Returns unit direction from `from` to `to` on a plane, or zero vector if points coincide.
///
/// # Example
/// ```rust
/// # use ggmath::mathcore::{directions::direction2, vectors::Vector2};
/// assert_eq!(direction2(Vector2::ZERO, Vector2::new(3.0, 0.0)), Vector2::UNIT_X);
/// assert_eq!(direction2(Vector2::ONE, Vector2::ONE), Vector2::ZERO);
/// ```
///
pub fn direction2(from: Point2, to: Point2) -> Vector2 {
    Vector2::from(safe_direction(from.elements(), to.elements()))
}
/// Returns unit direction from `from` to `to` in space, or zero vector if points coincide.
///
/// # Example
/// ```rust
/// # use ggmath::mathcore::{directions::direction3, vectors::Vector3};
/// assert_eq!(direction3(Vector3::ZERO, Vector3::new(0.0, 4.0, 0.0)), Vector3::UNIT_Y);
/// assert_eq!(direction3(Vector3::ONE, Vector3::ONE), Vector3::ZERO);
/// ```
///
pub fn direction3(from: Point3, to: Point3) -> Vector3 {
    Vector3::from(safe_direction(from.elements(), to.elements()))
}

/// [`DirectionError`] enum lists all errors that could occur in checked direction functions.
///
/// Coincident points are not an error, they produce zero vector.
///
#[derive(Error, Copy, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum DirectionError {
    /// One of the points has NaN or infinite component.
    ///
    #[error("direction endpoint {side} has non-finite component at index {index}: {value}")]
    NonFinite {
        /// Which point is invalid.
        ///
        side: Endpoint,
        /// Index of the invalid component.
        ///
        index: usize,
        /// Invalid value.
        ///
        value: f32,
    },
}
/// [`Endpoint`] enum names points of direction.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Start point.
    ///
    From,
    /// End point.
    ///
    To,
}
impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Endpoint::From => "`from`",
            Endpoint::To => "`to`",
        })
    }
}

/// Checks that every component of both points is finite.
///
fn check_finite<const N: usize>(from: &[f32; N], to: &[f32; N]) -> Result<(), DirectionError> {
    for (side, point) in [(Endpoint::From, from), (Endpoint::To, to)] {
        if let Some((index, &value)) = point.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(DirectionError::NonFinite { side, index, value });
        }
    }
    Ok(())
}
/// Checked version of [`safe_direction`].
///
pub fn try_safe_direction<const N: usize>(
    from: [f32; N],
    to: [f32; N],
) -> Result<[f32; N], DirectionError> {
    check_finite(&from, &to)?;
    Ok(safe_direction(from, to))
}

/// Checked version of [`direction2`].
///
/// # Example
/// ```rust
/// # use ggmath::mathcore::{directions::{try_direction2, DirectionError, Endpoint}, vectors::Vector2};
/// assert_eq!(try_direction2(Vector2::ZERO, Vector2::new(0.0, -2.0)), Ok(-Vector2::UNIT_Y));
/// assert!(matches!(
///     try_direction2(Vector2::ZERO, Vector2::new(f32::INFINITY, 0.0)),
///     Err(DirectionError::NonFinite { side: Endpoint::To, index: 0, .. })
/// ));
/// ```
///
pub fn try_direction2(from: Point2, to: Point2) -> Result<Vector2, DirectionError> {
    try_safe_direction(from.elements(), to.elements()).map(Vector2::from)
}
/// Checked version of [`direction3`].
///
pub fn try_direction3(from: Point3, to: Point3) -> Result<Vector3, DirectionError> {
    try_safe_direction(from.elements(), to.elements()).map(Vector3::from)
}

/// [`Direction`] trait exposes direction functions as methods of points.
///
/// `Default` value of implementor is its zero vector.
///
/// # Example
/// ```rust
/// # use ggmath::mathcore::{directions::Direction, vectors::Vector3};
/// let from: Vector3 = Vector3::new(1.0, 1.0, 1.0);
/// assert_eq!(from.direction_to(Vector3::new(1.0, 1.0, 4.0)), Vector3::UNIT_Z);
/// assert_eq!(from.direction_to(from), Vector3::ZERO);
/// ```
///
pub trait Direction: Copy + Default {
    /// Returns unit direction from `self` to `to`, or zero vector if points coincide.
    ///
    fn direction_to(self, to: Self) -> Self;
    /// Checked version of [`Direction::direction_to`].
    ///
    fn try_direction_to(self, to: Self) -> Result<Self, DirectionError>;

    /// Returns direction with respect to `settings.non_finite` policy.
    ///
    /// With [`NonFinitePolicy::Reject`] non-finite input gives `Self::default()`.
    ///
    fn direction_to_with(self, to: Self, settings: &MathSettings) -> Self {
        match settings.non_finite {
            NonFinitePolicy::Propagate => self.direction_to(to),
            NonFinitePolicy::Reject => self.try_direction_to(to).unwrap_or_else(|error| {
                debug!("rejected direction input: {error}");
                Self::default()
            }),
        }
    }
}
impl Direction for Vector2 {
    fn direction_to(self, to: Self) -> Self {
        direction2(self, to)
    }

    fn try_direction_to(self, to: Self) -> Result<Self, DirectionError> {
        try_direction2(self, to)
    }
}
impl Direction for Vector3 {
    fn direction_to(self, to: Self) -> Self {
        direction3(self, to)
    }

    fn try_direction_to(self, to: Self) -> Result<Self, DirectionError> {
        try_direction3(self, to)
    }
}

impl Vector2 {
    /// Returns normalized vector, or zero vector if this vector is zero.
    ///
    pub fn normalized_or_zero(self) -> Self {
        direction2(Vector2::ZERO, self)
    }
}
impl Vector3 {
    /// Returns normalized vector, or zero vector if this vector is zero.
    ///
    pub fn normalized_or_zero(self) -> Self {
        direction3(Vector3::ZERO, self)
    }
}
