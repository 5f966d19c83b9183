//! `mathcore::vectors` submodule implements two- and three-dimensional vectors which can be used
//! to represent points, directions, speed, acceleration and other things.
//!
//! [`Point2`] and [`Point3`] aliases are used where a vector denotes a location.
//!

use crate::mathcore::floats::{almost_equal, almost_equal_with, FloatOperations};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// Common functionality is generated by macros, since both vectors are plain structs with named
// fields and sharing it through a trait would need `generic_const_exprs` for `[f32; N]` returns.
//
/// [`impl_vector`] macro implements all common associated functions and methods on vectors.
///
/// This macro depends on manual implementation of `elements` and `set` functions and
/// `From<[f32; $size]>` trait implementation.
///
macro_rules! impl_vector {
    ($struct:ident, $size:expr) => {
        impl $struct {
            /// Vector with all components set to zero.
            ///
            pub const ZERO: Self = Self::splat(0.0);
            /// Vector with all components set to one.
            ///
            pub const ONE: Self = Self::splat(1.0);

            /// Initializes vector with zeroes.
            ///
            pub const fn zero() -> Self {
                Self::ZERO
            }
            /// Initializes vector with ones.
            ///
            pub const fn one() -> Self {
                Self::ONE
            }

            /// Applies function to every vector element and returns changed vector.
            ///
            pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
                Self::from(self.elements().map(f))
            }
            /// Combines vectors by applying function on their elements.
            ///
            pub fn combine(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
                let (e1, e2): ([f32; $size], [f32; $size]) = (self.elements(), other.elements());
                let mut elements: [f32; $size] = [0.0; $size];
                for i in 0..$size {
                    elements[i] = f(e1[i], e2[i]);
                }
                Self::from(elements)
            }

            /// Returns squared magnitude of a vector.
            ///
            pub fn sqr_magnitude(&self) -> f32 {
                self.dot_product(*self)
            }
            /// Returns magnitude of vector (vector length).
            ///
            pub fn magnitude(&self) -> f32 {
                self.sqr_magnitude().sqrt()
            }

            /// Returns vector that is made from the largest components of two vectors.
            ///
            pub fn max(self, other: Self) -> Self {
                self.combine(other, f32::max)
            }
            /// Returns vector that is made from the smallest components of two vectors.
            ///
            pub fn min(self, other: Self) -> Self {
                self.combine(other, f32::min)
            }

            /// Multiplies two vectors component-wise.
            ///
            pub fn scale(self, other: Self) -> Self {
                self.combine(other, |a, b| a * b)
            }

            /// Performs dot product operation on two vectors.
            ///
            pub fn dot_product(self, other: Self) -> f32 {
                self.elements()
                    .iter()
                    .zip(other.elements().iter())
                    .fold(0.0, |acc, (a, b)| acc + a * b)
            }

            /// Returns new vector that is normalized by plain division.
            ///
            /// Zero vector produces NaN components, use `normalized_or_zero` from
            /// [`directions`](crate::mathcore::directions) when input may be degenerate.
            ///
            pub fn normalized(self) -> Self {
                self / self.magnitude()
            }
            /// Returns new vector, which magnitude is clamped to `max_magnitude`.
            ///
            /// Zero vector is returned as is.
            ///
            pub fn clamped_magnitude(self, max_magnitude: f32) -> Self {
                let magnitude: f32 = self.magnitude();
                if magnitude <= max_magnitude || magnitude == 0.0 {
                    return self;
                }
                self * (max_magnitude / magnitude)
            }

            /// Linearly interpolates from `self` to `other` by `t`.
            ///
            /// `t` will be clamped between [0.0; 1.0].
            ///
            pub fn lerp(self, other: Self, t: f32) -> Self {
                let t: f32 = t.clamp(0.0, 1.0);
                self * (1.0 - t) + other * t
            }

            /// Returns `true` if every component is finite.
            ///
            pub fn is_finite(&self) -> bool {
                self.elements().iter().all(|elem| elem.is_finite())
            }
            /// Returns `true` if every component is exactly zero.
            ///
            pub fn is_zero(&self) -> bool {
                self.elements().iter().all(|elem| *elem == 0.0)
            }

            /// Compares vectors component-wise with given tolerance.
            ///
            pub fn approx_eq(&self, other: Self, epsilon: f32) -> bool {
                self.elements()
                    .iter()
                    .zip(other.elements().iter())
                    .all(|(&a, &b)| almost_equal_with(a, b, epsilon))
            }
        }
        impl FloatOperations for $struct {
            /// Constructs new vector by rounding every vector component to given amount of digits after floating point.
            ///
            fn round_to(self, digits: i32) -> Self {
                self.map(|elem| elem.round_to(digits))
            }
            /// Constructs new vector by snapping every vector component that is almost a multiple of `10^-digits`.
            ///
            fn snap_to(self, digits: i32) -> Self {
                self.map(|elem| elem.snap_to(digits))
            }
        }
        impl PartialEq for $struct {
            fn eq(&self, other: &Self) -> bool {
                self.elements()
                    .iter()
                    .zip(other.elements().iter())
                    .all(|(&a, &b)| almost_equal(a, b))
            }
        }
        impl Default for $struct {
            fn default() -> Self {
                Self::ZERO
            }
        }
        impl From<$struct> for [f32; $size] {
            fn from(value: $struct) -> Self {
                value.elements()
            }
        }
    };
}

/// [`impl_vector_vector_operations`] macro implements vector-vector operations for vector.
///
macro_rules! impl_vector_vector_operations {
    ($struct_name:ident, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<Self> for $struct_name {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                self.combine(rhs, |a, b| a $op b)
            }
        }
    )+}
}
/// [`impl_vector_scalar_operations`] macro implements vector-scalar operations for vector.
///
macro_rules! impl_vector_scalar_operations {
    ($struct_name:ident, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<f32> for $struct_name {
            type Output = Self;

            fn $method(self, rhs: f32) -> Self::Output {
                self.map(|a| a $op rhs)
            }
        }
    )+}
}
/// [`impl_vector_assign_operations`] macro implements `...Assign` trait for vector.
///
macro_rules! impl_vector_assign_operations {
    ($struct_name:ident, $rhs:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $struct_name {
            fn $method(&mut self, rhs: $rhs) {
                *self = *self $op rhs;
            }
        }
    )+}
}
/// [`impl_vector_operations`] macro implements all operation traits for vector.
///
macro_rules! impl_vector_operations {
    ($struct_name:ident) => {
        impl Neg for $struct_name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                self.map(|a| -a)
            }
        }
        impl Mul<$struct_name> for f32 {
            type Output = $struct_name;

            fn mul(self, rhs: $struct_name) -> Self::Output {
                rhs * self
            }
        }
        impl_vector_vector_operations!($struct_name, ((Add, add, +),
                                                      (Sub, sub, -),));
        impl_vector_assign_operations!($struct_name, Self, ((AddAssign, add_assign, +),
                                                            (SubAssign, sub_assign, -),));
        impl_vector_scalar_operations!($struct_name, ((Add, add, +),
                                                      (Sub, sub, -),
                                                      (Mul, mul, *),
                                                      (Div, div, /),));
        impl_vector_assign_operations!($struct_name, f32, ((AddAssign, add_assign, +),
                                                           (SubAssign, sub_assign, -),
                                                           (MulAssign, mul_assign, *),
                                                           (DivAssign, div_assign, /),));
    };
}

/// [`Vector2`] struct represents two-dimensional vector and two-dimensional point with `f32` coordinates.
///
/// # Example
/// ```rust
/// # use ggmath::mathcore::vectors::Vector2;
/// let vector: Vector2 = Vector2::new(3.0, 4.0);
/// assert_eq!(vector.magnitude(), 5.0);
/// assert_eq!(vector * 2.0, Vector2::from([6.0, 8.0]));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct Vector2 {
    /// X component of vector.
    ///
    pub x: f32,

    /// Y component of vector.
    ///
    pub y: f32,
}
impl Vector2 {
    /// Unit vector pointing along the positive X axis.
    ///
    pub const UNIT_X: Self = Self::new(1.0, 0.0);
    /// Unit vector pointing along the positive Y axis.
    ///
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Initializes vector from components.
    ///
    pub const fn new(x: f32, y: f32) -> Self {
        Vector2 { x, y }
    }
    /// Initializes vector with all components set to `value`.
    ///
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value)
    }

    /// Returns elements of vector.
    ///
    pub fn elements(&self) -> [f32; 2] {
        [self.x, self.y]
    }
    /// Sets from values to elements of vector.
    ///
    pub fn set(&mut self, elements: [f32; 2]) {
        self.x = elements[0];
        self.y = elements[1];
    }

    /// Returns scalar that represents cross product of two-dimensional vectors.
    ///
    pub fn cross_product(self, other: Self) -> f32 {
        (self.x * other.y) - (self.y * other.x)
    }
}
impl_vector!(Vector2, 2);
impl_vector_operations!(Vector2);
impl From<[f32; 2]> for Vector2 {
    fn from(arr: [f32; 2]) -> Self {
        Vector2::new(arr[0], arr[1])
    }
}
impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Vector2::new(x, y)
    }
}

/// Type alias for [`Vector2`] that is used for locations.
///
pub type Point2 = Vector2;

/// [`Vector3`] struct represents three-dimensional vector and three-dimensional point with `f32` coordinates.
///
/// `y` axis is treated as height by planar helpers.
///
/// # Example
/// ```rust
/// # use ggmath::mathcore::vectors::Vector3;
/// let vector: Vector3 = Vector3::new(1.0, 2.0, 2.0);
/// assert_eq!(vector.magnitude(), 3.0);
/// assert_eq!(Vector3::UNIT_X.cross_product(Vector3::UNIT_Y), Vector3::UNIT_Z);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct Vector3 {
    /// X component of vector.
    ///
    pub x: f32,

    /// Y component of vector.
    ///
    pub y: f32,

    /// Z component of vector.
    ///
    pub z: f32,
}
impl Vector3 {
    /// Unit vector pointing along the positive X axis.
    ///
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector pointing along the positive Y axis.
    ///
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector pointing along the positive Z axis.
    ///
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Initializes vector from components.
    ///
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3 { x, y, z }
    }
    /// Initializes vector with all components set to `value`.
    ///
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Returns elements of vector.
    ///
    pub fn elements(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
    /// Sets from values to elements of vector.
    ///
    pub fn set(&mut self, elements: [f32; 3]) {
        self.x = elements[0];
        self.y = elements[1];
        self.z = elements[2];
    }

    /// Returns vector that is perpendicular to both vectors (right-handed).
    ///
    pub fn cross_product(self, other: Self) -> Self {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}
impl_vector!(Vector3, 3);
impl_vector_operations!(Vector3);
impl From<[f32; 3]> for Vector3 {
    fn from(arr: [f32; 3]) -> Self {
        Vector3::new(arr[0], arr[1], arr[2])
    }
}
impl From<(f32, f32, f32)> for Vector3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Vector3::new(x, y, z)
    }
}

/// Type alias for [`Vector3`] that is used for locations.
///
pub type Point3 = Vector3;

#[cfg(test)]
mod tests {
    use crate::mathcore::floats::{almost_equal, FloatOperations};

    #[test]
    fn vector2() {
        use super::Vector2;

        assert_eq!(Vector2::zero(), Vector2 { x: 0.0, y: 0.0 });
        assert_eq!(Vector2::one(), Vector2 { x: 1.0, y: 1.0 });
        assert_eq!(Vector2::default(), Vector2::ZERO);
        assert_eq!(Vector2::from((1.0, 2.0)), Vector2::new(1.0, 2.0));

        let vec1: Vector2 = Vector2::from([3.0, 4.0]);
        assert_eq!(vec1.elements(), [3.0, 4.0]);
        assert_eq!(<[f32; 2]>::from(vec1), [3.0, 4.0]);
        assert_eq!(vec1.sqr_magnitude(), 25.0);

        let vec2: Vector2 = vec1.scale(Vector2::from([4.0, 3.0]));
        assert_eq!(vec2.elements(), [12.0, 12.0]);

        let mut vec3: Vector2 = Vector2::from([5.0, 2.0]).max(Vector2::from([3.0, 6.0]));
        assert_eq!(vec3, Vector2::from([5.0, 6.0]));

        let mut vec4: Vector2 = Vector2::from([5.0, 2.0]).min(Vector2::from([3.0, 6.0]));
        assert_eq!(vec4, Vector2::from([3.0, 2.0]));

        assert_eq!(vec1.map(|n| n * 2.0), Vector2::from([6.0, 8.0]));
        assert_eq!(
            vec1.combine(vec2, |n1, n2| n1 * n2),
            Vector2::from([36.0, 48.0])
        );

        assert_eq!(vec1 + vec2, Vector2::from([15.0, 16.0]));
        assert_eq!(vec1 - vec2, Vector2::from([-9.0, -8.0]));

        assert_eq!(vec1 + 2.0, Vector2::from([5.0, 6.0]));
        assert_eq!(vec1 - 3.0, Vector2::from([0.0, 1.0]));
        assert_eq!(vec2 * 2.0, Vector2::from([24.0, 24.0]));
        assert_eq!(2.0 * vec2, Vector2::from([24.0, 24.0]));
        assert_eq!(vec2 / 3.0, Vector2::from([4.0, 4.0]));

        vec3 += vec1;
        assert_eq!(vec3.elements(), [8.0, 10.0]);
        vec4 -= vec2;
        assert_eq!(vec4.elements(), [-9.0, -10.0]);

        vec3 += 2.0;
        assert_eq!(vec3.elements(), [10.0, 12.0]);
        vec3 -= 3.0;
        assert_eq!(vec3.elements(), [7.0, 9.0]);
        vec4 *= 2.0;
        assert_eq!(vec4.elements(), [-18.0, -20.0]);
        vec4 /= 4.0;
        assert_eq!(vec4.elements(), [-4.5, -5.0]);

        assert_eq!(-vec4, Vector2::from([4.5, 5.0]));

        assert_eq!(
            Vector2::from([3.0, 4.0]).dot_product(Vector2::from([5.0, 3.0])),
            27.0
        );
        assert_eq!(
            Vector2::from([-3.0, 2.0]).cross_product(Vector2::from([1.0, 2.0])),
            -8.0
        );

        let mut vec5: Vector2 = Vector2::ZERO;
        vec5.set([7.0, -1.0]);
        assert_eq!(vec5, Vector2::new(7.0, -1.0));
    }

    #[test]
    fn vector3() {
        use super::Vector3;

        assert_eq!(Vector3::splat(2.0), Vector3::new(2.0, 2.0, 2.0));
        assert_eq!(Vector3::from((1.0, 2.0, 3.0)).elements(), [1.0, 2.0, 3.0]);

        let vec1: Vector3 = Vector3::new(1.0, 2.0, 3.0);
        let vec2: Vector3 = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(vec1 + vec2, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(vec2 - vec1, Vector3::splat(3.0));
        assert_eq!(vec1.dot_product(vec2), 32.0);
        assert_eq!(vec1.cross_product(vec2), Vector3::new(-3.0, 6.0, -3.0));
        assert_eq!(Vector3::UNIT_Y.cross_product(Vector3::UNIT_Z), Vector3::UNIT_X);

        let mut vec3: Vector3 = vec1;
        vec3 *= 3.0;
        vec3 -= vec1;
        assert_eq!(vec3.elements(), [2.0, 4.0, 6.0]);
        assert_eq!(-vec3, Vector3::new(-2.0, -4.0, -6.0));

        let mut vec4: Vector3 = Vector3::ONE;
        vec4.set([0.0, -1.0, 0.5]);
        assert_eq!(vec4, Vector3::new(0.0, -1.0, 0.5));
    }

    #[test]
    fn vectorf() {
        use super::{Vector2, Vector3};

        let vec1: Vector2 = Vector2::from([3.0, 4.0]);
        assert_eq!(vec1.magnitude(), 5.0);
        assert_eq!(vec1.normalized().elements(), [0.6, 0.8]);
        assert!(Vector2::ZERO.normalized().x.is_nan());

        assert!(almost_equal(vec1.clamped_magnitude(0.5).magnitude(), 0.5));
        assert_eq!(vec1.clamped_magnitude(10.0), vec1);
        assert_eq!(Vector2::ZERO.clamped_magnitude(1.0), Vector2::ZERO);

        let vec2: Vector2 = Vector2::from([3.0_f32.sqrt(), 3.3]).round_to(0);
        assert_eq!(vec2.elements(), [2.0, 3.0]);

        let vec3: Vector2 = Vector2::from([0.00001, 2.0]).snap_to(0);
        assert_eq!(vec3.elements(), [0.0, 2.0]);

        let vec4: Vector2 = Vector2::from([0.0, 2.0]).lerp(Vector2::from([2.0, 0.0]), 0.5);
        assert_eq!(vec4, Vector2::ONE);
        assert_eq!(Vector2::ZERO.lerp(Vector2::ONE, 0.0), Vector2::ZERO);
        assert_eq!(Vector2::ZERO.lerp(Vector2::ONE, 5.0), Vector2::ONE);

        assert!(Vector3::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Vector3::new(1.0, f32::NAN, 3.0).is_finite());
        assert!(!Vector3::new(f32::INFINITY, 0.0, 0.0).is_finite());
        assert!(Vector3::ZERO.is_zero());
        assert!(!Vector3::new(0.0, 1e-30, 0.0).is_zero());

        assert!(Vector3::ONE.approx_eq(Vector3::splat(1.05), 0.1));
        assert!(!Vector3::ONE.approx_eq(Vector3::splat(1.05), 0.01));
        assert_ne!(Vector3::ONE, Vector3::splat(1.001));
    }
}
