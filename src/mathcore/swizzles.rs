//! `mathcore::swizzles` submodule implements component selection and reordering on vectors.
//!
//! Swizzles are named after the components they take, so `xz` builds [`Vector2`] out of
//! `x` and `z` components of [`Vector3`]. Zero in the name stands for a zeroed component.
//!
//! [`Axes`] bitflags allow selecting components dynamically.
//!

use crate::mathcore::vectors::{Vector2, Vector3};
use bitflags::bitflags;

bitflags!(
    /// [`Axes`] bitflag struct lists axes of vector components.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::mathcore::{swizzles::Axes, vectors::Vector3};
    /// let vector: Vector3 = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(vector.masked(Axes::X | Axes::Z), Vector3::new(1.0, 0.0, 3.0));
    /// assert_eq!(vector.masked(Axes::GROUND), vector.flat());
    /// ```
    ///
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Axes : u8 {
        /// X axis.
        ///
        const X = 1 << 0;
        /// Y axis.
        ///
        const Y = 1 << 1;
        /// Z axis.
        ///
        const Z = 1 << 2;

        /// Ground plane (everything except height).
        ///
        const GROUND = Self::X.bits() | Self::Z.bits();
    }
);

impl Vector2 {
    /// Returns copy of vector.
    ///
    pub fn xy(self) -> Vector2 {
        self
    }
    /// Returns vector with swapped components.
    ///
    pub fn yx(self) -> Vector2 {
        Vector2::new(self.y, self.x)
    }
    /// Returns vector with `x` in both components.
    ///
    pub fn xx(self) -> Vector2 {
        Vector2::splat(self.x)
    }
    /// Returns vector with `y` in both components.
    ///
    pub fn yy(self) -> Vector2 {
        Vector2::splat(self.y)
    }

    /// Extends vector to three dimensions with given `z`.
    ///
    pub fn extend(self, z: f32) -> Vector3 {
        Vector3::new(self.x, self.y, z)
    }
    /// Extends vector to three dimensions with zeroed `z`.
    ///
    pub fn xy0(self) -> Vector3 {
        self.extend(0.0)
    }
    /// Lifts vector to the ground plane: `y` becomes `z`, height is zeroed.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::mathcore::vectors::{Vector2, Vector3};
    /// assert_eq!(Vector2::new(1.0, 2.0).x0y(), Vector3::new(1.0, 0.0, 2.0));
    /// assert_eq!(Vector3::new(1.0, 5.0, 2.0).xz().x0y(), Vector3::new(1.0, 5.0, 2.0).flat());
    /// ```
    ///
    pub fn x0y(self) -> Vector3 {
        Vector3::new(self.x, 0.0, self.y)
    }

    /// Returns vector with replaced `x`.
    ///
    pub fn with_x(self, x: f32) -> Vector2 {
        Vector2 { x, ..self }
    }
    /// Returns vector with replaced `y`.
    ///
    pub fn with_y(self, y: f32) -> Vector2 {
        Vector2 { y, ..self }
    }

    /// Returns vector rotated by 90 degrees counterclockwise.
    ///
    pub fn perpendicular(self) -> Vector2 {
        Vector2::new(-self.y, self.x)
    }
}

impl Vector3 {
    /// Drops `z` component.
    ///
    pub fn xy(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
    /// Drops `y` component (projection on the ground plane).
    ///
    pub fn xz(self) -> Vector2 {
        Vector2::new(self.x, self.z)
    }
    /// Drops `x` component.
    ///
    pub fn yz(self) -> Vector2 {
        Vector2::new(self.y, self.z)
    }
    /// Drops `z` component and swaps the rest.
    ///
    pub fn yx(self) -> Vector2 {
        Vector2::new(self.y, self.x)
    }
    /// Drops `y` component and swaps the rest.
    ///
    pub fn zx(self) -> Vector2 {
        Vector2::new(self.z, self.x)
    }
    /// Drops `x` component and swaps the rest.
    ///
    pub fn zy(self) -> Vector2 {
        Vector2::new(self.z, self.y)
    }
    /// Alias for [`Vector3::xy`].
    ///
    pub fn truncate(self) -> Vector2 {
        self.xy()
    }

    /// Returns copy of vector.
    ///
    pub fn xyz(self) -> Vector3 {
        self
    }
    /// Swaps `y` and `z`.
    ///
    pub fn xzy(self) -> Vector3 {
        Vector3::new(self.x, self.z, self.y)
    }
    /// Swaps `x` and `y`.
    ///
    pub fn yxz(self) -> Vector3 {
        Vector3::new(self.y, self.x, self.z)
    }
    /// Rotates components to the left.
    ///
    pub fn yzx(self) -> Vector3 {
        Vector3::new(self.y, self.z, self.x)
    }
    /// Rotates components to the right.
    ///
    pub fn zxy(self) -> Vector3 {
        Vector3::new(self.z, self.x, self.y)
    }
    /// Swaps `x` and `z`.
    ///
    pub fn zyx(self) -> Vector3 {
        Vector3::new(self.z, self.y, self.x)
    }

    /// Returns vector with replaced `x`.
    ///
    pub fn with_x(self, x: f32) -> Vector3 {
        Vector3 { x, ..self }
    }
    /// Returns vector with replaced `y`.
    ///
    pub fn with_y(self, y: f32) -> Vector3 {
        Vector3 { y, ..self }
    }
    /// Returns vector with replaced `z`.
    ///
    pub fn with_z(self, z: f32) -> Vector3 {
        Vector3 { z, ..self }
    }

    /// Returns vector with zeroed height (`y`).
    ///
    pub fn flat(self) -> Vector3 {
        self.with_y(0.0)
    }
    /// Returns vector where components that are not in `axes` are zeroed.
    ///
    pub fn masked(self, axes: Axes) -> Vector3 {
        let keep = |axis: Axes, value: f32| if axes.contains(axis) { value } else { 0.0 };
        Vector3::new(
            keep(Axes::X, self.x),
            keep(Axes::Y, self.y),
            keep(Axes::Z, self.z),
        )
    }
    /// Returns sum of components that are in `axes`.
    ///
    /// For a single axis this is just the component value.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::mathcore::{swizzles::Axes, vectors::Vector3};
    /// let vector: Vector3 = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(vector.component(Axes::Y), 2.0);
    /// assert_eq!(vector.component(Axes::GROUND), 4.0);
    /// ```
    ///
    pub fn component(self, axes: Axes) -> f32 {
        let masked: Vector3 = self.masked(axes);
        masked.x + masked.y + masked.z
    }
}
