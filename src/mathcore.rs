//! `ggmath::mathcore` module is a core that implements all vector helpers of the crate.
//!
//! # Prelude
//! `ggmath::mathcore` prelude can be imported with `use ggmath::mathcore::prelude::*`.
//!
//! # Model
//! Vectors represent both points and directions on a plane or in space.
//! Most of the functionality is plain component arithmetic: constructors, swizzles,
//! distances, angles and positions of scene objects.
//!
//! The only piece with real numeric policy is [`directions`] -
//! unit direction between two points, where coincident points give the zero vector
//! instead of NaN.
//!

// submodules
pub mod angles;
pub mod directions;
pub mod distances;
pub mod floats;
pub mod positions;
pub mod settings;
pub mod swizzles;
pub mod vectors;

// prelude
pub mod prelude;
