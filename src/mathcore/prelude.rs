//! Prelude module: `mathcore::prelude` re-exports all `ggmath::mathcore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use ggmath::mathcore::prelude::*;
//! ```
//!

// re-exports
pub use crate::mathcore::angles::*;
pub use crate::mathcore::directions::*;
pub use crate::mathcore::distances::*;
pub use crate::mathcore::floats::*;
pub use crate::mathcore::positions::*;
pub use crate::mathcore::settings::*;
pub use crate::mathcore::swizzles::*;
pub use crate::mathcore::vectors::*;
