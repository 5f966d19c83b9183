//! `mathcore::positions` submodule defines traits that provide positions of objects
//! (scene nodes, entities and so on) and helpers that work on those positions.
//!
//! [`CachedPosition`] keeps the last known position of an object, so repeated
//! lookups do not hit the provider.
//!

use crate::mathcore::{
    directions::Direction,
    distances::Distance,
    vectors::{Vector2, Vector3},
};
use std::ops::{Add, Mul, Sub};

/// [`Positioned`] trait defines objects that have a position.
///
/// Points are their own providers.
///
pub trait Positioned {
    /// Type of position (either [`Vector2`] or [`Vector3`]).
    ///
    type Point: Copy;

    /// Returns current position of object.
    ///
    fn position(&self) -> Self::Point;
}
impl Positioned for Vector2 {
    type Point = Vector2;

    fn position(&self) -> Self::Point {
        *self
    }
}
impl Positioned for Vector3 {
    type Point = Vector3;

    fn position(&self) -> Self::Point {
        *self
    }
}

/// Returns unit direction from `from` object to `to` object, or zero vector if they share position.
///
/// # Example
/// ```rust
/// # use ggmath::mathcore::{positions::direction_between, vectors::Vector2};
/// let a: Vector2 = Vector2::new(1.0, 1.0);
/// assert_eq!(direction_between(&a, &Vector2::new(1.0, 9.0)), Vector2::UNIT_Y);
/// assert_eq!(direction_between(&a, &a), Vector2::ZERO);
/// ```
///
pub fn direction_between<A, B>(from: &A, to: &B) -> A::Point
where
    A: Positioned,
    B: Positioned<Point = A::Point>,
    A::Point: Direction,
{
    from.position().direction_to(to.position())
}
/// Returns distance between objects.
///
pub fn distance_between<A, B>(a: &A, b: &B) -> f32
where
    A: Positioned,
    B: Positioned<Point = A::Point>,
    A::Point: Distance,
{
    a.position().distance(b.position())
}
/// Returns `true` if objects are not farther than `range` from each other.
///
pub fn within_range<A, B>(a: &A, b: &B, range: f32) -> bool
where
    A: Positioned,
    B: Positioned<Point = A::Point>,
    A::Point: Distance,
{
    a.position().is_within(b.position(), range)
}

/// [`Translatable`] trait defines properties of translatable objects (objects that can be moved
/// across plane or space).
///
pub trait Translatable: Positioned
where
    Self::Point: Add<Output = Self::Point> + Sub<Output = Self::Point>,
{
    /// Translates object by a given vector.
    ///
    fn translate_on(&mut self, vector: Self::Point);
    /// Translates object to a given point in place.
    ///
    fn translate_to(&mut self, point: Self::Point) {
        let offset: Self::Point = point - self.position();
        self.translate_on(offset);
    }

    /// Moves object towards `target` by at most `max_step`.
    ///
    /// Object never overshoots the target and does not move when it is already there
    /// or when `max_step` is not positive.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::mathcore::{positions::Translatable, vectors::Vector2};
    /// let mut point: Vector2 = Vector2::ZERO;
    /// point.move_towards(Vector2::new(10.0, 0.0), 4.0);
    /// assert_eq!(point, Vector2::new(4.0, 0.0));
    /// point.move_towards(Vector2::new(10.0, 0.0), 100.0);
    /// assert_eq!(point, Vector2::new(10.0, 0.0));
    /// ```
    ///
    fn move_towards(&mut self, target: Self::Point, max_step: f32)
    where
        Self::Point: Direction + Distance + Mul<f32, Output = Self::Point>,
    {
        if max_step.is_nan() || max_step <= 0.0 {
            return;
        }
        let position: Self::Point = self.position();
        if position.is_within(target, max_step) {
            self.translate_to(target);
            return;
        }
        self.translate_on(position.direction_to(target) * max_step);
    }
}
impl Translatable for Vector2 {
    fn translate_on(&mut self, vector: Self::Point) {
        *self += vector;
    }
}
impl Translatable for Vector3 {
    fn translate_on(&mut self, vector: Self::Point) {
        *self += vector;
    }
}

/// [`CachedPosition`] struct stores last position read from a provider.
///
/// Cache re-reads the provider only after [`CachedPosition::invalidate`] was called
/// (or on explicit [`CachedPosition::refresh`]).
///
/// # Example
/// ```rust
/// # use ggmath::mathcore::{positions::CachedPosition, vectors::Vector3};
/// let mut node: Vector3 = Vector3::new(1.0, 2.0, 3.0);
/// let mut cache: CachedPosition<Vector3> = CachedPosition::new(&node);
///
/// node.x = 10.0;
/// assert_eq!(cache.get_or_refresh(&node), Vector3::new(1.0, 2.0, 3.0));
///
/// cache.invalidate();
/// assert_eq!(cache.get_or_refresh(&node), Vector3::new(10.0, 2.0, 3.0));
/// ```
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CachedPosition<P: Copy> {
    /// Last read position.
    ///
    position: P,
    /// Whether provider should be re-read.
    ///
    is_stale: bool,
}
impl<P: Copy> CachedPosition<P> {
    /// Initializes cache with the current position of `provider`.
    ///
    pub fn new(provider: &impl Positioned<Point = P>) -> Self {
        CachedPosition {
            position: provider.position(),
            is_stale: false,
        }
    }

    /// Returns cached position, even if it is stale.
    ///
    pub fn get(&self) -> P {
        self.position
    }
    /// Returns `true` if cache should be refreshed.
    ///
    pub fn is_stale(&self) -> bool {
        self.is_stale
    }

    /// Marks cache as stale.
    ///
    pub fn invalidate(&mut self) {
        self.is_stale = true;
    }
    /// Re-reads position from `provider` and returns it.
    ///
    pub fn refresh(&mut self, provider: &impl Positioned<Point = P>) -> P {
        self.position = provider.position();
        self.is_stale = false;
        self.position
    }
    /// Returns cached position, re-reading `provider` only if cache is stale.
    ///
    pub fn get_or_refresh(&mut self, provider: &impl Positioned<Point = P>) -> P {
        if self.is_stale {
            return self.refresh(provider);
        }
        self.position
    }
}
impl<P: Copy> Positioned for CachedPosition<P> {
    type Point = P;

    fn position(&self) -> Self::Point {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::{
        direction_between, distance_between, within_range, CachedPosition, Positioned,
        Translatable,
    };
    use crate::mathcore::vectors::{Vector2, Vector3};
    use std::cell::Cell;

    /// Scene node that counts position lookups.
    ///
    #[derive(Debug)]
    struct Node {
        /// World position.
        ///
        position: Vector3,
        /// Number of lookups.
        ///
        lookups: Cell<u32>,
    }
    impl Node {
        fn new(position: Vector3) -> Self {
            Node {
                position,
                lookups: Cell::new(0),
            }
        }
    }
    impl Positioned for Node {
        type Point = Vector3;

        fn position(&self) -> Self::Point {
            self.lookups.set(self.lookups.get() + 1);
            self.position
        }
    }
    impl Translatable for Node {
        fn translate_on(&mut self, vector: Self::Point) {
            self.position += vector;
        }
    }

    #[test]
    fn helpers() {
        let a: Node = Node::new(Vector3::new(0.0, 0.0, 0.0));
        let b: Node = Node::new(Vector3::new(0.0, 0.0, -5.0));
        assert_eq!(direction_between(&a, &b), -Vector3::UNIT_Z);
        assert_eq!(direction_between(&a, &Vector3::ZERO), Vector3::ZERO);
        assert_eq!(distance_between(&a, &b), 5.0);
        assert!(within_range(&a, &b, 5.0));
        assert!(!within_range(&a, &b, 4.0));
    }

    #[test]
    fn translation() {
        let mut node: Node = Node::new(Vector3::ONE);
        node.translate_on(Vector3::UNIT_X);
        assert_eq!(node.position, Vector3::new(2.0, 1.0, 1.0));
        node.translate_to(Vector3::ZERO);
        assert_eq!(node.position, Vector3::ZERO);

        node.move_towards(Vector3::new(0.0, 3.0, 4.0), 2.5);
        assert_eq!(node.position, Vector3::new(0.0, 1.5, 2.0));
        node.move_towards(Vector3::new(0.0, 3.0, 4.0), 2.5);
        assert_eq!(node.position, Vector3::new(0.0, 3.0, 4.0));

        node.move_towards(Vector3::new(0.0, 3.0, 4.0), 1.0);
        assert_eq!(node.position, Vector3::new(0.0, 3.0, 4.0));
        node.move_towards(Vector3::ZERO, -1.0);
        node.move_towards(Vector3::ZERO, f32::NAN);
        assert_eq!(node.position, Vector3::new(0.0, 3.0, 4.0));

        let mut point: Vector2 = Vector2::ZERO;
        point.translate_to(Vector2::new(1.0, 1.0));
        assert_eq!(point, Vector2::ONE);
    }

    #[test]
    fn cache() {
        let mut node: Node = Node::new(Vector3::new(1.0, 2.0, 3.0));
        let mut cache: CachedPosition<Vector3> = CachedPosition::new(&node);
        assert_eq!(node.lookups.get(), 1);
        assert!(!cache.is_stale());

        node.translate_on(Vector3::UNIT_Y);
        let lookups: u32 = node.lookups.get();
        assert_eq!(cache.get_or_refresh(&node), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(cache.get(), cache.position());
        assert_eq!(node.lookups.get(), lookups);

        cache.invalidate();
        assert!(cache.is_stale());
        assert_eq!(cache.get_or_refresh(&node), Vector3::new(1.0, 3.0, 3.0));
        assert_eq!(node.lookups.get(), lookups + 1);
        assert!(!cache.is_stale());

        node.translate_to(Vector3::ZERO);
        assert_eq!(cache.refresh(&node), Vector3::ZERO);
        assert_eq!(direction_between(&cache, &Vector3::new(0.0, 7.0, 0.0)), Vector3::UNIT_Y);
    }
}
