//! Point types and related functionality

use nalgebra::{Point2, Vector2};

/// A 2D point with double precision coordinates
pub type Point2d = Point2<f64>;

/// A 2D vector with double precision components
pub type Vector2d = Vector2<f64>;

/// Build a point from an `[x, y]` pair.
#[inline]
pub fn point_from_pair(pair: [f64; 2]) -> Point2d {
    Point2d::new(pair[0], pair[1])
}

/// Flatten a point back into an `[x, y]` pair.
#[inline]
pub fn pair_from_point(point: &Point2d) -> [f64; 2] {
    [point.x, point.y]
}
