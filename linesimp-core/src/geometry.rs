//! Geometry primitives shared by the simplification algorithms
//!
//! All functions are pure and total over finite input. NaN or infinite
//! coordinates are not rejected; they propagate into the result.

use crate::point::Point2d;

/// Relative error, in units of the largest coordinate magnitude involved,
/// within which a distance or area is indistinguishable from rounding noise.
pub const ROUNDING_TOLERANCE: f64 = 16.0 * f64::EPSILON;

/// Squared Euclidean distance between two points
#[inline]
pub fn distance_squared(a: &Point2d, b: &Point2d) -> f64 {
    (b - a).norm_squared()
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: &Point2d, b: &Point2d) -> f64 {
    (b - a).norm()
}

/// Z component of the cross product `(b - a) x (c - a)`.
///
/// Positive when `a, b, c` turn counter-clockwise.
#[inline]
pub fn cross(a: &Point2d, b: &Point2d, c: &Point2d) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Distance from `p` to the infinite line through `a` and `b`.
///
/// If `a` and `b` coincide the line is undefined and the distance from `p`
/// to `a` is returned instead.
pub fn perpendicular_distance(p: &Point2d, a: &Point2d, b: &Point2d) -> f64 {
    let base = distance(a, b);
    if base == 0.0 {
        return distance(p, a);
    }
    cross(a, b, p).abs() / base
}

/// Largest absolute coordinate of a point triple; NaN components are skipped
fn magnitude(a: &Point2d, b: &Point2d, c: &Point2d) -> f64 {
    [a, b, c]
        .iter()
        .fold(0.0_f64, |m, p| m.max(p.x.abs()).max(p.y.abs()))
}

/// [`perpendicular_distance`] with rounding noise reported as `0.0`.
///
/// Points generated along a straight line rarely land exactly on it in
/// floating point. A distance within [`ROUNDING_TOLERANCE`] of the coordinate
/// magnitude counts as zero. Non-finite input is returned unchanged.
pub fn snapped_perpendicular_distance(p: &Point2d, a: &Point2d, b: &Point2d) -> f64 {
    let dist = perpendicular_distance(p, a, b);
    let noise = ROUNDING_TOLERANCE * magnitude(p, a, b);
    if noise.is_finite() && dist <= noise {
        0.0
    } else {
        dist
    }
}

/// Signed area of the triangle `a, b, c` (positive when counter-clockwise)
#[inline]
pub fn signed_area(a: &Point2d, b: &Point2d, c: &Point2d) -> f64 {
    cross(a, b, c) * 0.5
}

/// Unsigned area of the triangle `a, b, c`
#[inline]
pub fn triangle_area(a: &Point2d, b: &Point2d, c: &Point2d) -> f64 {
    signed_area(a, b, c).abs()
}

/// [`triangle_area`] with rounding noise reported as `0.0`.
///
/// The noise bound is the distance bound of [`snapped_perpendicular_distance`]
/// scaled by the longest side.
pub fn snapped_triangle_area(a: &Point2d, b: &Point2d, c: &Point2d) -> f64 {
    let area = triangle_area(a, b, c);
    let longest = distance(a, b).max(distance(b, c)).max(distance(a, c));
    let noise = ROUNDING_TOLERANCE * magnitude(a, b, c) * longest;
    if noise.is_finite() && area <= noise {
        0.0
    } else {
        area
    }
}

/// Turn direction of an ordered point triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

/// Orientation of the triple `a, b, c`
pub fn orientation(a: &Point2d, b: &Point2d, c: &Point2d) -> Orientation {
    let turn = cross(a, b, c);
    if turn > 0.0 {
        Orientation::CounterClockwise
    } else if turn < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// `p` lies within the bounding box of segment `a, b` (used for collinear cases)
fn within_bounds(p: &Point2d, a: &Point2d, b: &Point2d) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Whether the closed segments `p1-p2` and `q1-q2` share at least one point.
///
/// Touching endpoints and collinear overlap both count as intersecting.
pub fn segments_intersect(p1: &Point2d, p2: &Point2d, q1: &Point2d, q2: &Point2d) -> bool {
    let o1 = orientation(p1, p2, q1);
    let o2 = orientation(p1, p2, q2);
    let o3 = orientation(q1, q2, p1);
    let o4 = orientation(q1, q2, p2);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && within_bounds(q1, p1, p2))
        || (o2 == Orientation::Collinear && within_bounds(q2, p1, p2))
        || (o3 == Orientation::Collinear && within_bounds(p1, q1, q2))
        || (o4 == Orientation::Collinear && within_bounds(p2, q1, q2))
}
