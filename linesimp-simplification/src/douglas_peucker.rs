//! Douglas-Peucker simplification
//!
//! Keeps the endpoints as anchors, finds the interior point farthest from the
//! anchor line and either drops every interior point (farthest distance within
//! tolerance) or keeps it and splits the range in two. Ranges are processed
//! from an explicit work stack, so very long near-collinear inputs cannot
//! exhaust the call stack.
//!
//! Expected O(n log n), worst case O(n^2).

use crate::LineSimplifier;
use linesimp_core::{snapped_perpendicular_distance, validate_tolerance, Point2d, Result};
use log::debug;

/// Douglas-Peucker simplifier; `epsilon` is a perpendicular distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DouglasPeuckerSimplifier;

impl DouglasPeuckerSimplifier {
    pub fn new() -> Self {
        Self
    }
}

impl LineSimplifier for DouglasPeuckerSimplifier {
    fn simplify_indices(&self, points: &[Point2d], epsilon: f64) -> Result<Vec<usize>> {
        validate_tolerance(epsilon)?;
        let kept = douglas_peucker_indices(points, epsilon);
        debug!(
            "douglas-peucker: {} -> {} points (epsilon = {})",
            points.len(),
            kept.len(),
            epsilon
        );
        Ok(kept)
    }
}

/// Interior point of `points[first..=last]` farthest from the anchor line.
///
/// Ties resolve to the smallest index. Points on the line up to rounding
/// noise, or whose distance is NaN, are never selected.
fn farthest_point(points: &[Point2d], first: usize, last: usize) -> Option<(usize, f64)> {
    let (a, b) = (&points[first], &points[last]);
    let mut farthest = None;
    let mut max_dist = 0.0;
    for (i, p) in points.iter().enumerate().take(last).skip(first + 1) {
        let dist = snapped_perpendicular_distance(p, a, b);
        if dist > max_dist {
            max_dist = dist;
            farthest = Some(i);
        }
    }
    farthest.map(|i| (i, max_dist))
}

/// Retained indices, ascending. Expects a validated `epsilon`.
pub(crate) fn douglas_peucker_indices(points: &[Point2d], epsilon: f64) -> Vec<usize> {
    let n = points.len();
    if n < 3 {
        return (0..n).collect();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut ranges = vec![(0, n - 1)];
    while let Some((first, last)) = ranges.pop() {
        if last <= first + 1 {
            continue;
        }
        if let Some((split, dist)) = farthest_point(points, first, last) {
            if dist > epsilon {
                keep[split] = true;
                ranges.push((split, last));
                ranges.push((first, split));
            }
        }
    }

    keep.iter()
        .enumerate()
        .filter_map(|(i, &k)| k.then_some(i))
        .collect()
}
