//! Visvalingam-Whyatt simplification
//!
//! Every interior point is ranked by its effective area: the area of the
//! triangle it forms with its current neighbours. The point with the smallest
//! area is removed while that area is within tolerance, its neighbours are
//! relinked and their areas recomputed from the new neighbourhood.
//!
//! Recomputed areas are stored exactly as computed. A neighbour whose area
//! grows after a removal is ranked by the larger value and is not carried
//! along by the area of the point that was just removed.

use crate::heap::IndexedMinHeap;
use crate::topology::TopologyGuard;
use crate::LineSimplifier;
use linesimp_core::{snapped_triangle_area, validate_tolerance, Point2d, Result};
use log::{debug, trace};

const NONE: usize = usize::MAX;

/// Decides whether a candidate removal may go ahead.
///
/// `prev` and `next` are the current neighbours of `index`; removing it
/// replaces the segments `prev-index` and `index-next` with `prev-next`.
pub(crate) trait RemovalGuard {
    fn allows(&self, points: &[Point2d], prev: usize, index: usize, next: usize) -> bool;

    /// Called after `index` has been unlinked.
    fn removed(&mut self, points: &[Point2d], prev: usize, index: usize, next: usize);
}

/// Guard that accepts every removal.
pub(crate) struct Unguarded;

impl RemovalGuard for Unguarded {
    fn allows(&self, _: &[Point2d], _: usize, _: usize, _: usize) -> bool {
        true
    }

    fn removed(&mut self, _: &[Point2d], _: usize, _: usize, _: usize) {}
}

/// NaN effective areas rank after every finite key so they never block the queue.
#[inline]
fn rank(key: f64) -> f64 {
    if key.is_nan() {
        f64::INFINITY
    } else {
        key
    }
}

/// Least-area elimination shared by all Visvalingam variants.
///
/// `effective` maps `(index, triangle area)` to the key compared against
/// `epsilon`; areas within rounding noise of zero are passed as `0.0`. Returns the retained indices in ascending order.
pub(crate) fn eliminate<F, G>(
    points: &[Point2d],
    epsilon: f64,
    effective: F,
    guard: &mut G,
) -> Vec<usize>
where
    F: Fn(usize, f64) -> f64,
    G: RemovalGuard,
{
    let n = points.len();
    if n < 3 {
        return (0..n).collect();
    }

    let mut prev: Vec<usize> = (0..n).map(|i| if i == 0 { NONE } else { i - 1 }).collect();
    let mut next: Vec<usize> = (0..n).map(|i| if i == n - 1 { NONE } else { i + 1 }).collect();
    let mut removed = vec![false; n];

    let mut queue = IndexedMinHeap::with_capacity(n);
    for i in 1..n - 1 {
        let area = snapped_triangle_area(&points[i - 1], &points[i], &points[i + 1]);
        queue.push(i, rank(effective(i, area)));
    }

    while let Some((index, key)) = queue.peek() {
        if key > epsilon {
            break;
        }
        queue.pop();

        let (p, nx) = (prev[index], next[index]);
        if !guard.allows(points, p, index, nx) {
            // Stays in the path; re-queued if a neighbour is removed later
            trace!("visvalingam: removal of point {} vetoed", index);
            continue;
        }

        removed[index] = true;
        next[p] = nx;
        prev[nx] = p;
        guard.removed(points, p, index, nx);

        for j in [p, nx] {
            if prev[j] == NONE || next[j] == NONE {
                continue;
            }
            let area = snapped_triangle_area(&points[prev[j]], &points[j], &points[next[j]]);
            queue.update(j, rank(effective(j, area)));
        }
    }

    (0..n).filter(|&i| !removed[i]).collect()
}

/// Visvalingam-Whyatt simplifier; `epsilon` is an effective area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisvalingamSimplifier {
    /// Skip removals that would make the path intersect itself
    pub preserve_topology: bool,
}

impl VisvalingamSimplifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(preserve_topology: bool) -> Self {
        Self { preserve_topology }
    }

    /// Variant that never introduces a self-intersection
    pub fn preserving() -> Self {
        Self::with_params(true)
    }
}

impl LineSimplifier for VisvalingamSimplifier {
    fn simplify_indices(&self, points: &[Point2d], epsilon: f64) -> Result<Vec<usize>> {
        validate_tolerance(epsilon)?;
        let kept = if self.preserve_topology && points.len() >= 3 {
            eliminate(points, epsilon, |_, area| area, &mut TopologyGuard::new(points))
        } else {
            eliminate(points, epsilon, |_, area| area, &mut Unguarded)
        };
        debug!(
            "visvalingam-whyatt{}: {} -> {} points (epsilon = {})",
            if self.preserve_topology { " (preserving)" } else { "" },
            points.len(),
            kept.len(),
            epsilon
        );
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linesimp_core::{Error, Polyline};

    fn line(coords: &[[f64; 2]]) -> Polyline {
        Polyline::from(coords)
    }

    #[test]
    fn test_creation() {
        assert!(!VisvalingamSimplifier::new().preserve_topology);
        assert!(VisvalingamSimplifier::preserving().preserve_topology);
        assert_eq!(
            VisvalingamSimplifier::with_params(true),
            VisvalingamSimplifier::preserving()
        );
    }

    #[test]
    fn test_short_inputs_unchanged() {
        let s = VisvalingamSimplifier::new();
        assert!(s.simplify(&Polyline::new(), 5.0).unwrap().is_empty());
        let single = line(&[[1.0, 2.0]]);
        assert_eq!(s.simplify(&single, 5.0).unwrap(), single);
        let pair = line(&[[0.0, 0.0], [10.0, 10.0]]);
        assert_eq!(s.simplify(&pair, 5.0).unwrap(), pair);
    }

    #[test]
    fn test_straight_line_reduces_to_endpoints() {
        let input = line(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0], [4.0, 0.0]]);
        let result = VisvalingamSimplifier::new().simplify(&input, 0.1).unwrap();
        assert_eq!(result, line(&[[0.0, 0.0], [4.0, 0.0]]));
    }

    #[test]
    fn test_zero_tolerance_removes_only_zero_area_points() {
        let input = line(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 2.0], [4.0, 0.0]]);
        let result = VisvalingamSimplifier::new().simplify(&input, 0.0).unwrap();
        assert_eq!(result, line(&[[0.0, 0.0], [2.0, 0.0], [3.0, 2.0], [4.0, 0.0]]));
    }

    #[test]
    fn test_inexact_collinear_points_reduce_to_endpoints() {
        let lines: [(f64, f64, f64); 3] = [(0.1, 0.3, 0.7), (0.37, 1.0 / 3.0, -1.25), (0.01, -7.1, 3.3)];
        for (step, slope, offset) in lines {
            let input: Polyline = (0..100)
                .map(|i| {
                    let x = i as f64 * step;
                    Point2d::new(x, slope * x + offset)
                })
                .collect();
            for simplifier in [VisvalingamSimplifier::new(), VisvalingamSimplifier::preserving()] {
                let kept = simplifier.simplify_indices(input.as_slice(), 0.0).unwrap();
                assert_eq!(kept, vec![0, 99], "step {step}, slope {slope}");
            }
        }
    }

    #[test]
    fn test_removes_small_area_keeps_large() {
        let input = line(&[[0.0, 0.0], [1.0, 0.1], [2.0, 0.0], [3.0, 5.0], [4.0, 0.0]]);
        // Areas: point 1 = 0.1, point 2 = 2.55, point 3 = 5.0
        let kept = VisvalingamSimplifier::new()
            .simplify_indices(input.as_slice(), 1.0)
            .unwrap();
        assert_eq!(kept, vec![0, 2, 3, 4]);
    }

    #[test]
    fn test_recomputed_area_is_not_clamped() {
        // Removing point 1 (area 0.5) gives point 2 a new area of 1.5, above the
        // tolerance of 1.0, so point 2 must survive
        let input = line(&[[0.0, 0.0], [1.0, 1.0], [2.0, 1.0], [3.0, 0.0]]);
        let kept = VisvalingamSimplifier::new()
            .simplify_indices(input.as_slice(), 1.0)
            .unwrap();
        assert_eq!(kept, vec![0, 2, 3]);
    }

    #[test]
    fn test_tie_break_removes_earliest_first() {
        // Interior points 1 and 2 both have area 0.5; removing either raises the
        // other to 1.5, so only the first one goes
        let input = line(&[[0.0, 0.0], [1.0, 1.0], [2.0, 1.0], [3.0, 0.0]]);
        let kept = VisvalingamSimplifier::new()
            .simplify_indices(input.as_slice(), 0.75)
            .unwrap();
        assert_eq!(kept, vec![0, 2, 3]);
    }

    #[test]
    fn test_endpoints_never_removed() {
        let input = line(&[[0.0, 0.0], [1.0, 3.0], [2.0, -3.0], [3.0, 3.0], [4.0, 0.0]]);
        let result = VisvalingamSimplifier::new().simplify(&input, 1e9).unwrap();
        assert_eq!(result, line(&[[0.0, 0.0], [4.0, 0.0]]));
    }

    #[test]
    fn test_preserves_order() {
        let input = line(&[[0.0, 0.0], [1.0, 2.0], [2.0, 0.0], [3.0, 3.0], [4.0, 0.0]]);
        let result = VisvalingamSimplifier::new().simplify(&input, 0.1).unwrap();
        for w in result.as_slice().windows(2) {
            assert!(w[1].x > w[0].x);
        }
    }

    #[test]
    fn test_nan_point_is_kept() {
        let input = line(&[[0.0, 0.0], [1.0, f64::NAN], [2.0, 0.0], [3.0, 0.0]]);
        let kept = VisvalingamSimplifier::new()
            .simplify_indices(input.as_slice(), 1e6)
            .unwrap();
        assert!(kept.contains(&1));
        assert_eq!(kept.first(), Some(&0));
        assert_eq!(kept.last(), Some(&3));
    }

    #[test]
    fn test_invalid_tolerance() {
        let input = line(&[[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]]);
        assert_eq!(
            VisvalingamSimplifier::new().simplify(&input, -1.0),
            Err(Error::InvalidTolerance(-1.0))
        );
        assert!(VisvalingamSimplifier::preserving()
            .simplify(&input, f64::NAN)
            .is_err());
    }

    #[test]
    fn test_preserving_skips_self_intersecting_removal() {
        // Point 4 reaches up into the pocket under point 1, so the shortcut
        // 0-2 left by removing point 1 would cross segment 3-4
        let input = line(&[
            [0.0, 0.0],
            [5.0, 1.0],
            [10.0, 0.0],
            [10.0, -3.0],
            [5.0, 0.5],
            [0.0, -3.0],
        ]);
        let plain = VisvalingamSimplifier::new()
            .simplify_indices(input.as_slice(), 6.0)
            .unwrap();
        assert!(!plain.contains(&1));

        let preserving = VisvalingamSimplifier::preserving()
            .simplify_indices(input.as_slice(), 6.0)
            .unwrap();
        assert!(preserving.contains(&1));
        assert_eq!(preserving.first(), Some(&0));
        assert_eq!(preserving.last(), Some(&5));
    }
}
