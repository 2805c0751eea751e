//! Self-intersection guard for topology-preserving Visvalingam-Whyatt
//!
//! The current path's segments live in an R-tree. A removal is allowed only
//! if the shortcut segment it creates meets no current segment other than
//! those attached to its own endpoints.

use crate::visvalingam::RemovalGuard;
use itertools::Itertools;
use linesimp_core::{pair_from_point, point_from_pair, segments_intersect, Point2d};
use rstar::{RTree, RTreeObject, AABB};

/// Path segment between two point indices
#[derive(Debug, Clone, Copy, PartialEq)]
struct Segment {
    start: usize,
    end: usize,
    a: [f64; 2],
    b: [f64; 2],
}

impl Segment {
    fn new(points: &[Point2d], start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            a: pair_from_point(&points[start]),
            b: pair_from_point(&points[end]),
        }
    }

    fn is_finite(&self) -> bool {
        self.a.iter().chain(self.b.iter()).all(|c| c.is_finite())
    }

    fn touches_index(&self, index: usize) -> bool {
        self.start == index || self.end == index
    }
}

impl RTreeObject for Segment {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.a, self.b)
    }
}

/// Vetoes removals that would make the path cross itself.
///
/// Segments with non-finite coordinates are not indexed; they cannot
/// intersect anything under the closed-segment test.
pub(crate) struct TopologyGuard {
    tree: RTree<Segment>,
}

impl TopologyGuard {
    pub(crate) fn new(points: &[Point2d]) -> Self {
        let segments: Vec<Segment> = (0..points.len())
            .tuple_windows()
            .map(|(i, j)| Segment::new(points, i, j))
            .filter(Segment::is_finite)
            .collect();
        Self {
            tree: RTree::bulk_load(segments),
        }
    }

    fn insert(&mut self, segment: Segment) {
        if segment.is_finite() {
            self.tree.insert(segment);
        }
    }
}

impl RemovalGuard for TopologyGuard {
    fn allows(&self, points: &[Point2d], prev: usize, _index: usize, next: usize) -> bool {
        let shortcut = Segment::new(points, prev, next);
        if !shortcut.is_finite() {
            return true;
        }
        let (a, b) = (point_from_pair(shortcut.a), point_from_pair(shortcut.b));
        !self
            .tree
            .locate_in_envelope_intersecting(&shortcut.envelope())
            .filter(|s| !s.touches_index(prev) && !s.touches_index(next))
            .any(|s| segments_intersect(&a, &b, &point_from_pair(s.a), &point_from_pair(s.b)))
    }

    fn removed(&mut self, points: &[Point2d], prev: usize, index: usize, next: usize) {
        self.tree.remove(&Segment::new(points, prev, index));
        self.tree.remove(&Segment::new(points, index, next));
        self.insert(Segment::new(points, prev, next));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[[f64; 2]]) -> Vec<Point2d> {
        coords.iter().copied().map(point_from_pair).collect()
    }

    #[test]
    fn test_allows_clear_shortcut() {
        let pts = points(&[[0.0, 0.0], [1.0, 1.0], [2.0, 0.0], [3.0, 1.0]]);
        let guard = TopologyGuard::new(&pts);
        assert!(guard.allows(&pts, 0, 1, 2));
    }

    #[test]
    fn test_vetoes_crossing_shortcut() {
        // Segment 3-4 rises through the base of the triangle 0-1-2
        let pts = points(&[
            [0.0, 0.0],
            [5.0, 1.0],
            [10.0, 0.0],
            [10.0, -3.0],
            [5.0, 0.5],
            [0.0, -3.0],
        ]);
        let guard = TopologyGuard::new(&pts);
        assert!(!guard.allows(&pts, 0, 1, 2));
        assert!(guard.allows(&pts, 2, 3, 4));
    }

    #[test]
    fn test_removed_updates_segments() {
        let pts = points(&[[0.0, 0.0], [1.0, 1.0], [2.0, 0.0], [3.0, 1.0]]);
        let mut guard = TopologyGuard::new(&pts);
        assert_eq!(guard.tree.size(), 3);
        guard.removed(&pts, 0, 1, 2);
        assert_eq!(guard.tree.size(), 2);
        assert!(guard
            .tree
            .iter()
            .any(|s| s.start == 0 && s.end == 2));
    }

    #[test]
    fn test_non_finite_segments_are_not_indexed() {
        let pts = points(&[[0.0, 0.0], [f64::NAN, 1.0], [2.0, 0.0], [3.0, 0.0]]);
        let guard = TopologyGuard::new(&pts);
        assert_eq!(guard.tree.size(), 1);
    }
}
