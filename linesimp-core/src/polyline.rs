//! Polyline data structure and functionality

use crate::error::{Error, Result};
use crate::point::*;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered sequence of 2D points describing a connected path.
///
/// Point order is the path order. Simplification never reorders or modifies
/// points, it only selects a subsequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point2d>,
}

impl Polyline {
    /// Create a new empty polyline
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a new polyline with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create a polyline from a vector of points
    pub fn from_points(points: Vec<Point2d>) -> Self {
        Self { points }
    }

    /// Create a polyline from interleaved `[x0, y0, x1, y1, ...]` coordinates.
    ///
    /// Fails if the slice holds an odd number of values.
    pub fn from_interleaved(coords: &[f64]) -> Result<Self> {
        let pairs: &[[f64; 2]] = bytemuck::try_cast_slice(coords).map_err(|_| {
            Error::InvalidData(format!(
                "interleaved coordinates must come in (x, y) pairs, got {} values",
                coords.len()
            ))
        })?;
        Ok(pairs.iter().copied().map(point_from_pair).collect())
    }

    /// Flatten the polyline into interleaved `[x0, y0, x1, y1, ...]` coordinates
    pub fn to_interleaved(&self) -> Vec<f64> {
        let mut coords = Vec::with_capacity(self.points.len() * 2);
        for p in &self.points {
            coords.extend_from_slice(&pair_from_point(p));
        }
        coords
    }

    /// Build a new polyline from the points at `indices`, in the given order
    pub fn select(&self, indices: &[usize]) -> Self {
        indices.iter().map(|&i| self.points[i]).collect()
    }

    /// Get the number of points in the polyline
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the polyline is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add a point to the end of the path
    pub fn push(&mut self, point: Point2d) {
        self.points.push(point);
    }

    /// First point of the path
    pub fn first(&self) -> Option<&Point2d> {
        self.points.first()
    }

    /// Last point of the path
    pub fn last(&self) -> Option<&Point2d> {
        self.points.last()
    }

    /// Get an iterator over the points
    pub fn iter(&self) -> std::slice::Iter<'_, Point2d> {
        self.points.iter()
    }

    /// Borrow the points as a slice
    pub fn as_slice(&self) -> &[Point2d] {
        &self.points
    }

    /// Sum of segment lengths along the path
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| crate::geometry::distance(&w[0], &w[1]))
            .sum()
    }
}

impl Default for Polyline {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Polyline {
    type Output = Point2d;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl IntoIterator for Polyline {
    type Item = Point2d;
    type IntoIter = std::vec::IntoIter<Point2d>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Polyline {
    type Item = &'a Point2d;
    type IntoIter = std::slice::Iter<'a, Point2d>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Extend<Point2d> for Polyline {
    fn extend<I: IntoIterator<Item = Point2d>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl FromIterator<Point2d> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point2d>>(iter: I) -> Self {
        Self {
            points: Vec::from_iter(iter),
        }
    }
}

impl From<Vec<[f64; 2]>> for Polyline {
    fn from(pairs: Vec<[f64; 2]>) -> Self {
        pairs.into_iter().map(point_from_pair).collect()
    }
}

impl From<&[[f64; 2]]> for Polyline {
    fn from(pairs: &[[f64; 2]]) -> Self {
        pairs.iter().copied().map(point_from_pair).collect()
    }
}
