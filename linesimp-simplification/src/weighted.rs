//! Weighted Visvalingam-Whyatt simplification
//!
//! Same least-area elimination as [`crate::VisvalingamSimplifier`], but the
//! key of point `i` is its triangle area multiplied by `weights[i]`. Heavier
//! points survive longer; a weight of 1 everywhere reproduces the unweighted
//! result exactly.

use crate::visvalingam::{eliminate, Unguarded};
use crate::LineSimplifier;
use linesimp_core::{validate_tolerance, validate_weights, Point2d, Result};
use log::debug;

/// Visvalingam-Whyatt simplifier with one positive weight per point
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedVisvalingamSimplifier {
    weights: Vec<f64>,
}

impl WeightedVisvalingamSimplifier {
    /// Weights are checked against the polyline when simplifying
    pub fn new(weights: Vec<f64>) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

impl LineSimplifier for WeightedVisvalingamSimplifier {
    fn simplify_indices(&self, points: &[Point2d], epsilon: f64) -> Result<Vec<usize>> {
        validate_tolerance(epsilon)?;
        validate_weights(&self.weights, points.len())?;

        let weights = &self.weights;
        let kept = eliminate(points, epsilon, |i, area| area * weights[i], &mut Unguarded);
        debug!(
            "weighted visvalingam-whyatt: {} -> {} points (epsilon = {})",
            points.len(),
            kept.len(),
            epsilon
        );
        Ok(kept)
    }
}
