//! Polyline simplification algorithms
//!
//! This crate provides algorithms for reducing the number of points in a 2D
//! polyline while keeping its shape within a tolerance:
//! - Douglas-Peucker (distance tolerance)
//! - Visvalingam-Whyatt (area tolerance), optionally topology-preserving
//! - Weighted Visvalingam-Whyatt (per-point importance multipliers)
//!
//! Every algorithm returns an ordered subsequence of its input that always
//! keeps the first and last point.

pub mod douglas_peucker;
pub mod heap;
pub mod parallel;
pub mod visvalingam;
pub mod weighted;
mod topology;

pub use douglas_peucker::*;
pub use heap::*;
pub use parallel::*;
pub use visvalingam::VisvalingamSimplifier;
pub use weighted::*;

use linesimp_core::{Error, Point2d, Polyline, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reduce a polyline to an ordered subset of its points
pub trait LineSimplifier {
    /// Indices of the retained points, strictly ascending.
    ///
    /// Fails before doing any work if `epsilon` is negative or not finite.
    fn simplify_indices(&self, points: &[Point2d], epsilon: f64) -> Result<Vec<usize>>;

    /// Simplify `polyline`, returning the retained points in input order
    fn simplify(&self, polyline: &Polyline, epsilon: f64) -> Result<Polyline> {
        let kept = self.simplify_indices(polyline.as_slice(), epsilon)?;
        Ok(polyline.select(&kept))
    }
}

/// Unweighted algorithm selector, e.g. for host configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    DouglasPeucker,
    VisvalingamWhyatt,
    VisvalingamWhyattPreserve,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::DouglasPeucker,
        Algorithm::VisvalingamWhyatt,
        Algorithm::VisvalingamWhyattPreserve,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::DouglasPeucker => "douglas_peucker",
            Algorithm::VisvalingamWhyatt => "visvalingam_whyatt",
            Algorithm::VisvalingamWhyattPreserve => "visvalingam_whyatt_preserve",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "douglas_peucker" | "rdp" => Ok(Algorithm::DouglasPeucker),
            "visvalingam_whyatt" | "visvalingam" => Ok(Algorithm::VisvalingamWhyatt),
            "visvalingam_whyatt_preserve" | "visvalingamp" => {
                Ok(Algorithm::VisvalingamWhyattPreserve)
            }
            other => Err(Error::InvalidData(format!("Unknown algorithm: {}", other))),
        }
    }
}

impl LineSimplifier for Algorithm {
    fn simplify_indices(&self, points: &[Point2d], epsilon: f64) -> Result<Vec<usize>> {
        match self {
            Algorithm::DouglasPeucker => DouglasPeuckerSimplifier.simplify_indices(points, epsilon),
            Algorithm::VisvalingamWhyatt => {
                VisvalingamSimplifier::new().simplify_indices(points, epsilon)
            }
            Algorithm::VisvalingamWhyattPreserve => {
                VisvalingamSimplifier::preserving().simplify_indices(points, epsilon)
            }
        }
    }
}
