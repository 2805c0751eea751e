//! Safe entry points over interleaved coordinate slices
//!
//! Each function validates the tolerance, the coordinate shape and (for the
//! weighted variant) the weights before any simplification runs, and returns
//! the result as an owned [`CoordBuffer`].

use crate::buffer::CoordBuffer;
use linesimp_core::{validate_tolerance, Polyline, Result};
use linesimp_simplification::{
    DouglasPeuckerSimplifier, LineSimplifier, VisvalingamSimplifier, WeightedVisvalingamSimplifier,
};

fn run<S: LineSimplifier>(simplifier: &S, coords: &[f64], epsilon: f64) -> Result<CoordBuffer> {
    validate_tolerance(epsilon)?;
    let polyline = Polyline::from_interleaved(coords)?;
    let simplified = simplifier.simplify(&polyline, epsilon)?;
    Ok(CoordBuffer::from_polyline(&simplified))
}

/// Douglas-Peucker over `[x0, y0, x1, y1, ..]`; `epsilon` is a distance
pub fn simplify_douglas_peucker(coords: &[f64], epsilon: f64) -> Result<CoordBuffer> {
    run(&DouglasPeuckerSimplifier::new(), coords, epsilon)
}

/// Visvalingam-Whyatt over `[x0, y0, x1, y1, ..]`; `epsilon` is an area
pub fn simplify_visvalingam_whyatt(coords: &[f64], epsilon: f64) -> Result<CoordBuffer> {
    run(&VisvalingamSimplifier::new(), coords, epsilon)
}

/// Visvalingam-Whyatt that never makes the path cross itself
pub fn simplify_visvalingam_whyatt_preserve(coords: &[f64], epsilon: f64) -> Result<CoordBuffer> {
    run(&VisvalingamSimplifier::preserving(), coords, epsilon)
}

/// Weighted Visvalingam-Whyatt; `weights` holds one value per coordinate pair
pub fn simplify_visvalingam_whyatt_weighted(
    coords: &[f64],
    weights: &[f64],
    epsilon: f64,
) -> Result<CoordBuffer> {
    run(&WeightedVisvalingamSimplifier::new(weights.to_vec()), coords, epsilon)
}
