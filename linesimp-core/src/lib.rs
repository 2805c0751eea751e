//! Core data structures for linesimp
//!
//! This crate provides the fundamental types for 2D polyline simplification:
//! points, polylines, the geometry primitives every algorithm is built on,
//! and the error type shared across the workspace.

pub mod point;
pub mod polyline;
pub mod geometry;
pub mod error;

pub use point::*;
pub use polyline::*;
pub use geometry::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point2, Vector2};
