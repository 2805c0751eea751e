//! # linesimp
//!
//! Two-dimensional polyline simplification for Rust.
//!
//! This is the umbrella crate that provides convenient access to all linesimp functionality.
//! You can use this crate to get everything in one place, or use individual crates for
//! more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: Points, polylines, geometry primitives and the shared error type
//! - **Simplification**: Douglas-Peucker and Visvalingam-Whyatt (plain, weighted and
//!   topology-preserving), plus parallel batch processing
//! - **FFI**: Owned coordinate buffers and the C ABI of the shared library
//!
//! ## Quick Start
//!
//! ```rust
//! use linesimp::prelude::*;
//!
//! let line = Polyline::from(vec![[0.0, 0.0], [5.0, 4.0], [11.0, 5.5], [17.3, 3.2], [27.8, 0.1]]);
//!
//! let simplified = DouglasPeuckerSimplifier::new().simplify(&line, 1.0).unwrap();
//! assert_eq!(simplified.len(), 4);
//!
//! let by_area = Algorithm::VisvalingamWhyatt.simplify(&line, 30.0).unwrap();
//! assert_eq!(by_area.first(), line.first());
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables core and simplification
//! - `simplification`: The simplification algorithms
//! - `ffi`: Coordinate buffers and `extern "C"` exports
//! - `all`: Enables all features

// Re-export core functionality
pub use linesimp_core::*;

// Re-export sub-crates
#[cfg(feature = "simplification")]
pub use linesimp_simplification as simplification;

#[cfg(feature = "ffi")]
pub use linesimp_ffi as ffi;

/// Convenient imports for common use cases
pub mod prelude {
    pub use linesimp_core::*;

    #[cfg(feature = "simplification")]
    pub use linesimp_simplification::{
        simplify_batch, simplify_batch_with, Algorithm, BatchConfig, DouglasPeuckerSimplifier,
        LineSimplifier, VisvalingamSimplifier, WeightedVisvalingamSimplifier,
    };

    #[cfg(feature = "ffi")]
    pub use linesimp_ffi::{CoordBuffer, CoordResult, ExternalArray, Status};
}
