//! Criterion measurements for linesimp benchmarks
//!
//! Benchmarks that use the [`mem`] measurements must install
//! [`mem::INSTRUMENTED_SYSTEM`] as their global allocator.

use criterion::measurement::Measurement;

pub mod mem;

/// A criterion measurement with a label for benchmark group names
pub trait LinesimpMeasurement: Measurement {
    const NAME: &'static str;
}
