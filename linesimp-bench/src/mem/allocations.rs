use criterion::measurement::{Measurement, ValueFormatter};
use criterion::Throughput;
use stats_alloc::INSTRUMENTED_SYSTEM;

use crate::LinesimpMeasurement;

/// Number of heap allocations made by the measured routine
pub struct Allocations;

impl LinesimpMeasurement for Allocations {
    const NAME: &'static str = "allocations";
}

impl Measurement for Allocations {
    type Intermediate = usize;
    type Value = usize;

    fn start(&self) -> Self::Intermediate {
        INSTRUMENTED_SYSTEM.stats().allocations
    }

    fn end(&self, start: Self::Intermediate) -> Self::Value {
        INSTRUMENTED_SYSTEM.stats().allocations.saturating_sub(start)
    }

    fn add(&self, &v1: &Self::Value, &v2: &Self::Value) -> Self::Value {
        v1 + v2
    }

    fn zero(&self) -> Self::Value {
        0
    }

    fn to_f64(&self, &value: &Self::Value) -> f64 {
        value as f64
    }

    fn formatter(&self) -> &dyn ValueFormatter {
        &AllocationsFormatter
    }
}

struct AllocationsFormatter;

impl ValueFormatter for AllocationsFormatter {
    fn scale_values(&self, _: f64, _: &mut [f64]) -> &'static str {
        "allocs"
    }

    fn scale_throughputs(&self, _: f64, throughput: &Throughput, values: &mut [f64]) -> &'static str {
        // Allocations per input element (coordinate pair)
        if let Throughput::Elements(elements) = throughput {
            for value in values {
                *value /= *elements as f64;
            }
            "allocs/point"
        } else {
            "allocs"
        }
    }

    fn scale_for_machines(&self, _: &mut [f64]) -> &'static str {
        "allocs"
    }
}
