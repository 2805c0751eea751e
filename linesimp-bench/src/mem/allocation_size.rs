use criterion::measurement::{Measurement, ValueFormatter};
use criterion::Throughput;
use stats_alloc::INSTRUMENTED_SYSTEM;

use crate::LinesimpMeasurement;

/// Bytes allocated by the measured routine (frees are not subtracted)
pub struct AllocationSize;

impl LinesimpMeasurement for AllocationSize {
    const NAME: &'static str = "allocation size";
}

impl Measurement for AllocationSize {
    type Intermediate = usize;
    type Value = usize;

    fn start(&self) -> Self::Intermediate {
        INSTRUMENTED_SYSTEM.stats().bytes_allocated
    }

    fn end(&self, start: Self::Intermediate) -> Self::Value {
        INSTRUMENTED_SYSTEM.stats().bytes_allocated.saturating_sub(start)
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
        &AllocationSizeFormatter
    }
}

const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

/// Power of 1024 to display `bytes` in, capped at the largest unit
fn magnitude(bytes: f64) -> usize {
    if bytes < 1024.0 {
        return 0;
    }
    ((bytes.log2() / 10.0).floor() as usize).min(UNITS.len() - 1)
}

struct AllocationSizeFormatter;

impl ValueFormatter for AllocationSizeFormatter {
    fn scale_values(&self, typical_value: f64, values: &mut [f64]) -> &'static str {
        let magnitude = magnitude(typical_value);
        let factor = 1024.0_f64.powi(magnitude as i32);
        for value in values {
            *value /= factor;
        }
        UNITS[magnitude]
    }

    fn scale_throughputs(&self, _: f64, throughput: &Throughput, values: &mut [f64]) -> &'static str {
        if let Throughput::Elements(elements) = throughput {
            for value in values {
                *value /= *elements as f64;
            }
            "B/point"
        } else {
            "B"
        }
    }

    fn scale_for_machines(&self, _: &mut [f64]) -> &'static str {
        "B"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude() {
        assert_eq!(magnitude(0.0), 0);
        assert_eq!(magnitude(1023.0), 0);
        assert_eq!(magnitude(1024.0), 1);
        assert_eq!(magnitude(5.0 * 1024.0 * 1024.0), 2);
        assert_eq!(magnitude(1e30), UNITS.len() - 1);
    }

    #[test]
    fn test_scale_values() {
        let mut values = [2048.0, 4096.0];
        let unit = AllocationSizeFormatter.scale_values(3000.0, &mut values);
        assert_eq!(unit, "KiB");
        assert_eq!(values, [2.0, 4.0]);
    }
}
