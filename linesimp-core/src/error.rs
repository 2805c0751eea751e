//! Error types for linesimp

use thiserror::Error;

/// Main error type for linesimp operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid tolerance: {0} (must be finite and non-negative)")]
    InvalidTolerance(f64),

    #[error("Weight count mismatch: expected {expected} weights, got {actual}")]
    WeightCountMismatch { expected: usize, actual: usize },

    #[error("Invalid weight {weight} at index {index}: weights must be finite and positive")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Invalid buffer: {0}")]
    InvalidBuffer(String),

    #[error("Algorithm error: {0}")]
    Algorithm(String),
}

/// Result type alias for linesimp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Check that a simplification tolerance is finite and non-negative.
pub fn validate_tolerance(epsilon: f64) -> Result<()> {
    if epsilon.is_finite() && epsilon >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidTolerance(epsilon))
    }
}

/// Check a per-point weight sequence against the number of points it annotates.
///
/// Every weight must be finite and strictly positive.
pub fn validate_weights(weights: &[f64], point_count: usize) -> Result<()> {
    if weights.len() != point_count {
        return Err(Error::WeightCountMismatch {
            expected: point_count,
            actual: weights.len(),
        });
    }
    match weights
        .iter()
        .enumerate()
        .find(|(_, w)| !(w.is_finite() && **w > 0.0))
    {
        Some((index, &weight)) => Err(Error::InvalidWeight { index, weight }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_accepts_zero_and_positive() {
        assert!(validate_tolerance(0.0).is_ok());
        assert!(validate_tolerance(1e-12).is_ok());
        assert!(validate_tolerance(1e12).is_ok());
    }

    #[test]
    fn test_tolerance_rejects_negative_and_non_finite() {
        assert_eq!(validate_tolerance(-1.0), Err(Error::InvalidTolerance(-1.0)));
        assert!(validate_tolerance(f64::INFINITY).is_err());
        assert!(validate_tolerance(f64::NEG_INFINITY).is_err());
        assert!(validate_tolerance(f64::NAN).is_err());
    }

    #[test]
    fn test_weights_length_mismatch() {
        let err = validate_weights(&[1.0, 2.0], 3).unwrap_err();
        assert_eq!(
            err,
            Error::WeightCountMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_weights_reject_non_positive() {
        assert_eq!(
            validate_weights(&[1.0, 0.0, 2.0], 3),
            Err(Error::InvalidWeight {
                index: 1,
                weight: 0.0
            })
        );
        assert!(validate_weights(&[1.0, -3.0], 2).is_err());
        assert!(validate_weights(&[f64::NAN], 1).is_err());
        assert!(validate_weights(&[0.5, 1.0, 1e6], 3).is_ok());
    }

    #[test]
    fn test_error_messages() {
        let err = Error::WeightCountMismatch {
            expected: 4,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Weight count mismatch: expected 4 weights, got 1"
        );
    }
}
