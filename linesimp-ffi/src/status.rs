//! Result codes reported across the C boundary

use crate::buffer::{CoordBuffer, ExternalArray};
use linesimp_core::Error;
use std::ffi::c_char;

/// Outcome of an exported call. `Ok` is zero; every failure is distinct.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok = 0,
    InvalidTolerance = 1,
    WeightCountMismatch = 2,
    InvalidWeight = 3,
    InvalidData = 4,
    InvalidBuffer = 5,
    AlgorithmError = 6,
    /// A panic was caught at the boundary
    InternalError = 7,
}

impl Status {
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            0 => Status::Ok,
            1 => Status::InvalidTolerance,
            2 => Status::WeightCountMismatch,
            3 => Status::InvalidWeight,
            4 => Status::InvalidData,
            5 => Status::InvalidBuffer,
            6 => Status::AlgorithmError,
            7 => Status::InternalError,
            _ => return None,
        })
    }

    /// Human-readable description
    pub fn message(self) -> &'static str {
        self.message_with_nul().trim_end_matches('\0')
    }

    fn message_with_nul(self) -> &'static str {
        match self {
            Status::Ok => "ok\0",
            Status::InvalidTolerance => "tolerance must be finite and non-negative\0",
            Status::WeightCountMismatch => "weight count does not match point count\0",
            Status::InvalidWeight => "weights must be finite and positive\0",
            Status::InvalidData => "coordinate data is malformed\0",
            Status::InvalidBuffer => "buffer descriptor is null or misaligned\0",
            Status::AlgorithmError => "simplification failed\0",
            Status::InternalError => "internal error\0",
        }
    }
}

impl From<&Error> for Status {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidTolerance(_) => Status::InvalidTolerance,
            Error::WeightCountMismatch { .. } => Status::WeightCountMismatch,
            Error::InvalidWeight { .. } => Status::InvalidWeight,
            Error::InvalidData(_) => Status::InvalidData,
            Error::InvalidBuffer(_) => Status::InvalidBuffer,
            Error::Algorithm(_) => Status::AlgorithmError,
        }
    }
}

/// Return value of every exported simplify call.
///
/// On success `coords` owns the result; on failure it is null with `len == 0`
/// and `status` names the failure.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordResult {
    pub coords: ExternalArray,
    pub status: Status,
}

impl CoordResult {
    pub fn success(buffer: CoordBuffer) -> Self {
        Self {
            coords: buffer.into_external(),
            status: Status::Ok,
        }
    }

    pub fn failure(status: Status) -> Self {
        Self {
            coords: ExternalArray::null(),
            status,
        }
    }
}

/// Description of a status code for C callers; unknown codes get a generic text.
///
/// The returned string is static and must not be freed.
#[no_mangle]
pub extern "C" fn linesimp_status_message(code: u32) -> *const c_char {
    Status::from_code(code)
        .map_or("unknown status\0", Status::message_with_nul)
        .as_ptr()
        .cast()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_error_mapping_is_distinct() {
        let errors = [
            Error::InvalidTolerance(-1.0),
            Error::WeightCountMismatch {
                expected: 3,
                actual: 2,
            },
            Error::InvalidWeight {
                index: 0,
                weight: 0.0,
            },
            Error::InvalidData("odd".to_string()),
            Error::InvalidBuffer("null".to_string()),
            Error::Algorithm("pool".to_string()),
        ];
        let statuses: Vec<Status> = errors.iter().map(Status::from).collect();
        for (i, a) in statuses.iter().enumerate() {
            assert!(!a.is_ok());
            for b in &statuses[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_codes_round_trip() {
        for code in 0..8 {
            let status = Status::from_code(code).unwrap();
            assert_eq!(status as u32, code);
        }
        assert_eq!(Status::from_code(8), None);
        assert!(Status::Ok.is_ok());
    }

    #[test]
    fn test_failure_has_null_coords() {
        let result = CoordResult::failure(Status::InvalidBuffer);
        assert!(result.coords.is_null());
        assert_eq!(result.coords.len, 0);
    }

    #[test]
    fn test_status_messages() {
        for code in 0..=8 {
            let message = unsafe { CStr::from_ptr(linesimp_status_message(code)) };
            assert!(!message.to_bytes().is_empty());
        }
        let ok = unsafe { CStr::from_ptr(linesimp_status_message(0)) };
        assert_eq!(ok.to_str(), Ok("ok"));
        assert_eq!(Status::Ok.message(), "ok");
    }
}
