//! `extern "C"` functions exported from the shared library
//!
//! Every simplify export returns a [`CoordResult`]. A successful result owns
//! its coordinates until the caller passes `result.coords` to
//! [`drop_float_array`]; a failed result carries a null descriptor, which is
//! safe (a no-op) to release. Panics never unwind into the caller.
//!
//! The tolerance is checked before either descriptor is read, so a bad
//! `epsilon` is reported as such even when the buffers are also invalid.

use crate::buffer::{CoordBuffer, ExternalArray};
use crate::entry;
use crate::status::{CoordResult, Status};
use linesimp_core::{validate_tolerance, Result};
use log::{error, warn};
use std::panic::{self, UnwindSafe};

fn guarded<F>(operation: &str, f: F) -> CoordResult
where
    F: FnOnce() -> Result<CoordBuffer> + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(Ok(buffer)) => CoordResult::success(buffer),
        Ok(Err(err)) => {
            warn!("{}: {}", operation, err);
            CoordResult::failure(Status::from(&err))
        }
        Err(_) => {
            error!("{}: panic caught at the C boundary", operation);
            CoordResult::failure(Status::InternalError)
        }
    }
}

/// Douglas-Peucker simplification; `epsilon` is a distance.
///
/// # Safety
/// `coords.data` must be null or point at `2 * coords.len` readable doubles
/// for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn simplify_rdp_ffi(coords: ExternalArray, epsilon: f64) -> CoordResult {
    guarded("simplify_rdp_ffi", move || {
        validate_tolerance(epsilon)?;
        // SAFETY: the caller's descriptor contract
        let coords = unsafe { coords.as_pairs()? };
        entry::simplify_douglas_peucker(coords, epsilon)
    })
}

/// Visvalingam-Whyatt simplification; `epsilon` is an area.
///
/// # Safety
/// Same contract as [`simplify_rdp_ffi`].
#[no_mangle]
pub unsafe extern "C" fn simplify_visvalingam_ffi(coords: ExternalArray, epsilon: f64) -> CoordResult {
    guarded("simplify_visvalingam_ffi", move || {
        validate_tolerance(epsilon)?;
        // SAFETY: the caller's descriptor contract
        let coords = unsafe { coords.as_pairs()? };
        entry::simplify_visvalingam_whyatt(coords, epsilon)
    })
}

/// Topology-preserving Visvalingam-Whyatt simplification.
///
/// # Safety
/// Same contract as [`simplify_rdp_ffi`].
#[no_mangle]
pub unsafe extern "C" fn simplify_visvalingamp_ffi(coords: ExternalArray, epsilon: f64) -> CoordResult {
    guarded("simplify_visvalingamp_ffi", move || {
        validate_tolerance(epsilon)?;
        // SAFETY: the caller's descriptor contract
        let coords = unsafe { coords.as_pairs()? };
        entry::simplify_visvalingam_whyatt_preserve(coords, epsilon)
    })
}

/// Weighted Visvalingam-Whyatt simplification.
///
/// `weights.len` counts doubles and must equal `coords.len`.
///
/// # Safety
/// `coords` as for [`simplify_rdp_ffi`]; `weights.data` must be null or
/// point at `weights.len` readable doubles for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn simplify_visvalingam_weighted_ffi(
    coords: ExternalArray,
    weights: ExternalArray,
    epsilon: f64,
) -> CoordResult {
    guarded("simplify_visvalingam_weighted_ffi", move || {
        validate_tolerance(epsilon)?;
        // SAFETY: the caller's descriptor contract
        let (coords, weights) = unsafe { (coords.as_pairs()?, weights.as_values()?) };
        entry::simplify_visvalingam_whyatt_weighted(coords, weights, epsilon)
    })
}

/// Release the coordinates of a [`CoordResult`].
///
/// A null descriptor is ignored.
///
/// # Safety
/// `array` must be the `coords` of a result returned by this library and
/// must not be released twice or read afterwards.
#[no_mangle]
pub unsafe extern "C" fn drop_float_array(array: ExternalArray) {
    // SAFETY: the caller's ownership contract
    if let Some(buffer) = unsafe { CoordBuffer::from_external(array) } {
        buffer.release();
    }
}
