//! Coordinate buffers that cross the C boundary
//!
//! Inbound data is borrowed through an [`ExternalArray`] descriptor owned by
//! the caller. Outbound results are a [`CoordBuffer`] that exclusively owns
//! its allocation until it is dropped here or handed to the caller with
//! [`CoordBuffer::into_external`], after which the caller must pass the
//! descriptor back to [`crate::drop_float_array`] exactly once.

use linesimp_core::{point_from_pair, Error, Polyline, Result};
use std::ffi::c_void;
use std::ptr;

/// Pointer and element count describing a buffer of doubles.
///
/// For coordinate buffers `len` counts `(x, y)` pairs, so `data` points at
/// `2 * len` doubles. For weight buffers `len` counts doubles.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalArray {
    pub data: *const c_void,
    pub len: usize,
}

impl ExternalArray {
    /// Descriptor of nothing; returned by failed calls
    pub const fn null() -> Self {
        Self {
            data: ptr::null(),
            len: 0,
        }
    }

    pub fn is_null(&self) -> bool {
        self.data.is_null()
    }

    /// Borrowing descriptor for a coordinate slice.
    ///
    /// The descriptor does not own `pairs` and must not outlive it.
    pub fn from_pairs(pairs: &[[f64; 2]]) -> Self {
        Self {
            data: pairs.as_ptr().cast(),
            len: pairs.len(),
        }
    }

    /// Borrowing descriptor for a plain slice of doubles (e.g. weights)
    pub fn from_values(values: &[f64]) -> Self {
        Self {
            data: values.as_ptr().cast(),
            len: values.len(),
        }
    }

    /// View an inbound coordinate buffer as interleaved `[x0, y0, x1, y1, ..]`.
    ///
    /// # Safety
    /// Unless `data` is null, it must point at `2 * len` initialized doubles
    /// that stay valid and unmodified for `'a`.
    pub unsafe fn as_pairs<'a>(&self) -> Result<&'a [f64]> {
        let count = self
            .len
            .checked_mul(2)
            .ok_or_else(|| Error::InvalidBuffer(format!("pair count {} overflows", self.len)))?;
        // SAFETY: forwarded from the caller
        unsafe { view(self.data, count) }
    }

    /// View an inbound buffer of `len` doubles.
    ///
    /// # Safety
    /// Unless `data` is null, it must point at `len` initialized doubles that
    /// stay valid and unmodified for `'a`.
    pub unsafe fn as_values<'a>(&self) -> Result<&'a [f64]> {
        // SAFETY: forwarded from the caller
        unsafe { view(self.data, self.len) }
    }
}

impl Default for ExternalArray {
    fn default() -> Self {
        Self::null()
    }
}

unsafe fn view<'a>(data: *const c_void, count: usize) -> Result<&'a [f64]> {
    if data.is_null() {
        return if count == 0 {
            Ok(&[])
        } else {
            Err(Error::InvalidBuffer(format!(
                "null data pointer with {} declared values",
                count
            )))
        };
    }
    if (data as usize) % std::mem::align_of::<f64>() != 0 {
        return Err(Error::InvalidBuffer(format!(
            "data pointer {:p} is not aligned for f64",
            data
        )));
    }
    // SAFETY: non-null and aligned; length and lifetime are the caller's contract
    Ok(unsafe { std::slice::from_raw_parts(data.cast::<f64>(), count) })
}

/// Owned, interleaved coordinate pairs produced by a simplification.
///
/// The allocation is released exactly once: when the buffer is dropped, or
/// by `drop_float_array` after [`into_external`](Self::into_external).
/// Reading a buffer after releasing it does not compile:
///
/// ```compile_fail
/// use linesimp_core::Polyline;
/// use linesimp_ffi::CoordBuffer;
///
/// let buffer = CoordBuffer::from_polyline(&Polyline::from(vec![[0.0, 0.0], [1.0, 1.0]]));
/// buffer.release();
/// let _ = buffer.as_slice();
/// ```
///
/// ```
/// use linesimp_core::Polyline;
/// use linesimp_ffi::CoordBuffer;
///
/// let buffer = CoordBuffer::from_polyline(&Polyline::from(vec![[0.0, 0.0], [1.0, 1.0]]));
/// assert_eq!(buffer.len(), 2);
/// assert_eq!(buffer.points(), &[[0.0, 0.0], [1.0, 1.0]]);
/// buffer.release();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CoordBuffer {
    coords: Box<[f64]>,
}

impl CoordBuffer {
    pub fn from_polyline(polyline: &Polyline) -> Self {
        Self {
            coords: polyline.to_interleaved().into_boxed_slice(),
        }
    }

    pub fn from_pairs(pairs: &[[f64; 2]]) -> Self {
        Self {
            coords: bytemuck::cast_slice::<[f64; 2], f64>(pairs).into(),
        }
    }

    /// Number of coordinate pairs
    pub fn len(&self) -> usize {
        self.coords.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Interleaved `[x0, y0, x1, y1, ..]`
    pub fn as_slice(&self) -> &[f64] {
        &self.coords
    }

    pub fn points(&self) -> &[[f64; 2]] {
        bytemuck::cast_slice::<f64, [f64; 2]>(&self.coords[..])
    }

    pub fn to_polyline(&self) -> Polyline {
        self.points().iter().copied().map(point_from_pair).collect()
    }

    /// Hand the allocation to a C caller.
    ///
    /// The returned descriptor owns the memory; it must be released with
    /// `drop_float_array` exactly once.
    pub fn into_external(self) -> ExternalArray {
        let len = self.len();
        let data = Box::into_raw(self.coords);
        ExternalArray {
            data: data.cast::<c_void>().cast_const(),
            len,
        }
    }

    /// Reclaim a descriptor produced by [`into_external`](Self::into_external).
    ///
    /// Returns `None` for a null descriptor.
    ///
    /// # Safety
    /// `array` must come from `into_external` and must not have been reclaimed
    /// before; `len` must be unchanged.
    pub unsafe fn from_external(array: ExternalArray) -> Option<Self> {
        if array.is_null() {
            return None;
        }
        let slice = ptr::slice_from_raw_parts_mut(array.data.cast::<f64>().cast_mut(), array.len * 2);
        // SAFETY: the pointer and length were produced by Box::into_raw on a
        // boxed slice of exactly this many doubles
        Some(Self {
            coords: unsafe { Box::from_raw(slice) },
        })
    }

    /// Release the allocation; the buffer is consumed and cannot be read again
    pub fn release(self) {
        drop(self)
    }
}
