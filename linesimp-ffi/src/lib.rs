//! C ABI for linesimp
//!
//! This crate exposes the simplification algorithms to callers on the other
//! side of a foreign-function boundary:
//! - [`buffer`]: the `ExternalArray` descriptor and the owned `CoordBuffer`
//! - [`status`]: result codes and the `CoordResult` return type
//! - [`entry`]: safe Rust entry points over interleaved coordinates
//! - [`exports`]: the `extern "C"` functions built into the shared library
//!
//! A C caller builds an `ExternalArray` over its `(x, y)` pairs, calls one of
//! the `simplify_*_ffi` functions, checks `status`, reads `coords.len` pairs
//! from `coords.data` and then passes `coords` to `drop_float_array` once.

pub mod buffer;
pub mod entry;
pub mod exports;
pub mod status;

pub use buffer::*;
pub use exports::*;
pub use status::*;
