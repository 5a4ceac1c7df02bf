//! Core arithmetic behind the exported symbols.
//!
//! The FFI layer in `ffi/` calls these functions.

/// Adds two doubles with plain IEEE-754 semantics.
///
/// No validation: NaN propagates, overflow saturates to infinity.
pub fn add(x: f64, y: f64) -> f64 {
    x + y
}
