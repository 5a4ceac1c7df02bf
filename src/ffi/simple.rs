//! Addition entry point for cross-language smoke tests.

use std::ffi::c_double;

use crate::arith;

/// Returns `x + y`. Exported unmangled as `add`.
#[no_mangle]
pub extern "C" fn add(x: c_double, y: c_double) -> c_double {
    arith::add(x, y)
}
