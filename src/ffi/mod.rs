//! C FFI layer for foreign callers.
//!
//! This module exports C ABI functions for any runtime that can `dlopen` the
//! shared object. All functions are marked with `#[no_mangle]` and use
//! `extern "C"`, with only primitive numeric types at the boundary.
//!
//! The actual logic is in the `arith` module. These functions are thin wrappers.

pub mod simple;

pub use simple::add;
