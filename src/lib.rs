//! Sample - C ABI Adder
//!
//! This library exports a single `add` symbol so a foreign runtime can load
//! `libsample` and call into it through its FFI.

pub mod arith;
pub mod ffi;

pub use ffi::add;
