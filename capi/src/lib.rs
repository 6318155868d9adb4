//! C ABI for the classifier example. Every function takes and returns the
//! `#[repr(C)]` containers by value.

pub mod classification;

pub use self::classification::*;
