//! vecmath demo driver
//!
//! Library half of the `vecmath` binary: configuration loading and the
//! demo scenarios that exercise [`vecmath_core`].

pub mod config;
pub mod demo;
