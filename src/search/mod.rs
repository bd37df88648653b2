//! Exhaustive correlation search over intensity grids.
//!
//! The scan module provides the lazy scalar ZNCC evaluation; the parallel
//! module adds a rayon row-parallel variant with identical results.

pub mod scan;

#[cfg(feature = "rayon")]
pub mod parallel;
