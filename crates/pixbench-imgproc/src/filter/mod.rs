//! Filter operations
//!
//! This module provides the fixed-kernel neighbourhood filters of the benchmark suite.

/// Filter kernels
pub mod kernels;

/// Filter operations
mod ops;
pub use ops::*;
