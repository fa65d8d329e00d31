#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Every kernel has the shape `fn(&PixelBuffer, &mut PixelBuffer)`: it reads the input geometry
//! from the source buffer, never mutates it, and overwrites the whole destination buffer.
//! Preconditions on buffer geometry are the caller's responsibility.

/// color transformations module.
pub mod color;

/// image basic statistics module.
pub mod core;

/// pixel value enhancement module.
pub mod enhance;

/// image filtering module.
pub mod filter;

/// utilities for interpolation.
pub mod interpolation;

/// lossless rotations by multiples of 90 degrees.
pub mod rotate;

/// adaptive speckle noise filtering module.
pub mod speckle;

/// image geometric transformations module.
pub mod warp;
