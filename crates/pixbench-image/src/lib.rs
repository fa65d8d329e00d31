#![deny(missing_docs)]
//! Raw pixel buffer types shared by the pixbench transforms and harness

/// raw pixel buffer representation.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{ImageSize, PixelBuffer};
