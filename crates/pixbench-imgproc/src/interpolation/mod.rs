//! Pixel interpolation methods for image transformations.
//!
//! These are used when resampling images during geometric transformations, see
//! `crate::warp`.

mod bilinear;

pub use bilinear::bilinear_sample;
