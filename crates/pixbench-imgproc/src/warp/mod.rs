//! Geometric image transformations with resampling.
//!
//! This module provides rotations by arbitrary angles onto an expanded canvas that holds the
//! whole rotated image.
//!
//! # Examples
//!
//! Computing the canvas needed for a 45 degree rotation:
//!
//! ```
//! use pixbench_image::ImageSize;
//! use pixbench_imgproc::warp::{rotated_canvas_size, ROTATE45_ANGLE};
//!
//! let size = rotated_canvas_size([4, 4].into(), ROTATE45_ANGLE);
//! assert_eq!(size, ImageSize { width: 6, height: 6 });
//! ```

mod rotation;

pub use rotation::{rotate45_bilinear, rotate_bilinear, rotated_canvas_size, ROTATE45_ANGLE};
