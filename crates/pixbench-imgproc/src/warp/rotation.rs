use pixbench_image::{ImageSize, PixelBuffer};

use crate::core::saturate_round;
use crate::interpolation::bilinear_sample;

/// The angle, in radians, used by [`rotate45_bilinear`].
pub const ROTATE45_ANGLE: f64 = std::f64::consts::FRAC_PI_4;

/// Returns the size of the smallest canvas holding the image rotated by `angle`.
///
/// # Arguments
///
/// * `size` - The size of the source image.
/// * `angle` - The rotation angle in radians.
///
/// # Returns
///
/// `ceil(w |cos a| + h |sin a|)` by `ceil(w |sin a| + h |cos a|)`.
pub fn rotated_canvas_size(size: ImageSize, angle: f64) -> ImageSize {
    let (cos_a, sin_a) = (angle.cos().abs(), angle.sin().abs());
    let (w, h) = (size.width as f64, size.height as f64);

    ImageSize {
        width: (w * cos_a + h * sin_a).ceil() as usize,
        height: (w * sin_a + h * cos_a).ceil() as usize,
    }
}

/// Maps a point relative to the destination centre back into source coordinates.
#[inline]
fn inverse_rotate(dx: f64, dy: f64, cos_a: f64, sin_a: f64, center: (f64, f64)) -> (f64, f64) {
    let sx = dx * cos_a + dy * sin_a + center.0;
    let sy = -dx * sin_a + dy * cos_a + center.1;
    (sx, sy)
}

/// Rotates an image clockwise by `angle` onto the canvas of `dst` using bilinear interpolation.
///
/// Every destination pixel is mapped back to the source through a rotation about the centres
/// of both images. Destination pixels whose 2x2 source neighbourhood is not fully inside the
/// source image stay at zero (background).
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `dst` - The output image, usually sized with [`rotated_canvas_size`].
/// * `angle` - The rotation angle in radians.
///
/// PRECONDITION: `src` and `dst` must have the same number of channels.
pub fn rotate_bilinear(src: &PixelBuffer, dst: &mut PixelBuffer, angle: f64) {
    debug_assert_eq!(src.num_channels(), dst.num_channels());

    let (cos_a, sin_a) = (angle.cos(), angle.sin());
    let (w, h) = (src.cols() as f64, src.rows() as f64);
    let (dst_cols, ch) = (dst.cols(), dst.num_channels());

    let src_center = (w / 2.0, h / 2.0);
    let dst_center = (dst_cols as f64 / 2.0, dst.rows() as f64 / 2.0);

    // the buffer is reused across calls, reset the background first
    dst.as_slice_mut().fill(0);

    if dst_cols == 0 || ch == 0 {
        return;
    }

    for (oy, dst_row) in dst.as_slice_mut().chunks_exact_mut(dst_cols * ch).enumerate() {
        let dy = oy as f64 - dst_center.1;
        for (ox, dst_pixel) in dst_row.chunks_exact_mut(ch).enumerate() {
            let dx = ox as f64 - dst_center.0;
            let (sx, sy) = inverse_rotate(dx, dy, cos_a, sin_a, src_center);

            if sx >= 0.0 && sx < w - 1.0 && sy >= 0.0 && sy < h - 1.0 {
                for (c, dst_val) in dst_pixel.iter_mut().enumerate() {
                    *dst_val = saturate_round(bilinear_sample(src, sx, sy, c));
                }
            }
        }
    }
}

/// Rotates an image by 45 degrees onto an expanded canvas using bilinear interpolation.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `dst` - The output image with the size given by
///   `rotated_canvas_size(src.size(), ROTATE45_ANGLE)` and C channels.
///
/// # Example
///
/// ```
/// use pixbench_image::PixelBuffer;
/// use pixbench_imgproc::warp::{rotate45_bilinear, rotated_canvas_size, ROTATE45_ANGLE};
///
/// let image = PixelBuffer::from_size_val([8, 8].into(), 3, 200).unwrap();
/// let canvas = rotated_canvas_size(image.size(), ROTATE45_ANGLE);
/// let mut rotated = PixelBuffer::zeros(canvas, 3).unwrap();
///
/// rotate45_bilinear(&image, &mut rotated);
///
/// assert_eq!(rotated.size().width, 12);
/// // corners of the canvas are background, the centre holds the image
/// assert_eq!(rotated.get([0, 0, 0]), Some(&0));
/// assert_eq!(rotated.get([6, 6, 1]), Some(&200));
/// ```
pub fn rotate45_bilinear(src: &PixelBuffer, dst: &mut PixelBuffer) {
    debug_assert_eq!(rotated_canvas_size(src.size(), ROTATE45_ANGLE), dst.size());
    rotate_bilinear(src, dst, ROTATE45_ANGLE);
}
