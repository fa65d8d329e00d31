use pixbench_image::PixelBuffer;

use super::kernels::{GAUSSIAN_5X5, SOBEL_X, SOBEL_Y};
use crate::core::saturate_round;

/// Offset `i` by `delta` and snap the result into `[0, len - 1]`.
///
/// This is the replicate border policy: samples outside the image take the value of the
/// nearest edge sample.
#[inline]
fn clamp_index(i: usize, delta: isize, len: usize) -> usize {
    (i as isize + delta).clamp(0, len as isize - 1) as usize
}

/// Blur an image with the fixed 5x5 gaussian kernel.
///
/// Each channel is filtered independently. Border pixels replicate the nearest edge sample,
/// and the weighted sum is rounded to the nearest integer and saturated to `[0, 255]`.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
///
/// PRECONDITION: `src` and `dst` must have the same shape.
///
/// # Example
///
/// ```
/// use pixbench_image::PixelBuffer;
/// use pixbench_imgproc::filter::gaussian_blur_5x5;
///
/// let image = PixelBuffer::from_size_val([8, 8].into(), 3, 120).unwrap();
/// let mut blurred = PixelBuffer::zeros(image.size(), 3).unwrap();
///
/// gaussian_blur_5x5(&image, &mut blurred);
///
/// assert_eq!(blurred, image);
/// ```
pub fn gaussian_blur_5x5(src: &PixelBuffer, dst: &mut PixelBuffer) {
    debug_assert_eq!(src.size(), dst.size());
    debug_assert_eq!(src.num_channels(), dst.num_channels());

    let (rows, cols, ch) = (src.rows(), src.cols(), src.num_channels());
    if rows == 0 || cols == 0 || ch == 0 {
        return;
    }

    let src_data = src.as_slice();

    for (y, dst_row) in dst.as_slice_mut().chunks_exact_mut(cols * ch).enumerate() {
        for x in 0..cols {
            for c in 0..ch {
                let mut sum = 0.0;
                for (ky, kernel_row) in GAUSSIAN_5X5.iter().enumerate() {
                    let sy = clamp_index(y, ky as isize - 2, rows);
                    for (kx, &w) in kernel_row.iter().enumerate() {
                        let sx = clamp_index(x, kx as isize - 2, cols);
                        sum += src_data[(sy * cols + sx) * ch + c] as f64 * w;
                    }
                }
                dst_row[x * ch + c] = saturate_round(sum);
            }
        }
    }
}

/// Compute the sobel gradient magnitude of a single channel image.
///
/// The magnitude `sqrt(gx^2 + gy^2)` is truncated towards zero, and values above 255
/// saturate to 255. Border pixels replicate the nearest edge sample.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, 1).
/// * `dst` - The destination image with shape (H, W, 1).
///
/// PRECONDITION: `src` and `dst` must have the same size and a single channel.
pub fn sobel_magnitude(src: &PixelBuffer, dst: &mut PixelBuffer) {
    debug_assert_eq!(src.num_channels(), 1);
    debug_assert_eq!(dst.num_channels(), 1);
    debug_assert_eq!(src.size(), dst.size());

    let (rows, cols) = (src.rows(), src.cols());
    if rows == 0 || cols == 0 {
        return;
    }

    let src_data = src.as_slice();

    for (y, dst_row) in dst.as_slice_mut().chunks_exact_mut(cols).enumerate() {
        for (x, dst_pixel) in dst_row.iter_mut().enumerate() {
            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for ky in 0..3 {
                let py = clamp_index(y, ky as isize - 1, rows);
                for kx in 0..3 {
                    let px = clamp_index(x, kx as isize - 1, cols);
                    let v = src_data[py * cols + px] as f64;
                    sum_x += v * SOBEL_X[ky][kx] as f64;
                    sum_y += v * SOBEL_Y[ky][kx] as f64;
                }
            }

            let magnitude = (sum_x * sum_x + sum_y * sum_y).sqrt();
            *dst_pixel = if magnitude > 255.0 {
                255
            } else {
                magnitude as u8
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use pixbench_image::{ImageError, ImageSize, PixelBuffer};

    #[test]
    fn clamp_index() {
        assert_eq!(super::clamp_index(0, -2, 5), 0);
        assert_eq!(super::clamp_index(1, -2, 5), 0);
        assert_eq!(super::clamp_index(3, 1, 5), 4);
        assert_eq!(super::clamp_index(4, 2, 5), 4);
        assert_eq!(super::clamp_index(0, 1, 1), 0);
    }

    #[test]
    fn gaussian_blur_constant_is_fixed_point() -> Result<(), ImageError> {
        for val in [0u8, 1, 77, 128, 254, 255] {
            let image = PixelBuffer::from_size_val([7, 5].into(), 3, val)?;
            let mut dst = PixelBuffer::zeros(image.size(), 3)?;

            super::gaussian_blur_5x5(&image, &mut dst);

            assert_eq!(dst, image, "constant {val}");
        }
        Ok(())
    }

    #[test]
    fn gaussian_blur_impulse() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 9,
            height: 9,
        };
        let mut data = vec![0u8; size.area()];
        data[4 * 9 + 4] = 255;
        let image = PixelBuffer::new(size, 1, data)?;
        let mut dst = PixelBuffer::zeros(size, 1)?;

        super::gaussian_blur_5x5(&image, &mut dst);

        // 255 * 0.16210 = 41.3355
        assert_eq!(dst.get([4, 4, 0]), Some(&41));
        // 255 * 0.09832 = 25.0716
        assert_eq!(dst.get([4, 5, 0]), Some(&25));
        assert_eq!(dst.get([3, 4, 0]), Some(&25));
        // 255 * 0.00297 = 0.75735
        assert_eq!(dst.get([2, 2, 0]), Some(&1));
        // outside the kernel support
        assert_eq!(dst.get([1, 4, 0]), Some(&0));
        assert_eq!(dst.get([4, 7, 0]), Some(&0));

        Ok(())
    }

    #[test]
    fn gaussian_blur_single_pixel() -> Result<(), ImageError> {
        let image = PixelBuffer::new([1, 1].into(), 3, vec![10, 128, 250])?;
        let mut dst = PixelBuffer::zeros(image.size(), 3)?;

        super::gaussian_blur_5x5(&image, &mut dst);

        assert_eq!(dst, image);
        Ok(())
    }

    #[test]
    fn sobel_constant_is_zero() -> Result<(), ImageError> {
        let image = PixelBuffer::from_size_val([6, 4].into(), 1, 200)?;
        let mut dst = PixelBuffer::from_size_val(image.size(), 1, 9)?;

        super::sobel_magnitude(&image, &mut dst);

        assert!(dst.as_slice().iter().all(|&v| v == 0));
        Ok(())
    }

    #[test]
    fn sobel_vertical_step_saturates() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = PixelBuffer::new(
            [4, 3].into(),
            1,
            vec![
                0, 0, 255, 255,
                0, 0, 255, 255,
                0, 0, 255, 255,
            ],
        )?;
        let mut dst = PixelBuffer::zeros(image.size(), 1)?;

        super::sobel_magnitude(&image, &mut dst);

        for row in dst.as_slice().chunks_exact(4) {
            assert_eq!(row, &[0, 255, 255, 0]);
        }
        Ok(())
    }

    #[test]
    fn sobel_weak_step() -> Result<(), ImageError> {
        let image = PixelBuffer::new([4, 1].into(), 1, vec![0, 0, 10, 10])?;
        let mut dst = PixelBuffer::zeros(image.size(), 1)?;

        super::sobel_magnitude(&image, &mut dst);

        assert_eq!(dst.as_slice(), &[0, 40, 40, 0]);
        Ok(())
    }

    #[test]
    fn sobel_truncates_magnitude() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = PixelBuffer::new(
            [3, 3].into(),
            1,
            vec![
                0, 0, 0,
                0, 10, 0,
                0, 0, 0,
            ],
        )?;
        let mut dst = PixelBuffer::zeros(image.size(), 1)?;

        super::sobel_magnitude(&image, &mut dst);

        // corners see gx = gy = +-10, sqrt(200) = 14.14
        assert_eq!(dst.get([0, 0, 0]), Some(&14));
        assert_eq!(dst.get([2, 2, 0]), Some(&14));
        // edge midpoints see only one derivative: 20
        assert_eq!(dst.get([0, 1, 0]), Some(&20));
        assert_eq!(dst.get([1, 0, 0]), Some(&20));
        // the centre is symmetric
        assert_eq!(dst.get([1, 1, 0]), Some(&0));
        Ok(())
    }
}
