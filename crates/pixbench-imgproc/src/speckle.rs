use pixbench_image::PixelBuffer;

use crate::core::{global_mean_var, saturate_round};

/// Half size of the local statistics window (7x7).
const LEE_HALF_WINDOW: usize = 3;

/// Reduce speckle noise with an adaptive Lee filter.
///
/// For every pixel the mean and variance of the surrounding 7x7 window are computed. Near the
/// borders the window is clipped to the image and the statistics use the number of samples
/// actually covered. The output is
///
/// `local_mean + w * (pixel - local_mean)` with `w = local_var / (local_var + global_var)`
///
/// rounded and saturated to `[0, 255]`. Flat regions are smoothed towards their mean while
/// high variance regions (edges) are preserved. An image with zero global variance is copied
/// unchanged.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, 1).
/// * `dst` - The destination image with shape (H, W, 1).
///
/// PRECONDITION: `src` and `dst` must have the same size and a single channel.
///
/// # Example
///
/// ```
/// use pixbench_image::PixelBuffer;
/// use pixbench_imgproc::speckle::lee_filter;
///
/// let image = PixelBuffer::from_size_val([16, 16].into(), 1, 42).unwrap();
/// let mut filtered = PixelBuffer::zeros(image.size(), 1).unwrap();
///
/// lee_filter(&image, &mut filtered);
///
/// assert_eq!(filtered, image);
/// ```
pub fn lee_filter(src: &PixelBuffer, dst: &mut PixelBuffer) {
    debug_assert_eq!(src.num_channels(), 1);
    debug_assert_eq!(dst.num_channels(), 1);
    debug_assert_eq!(src.size(), dst.size());

    let (rows, cols) = (src.rows(), src.cols());
    let src_data = src.as_slice();

    let (_, global_var) = global_mean_var(src);

    if global_var == 0.0 {
        dst.as_slice_mut().copy_from_slice(src_data);
        return;
    }

    for (y, dst_row) in dst.as_slice_mut().chunks_exact_mut(cols).enumerate() {
        let y0 = y.saturating_sub(LEE_HALF_WINDOW);
        let y1 = (y + LEE_HALF_WINDOW + 1).min(rows);

        for (x, dst_pixel) in dst_row.iter_mut().enumerate() {
            let x0 = x.saturating_sub(LEE_HALF_WINDOW);
            let x1 = (x + LEE_HALF_WINDOW + 1).min(cols);

            let mut local_sum = 0.0;
            let mut local_sq_sum = 0.0;
            for window_row in src_data[y0 * cols..y1 * cols].chunks_exact(cols) {
                for &v in &window_row[x0..x1] {
                    let v = v as f64;
                    local_sum += v;
                    local_sq_sum += v * v;
                }
            }

            let count = ((y1 - y0) * (x1 - x0)) as f64;
            let local_mean = local_sum / count;
            let local_var = local_sq_sum / count - local_mean * local_mean;
            let weight = local_var / (local_var + global_var);

            let pixel = src_data[y * cols + x] as f64;
            *dst_pixel = saturate_round(local_mean + weight * (pixel - local_mean));
        }
    }
}
