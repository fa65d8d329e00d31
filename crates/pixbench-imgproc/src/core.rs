use pixbench_image::PixelBuffer;

/// Round to the nearest integer (half away from zero) and saturate into the `u8` range.
#[inline]
pub(crate) fn saturate_round(value: f64) -> u8 {
    num_traits::clamp(value.round(), 0.0, 255.0) as u8
}

/// Compute the mean and the population variance over every sample of an image.
///
/// The variance is computed in one pass as `E[x^2] - E[x]^2`.
///
/// # Arguments
///
/// * `image` - The input image, usually single channel.
///
/// # Returns
///
/// A tuple `(mean, variance)`. An empty image yields `(0.0, 0.0)`.
///
/// # Example
///
/// ```
/// use pixbench_image::PixelBuffer;
/// use pixbench_imgproc::core::global_mean_var;
///
/// let image = PixelBuffer::new([2, 2].into(), 1, vec![0, 0, 10, 10]).unwrap();
///
/// let (mean, var) = global_mean_var(&image);
///
/// assert_eq!(mean, 5.0);
/// assert_eq!(var, 25.0);
/// ```
pub fn global_mean_var(image: &PixelBuffer) -> (f64, f64) {
    let data = image.as_slice();
    if data.is_empty() {
        return (0.0, 0.0);
    }

    let (sum, sq_sum) = data.iter().fold((0f64, 0f64), |(sum, sq_sum), &v| {
        let v = v as f64;
        (sum + v, sq_sum + v * v)
    });

    let n = data.len() as f64;
    let mean = sum / n;
    let var = sq_sum / n - mean * mean;

    (mean, var)
}
