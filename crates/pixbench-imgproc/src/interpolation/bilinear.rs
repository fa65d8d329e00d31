use pixbench_image::PixelBuffer;

/// Kernel for bilinear interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the sample.
/// * `v` - The y coordinate of the sample.
/// * `channel` - The channel to interpolate.
///
/// # Returns
///
/// The weighted average of the four samples surrounding `(u, v)`, not rounded.
///
/// PRECONDITION: `0 <= u < width - 1` and `0 <= v < height - 1`, so that the whole 2x2
/// neighbourhood lies inside the image.
///
/// # Example
///
/// ```
/// use pixbench_image::PixelBuffer;
/// use pixbench_imgproc::interpolation::bilinear_sample;
///
/// let image = PixelBuffer::new([2, 2].into(), 1, vec![0, 100, 100, 200]).unwrap();
///
/// assert_eq!(bilinear_sample(&image, 0.5, 0.5, 0), 100.0);
/// ```
pub fn bilinear_sample(image: &PixelBuffer, u: f64, v: f64, channel: usize) -> f64 {
    let (cols, ch) = (image.cols(), image.num_channels());

    let iu = u.floor() as usize;
    let iv = v.floor() as usize;

    let frac_u = u - iu as f64;
    let frac_v = v - iv as f64;

    let base00 = (iv * cols + iu) * ch + channel;
    let base01 = base00 + ch;
    let base10 = ((iv + 1) * cols + iu) * ch + channel;
    let base11 = base10 + ch;

    let data = image.as_slice();

    (1.0 - frac_u) * (1.0 - frac_v) * data[base00] as f64
        + frac_u * (1.0 - frac_v) * data[base01] as f64
        + (1.0 - frac_u) * frac_v * data[base10] as f64
        + frac_u * frac_v * data[base11] as f64
}
