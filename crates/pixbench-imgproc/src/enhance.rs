use pixbench_image::PixelBuffer;

/// Invert every sample of an image: `dst = 255 - src`.
///
/// Works on any number of channels, alpha included.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `dst` - The output image with shape (H, W, C).
///
/// Precondition: `src` and `dst` must have the same size and number of channels.
///
/// # Example
///
/// ```
/// use pixbench_image::PixelBuffer;
/// use pixbench_imgproc::enhance::invert;
///
/// let image = PixelBuffer::new([2, 1].into(), 1, vec![0, 200]).unwrap();
/// let mut inverted = PixelBuffer::zeros(image.size(), 1).unwrap();
///
/// invert(&image, &mut inverted);
///
/// assert_eq!(inverted.as_slice(), &[255, 55]);
/// ```
pub fn invert(src: &PixelBuffer, dst: &mut PixelBuffer) {
    debug_assert_eq!(src.size(), dst.size());
    debug_assert_eq!(src.num_channels(), dst.num_channels());

    dst.as_slice_mut()
        .iter_mut()
        .zip(src.as_slice())
        .for_each(|(d, &s)| *d = 255 - s);
}
