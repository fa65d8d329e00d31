use pixbench_image::PixelBuffer;

/// Rotate the input image 90 degrees clockwise.
///
/// The output has the width and height of the input swapped. Pixel `(x, y)` of the input
/// lands on `(h - 1 - y, x)` of the output, so the rotation is an exact permutation of pixels.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `dst` - The output image with shape (W, H, C).
///
/// PRECONDITION: `dst` must have the transposed size of `src` and the same channels.
///
/// # Example
///
/// ```
/// use pixbench_image::{ImageSize, PixelBuffer};
/// use pixbench_imgproc::rotate::rotate90_cw;
///
/// let image = PixelBuffer::new(
///     ImageSize {
///         width: 3,
///         height: 2,
///     },
///     1,
///     vec![1, 2, 3, 4, 5, 6],
/// )
/// .unwrap();
///
/// let mut rotated = PixelBuffer::zeros(image.size().transposed(), 1).unwrap();
///
/// rotate90_cw(&image, &mut rotated);
///
/// assert_eq!(rotated.size().width, 2);
/// assert_eq!(rotated.size().height, 3);
/// assert_eq!(rotated.as_slice(), &[4, 1, 5, 2, 6, 3]);
/// ```
pub fn rotate90_cw(src: &PixelBuffer, dst: &mut PixelBuffer) {
    debug_assert_eq!(src.size().transposed(), dst.size());
    debug_assert_eq!(src.num_channels(), dst.num_channels());

    let (rows, cols, ch) = (src.rows(), src.cols(), src.num_channels());
    if rows == 0 || cols == 0 || ch == 0 {
        return;
    }

    let dst_cols = rows;
    let dst_data = dst.as_slice_mut();

    for (iy, src_row) in src.as_slice().chunks_exact(cols * ch).enumerate() {
        let dst_x = rows - 1 - iy;
        for (ix, src_pixel) in src_row.chunks_exact(ch).enumerate() {
            let offset = (ix * dst_cols + dst_x) * ch;
            dst_data[offset..offset + ch].copy_from_slice(src_pixel);
        }
    }
}
