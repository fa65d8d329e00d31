use pixbench_image::PixelBuffer;

/// Define the RGB weights for the grayscale conversion.
const RW: f64 = 0.299;
const GW: f64 = 0.587;
const BW: f64 = 0.114;

/// Convert an RGB8 image to grayscale using the formula:
///
/// Y = round(0.299 * R + 0.587 * G + 0.114 * B)
///
/// Channels beyond the third one (e.g. alpha) are ignored.
///
/// # Arguments
///
/// * `src` - The input image with at least 3 channels.
/// * `dst` - The output grayscale image.
///
/// Precondition: the input image must have at least 3 channels.
/// Precondition: the output image must have 1 channel.
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use pixbench_image::{ImageSize, PixelBuffer};
/// use pixbench_imgproc::color::gray_from_rgb_u8;
///
/// let image = PixelBuffer::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     3,
///     vec![255, 0, 0, 0, 255, 0],
/// )
/// .unwrap();
///
/// let mut gray = PixelBuffer::zeros(image.size(), 1).unwrap();
///
/// gray_from_rgb_u8(&image, &mut gray);
/// assert_eq!(gray.as_slice(), &[76, 150]);
/// ```
pub fn gray_from_rgb_u8(src: &PixelBuffer, dst: &mut PixelBuffer) {
    debug_assert!(src.num_channels() >= 3);
    debug_assert_eq!(dst.num_channels(), 1);
    debug_assert_eq!(src.size(), dst.size());

    src.as_slice()
        .chunks_exact(src.num_channels())
        .zip(dst.as_slice_mut().iter_mut())
        .for_each(|(src_pixel, dst_pixel)| {
            let r = src_pixel[0] as f64;
            let g = src_pixel[1] as f64;
            let b = src_pixel[2] as f64;
            // convex combination of the channels, always in [0, 255]
            *dst_pixel = (RW * r + GW * g + BW * b).round() as u8;
        });
}

#[cfg(test)]
mod tests {
    use pixbench_image::{ImageError, ImageSize, PixelBuffer};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn gray_from_rgb_regression() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = PixelBuffer::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            3,
            vec![
                255, 0, 0,
                0, 255, 0,
                0, 0, 255,
                255, 255, 255,
                0, 0, 0,
                10, 20, 30,
            ],
        )?;

        let mut gray = PixelBuffer::zeros(image.size(), 1)?;

        super::gray_from_rgb_u8(&image, &mut gray);

        // 2.99 + 11.74 + 3.42 = 18.15
        assert_eq!(gray.as_slice(), &[76, 150, 29, 255, 0, 18]);

        Ok(())
    }

    #[test]
    fn gray_from_rgba_ignores_alpha() -> Result<(), ImageError> {
        let image = PixelBuffer::new([1, 1].into(), 4, vec![100, 100, 100, 7])?;
        let mut gray = PixelBuffer::zeros(image.size(), 1)?;

        super::gray_from_rgb_u8(&image, &mut gray);

        assert_eq!(gray.as_slice(), &[100]);
        Ok(())
    }

    #[test]
    fn gray_within_channel_bounds() -> Result<(), ImageError> {
        let mut rng = StdRng::seed_from_u64(7);
        let size = ImageSize {
            width: 31,
            height: 17,
        };
        let data = (0..size.area() * 3).map(|_| rng.random::<u8>()).collect();
        let image = PixelBuffer::new(size, 3, data)?;
        let mut gray = PixelBuffer::zeros(size, 1)?;

        super::gray_from_rgb_u8(&image, &mut gray);

        for (rgb, &y) in image.as_slice().chunks_exact(3).zip(gray.as_slice()) {
            let lo = *rgb.iter().min().unwrap();
            let hi = *rgb.iter().max().unwrap();
            assert!(lo <= y && y <= hi, "{rgb:?} -> {y}");
        }

        Ok(())
    }

    #[test]
    fn gray_of_equal_channels_is_identity() -> Result<(), ImageError> {
        let data = (0..=255u8).flat_map(|v| [v, v, v]).collect();
        let image = PixelBuffer::new([256, 1].into(), 3, data)?;
        let mut gray = PixelBuffer::zeros(image.size(), 1)?;

        super::gray_from_rgb_u8(&image, &mut gray);

        let expected = (0..=255u8).collect::<Vec<_>>();
        assert_eq!(gray.as_slice(), expected.as_slice());
        Ok(())
    }
}
