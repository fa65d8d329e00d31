use std::path::Path;

use image::ExtendedColorType;
use pixbench_image::{ImageSize, PixelBuffer};

use crate::error::IoError;

/// Reads an image from the given file path.
///
/// The method tries to read from any image format supported by the image crate. Images with
/// an alpha channel decode to 4 channels (RGBA8), every other image decodes to 3 channels
/// (RGB8), grayscale sources included.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A pixel buffer containing the decoded samples.
///
/// # Errors
///
/// Fails if the file does not exist, cannot be read, or is not a recognized image format.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<PixelBuffer, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::ImageReader::open(file_path)?
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let image = if img.color().has_alpha() {
        PixelBuffer::new(size, 4, img.into_rgba8().into_raw())?
    } else {
        PixelBuffer::new(size, 3, img.into_rgb8().into_raw())?
    };

    Ok(image)
}

/// Writes an image to the given file path.
///
/// The encoding is chosen from the file extension. Buffers with 1, 2, 3 or 4 channels are
/// stored as L8, LA8, RGB8 and RGBA8 respectively.
///
/// # Arguments
///
/// * `file_path` - The destination path, e.g. `output/rust-blur.png`.
/// * `image` - The pixel buffer to encode.
pub fn write_image_any(file_path: impl AsRef<Path>, image: &PixelBuffer) -> Result<(), IoError> {
    let color = match image.num_channels() {
        1 => ExtendedColorType::L8,
        2 => ExtendedColorType::La8,
        3 => ExtendedColorType::Rgb8,
        4 => ExtendedColorType::Rgba8,
        n => return Err(IoError::UnsupportedChannels(n)),
    };

    let [width, height]: [u32; 2] = image.size().into();
    image::save_buffer(file_path, image.as_slice(), width, height, color)?;

    Ok(())
}
