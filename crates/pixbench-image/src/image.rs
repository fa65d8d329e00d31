use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use pixbench_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by the size.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// The same size with width and height swapped.
    pub fn transposed(&self) -> Self {
        ImageSize {
            width: self.height,
            height: self.width,
        }
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

impl From<ImageSize> for [u32; 2] {
    fn from(size: ImageSize) -> Self {
        [size.width as u32, size.height as u32]
    }
}

/// A decoded raster image held as raw 8-bit samples.
///
/// The samples are stored row-major and channel-interleaved: the sample for channel `c` of the
/// pixel at `(x, y)` lives at index `(y * width + x) * channels + c`.
///
/// The length of the sample buffer always equals `width * height * channels`.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    size: ImageSize,
    channels: usize,
    data: Vec<u8>,
}

/// Number of samples needed for the given geometry, `None` on overflow.
fn num_samples(size: ImageSize, channels: usize) -> Option<usize> {
    size.width
        .checked_mul(size.height)
        .and_then(|n| n.checked_mul(channels))
}

/// Allocate `len` samples set to `val`, reporting allocation failure instead of aborting.
fn try_alloc_samples(len: usize, val: u8) -> Result<Vec<u8>, ImageError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| ImageError::AllocationFailed(len))?;
    data.resize(len, val);
    Ok(data)
}

impl PixelBuffer {
    /// Create a new pixel buffer from raw sample data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `channels` - The number of interleaved channels per pixel.
    /// * `data` - The sample data of the image.
    ///
    /// # Errors
    ///
    /// If the length of the sample data does not match the image geometry, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixbench_image::{ImageSize, PixelBuffer};
    ///
    /// let image = PixelBuffer::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     3,
    ///     vec![0u8; 10 * 20 * 3],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, channels: usize, data: Vec<u8>) -> Result<Self, ImageError> {
        let expected = num_samples(size, channels).unwrap_or(usize::MAX);
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        Ok(Self {
            size,
            channels,
            data,
        })
    }

    /// Create a new pixel buffer with every sample set to `val`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::AllocationFailed`] if the storage cannot be reserved.
    pub fn from_size_val(size: ImageSize, channels: usize, val: u8) -> Result<Self, ImageError> {
        let len = num_samples(size, channels).ok_or(ImageError::AllocationFailed(usize::MAX))?;
        let data = try_alloc_samples(len, val)?;

        Ok(Self {
            size,
            channels,
            data,
        })
    }

    /// Allocate a zero-filled pixel buffer.
    ///
    /// The allocation is fallible so that callers can recover from running out of memory on
    /// large outputs.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixbench_image::{ImageSize, PixelBuffer};
    ///
    /// let image = PixelBuffer::zeros([4, 2].into(), 1).unwrap();
    ///
    /// assert_eq!(image.as_slice(), &[0u8; 8]);
    /// ```
    pub fn zeros(size: ImageSize, channels: usize) -> Result<Self, ImageError> {
        Self::from_size_val(size, channels, 0)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        self.channels
    }

    /// The raw samples of the image.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// The raw samples of the image, mutably.
    ///
    /// The length of the buffer cannot change through this slice.
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Get the sample at `[y, x, channel]`, or `None` when out of bounds.
    pub fn get(&self, index: [usize; 3]) -> Option<&u8> {
        let [y, x, c] = index;
        if y >= self.height() || x >= self.width() || c >= self.channels {
            return None;
        }
        self.data.get((y * self.width() + x) * self.channels + c)
    }
}
