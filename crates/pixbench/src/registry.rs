use pixbench_image::{ImageSize, PixelBuffer};
use pixbench_imgproc::{color, enhance, filter, rotate, speckle, warp};

/// Signature shared by every benchmarked transform.
pub type KernelFn = fn(&PixelBuffer, &mut PixelBuffer);

/// Which of the prepared inputs a transform consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformInput {
    /// The decoded image as is.
    Original,
    /// The single channel luma derived once from the decoded image.
    Grayscale,
}

/// A benchmarked transform together with the geometry of its output.
#[derive(Clone, Copy, Debug)]
pub struct TransformDescriptor {
    /// Logical task name, matched by the task filter.
    pub name: &'static str,
    /// Output slug, used for the output file name and the slug filter.
    pub slug: &'static str,
    /// Human readable description, reported in the JSON and CSV outputs.
    pub description: &'static str,
    /// The input buffer the kernel reads.
    pub input: TransformInput,
    /// Size of the output buffer.
    pub output_size: ImageSize,
    /// Channels of the output buffer.
    pub output_channels: usize,
    /// The transform itself.
    pub kernel: KernelFn,
}

impl TransformDescriptor {
    /// Number of samples of the output buffer.
    pub fn output_len(&self) -> usize {
        self.output_size.area() * self.output_channels
    }
}

/// Build the transform catalog for an input image of the given geometry.
///
/// The order of the returned descriptors is the order of the report rows.
///
/// # Arguments
///
/// * `size` - The size of the decoded input image.
/// * `channels` - The channels of the decoded input image.
///
/// # Example
///
/// ```
/// use pixbench::registry::registry;
///
/// let transforms = registry([640, 480].into(), 3);
///
/// assert_eq!(transforms.len(), 7);
/// assert_eq!(transforms[0].name, "invert");
/// assert_eq!(transforms[4].output_size, [480, 640].into());
/// ```
pub fn registry(size: ImageSize, channels: usize) -> Vec<TransformDescriptor> {
    let rotated_size = warp::rotated_canvas_size(size, warp::ROTATE45_ANGLE);

    vec![
        TransformDescriptor {
            name: "invert",
            slug: "rust-invert",
            description: "Invert every sample (255 - v)",
            input: TransformInput::Original,
            output_size: size,
            output_channels: channels,
            kernel: enhance::invert,
        },
        TransformDescriptor {
            name: "grayscale",
            slug: "rust-grayscale",
            description: "Luma conversion with 0.299/0.587/0.114 weights",
            input: TransformInput::Original,
            output_size: size,
            output_channels: 1,
            kernel: color::gray_from_rgb_u8,
        },
        TransformDescriptor {
            name: "blur",
            slug: "rust-blur",
            description: "5x5 gaussian blur with replicated borders",
            input: TransformInput::Original,
            output_size: size,
            output_channels: channels,
            kernel: filter::gaussian_blur_5x5,
        },
        TransformDescriptor {
            name: "edge_detect_sobel",
            slug: "rust-sobel",
            description: "3x3 sobel gradient magnitude on the luma",
            input: TransformInput::Grayscale,
            output_size: size,
            output_channels: 1,
            kernel: filter::sobel_magnitude,
        },
        TransformDescriptor {
            name: "rotate_90",
            slug: "rust-rotate90",
            description: "Lossless 90 degree clockwise rotation",
            input: TransformInput::Original,
            output_size: size.transposed(),
            output_channels: channels,
            kernel: rotate::rotate90_cw,
        },
        TransformDescriptor {
            name: "rotate_arbitrary",
            slug: "rust-rotate45",
            description: "45 degree bilinear rotation onto an expanded canvas",
            input: TransformInput::Original,
            output_size: rotated_size,
            output_channels: channels,
            kernel: warp::rotate45_bilinear,
        },
        TransformDescriptor {
            name: "lee_filter",
            slug: "rust-lee",
            description: "Adaptive 7x7 Lee speckle filter on the luma",
            input: TransformInput::Grayscale,
            output_size: size,
            output_channels: 1,
            kernel: speckle::lee_filter,
        },
    ]
}
