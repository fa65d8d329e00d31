/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image geometry.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the pixel storage could not be allocated.
    #[error("Failed to allocate {0} bytes of pixel storage")]
    AllocationFailed(usize),

    /// Error when the channel count is not usable by an operation.
    #[error("Unsupported number of channels: {0}")]
    UnsupportedChannels(usize),
}
