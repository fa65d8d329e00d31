use pixbench_image::ImageError;
use pixbench_io::IoError;

/// An error type for the benchmark harness.
#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    /// The input image could not be read or decoded.
    #[error("Failed to load the input image. {0}")]
    Decode(#[from] IoError),

    /// A whole-run working buffer could not be created.
    #[error("Failed to create a working buffer. {0}")]
    Allocation(#[from] ImageError),

    /// The timing sample storage could not be reserved.
    #[error("Failed to allocate storage for {0} timing samples")]
    SampleAllocation(usize),

    /// The iteration count must be at least one.
    #[error("Iteration count must be >= 1, got {0}")]
    InvalidIterations(usize),

    /// Statistics need at least one sample.
    #[error("Cannot compute statistics over an empty sample set")]
    EmptySamples,

    /// The report could not be serialized.
    #[error("Failed to serialize the report. {0}")]
    Serialize(#[from] serde_json::Error),

    /// The report could not be formatted.
    #[error("Failed to format the report. {0}")]
    Report(#[from] std::fmt::Error),
}
