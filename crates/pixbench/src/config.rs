use std::path::PathBuf;

use crate::error::BenchError;
use crate::registry::TransformDescriptor;

/// Default number of measured iterations per transform.
pub const DEFAULT_ITERATIONS: usize = 101;

/// Default extension, and therefore encoding, of the output images.
pub const DEFAULT_EXTENSION: &str = "png";

/// Parameters of a benchmark run.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchConfig {
    /// Measured iterations per transform, at least one.
    pub iterations: usize,
    /// Iterations run and discarded before measuring.
    pub warmup: usize,
    /// Only run the transform with this logical name.
    pub task: Option<String>,
    /// Only run the transform with this output slug.
    pub slug: Option<String>,
    /// Directory receiving the output images, derived from the image path when absent.
    pub output_dir: Option<PathBuf>,
    /// Extension of the output image files.
    pub extension: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            warmup: 0,
            task: None,
            slug: None,
            output_dir: None,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl BenchConfig {
    /// Check the configuration before any work is done.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.iterations == 0 {
            return Err(BenchError::InvalidIterations(self.iterations));
        }
        Ok(())
    }

    /// Whether the transform passes the task and slug filters.
    ///
    /// Filters compare exact strings; an absent filter matches everything.
    pub fn matches(&self, transform: &TransformDescriptor) -> bool {
        let task_ok = self.task.as_deref().map_or(true, |task| task == transform.name);
        let slug_ok = self.slug.as_deref().map_or(true, |slug| slug == transform.slug);
        task_ok && slug_ok
    }
}
