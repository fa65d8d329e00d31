use std::path::{Component, Path, PathBuf};

use pixbench_image::PixelBuffer;

use crate::error::BenchError;
use crate::registry::TransformDescriptor;

/// Name of the directory receiving the output images.
pub const OUTPUT_DIR_NAME: &str = "output";

/// Receives the final output buffer of every benchmarked transform.
pub trait Sink {
    /// Persist the output of `transform`.
    fn persist(
        &mut self,
        transform: &TransformDescriptor,
        output: &PixelBuffer,
    ) -> Result<(), BenchError>;
}

/// Writes every output to `<output_dir>/<slug>.<extension>`.
pub struct ImageFileSink {
    output_dir: PathBuf,
    extension: String,
}

impl ImageFileSink {
    /// Create a sink writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            extension: extension.into(),
        }
    }

    /// The file an output with the given slug is written to.
    pub fn path_for(&self, slug: &str) -> PathBuf {
        self.output_dir.join(format!("{}.{}", slug, self.extension))
    }
}

impl Sink for ImageFileSink {
    fn persist(
        &mut self,
        transform: &TransformDescriptor,
        output: &PixelBuffer,
    ) -> Result<(), BenchError> {
        let path = self.path_for(transform.slug);
        log::debug!("writing {} to {}", transform.slug, path.display());
        pixbench_io::functional::write_image_any(&path, output)?;
        Ok(())
    }
}

/// Derive the output directory from the input image path.
///
/// The result is the `output` sibling of the directory holding the image, so
/// `bench/images/lenna.png` maps to `bench/output`. A trailing named directory is stripped
/// lexically, any other directory (`.`, `..`) gets `..` appended instead. An image given
/// without any directory maps to `../output`.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use pixbench::sink::output_dir_for;
///
/// assert_eq!(
///     output_dir_for(Path::new("bench/images/lenna.png")),
///     Path::new("bench/output")
/// );
/// assert_eq!(
///     output_dir_for(Path::new("../lenna.png")),
///     Path::new("../../output")
/// );
/// ```
pub fn output_dir_for(image_path: &Path) -> PathBuf {
    let image_dir = image_path.parent().unwrap_or(Path::new(""));

    match image_dir.components().next_back() {
        None | Some(Component::CurDir) => Path::new("..").join(OUTPUT_DIR_NAME),
        Some(Component::Normal(_)) => image_dir
            .parent()
            .unwrap_or(Path::new(""))
            .join(OUTPUT_DIR_NAME),
        Some(Component::ParentDir) => image_dir.join("..").join(OUTPUT_DIR_NAME),
        // the root is its own parent
        Some(Component::RootDir | Component::Prefix(_)) => image_dir.join(OUTPUT_DIR_NAME),
    }
}

/// Create the output directory if it is missing.
///
/// Failure is not fatal: it is logged and the run goes on, later writes into the directory
/// then fail and are logged one by one.
pub fn ensure_output_dir(output_dir: &Path) -> bool {
    match std::fs::create_dir_all(output_dir) {
        Ok(()) => true,
        Err(e) => {
            log::warn!(
                "failed to create output directory {}: {}",
                output_dir.display(),
                e
            );
            false
        }
    }
}
