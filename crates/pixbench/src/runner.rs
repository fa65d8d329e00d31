use std::path::Path;
use std::time::Instant;

use pixbench_image::{ImageError, PixelBuffer};
use pixbench_imgproc::color::gray_from_rgb_u8;
use serde::Serialize;

use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::registry::{registry, TransformDescriptor, TransformInput};
use crate::sink::{ensure_output_dir, output_dir_for, ImageFileSink, Sink};
use crate::stats::Stats;

/// The inputs shared by every transform of a run.
///
/// Both buffers are created once and only ever borrowed immutably by the kernels.
pub struct BenchInput {
    /// The decoded image.
    pub original: PixelBuffer,
    /// The luma of `original`, read by the single channel transforms.
    pub grayscale: PixelBuffer,
}

impl BenchInput {
    /// Prepare the inputs from an already decoded image.
    ///
    /// # Errors
    ///
    /// The image needs at least three channels to derive the luma, otherwise
    /// [`ImageError::UnsupportedChannels`] is returned.
    pub fn new(original: PixelBuffer) -> Result<Self, BenchError> {
        if original.num_channels() < 3 {
            return Err(ImageError::UnsupportedChannels(original.num_channels()).into());
        }

        let mut grayscale = PixelBuffer::zeros(original.size(), 1)?;
        gray_from_rgb_u8(&original, &mut grayscale);

        Ok(Self {
            original,
            grayscale,
        })
    }

    /// Decode the image at `path` and prepare the inputs.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BenchError> {
        let original = pixbench_io::functional::read_image_any(path)?;
        Self::new(original)
    }

    /// The buffer the given transform reads.
    pub fn for_transform(&self, transform: &TransformDescriptor) -> &PixelBuffer {
        match transform.input {
            TransformInput::Original => &self.original,
            TransformInput::Grayscale => &self.grayscale,
        }
    }
}

/// The measurements of one transform.
#[derive(Clone, Debug, Serialize)]
pub struct BenchmarkResult {
    /// Logical task name.
    pub task: String,
    /// Output slug.
    pub slug: String,
    /// Human readable description of the transform.
    pub description: String,
    /// Number of measured iterations.
    pub iterations: usize,
    /// Summary statistics of `times`.
    #[serde(flatten)]
    pub stats: Stats,
    /// Raw per-iteration timings in seconds, in iteration order.
    pub times: Vec<f64>,
}

/// A transform that was not measured.
#[derive(Clone, Debug)]
pub struct SkippedTransform {
    /// Logical task name.
    pub task: String,
    /// Output slug.
    pub slug: String,
    /// Why the transform did not run.
    pub reason: String,
}

/// Everything a run produced.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    /// One result per executed transform, in registration order.
    pub results: Vec<BenchmarkResult>,
    /// Transforms whose output buffer could not be created.
    pub skipped: Vec<SkippedTransform>,
}

/// Times every selected transform over the configured number of iterations.
pub struct Runner {
    config: BenchConfig,
}

impl Runner {
    /// Create a runner, rejecting an invalid configuration up front.
    pub fn new(config: BenchConfig) -> Result<Self, BenchError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration of the runner.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Run the transforms passing the configured filters, in the given order.
    ///
    /// The final output of every executed transform is handed to `sink`. A sink failure is
    /// logged and does not stop the run.
    ///
    /// # Errors
    ///
    /// Only whole-run failures are returned, e.g. when the timing storage cannot be reserved.
    pub fn run(
        &self,
        input: &BenchInput,
        transforms: &[TransformDescriptor],
        sink: &mut dyn Sink,
    ) -> Result<RunSummary, BenchError> {
        let mut summary = RunSummary::default();

        for transform in transforms.iter().filter(|t| self.config.matches(t)) {
            let mut output =
                match PixelBuffer::zeros(transform.output_size, transform.output_channels) {
                    Ok(output) => output,
                    Err(e) => {
                        log::warn!("skipping {}: {}", transform.slug, e);
                        summary.skipped.push(SkippedTransform {
                            task: transform.name.to_string(),
                            slug: transform.slug.to_string(),
                            reason: e.to_string(),
                        });
                        continue;
                    }
                };

            let result =
                self.run_transform(transform, input.for_transform(transform), &mut output)?;

            if let Err(e) = sink.persist(transform, &output) {
                log::warn!("failed to persist {}: {}", transform.slug, e);
            }

            summary.results.push(result);
        }

        if summary.results.is_empty() && summary.skipped.is_empty() {
            log::warn!(
                "no transform matches task {:?} and slug {:?}",
                self.config.task,
                self.config.slug
            );
        }

        Ok(summary)
    }

    /// Time a single transform writing into `output`.
    ///
    /// The warmup iterations run first and are discarded. Each measured sample covers the
    /// kernel call alone.
    pub fn run_transform(
        &self,
        transform: &TransformDescriptor,
        input: &PixelBuffer,
        output: &mut PixelBuffer,
    ) -> Result<BenchmarkResult, BenchError> {
        let iterations = self.config.iterations;

        log::info!("running {}", transform.slug);
        log::debug!(
            "{}: input {} x{} -> output {} x{}",
            transform.slug,
            input.size(),
            input.num_channels(),
            output.size(),
            output.num_channels()
        );

        let mut times = Vec::new();
        times
            .try_reserve_exact(iterations)
            .map_err(|_| BenchError::SampleAllocation(iterations))?;

        for _ in 0..self.config.warmup {
            (transform.kernel)(input, output);
        }

        for _ in 0..iterations {
            let start = Instant::now();
            (transform.kernel)(input, output);
            times.push(start.elapsed().as_secs_f64());
        }

        let stats = Stats::from_samples(&times)?;

        Ok(BenchmarkResult {
            task: transform.name.to_string(),
            slug: transform.slug.to_string(),
            description: transform.description.to_string(),
            iterations,
            stats,
            times,
        })
    }
}

/// Benchmark every selected transform on the image at `image_path`.
///
/// Outputs are written to the configured output directory, or next to the image directory
/// when none is configured.
pub fn run_suite(
    image_path: impl AsRef<Path>,
    config: BenchConfig,
) -> Result<RunSummary, BenchError> {
    let image_path = image_path.as_ref();
    let runner = Runner::new(config)?;

    let input = BenchInput::load(image_path)?;
    log::info!(
        "loaded {}: {} with {} channels",
        image_path.display(),
        input.original.size(),
        input.original.num_channels()
    );

    let transforms = registry(input.original.size(), input.original.num_channels());

    let output_dir = match &runner.config().output_dir {
        Some(dir) => dir.clone(),
        None => output_dir_for(image_path),
    };
    ensure_output_dir(&output_dir);

    let mut sink = ImageFileSink::new(output_dir, runner.config().extension.clone());
    runner.run(&input, &transforms, &mut sink)
}

#[cfg(test)]
mod tests {
    use pixbench_image::{ImageError, PixelBuffer};

    use super::{BenchInput, Runner};
    use crate::config::BenchConfig;
    use crate::error::BenchError;
    use crate::registry::{registry, TransformDescriptor};
    use crate::sink::Sink;

    #[derive(Default)]
    struct CollectSink {
        outputs: Vec<(String, PixelBuffer)>,
    }

    impl Sink for CollectSink {
        fn persist(
            &mut self,
            transform: &TransformDescriptor,
            output: &PixelBuffer,
        ) -> Result<(), BenchError> {
            self.outputs.push((transform.slug.to_string(), output.clone()));
            Ok(())
        }
    }

    struct FailingSink;

    impl Sink for FailingSink {
        fn persist(&mut self, _: &TransformDescriptor, _: &PixelBuffer) -> Result<(), BenchError> {
            Err(BenchError::EmptySamples)
        }
    }

    fn rgb_input() -> Result<BenchInput, BenchError> {
        let data = (0..4 * 3 * 3).map(|v| (v * 7) as u8).collect();
        let original = PixelBuffer::new([4, 3].into(), 3, data)?;
        BenchInput::new(original)
    }

    fn config(iterations: usize) -> BenchConfig {
        BenchConfig {
            iterations,
            ..Default::default()
        }
    }

    #[test]
    fn input_needs_three_channels() -> Result<(), ImageError> {
        let gray = PixelBuffer::zeros([2, 2].into(), 1)?;
        assert!(matches!(
            BenchInput::new(gray),
            Err(BenchError::Allocation(ImageError::UnsupportedChannels(1)))
        ));
        Ok(())
    }

    #[test]
    fn input_derives_grayscale() -> Result<(), BenchError> {
        let original = PixelBuffer::new([1, 1].into(), 3, vec![100, 100, 100])?;
        let input = BenchInput::new(original)?;
        assert_eq!(input.grayscale.as_slice(), &[100]);
        Ok(())
    }

    #[test]
    fn runner_rejects_zero_iterations() {
        assert!(matches!(
            Runner::new(config(0)),
            Err(BenchError::InvalidIterations(0))
        ));
    }

    #[test]
    fn run_all_transforms() -> Result<(), BenchError> {
        let input = rgb_input()?;
        let transforms = registry(input.original.size(), 3);
        let runner = Runner::new(config(3))?;
        let mut sink = CollectSink::default();

        let summary = runner.run(&input, &transforms, &mut sink)?;

        assert!(summary.skipped.is_empty());
        assert_eq!(summary.results.len(), transforms.len());
        for (result, transform) in summary.results.iter().zip(&transforms) {
            assert_eq!(result.task, transform.name);
            assert_eq!(result.slug, transform.slug);
            assert_eq!(result.iterations, 3);
            assert_eq!(result.times.len(), 3);
            assert!(result.times.iter().all(|t| *t >= 0.0));
            assert!(result.stats.min <= result.stats.median);
            assert!(result.stats.median <= result.stats.max);
        }

        assert_eq!(sink.outputs.len(), transforms.len());
        for ((slug, output), transform) in sink.outputs.iter().zip(&transforms) {
            assert_eq!(slug, transform.slug);
            assert_eq!(output.as_slice().len(), transform.output_len());
        }
        Ok(())
    }

    #[test]
    fn run_persists_last_output() -> Result<(), BenchError> {
        let input = rgb_input()?;
        let transforms = registry(input.original.size(), 3);
        let runner = Runner::new(BenchConfig {
            iterations: 2,
            warmup: 1,
            task: Some("invert".to_string()),
            ..Default::default()
        })?;
        let mut sink = CollectSink::default();

        let summary = runner.run(&input, &transforms, &mut sink)?;

        assert_eq!(summary.results.len(), 1);
        // warmup runs are not measured
        assert_eq!(summary.results[0].times.len(), 2);

        let (slug, output) = &sink.outputs[0];
        assert_eq!(slug, "rust-invert");
        for (o, i) in output.as_slice().iter().zip(input.original.as_slice()) {
            assert_eq!(*o, 255 - *i);
        }
        Ok(())
    }

    #[test]
    fn run_unknown_filter_is_empty() -> Result<(), BenchError> {
        let input = rgb_input()?;
        let transforms = registry(input.original.size(), 3);
        let runner = Runner::new(BenchConfig {
            task: Some("sharpen".to_string()),
            ..config(1)
        })?;
        let mut sink = CollectSink::default();

        let summary = runner.run(&input, &transforms, &mut sink)?;

        assert!(summary.results.is_empty());
        assert!(summary.skipped.is_empty());
        assert!(sink.outputs.is_empty());
        Ok(())
    }

    #[test]
    fn run_survives_sink_failure() -> Result<(), BenchError> {
        let input = rgb_input()?;
        let transforms = registry(input.original.size(), 3);
        let runner = Runner::new(BenchConfig {
            slug: Some("rust-rotate90".to_string()),
            ..config(1)
        })?;

        let summary = runner.run(&input, &transforms, &mut FailingSink)?;

        assert_eq!(summary.results.len(), 1);
        assert_eq!(summary.results[0].slug, "rust-rotate90");
        Ok(())
    }

    #[test]
    fn run_skips_unallocatable_output() -> Result<(), BenchError> {
        let input = rgb_input()?;
        let mut transforms = registry(input.original.size(), 3);
        transforms[0].output_size = [usize::MAX, 2].into();
        let runner = Runner::new(config(1))?;
        let mut sink = CollectSink::default();

        let summary = runner.run(&input, &transforms, &mut sink)?;

        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(summary.skipped[0].slug, "rust-invert");
        assert_eq!(summary.results.len(), transforms.len() - 1);
        assert_eq!(summary.results[0].slug, "rust-grayscale");
        Ok(())
    }
}
