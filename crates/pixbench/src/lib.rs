#![deny(missing_docs)]
//! Benchmark harness timing a fixed catalog of pixel-level image transforms.
//!
//! The input image is decoded once, every selected transform runs a configurable number of
//! times against it, and the timings are summarized and rendered as a report.

#[doc(inline)]
pub use pixbench_image as image;

#[doc(inline)]
pub use pixbench_imgproc as imgproc;

#[doc(inline)]
pub use pixbench_io as io;

/// Parameters of a benchmark run.
pub mod config;

/// Error types of the harness.
pub mod error;

/// The catalog of benchmarked transforms.
pub mod registry;

/// Rendering of the benchmark results.
pub mod report;

/// Timing loop and run orchestration.
pub mod runner;

/// Persistence of the transform outputs.
pub mod sink;

/// Summary statistics over timing samples.
pub mod stats;

pub use crate::config::BenchConfig;
pub use crate::error::BenchError;
pub use crate::runner::{run_suite, BenchInput, BenchmarkResult, RunSummary, Runner};
