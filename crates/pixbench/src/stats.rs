use serde::Serialize;

use crate::error::BenchError;

/// Summary statistics of a sequence of timing samples, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Stats {
    /// Arithmetic mean of the samples.
    pub mean: f64,
    /// Element at index `n / 2` of the sorted samples (upper middle for even `n`).
    pub median: f64,
    /// Sample standard deviation (Bessel corrected), `0.0` for a single sample.
    pub std_dev: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
    /// Sum of all samples.
    pub total: f64,
}

impl Stats {
    /// Compute the statistics of a non-empty sequence of samples.
    ///
    /// The median is not interpolated: for an even number of samples the upper of the two
    /// middle values is returned.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::EmptySamples`] when `samples` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use pixbench::stats::Stats;
    ///
    /// let stats = Stats::from_samples(&[4.0, 1.0, 3.0, 2.0]).unwrap();
    ///
    /// assert_eq!(stats.median, 3.0);
    /// assert_eq!(stats.total, 10.0);
    /// ```
    pub fn from_samples(samples: &[f64]) -> Result<Self, BenchError> {
        if samples.is_empty() {
            return Err(BenchError::EmptySamples);
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let total = sorted.iter().sum::<f64>();
        let mean = total / n as f64;

        let variance = if n > 1 {
            sorted.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };

        Ok(Self {
            mean,
            median: sorted[n / 2],
            std_dev: variance.sqrt(),
            min: sorted[0],
            max: sorted[n - 1],
            total,
        })
    }
}
