use std::fmt::Write;
use std::str::FromStr;

use crate::error::BenchError;
use crate::runner::BenchmarkResult;

/// Layout of the report printed at the end of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Fixed width console table.
    #[default]
    Table,
    /// Pretty-printed JSON array, raw timings included.
    Json,
    /// Comma separated values with a header line.
    Csv,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("Invalid report format: {s}")),
        }
    }
}

/// Render the results in the given format.
///
/// Rows keep the order of `results`.
pub fn render(results: &[BenchmarkResult], format: ReportFormat) -> Result<String, BenchError> {
    match format {
        ReportFormat::Table => render_table(results),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(results)?),
        ReportFormat::Csv => render_csv(results),
    }
}

fn render_table(results: &[BenchmarkResult]) -> Result<String, BenchError> {
    let header = format!(
        "{:<20} {:<25} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "task", "slug", "mean", "median", "std_dev", "min", "max", "total"
    );

    let mut out = String::new();
    writeln!(out, "{header}")?;
    writeln!(out, "{}", "-".repeat(header.len()))?;

    for r in results {
        writeln!(
            out,
            "{:<20} {:<25} {:>12.6} {:>12.6} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
            r.task,
            r.slug,
            r.stats.mean,
            r.stats.median,
            r.stats.std_dev,
            r.stats.min,
            r.stats.max,
            r.stats.total
        )?;
    }

    Ok(out)
}

fn render_csv(results: &[BenchmarkResult]) -> Result<String, BenchError> {
    let mut out = String::new();
    writeln!(
        out,
        "task,slug,description,iterations,mean,median,std_dev,min,max,total"
    )?;

    for r in results {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{}",
            r.task,
            r.slug,
            csv_field(&r.description),
            r.iterations,
            r.stats.mean,
            r.stats.median,
            r.stats.std_dev,
            r.stats.min,
            r.stats.max,
            r.stats.total
        )?;
    }

    Ok(out)
}

// quote fields holding a separator, doubling inner quotes
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{csv_field, render, ReportFormat};
    use crate::error::BenchError;
    use crate::runner::BenchmarkResult;
    use crate::stats::Stats;

    fn result(task: &str, slug: &str, times: Vec<f64>) -> Result<BenchmarkResult, BenchError> {
        Ok(BenchmarkResult {
            task: task.to_string(),
            slug: slug.to_string(),
            description: "a, b".to_string(),
            iterations: times.len(),
            stats: Stats::from_samples(&times)?,
            times,
        })
    }

    #[test]
    fn parse_format() {
        assert_eq!("table".parse::<ReportFormat>(), Ok(ReportFormat::Table));
        assert_eq!("json".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert_eq!("csv".parse::<ReportFormat>(), Ok(ReportFormat::Csv));
        assert!("xml".parse::<ReportFormat>().is_err());
        assert_eq!(ReportFormat::default().to_string(), "table");
    }

    #[test]
    fn table_layout() -> Result<(), BenchError> {
        let results = vec![
            result("invert", "rust-invert", vec![0.5, 1.5])?,
            result("blur", "rust-blur", vec![0.25])?,
        ];

        let table = render(&results, ReportFormat::Table)?;
        let lines = table.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("task "));
        assert!(lines[0].ends_with("       total"));
        assert_eq!(lines[1].len(), lines[0].len());
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("invert               rust-invert "));
        assert!(lines[2].contains("    1.000000 "));
        assert!(lines[2].ends_with("    2.000000"));
        assert!(lines[3].starts_with("blur "));
        assert_eq!(lines[2].len(), lines[0].len());
        Ok(())
    }

    #[test]
    fn table_without_results() -> Result<(), BenchError> {
        let table = render(&[], ReportFormat::Table)?;
        assert_eq!(table.lines().count(), 2);
        Ok(())
    }

    #[test]
    fn json_report() -> Result<(), Box<dyn std::error::Error>> {
        let results = vec![result("invert", "rust-invert", vec![1.0, 3.0])?];

        let json = render(&results, ReportFormat::Json)?;
        let value: serde_json::Value = serde_json::from_str(&json)?;

        let entry = &value[0];
        assert_eq!(entry["task"], "invert");
        assert_eq!(entry["slug"], "rust-invert");
        assert_eq!(entry["iterations"], 2);
        assert_eq!(entry["mean"], 2.0);
        assert_eq!(entry["median"], 3.0);
        assert_eq!(entry["total"], 4.0);
        assert_eq!(entry["times"], serde_json::json!([1.0, 3.0]));
        Ok(())
    }

    #[test]
    fn csv_report() -> Result<(), BenchError> {
        let results = vec![result("invert", "rust-invert", vec![2.0])?];

        let csv = render(&results, ReportFormat::Csv)?;
        let lines = csv.lines().collect::<Vec<_>>();

        assert_eq!(
            lines,
            vec![
                "task,slug,description,iterations,mean,median,std_dev,min,max,total",
                "invert,rust-invert,\"a, b\",1,2,2,0,2,2,2",
            ]
        );
        Ok(())
    }

    #[test]
    fn csv_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
