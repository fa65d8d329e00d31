use std::path::PathBuf;

use argh::FromArgs;
use pixbench::config::{BenchConfig, DEFAULT_EXTENSION, DEFAULT_ITERATIONS};
use pixbench::report::{self, ReportFormat};

fn default_image() -> PathBuf {
    PathBuf::from("../images/lenna.png")
}

#[derive(FromArgs)]
/// Time a catalog of pixel-level image transforms on one image.
struct Args {
    /// path to the input image
    #[argh(positional, default = "default_image()")]
    image: PathBuf,

    /// number of measured iterations per transform
    #[argh(option, short = 'n', default = "DEFAULT_ITERATIONS")]
    iterations: usize,

    /// only run the transform with this task name, e.g. blur
    #[argh(option, short = 't')]
    task: Option<String>,

    /// only run the transform with this output slug, e.g. rust-blur
    #[argh(option, short = 's')]
    slug: Option<String>,

    /// number of discarded iterations before measuring
    #[argh(option, short = 'w', default = "0")]
    warmup: usize,

    /// report format: table, json or csv
    #[argh(option, short = 'f', default = "ReportFormat::Table")]
    format: ReportFormat,

    /// directory receiving the output images
    #[argh(option, short = 'o')]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let config = BenchConfig {
        iterations: args.iterations,
        warmup: args.warmup,
        task: args.task,
        slug: args.slug,
        output_dir: args.output_dir,
        extension: DEFAULT_EXTENSION.to_string(),
    };

    let summary = pixbench::run_suite(&args.image, config)?;

    print!("{}", report::render(&summary.results, args.format)?);

    Ok(())
}
