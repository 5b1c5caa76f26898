use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use farthest_insertion::{solve_files, PointFormat, SolverConfig};

/// Builds a farthest-insertion tour for a set of 2D points.
#[derive(Parser, Debug)]
#[command(name = "solve", version, about)]
struct Args {
    /// Coordinate file (`x,y` per line, or a JSON problem)
    input: PathBuf,

    /// Destination for the tour (one index per line, or JSON)
    output: PathBuf,

    /// Fail when the input holds more points than this
    #[arg(long, env = "TSP_MAX_POINTS")]
    max_points: Option<usize>,

    /// Input layout (defaults to the input file extension)
    #[arg(long, value_enum)]
    input_format: Option<PointFormat>,

    /// Output layout (defaults to the output file extension)
    #[arg(long, value_enum)]
    output_format: Option<PointFormat>,
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = SolverConfig {
        max_points: args.max_points,
        input_format: args.input_format,
        output_format: args.output_format,
    };

    let tour = solve_files(&args.input, &args.output, &config).with_context(|| {
        format!(
            "solving {} into {}",
            args.input.display(),
            args.output.display()
        )
    })?;
    info!("done: {} points", tour.len());
    Ok(())
}
