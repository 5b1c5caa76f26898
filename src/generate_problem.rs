use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use farthest_insertion::{Point, PointFormat, TspProblem};

/// Writes a random problem instance.
#[derive(Parser, Debug)]
#[command(name = "generate_problem", version, about)]
struct Args {
    /// Destination file; `.json` writes a problem file, anything else `x,y` lines
    #[arg(default_value = "problem.csv")]
    output: PathBuf,

    #[arg(short, long, default_value_t = 200)]
    count: usize,

    #[arg(long, default_value_t = 1000.0)]
    width: f64,

    #[arg(long, default_value_t = 1000.0)]
    height: f64,

    /// Seed for a reproducible instance
    #[arg(long)]
    seed: Option<u64>,

    /// Refuse to overwrite an existing file
    #[arg(long)]
    no_clobber: bool,
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    anyhow::ensure!(
        args.width > 0.0 && args.height > 0.0,
        "width and height must be positive"
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let points: Vec<Point> = (0..args.count)
        .map(|_| Point::new(rng.random_range(0.0..args.width), rng.random_range(0.0..args.height)))
        .collect();

    let file = if args.no_clobber {
        File::create_new(&args.output)
    } else {
        File::create(&args.output)
    }
    .with_context(|| format!("creating {}", args.output.display()))?;
    let mut writer = BufWriter::new(file);

    match PointFormat::from_path(&args.output) {
        PointFormat::Json => {
            let problem = TspProblem::from_points(&points, Some([args.width, args.height]));
            serde_json::to_writer(&mut writer, &problem)?;
        }
        PointFormat::Csv => {
            for p in &points {
                writeln!(writer, "{},{}", p.x, p.y)?;
            }
        }
    }
    writer.flush()?;

    info!("wrote {} points to {}", points.len(), args.output.display());
    Ok(())
}
