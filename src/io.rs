//! File collaborators around the core: point readers, tour writers and the
//! read → compute → build → write pipeline.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::info;
use serde_derive::*;

use crate::config::{PointFormat, SolverConfig};
use crate::error::TspError;
use crate::insertion::{build, Tour};
use crate::matrix::DistanceMatrix;
use crate::point::Point;
use crate::TspProblem;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TourReport {
    pub tour: Vec<usize>,
    pub length: f64,
}

/// Parses `x,y` lines. Blank lines are skipped; anything else that is not two
/// finite numbers fails with its line number. Read failures are reported
/// against `source`.
pub fn read_csv_points(reader: impl BufRead, source: &Path) -> Result<Vec<Point>, TspError> {
    let mut points = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|e| TspError::input(source, e))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (x, y) = line
            .split_once(',')
            .ok_or_else(|| TspError::parse(line_no, format!("expected `x,y`, found `{line}`")))?;
        points.push(Point::new(coordinate(x, line_no)?, coordinate(y, line_no)?));
    }
    Ok(points)
}

fn coordinate(field: &str, line_no: usize) -> Result<f64, TspError> {
    let field = field.trim();
    let value: f64 = field
        .parse()
        .map_err(|_| TspError::parse(line_no, format!("`{field}` is not a number")))?;
    if !value.is_finite() {
        return Err(TspError::parse(line_no, format!("`{field}` is not finite")));
    }
    Ok(value)
}

pub fn read_json_points(reader: impl Read, source: &Path) -> Result<Vec<Point>, TspError> {
    let problem: TspProblem = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            TspError::input(source, io::Error::from(e))
        } else {
            TspError::Json(e)
        }
    })?;
    let points = problem.points();
    if let Some(index) = points.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
        return Err(TspError::parse(index + 1, "node coordinates must be finite"));
    }
    Ok(points)
}

pub fn read_points(path: &Path, config: &SolverConfig) -> Result<Vec<Point>, TspError> {
    let file = File::open(path).map_err(|e| TspError::input(path, e))?;
    let reader = BufReader::new(file);
    let points = match config.input_format_for(path) {
        PointFormat::Csv => read_csv_points(reader, path)?,
        PointFormat::Json => read_json_points(reader, path)?,
    };
    if let Some(max) = config.max_points {
        if points.len() > max {
            return Err(TspError::CapacityExceeded {
                count: points.len(),
                max,
            });
        }
    }
    info!("read {} points from {}", points.len(), path.display());
    Ok(points)
}

// No closing entry: the cycle back to the first index is implicit.
pub fn write_tour_lines(mut writer: impl Write, tour: &Tour) -> std::io::Result<()> {
    for index in tour.iter() {
        writeln!(writer, "{index}")?;
    }
    writer.flush()
}

pub fn write_tour(
    path: &Path,
    tour: &Tour,
    matrix: &DistanceMatrix,
    config: &SolverConfig,
) -> Result<(), TspError> {
    let file = File::create(path).map_err(|e| TspError::output(path, e))?;
    let mut writer = BufWriter::new(file);
    match config.output_format_for(path) {
        PointFormat::Csv => write_tour_lines(&mut writer, tour).map_err(|e| TspError::output(path, e))?,
        PointFormat::Json => {
            let report = TourReport {
                tour: tour.as_slice().to_vec(),
                length: tour.length(matrix),
            };
            serde_json::to_writer_pretty(&mut writer, &report)?;
            writer.flush().map_err(|e| TspError::output(path, e))?;
        }
    }
    info!("wrote {} tour entries to {}", tour.len(), path.display());
    Ok(())
}

pub fn solve_files(input: &Path, output: &Path, config: &SolverConfig) -> Result<Tour, TspError> {
    let points = read_points(input, config)?;
    let matrix = DistanceMatrix::compute(&points);
    let tour = build(&matrix)?;
    write_tour(output, &tour, &matrix, config)?;
    Ok(tour)
}
