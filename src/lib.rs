pub mod config;
pub mod error;
pub mod insertion;
pub mod io;
pub mod matrix;
pub mod point;

use serde_derive::*;

pub use config::{PointFormat, SolverConfig};
pub use error::TspError;
pub use insertion::{build, seed_pair, FarthestInsertion, InsertionStep, Tour};
pub use io::solve_files;
pub use matrix::DistanceMatrix;
pub use point::Point;

/// JSON problem file: an optional bounding box and the node coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TspProblem {
    #[serde(default)]
    pub size: Option<[f64; 2]>,
    pub nodes: Vec<[f64; 2]>,
}

impl TspProblem {
    pub fn points(&self) -> Vec<Point> {
        self.nodes.iter().map(|&[x, y]| Point::new(x, y)).collect()
    }

    pub fn from_points(points: &[Point], size: Option<[f64; 2]>) -> Self {
        Self {
            size,
            nodes: points.iter().map(|p| [p.x, p.y]).collect(),
        }
    }
}
