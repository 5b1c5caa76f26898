//! Error types shared by the core and the file collaborators.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TspError {
    /// The heuristic needs a seed pair, so at least two points.
    #[error("farthest insertion needs at least 2 points, got {count}")]
    InsufficientInput { count: usize },

    #[error("input holds {count} points, more than the configured maximum of {max}")]
    CapacityExceeded { count: usize, max: usize },

    /// Points so far apart that their distance is not representable.
    #[error("distance between points {from} and {to} is not finite")]
    NonFiniteDistance { from: usize, to: usize },

    #[error("cannot read input {}: {source}", .path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output {}: {source}", .path.display())]
    OutputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed coordinate line (1-based line number).
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TspError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        TspError::Parse {
            line,
            message: message.into(),
        }
    }

    pub fn input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TspError::InputAccess {
            path: path.into(),
            source,
        }
    }

    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TspError::OutputAccess {
            path: path.into(),
            source,
        }
    }
}
