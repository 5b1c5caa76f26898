use std::path::Path;

use clap::ValueEnum;

/// On-disk layout of a point set or tour.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    /// `x,y` per line for points, one index per line for tours.
    Csv,
    /// `TspProblem` for points, `{ "tour", "length" }` for tours.
    Json,
}

impl PointFormat {
    /// `.json` files are JSON, everything else is line-oriented text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => PointFormat::Json,
            _ => PointFormat::Csv,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Reject inputs with more points than this. `None` means unbounded.
    pub max_points: Option<usize>,
    pub input_format: Option<PointFormat>,
    pub output_format: Option<PointFormat>,
}

impl SolverConfig {
    pub fn input_format_for(&self, path: &Path) -> PointFormat {
        self.input_format.unwrap_or_else(|| PointFormat::from_path(path))
    }

    pub fn output_format_for(&self, path: &Path) -> PointFormat {
        self.output_format.unwrap_or_else(|| PointFormat::from_path(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension_unless_overridden() {
        let config = SolverConfig::default();
        assert_eq!(config.input_format_for(Path::new("problem.json")), PointFormat::Json);
        assert_eq!(config.input_format_for(Path::new("points.JSON")), PointFormat::Json);
        assert_eq!(config.input_format_for(Path::new("points.csv")), PointFormat::Csv);
        assert_eq!(config.output_format_for(Path::new("tour")), PointFormat::Csv);

        let config = SolverConfig {
            input_format: Some(PointFormat::Csv),
            output_format: Some(PointFormat::Json),
            ..Default::default()
        };
        assert_eq!(config.input_format_for(Path::new("problem.json")), PointFormat::Csv);
        assert_eq!(config.output_format_for(Path::new("tour.txt")), PointFormat::Json);
    }
}
