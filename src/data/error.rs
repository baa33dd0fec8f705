use std::path::PathBuf;

use thiserror::Error;

/// Every way loading and aligning the two inputs can fail. All of them are fatal.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file(s) not found: {}", join_paths(.0))]
    MissingInput(Vec<PathBuf>),

    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: line {line} has {found} field(s), expected {expected}", .path.display())]
    RaggedRow {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{} and {} have no column names in common", .first.display(), .second.display())]
    EmptyIntersection { first: PathBuf, second: PathBuf },

    #[error("no numerical columns found among the {common} common column(s)")]
    NoNumericColumns { common: usize },
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
