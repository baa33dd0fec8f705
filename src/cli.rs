use std::path::PathBuf;

use clap::Parser;

/// Compare two CSV files with interactive plots.
///
/// Both files need a header row followed by a units row; the units row is
/// always skipped. Columns that appear in both files and hold numbers are
/// shown one at a time.
#[derive(Parser, Debug)]
#[command(name = "csv-compare", version, about)]
pub struct Cli {
    /// Path to the first CSV file
    pub file1: PathBuf,

    /// Path to the second CSV file
    pub file2: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn takes_two_positional_paths() {
        let cli = Cli::try_parse_from(["csv-compare", "a.csv", "b.csv"]).unwrap();
        assert_eq!(cli.file1, PathBuf::from("a.csv"));
        assert_eq!(cli.file2, PathBuf::from("b.csv"));
    }

    #[test]
    fn both_paths_are_required() {
        assert!(Cli::try_parse_from(["csv-compare", "a.csv"]).is_err());
        assert!(Cli::try_parse_from(["csv-compare", "a.csv", "b.csv", "c.csv"]).is_err());
    }
}
