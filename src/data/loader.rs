use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::align::align_tables;
use super::error::LoadError;
use super::model::{CellValue, ComparisonDataset, InputTable};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load both files and align them on their shared numeric columns.
///
/// Both paths are checked before either file is opened, so a missing second
/// file is reported without parsing the first one.
pub fn load_comparison(first: &Path, second: &Path) -> Result<ComparisonDataset, LoadError> {
    check_inputs(&[first, second])?;

    let t1 = load_table(first)?;
    let t2 = load_table(second)?;

    align_tables(&t1, &t2)
}

/// Fail with [`LoadError::MissingInput`] naming every path that is not a file.
pub fn check_inputs(paths: &[&Path]) -> Result<(), LoadError> {
    let missing: Vec<PathBuf> = paths
        .iter()
        .filter(|p| !p.is_file())
        .map(|p| p.to_path_buf())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(LoadError::MissingInput(missing))
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// 1-based physical line holding the units annotation.
const UNITS_LINE: usize = 2;

/// CSV layout:
///   line 1: column names
///   line 2: units annotation, always skipped without being inspected
///   line 3..: data
///
/// Data rows shorter than the header are padded with missing cells; longer
/// rows are rejected.
///
/// Cells are typed individually with [`CellValue::parse`]; columns are not
/// typed here, see [`InputTable::is_numeric`].
pub fn load_table(path: &Path) -> Result<InputTable, LoadError> {
    let parse_err = |source: csv::Error| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    };

    // Flexible so the units row may have any shape; data rows are checked below.
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(parse_err)?;

    let headers = reader.headers().map_err(parse_err)?;
    let column_names = dedup_headers(headers.iter());
    let width = column_names.len();

    let mut columns: Vec<Vec<CellValue>> = vec![Vec::new(); width];
    let mut row_count = 0;

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            // The units row is never inspected, not even for encoding errors.
            Err(e) if e.position().map(|p| p.line() as usize) == Some(UNITS_LINE) => continue,
            Err(e) => return Err(parse_err(e)),
        };
        // Physical line the record starts on; blank lines are never records.
        let line = record.position().map_or(0, |p| p.line() as usize);
        if line == UNITS_LINE {
            continue;
        }
        if record.len() > width {
            return Err(LoadError::RaggedRow {
                path: path.to_path_buf(),
                line,
                expected: width,
                found: record.len(),
            });
        }
        // Short rows are padded with missing values.
        for (i, col) in columns.iter_mut().enumerate() {
            col.push(record.get(i).map_or(CellValue::Missing, CellValue::parse));
        }
        row_count += 1;
    }

    log::info!(
        "Loaded {}: {} column(s), {} row(s)",
        path.display(),
        width,
        row_count
    );

    Ok(InputTable {
        path: path.to_path_buf(),
        column_names,
        columns,
        row_count,
    })
}

/// Rename repeated header names: the second `a` becomes `a.1`, the third `a.2`.
fn dedup_headers<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::new();

    for h in headers {
        let count = seen.entry(h.to_string()).or_insert(0);
        let name = if *count == 0 {
            h.to_string()
        } else {
            format!("{h}.{count}")
        };
        *count += 1;
        names.push(name);
    }
    names
}
