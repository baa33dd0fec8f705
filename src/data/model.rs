use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// CellValue – a single parsed CSV field
// ---------------------------------------------------------------------------

/// A dynamically-typed cell, inferred from the raw text of a CSV field.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    /// `true`/`false` in any common casing; never numeric.
    Bool,
    Text(String),
    /// Empty field or one of the usual NA spellings.
    Missing,
}

/// Field contents treated as a missing value rather than text.
const NA_TOKENS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "-nan", "null", "NULL", "#N/A"];

impl CellValue {
    /// Infer the type of a raw field: integer, then float, then bool, else text.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        if NA_TOKENS.contains(&s) {
            return CellValue::Missing;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        match s {
            "true" | "True" | "TRUE" | "false" | "False" | "FALSE" => CellValue::Bool,
            _ => CellValue::Text(s.to_string()),
        }
    }

    /// Whether the cell is compatible with a numeric column.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            CellValue::Integer(_) | CellValue::Float(_) | CellValue::Missing
        )
    }

    /// Numeric view of the cell; missing values become `NaN`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Missing => Some(f64::NAN),
            _ => None,
        }
    }

    /// Raw text of a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// InputTable – one parsed CSV file
// ---------------------------------------------------------------------------

/// A parsed CSV file, stored column-major. Every column has `row_count` cells.
#[derive(Debug, Clone)]
pub struct InputTable {
    /// Source path, kept for labels and error messages.
    pub path: PathBuf,
    /// Header names in file order (duplicates already renamed).
    pub column_names: Vec<String>,
    /// `columns[i]` holds the cells of `column_names[i]`.
    pub columns: Vec<Vec<CellValue>>,
    pub row_count: usize,
}

impl InputTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|c| c == name)
    }

    pub fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.column_index(name).map(|i| self.columns[i].as_slice())
    }

    /// A column is numeric when it has rows and every cell is a number or missing.
    pub fn is_numeric(&self, name: &str) -> bool {
        match self.column(name) {
            Some(cells) => !cells.is_empty() && cells.iter().all(CellValue::is_numeric),
            None => false,
        }
    }

    /// First text cell of a column, used to explain why it is not numeric.
    pub fn first_text(&self, name: &str) -> Option<&str> {
        self.column(name)?.iter().find_map(CellValue::as_text)
    }

    /// Numeric series for a column, or `None` if the column is absent or not numeric.
    pub fn numeric_series(&self, name: &str) -> Option<Vec<f64>> {
        self.column(name)?.iter().map(CellValue::as_f64).collect()
    }

    /// Legend label for the table: its path without the extension.
    pub fn label(&self) -> String {
        display_label(&self.path)
    }
}

pub fn display_label(path: &Path) -> String {
    path.with_extension("").display().to_string()
}

// ---------------------------------------------------------------------------
// NumericTable / ComparisonDataset – aligned output of the loader
// ---------------------------------------------------------------------------

/// A table restricted to numeric columns, values already converted to `f64`.
#[derive(Debug, Clone)]
pub struct NumericTable {
    pub label: String,
    /// `series[i]` belongs to the i-th column of the owning [`ComparisonDataset`].
    pub series: Vec<Vec<f64>>,
}

/// Two tables aligned on their shared numeric columns.
#[derive(Debug, Clone)]
pub struct ComparisonDataset {
    /// The numeric column set, in the first file's column order. Never empty.
    pub columns: Vec<String>,
    pub first: NumericTable,
    pub second: NumericTable,
}

/// The two raw series of one column.
#[derive(Debug, Clone, Copy)]
pub struct SeriesPair<'a> {
    pub column: &'a str,
    pub first: &'a [f64],
    pub second: &'a [f64],
}

impl ComparisonDataset {
    /// Number of navigable columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn series_pair(&self, index: usize) -> Option<SeriesPair<'_>> {
        Some(SeriesPair {
            column: self.columns.get(index)?,
            first: self.first.series.get(index)?,
            second: self.second.series.get(index)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_infers_cell_types() {
        assert_eq!(CellValue::parse("42"), CellValue::Integer(42));
        assert_eq!(CellValue::parse(" -1.5 "), CellValue::Float(-1.5));
        assert_eq!(CellValue::parse("1e3"), CellValue::Float(1000.0));
        assert_eq!(CellValue::parse("True"), CellValue::Bool);
        assert_eq!(CellValue::parse("false"), CellValue::Bool);
        assert_eq!(CellValue::parse("NA"), CellValue::Missing);
        assert_eq!(CellValue::parse(""), CellValue::Missing);
        assert_eq!(CellValue::parse("12:00:01"), CellValue::Text("12:00:01".into()));
    }

    #[test]
    fn missing_cells_are_nan_in_numeric_view() {
        assert!(CellValue::Missing.as_f64().is_some_and(f64::is_nan));
        assert_eq!(CellValue::Text("x".into()).as_f64(), None);
        assert!(!CellValue::Bool.is_numeric());
        assert_eq!(CellValue::Text("x".into()).as_text(), Some("x"));
    }

    #[test]
    fn label_strips_extension_only() {
        assert_eq!(display_label(Path::new("runs/a.csv")), "runs/a");
        assert_eq!(display_label(Path::new("b")), "b");
    }
}
