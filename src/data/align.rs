use super::error::LoadError;
use super::model::{ComparisonDataset, InputTable, NumericTable};

// ---------------------------------------------------------------------------
// Column alignment
// ---------------------------------------------------------------------------

/// Column names present in both tables, in `first`'s column order.
/// Matching is exact and case-sensitive.
pub fn common_columns(first: &InputTable, second: &InputTable) -> Vec<String> {
    first
        .column_names
        .iter()
        .filter(|name| second.column_index(name).is_some())
        .cloned()
        .collect()
}

/// Restrict both tables to their common columns, then to the columns that are
/// numeric in the first table.
///
/// Rows are paired by position only; the tables are not joined on any key.
pub fn align_tables(
    first: &InputTable,
    second: &InputTable,
) -> Result<ComparisonDataset, LoadError> {
    let common = common_columns(first, second);
    if common.is_empty() {
        return Err(LoadError::EmptyIntersection {
            first: first.path.clone(),
            second: second.path.clone(),
        });
    }

    let mut columns = Vec::new();
    let mut first_series = Vec::new();
    let mut second_series = Vec::new();

    for name in &common {
        if !first.is_numeric(name) {
            match first.first_text(name) {
                Some(text) => log::debug!("Skipping non-numeric column '{name}' (holds '{text}')"),
                None => log::debug!("Skipping non-numeric column '{name}'"),
            }
            continue;
        }
        // The second table is assumed to share the column's type; a column that
        // is numeric only in the first file cannot be plotted and is dropped.
        let (Some(s1), Some(s2)) = (first.numeric_series(name), second.numeric_series(name))
        else {
            log::warn!(
                "Column '{name}' is numeric in {} but not in {}; skipping",
                first.path.display(),
                second.path.display()
            );
            continue;
        };
        columns.push(name.clone());
        first_series.push(s1);
        second_series.push(s2);
    }

    if columns.is_empty() {
        return Err(LoadError::NoNumericColumns {
            common: common.len(),
        });
    }

    if first.row_count != second.row_count {
        log::warn!(
            "Row counts differ ({} vs {}); differences cover the first {} row(s)",
            first.row_count,
            second.row_count,
            first.row_count.min(second.row_count)
        );
    }

    log::info!(
        "{} common column(s), {} numeric: {:?}",
        common.len(),
        columns.len(),
        columns
    );

    Ok(ComparisonDataset {
        columns,
        first: NumericTable {
            label: first.label(),
            series: first_series,
        },
        second: NumericTable {
            label: second.label(),
            series: second_series,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    fn table(path: &str, names: &[&str], rows: &[&[&str]]) -> InputTable {
        let columns = (0..names.len())
            .map(|c| rows.iter().map(|r| CellValue::parse(r[c])).collect())
            .collect();
        InputTable {
            path: PathBuf::from(path),
            column_names: names.iter().map(|s| s.to_string()).collect(),
            columns,
            row_count: rows.len(),
        }
    }

    #[test]
    fn intersection_is_commutative_as_a_set() {
        let t1 = table("a.csv", &["t", "a", "b", "x"], &[&["0", "1", "2", "3"]]);
        let t2 = table("b.csv", &["x", "c", "a", "t"], &[&["0", "1", "2", "3"]]);

        let forward: BTreeSet<_> = common_columns(&t1, &t2).into_iter().collect();
        let backward: BTreeSet<_> = common_columns(&t2, &t1).into_iter().collect();
        assert_eq!(forward, backward);
        assert_eq!(common_columns(&t1, &t2), vec!["t", "a", "x"]);
    }

    #[test]
    fn names_match_case_sensitively() {
        let t1 = table("a.csv", &["Speed"], &[&["1"]]);
        let t2 = table("b.csv", &["speed"], &[&["1"]]);
        assert!(matches!(
            align_tables(&t1, &t2),
            Err(LoadError::EmptyIntersection { .. })
        ));
    }

    #[test]
    fn keeps_only_numeric_common_columns() {
        let t1 = table(
            "run1.csv",
            &["time", "a", "b", "flag"],
            &[&["12:00", "1", "x", "true"], &["12:01", "2.5", "y", "false"]],
        );
        let t2 = table(
            "run2.csv",
            &["flag", "time", "a", "b"],
            &[&["true", "12:00", "3", "z"], &["true", "12:01", "", "w"]],
        );

        let ds = align_tables(&t1, &t2).unwrap();
        assert_eq!(ds.columns, vec!["a"]);
        assert_eq!(ds.first.series[0], vec![1.0, 2.5]);
        assert_eq!(ds.second.series[0][0], 3.0);
        assert!(ds.second.series[0][1].is_nan());
        assert_eq!(ds.first.label, "run1");
        assert_eq!(t1.first_text("b"), Some("x"));
        assert_eq!(t1.first_text("flag"), None);
        assert_eq!(ds.second.label, "run2");
    }

    #[test]
    fn no_numeric_columns_is_an_error() {
        let t1 = table("a.csv", &["name"], &[&["alpha"]]);
        let t2 = table("b.csv", &["name"], &[&["beta"]]);
        assert!(matches!(
            align_tables(&t1, &t2),
            Err(LoadError::NoNumericColumns { common: 1 })
        ));
    }

    #[test]
    fn empty_tables_have_no_numeric_columns() {
        let t1 = table("a.csv", &["a"], &[]);
        let t2 = table("b.csv", &["a"], &[]);
        assert!(matches!(
            align_tables(&t1, &t2),
            Err(LoadError::NoNumericColumns { .. })
        ));
    }

    #[test]
    fn column_numeric_only_in_first_file_is_dropped() {
        let t1 = table("a.csv", &["a", "b"], &[&["1", "2"]]);
        let t2 = table("b.csv", &["a", "b"], &[&["1", "oops"]]);

        let ds = align_tables(&t1, &t2).unwrap();
        assert_eq!(ds.columns, vec!["a"]);
    }
}
