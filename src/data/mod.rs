/// Data layer: CSV loading and column alignment.
///
/// Architecture:
/// ```text
///  file1.csv      file2.csv
///      │              │
///      ▼              ▼
///   ┌──────────────────────┐
///   │  loader              │  check paths, parse → InputTable ×2
///   └──────────────────────┘
///              │
///              ▼
///   ┌──────────────────────┐
///   │  align               │  name intersection → numeric predicate
///   └──────────────────────┘
///              │
///              ▼
///      ComparisonDataset     shared numeric columns, f64 series ×2
/// ```

pub mod align;
pub mod error;
pub mod loader;
pub mod model;
