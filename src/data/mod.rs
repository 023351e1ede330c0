/// Data layer: the passing grade table, loading, and cleaning.
///
/// Architecture:
/// ```text
///  passing-grade.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Vec<RawRow> (positional index attached)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  drop rows missing RATAAN or S.BAKU
///   └──────────┘
///        │
///        ▼
///   ┌─────────────────────┐
///   │ PassingGradeDataset │  cleaned rows, column names, raw row count
///   └─────────────────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
