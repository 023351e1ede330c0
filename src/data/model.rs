use std::fmt;

use super::filter::drop_incomplete;

/// Column holding feature A (average score).
pub const RATAAN_COLUMN: &str = "RATAAN";
/// Column holding feature B (standard deviation score).
pub const SBAKU_COLUMN: &str = "S.BAKU";

// ---------------------------------------------------------------------------
// CellValue – a single cell of the source CSV
// ---------------------------------------------------------------------------

/// A loosely typed cell, kept only for the table view.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Missing,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.2}"),
            CellValue::Missing => write!(f, "<missing>"),
        }
    }
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// A CSV row as read, before rows with missing features are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// Position in the file (0-based, header excluded).
    pub index: usize,
    pub rataan: Option<f64>,
    pub sbaku: Option<f64>,
    /// One cell per column, in header order.
    pub cells: Vec<CellValue>,
}

/// A cleaned row: both features are always present.
#[derive(Debug, Clone, PartialEq)]
pub struct PassingGradeRow {
    /// Position in the original file; gaps mark dropped rows.
    pub index: usize,
    pub rataan: f64,
    pub sbaku: f64,
    pub cells: Vec<CellValue>,
}

// ---------------------------------------------------------------------------
// PassingGradeDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The cleaned passing grade table.
#[derive(Debug, Clone, PartialEq)]
pub struct PassingGradeDataset {
    /// Header names, in file order.
    pub column_names: Vec<String>,
    /// Rows with both RATAAN and S.BAKU present.
    pub rows: Vec<PassingGradeRow>,
    /// Number of data rows in the file before cleaning.
    pub raw_row_count: usize,
}

impl PassingGradeDataset {
    /// Build the dataset from raw rows, dropping incomplete ones.
    pub fn from_raw_rows(column_names: Vec<String>, raw_rows: Vec<RawRow>) -> Self {
        let raw_row_count = raw_rows.len();
        let rows = drop_incomplete(raw_rows);
        PassingGradeDataset {
            column_names,
            rows,
            raw_row_count,
        }
    }

    /// Number of cleaned rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// How many rows cleaning removed.
    pub fn dropped_count(&self) -> usize {
        self.raw_row_count - self.rows.len()
    }

    /// `[index, RATAAN]` points for the line chart.
    pub fn rataan_series(&self) -> Vec<[f64; 2]> {
        self.rows
            .iter()
            .map(|row| [row.index as f64, row.rataan])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(index: usize, rataan: Option<f64>, sbaku: Option<f64>) -> RawRow {
        RawRow {
            index,
            rataan,
            sbaku,
            cells: vec![
                rataan.map_or(CellValue::Missing, CellValue::Float),
                sbaku.map_or(CellValue::Missing, CellValue::Float),
            ],
        }
    }

    #[test]
    fn counts_dropped_rows() {
        let dataset = PassingGradeDataset::from_raw_rows(
            vec![RATAAN_COLUMN.into(), SBAKU_COLUMN.into()],
            vec![
                raw(0, Some(600.0), Some(12.0)),
                raw(1, None, Some(10.0)),
                raw(2, Some(550.0), Some(9.5)),
            ],
        );
        assert_eq!(dataset.raw_row_count, 3);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.dropped_count(), 1);
    }

    #[test]
    fn series_uses_original_index() {
        let dataset = PassingGradeDataset::from_raw_rows(
            vec![RATAAN_COLUMN.into(), SBAKU_COLUMN.into()],
            vec![
                raw(0, Some(600.0), Some(12.0)),
                raw(1, Some(610.0), None),
                raw(2, Some(550.0), Some(9.5)),
            ],
        );
        assert_eq!(dataset.rataan_series(), vec![[0.0, 600.0], [2.0, 550.0]]);
    }

    #[test]
    fn cell_display() {
        assert_eq!(CellValue::Float(612.345).to_string(), "612.35");
        assert_eq!(CellValue::Integer(7).to_string(), "7");
        assert_eq!(CellValue::Text("UI".into()).to_string(), "UI");
        assert_eq!(CellValue::Missing.to_string(), "<missing>");
    }
}
