use super::model::{PassingGradeRow, RawRow};

// ---------------------------------------------------------------------------
// Row cleaning: drop rows with a missing feature
// ---------------------------------------------------------------------------

/// Tokens treated as "no value" in a feature column (besides the empty string).
pub const MISSING_TOKENS: &[&str] = &["NA", "N/A", "NaN", "nan", "null", "NULL", "None", "-"];

/// Whether a raw CSV cell counts as missing.
pub fn is_missing(cell: &str) -> bool {
    let cell = cell.trim();
    cell.is_empty() || MISSING_TOKENS.contains(&cell)
}

/// Keep only rows where both RATAAN and S.BAKU are present.
///
/// Row order and the original positional index are preserved, so the
/// surviving indices may have gaps.
pub fn drop_incomplete(raw_rows: Vec<RawRow>) -> Vec<PassingGradeRow> {
    raw_rows
        .into_iter()
        .filter_map(|row| {
            let (Some(rataan), Some(sbaku)) = (row.rataan, row.sbaku) else {
                log::debug!("Dropping row {}: missing RATAAN or S.BAKU", row.index);
                return None;
            };
            Some(PassingGradeRow {
                index: row.index,
                rataan,
                sbaku,
                cells: row.cells,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(index: usize, rataan: Option<f64>, sbaku: Option<f64>) -> RawRow {
        RawRow {
            index,
            rataan,
            sbaku,
            cells: Vec::new(),
        }
    }

    #[test]
    fn missing_tokens() {
        assert!(is_missing(""));
        assert!(is_missing("   "));
        assert!(is_missing("NaN"));
        assert!(is_missing(" N/A "));
        assert!(!is_missing("0"));
        assert!(!is_missing("612.5"));
    }

    #[test]
    fn drops_rows_missing_either_feature() {
        let rows = drop_incomplete(vec![
            raw(0, Some(1.0), Some(2.0)),
            raw(1, None, Some(2.0)),
            raw(2, Some(1.0), None),
            raw(3, None, None),
            raw(4, Some(5.0), Some(6.0)),
        ]);
        let indices: Vec<usize> = rows.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 4]);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(drop_incomplete(Vec::new()).is_empty());
    }
}
