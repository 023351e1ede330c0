use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::filter::is_missing;
use super::model::{CellValue, PassingGradeDataset, RawRow, RATAAN_COLUMN, SBAKU_COLUMN};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset file '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("reading dataset '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing the '{0}' column")]
    MissingColumn(&'static str),

    #[error("row {row}, column '{column}': '{text}' is not a number")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        text: String,
    },
}

impl DatasetError {
    /// Whether the error only means the file is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DatasetError::NotFound(_))
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and clean the passing grade CSV at `path`.
pub fn load_dataset(path: &Path) -> Result<PassingGradeDataset, DatasetError> {
    let file = std::fs::File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            DatasetError::NotFound(path.to_path_buf())
        } else {
            DatasetError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let dataset = read_dataset(file)?;
    log::info!(
        "Loaded {} of {} rows from {} ({} dropped)",
        dataset.len(),
        dataset.raw_row_count,
        path.display(),
        dataset.dropped_count()
    );
    Ok(dataset)
}

/// CSV layout: header row with column names, including `RATAAN` and
/// `S.BAKU`. Every other column is kept for display only.
pub fn read_dataset<R: Read>(source: R) -> Result<PassingGradeDataset, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let rataan_idx = column_position(&headers, RATAAN_COLUMN)?;
    let sbaku_idx = column_position(&headers, SBAKU_COLUMN)?;

    let mut raw_rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;

        let rataan = parse_feature(record.get(rataan_idx), row_no, RATAAN_COLUMN)?;
        let sbaku = parse_feature(record.get(sbaku_idx), row_no, SBAKU_COLUMN)?;

        let cells = (0..headers.len())
            .map(|col_idx| guess_cell_value(record.get(col_idx).unwrap_or("")))
            .collect();

        raw_rows.push(RawRow {
            index: row_no,
            rataan,
            sbaku,
            cells,
        });
    }

    Ok(PassingGradeDataset::from_raw_rows(headers, raw_rows))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn column_position(headers: &[String], column: &'static str) -> Result<usize, DatasetError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or(DatasetError::MissingColumn(column))
}

/// `None` for a missing cell, an error for text that is not a number.
fn parse_feature(
    cell: Option<&str>,
    row: usize,
    column: &'static str,
) -> Result<Option<f64>, DatasetError> {
    let cell = cell.unwrap_or("");
    if is_missing(cell) {
        return Ok(None);
    }
    parse_number(cell)
        .map(Some)
        .ok_or_else(|| DatasetError::InvalidNumber {
            row,
            column,
            text: cell.to_string(),
        })
}

/// Accepts `612.5` as well as the decimal-comma form `612,5`.
fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    let parsed = s
        .parse::<f64>()
        .ok()
        .or_else(|| s.replacen(',', ".", 1).parse::<f64>().ok())?;
    parsed.is_finite().then_some(parsed)
}

fn guess_cell_value(s: &str) -> CellValue {
    if is_missing(s) {
        return CellValue::Missing;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    CellValue::Text(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
PTN,PRODI,RATAAN,S.BAKU,MIN
Universitas Indonesia,Teknik Informatika,650.5,12.1,612.3
Universitas Indonesia,Kedokteran,,10.4,700
Institut Teknologi Bandung,Matematika,640,,580
Universitas Gadjah Mada,Hukum,601.2,9.8,560
Universitas Airlangga,Farmasi,NaN,11,540
";

    #[test]
    fn drops_rows_with_missing_features() {
        let dataset = read_dataset(SAMPLE.as_bytes()).unwrap();

        assert_eq!(dataset.raw_row_count, 5);
        assert!(dataset.len() < dataset.raw_row_count);
        assert_eq!(dataset.len(), 2);
        for row in &dataset.rows {
            assert!(row.rataan.is_finite());
            assert!(row.sbaku.is_finite());
        }
    }

    #[test]
    fn keeps_positional_index_and_all_columns() {
        let dataset = read_dataset(SAMPLE.as_bytes()).unwrap();

        let indices: Vec<usize> = dataset.rows.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 3]);
        assert_eq!(
            dataset.column_names,
            vec!["PTN", "PRODI", "RATAAN", "S.BAKU", "MIN"]
        );
        assert_eq!(
            dataset.rows[1].cells[0],
            CellValue::Text("Universitas Gadjah Mada".into())
        );
        assert_eq!(dataset.rows[1].cells[4], CellValue::Integer(560));
    }

    #[test]
    fn missing_column_is_reported() {
        let err = read_dataset("PTN,RATAAN\nUI,600\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn(SBAKU_COLUMN)));
    }

    #[test]
    fn non_numeric_feature_is_an_error() {
        let err = read_dataset("RATAAN,S.BAKU\nhigh,10\n".as_bytes()).unwrap_err();
        match err {
            DatasetError::InvalidNumber { row, column, text } => {
                assert_eq!(row, 0);
                assert_eq!(column, RATAAN_COLUMN);
                assert_eq!(text, "high");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn decimal_comma_is_accepted() {
        let dataset = read_dataset("RATAAN,S.BAKU\n\"612,5\",\"10,25\"\n".as_bytes()).unwrap();
        assert_eq!(dataset.rows[0].rataan, 612.5);
        assert_eq!(dataset.rows[0].sbaku, 10.25);
    }

    #[test]
    fn short_rows_count_as_missing() {
        let dataset = read_dataset("RATAAN,S.BAKU,MIN\n600\n610,11,590\n".as_bytes()).unwrap();
        assert_eq!(dataset.raw_row_count, 2);
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.rows[0].index, 1);
    }

    #[test]
    fn absent_file_is_not_found() {
        let path = std::env::temp_dir().join("passing-grade-no-such-file.csv");
        let err = load_dataset(&path).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn loads_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "passing-grade-loader-{}.csv",
            std::process::id()
        ));
        std::fs::write(&path, SAMPLE).unwrap();
        let dataset = load_dataset(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(dataset.len(), 2);
    }
}
