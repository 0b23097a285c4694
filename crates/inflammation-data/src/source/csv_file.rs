use std::path::{Path, PathBuf};

use crate::{error::AnalysisError, table::Table};

use super::DataSource;

/// Loads every `inflammation*.csv` file of a directory.
#[derive(Debug, Clone)]
pub struct CsvDataSource {
    dir_path: PathBuf,
}

impl CsvDataSource {
    #[must_use]
    pub fn new<P>(dir_path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            dir_path: dir_path.into(),
        }
    }
}

impl DataSource for CsvDataSource {
    fn location(&self) -> &Path {
        &self.dir_path
    }

    fn load_inflammation_data(&self) -> Result<Vec<Table>, AnalysisError> {
        super::load_tables(&self.dir_path, "csv", load_csv)
    }
}

/// Parses one comma-delimited file without header into a [`Table`].
///
/// Each line holds one patient's readings. Fields are trimmed and must parse
/// as `f64`, and every line must have the same number of fields.
pub fn load_csv(path: &Path) -> Result<Table, AnalysisError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, e))?;
        let line = record.position().map_or(rows.len() + 1, |pos| {
            usize::try_from(pos.line()).unwrap_or(usize::MAX)
        });
        let row = record
            .iter()
            .enumerate()
            .map(|(column, field)| {
                field.parse::<f64>().map_err(|_| {
                    AnalysisError::malformed(
                        path,
                        format!(
                            "line {line}, field {}: {field:?} is not a number",
                            column + 1
                        ),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    Table::from_rows(rows).map_err(|e| AnalysisError::malformed(path, e.to_string()))
}

fn csv_error(path: &Path, error: csv::Error) -> AnalysisError {
    if !error.is_io_error() {
        return AnalysisError::malformed(path, error.to_string());
    }
    match error.into_kind() {
        csv::ErrorKind::Io(source) => AnalysisError::Io {
            path: path.to_owned(),
            source,
        },
        kind => AnalysisError::malformed(path, format!("{kind:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdata;

    #[test]
    fn test_load_csv() {
        let table = load_csv(&testdata("golden").join("inflammation-02.csv")).unwrap();
        assert_eq!(table.shape(), (3, 3));
        assert_eq!(table.view().row(1).to_vec(), vec![0.0, 2.0, 3.0]);
    }

    #[test]
    fn test_load_keeps_file_order() {
        let tables = CsvDataSource::new(testdata("golden"))
            .load_inflammation_data()
            .unwrap();
        let shapes = tables.iter().map(Table::shape).collect::<Vec<_>>();
        assert_eq!(shapes, vec![(2, 3), (3, 3), (2, 3)]);
    }

    #[test]
    fn test_non_numeric_field() {
        let path = testdata("malformed").join("inflammation-01.csv");
        let err = load_csv(&path).unwrap_err();
        match err {
            AnalysisError::MalformedData { path: err_path, reason } => {
                assert_eq!(err_path, path);
                assert!(reason.contains("line 2"), "{reason}");
                assert!(reason.contains("\"x\""), "{reason}");
            }
            err => panic!("unexpected error: {err:?}"),
        }
    }

    #[test]
    fn test_ragged_rows() {
        let path = testdata("ragged").join("inflammation-01.csv");
        let err = load_csv(&path).unwrap_err();
        assert!(
            matches!(&err, AnalysisError::MalformedData { path: p, .. } if *p == path),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_whole_load_fails_on_one_bad_file() {
        let err = CsvDataSource::new(testdata("malformed"))
            .load_inflammation_data()
            .unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedData { .. }));
    }

    #[test]
    fn test_missing_file() {
        let path = testdata("golden").join("inflammation-99.csv");
        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, AnalysisError::Io { .. }), "{err:?}");
    }

    #[test]
    fn test_empty_file_has_no_patients() {
        let table = load_csv(&testdata("no_patients").join("inflammation-01.csv")).unwrap();
        assert_eq!(table.num_patients(), 0);
    }
}
