use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{error::AnalysisError, table::Table};

use super::DataSource;

/// Loads every `inflammation*.json` file of a directory.
///
/// Each file holds a JSON array of patients, each patient carrying its daily
/// readings:
///
/// ```json
/// [
///   { "observations": [0.0, 1.0, 2.0] },
///   { "observations": [0.0, 3.0, 4.0] }
/// ]
/// ```
#[derive(Debug, Clone)]
pub struct JsonDataSource {
    dir_path: PathBuf,
}

impl JsonDataSource {
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

impl DataSource for JsonDataSource {
    fn location(&self) -> &Path {
        &self.dir_path
    }

    fn load_inflammation_data(&self) -> Result<Vec<Table>, AnalysisError> {
        super::load_tables(&self.dir_path, "json", load_json)
    }
}

#[derive(Debug, Deserialize)]
struct PatientRecord {
    observations: Vec<f64>,
}

/// Parses one JSON patient list into a [`Table`].
pub fn load_json(path: &Path) -> Result<Table, AnalysisError> {
    let file = File::open(path).map_err(|source| AnalysisError::Io {
        path: path.to_owned(),
        source,
    })?;
    let patients: Vec<PatientRecord> =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            if e.is_io() {
                AnalysisError::Io {
                    path: path.to_owned(),
                    source: io::Error::from(e),
                }
            } else {
                AnalysisError::malformed(path, e.to_string())
            }
        })?;

    let rows = patients.into_iter().map(|p| p.observations).collect();
    Table::from_rows(rows).map_err(|e| {
        AnalysisError::malformed(
            path,
            format!(
                "patient {} has {} observations, expected {}",
                e.row + 1,
                e.actual,
                e.expected
            ),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdata;

    #[test]
    fn test_load_json() {
        let table = load_json(&testdata("json").join("inflammation-01.json")).unwrap();
        assert_eq!(table.shape(), (2, 3));
        assert_eq!(table.view().row(0).to_vec(), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_load_directory() {
        let tables = JsonDataSource::new(testdata("json"))
            .load_inflammation_data()
            .unwrap();
        let shapes = tables.iter().map(Table::shape).collect::<Vec<_>>();
        assert_eq!(shapes, vec![(2, 3), (3, 3)]);
    }

    #[test]
    fn test_csv_files_are_ignored() {
        // The golden fixture only holds CSV files
        let err = JsonDataSource::new(testdata("golden"))
            .load_inflammation_data()
            .unwrap_err();
        assert!(matches!(err, AnalysisError::NoDataFound { .. }));
    }

    #[test]
    fn test_non_numeric_observation() {
        let path = testdata("malformed").join("inflammation-01.json");
        let err = load_json(&path).unwrap_err();
        assert!(
            matches!(&err, AnalysisError::MalformedData { path: p, .. } if *p == path),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_ragged_observations() {
        let path = testdata("ragged").join("inflammation-01.json");
        let err = load_json(&path).unwrap_err();
        match err {
            AnalysisError::MalformedData { reason, .. } => {
                assert_eq!(reason, "patient 2 has 2 observations, expected 3");
            }
            err => panic!("unexpected error: {err:?}"),
        }
    }
}
