use std::{io, path::PathBuf};

/// Errors raised while loading or aggregating inflammation data.
///
/// Every error is raised at the point of detection and carries enough
/// context (the originating path, or the offending table index) for the
/// caller to diagnose it. No partial result is produced.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum AnalysisError {
    /// The directory does not exist or holds no matching files, or an
    /// empty table sequence was supplied to the pipeline.
    #[display(
        "No inflammation data found{}",
        path.as_deref()
            .map_or_else(String::new, |path| format!(" in {}", path.display()))
    )]
    NoDataFound { path: Option<PathBuf> },
    /// A data file has non-numeric or structurally inconsistent content.
    #[display("Malformed inflammation data in {}: {reason}", path.display())]
    MalformedData { path: PathBuf, reason: String },
    /// Tables of differing day counts, or a table without patients.
    #[display("Shape mismatch: {_0}")]
    ShapeMismatch(#[error(not(source))] ShapeMismatchKind),
    /// A discovered data file could not be read.
    #[display("Failed to read {}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ShapeMismatchKind {
    #[display(
        "table {index} has shape {patients}x{actual}, expected {expected} days (as table 0)"
    )]
    DayCount {
        index: usize,
        patients: usize,
        expected: usize,
        actual: usize,
    },
    #[display("table {index} has shape 0x{days}, at least one patient is required")]
    NoPatients { index: usize, days: usize },
}

impl AnalysisError {
    pub(crate) fn no_data_in<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self::NoDataFound {
            path: Some(path.into()),
        }
    }

    pub(crate) fn malformed<P, R>(path: P, reason: R) -> Self
    where
        P: Into<PathBuf>,
        R: Into<String>,
    {
        Self::MalformedData {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
