//! Discovery and parsing of inflammation data files.
//!
//! Loading runs in two stages: [`discover_files`] lists the matching files of
//! a directory in a deterministic order, then each file is parsed into a
//! [`Table`]. Errors from either stage name the path they originate from.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{error::AnalysisError, table::Table};

pub use self::{
    csv_file::{CsvDataSource, load_csv},
    json_file::{JsonDataSource, load_json},
};

mod csv_file;
mod json_file;

/// File name prefix shared by all inflammation data files.
pub const FILE_PREFIX: &str = "inflammation";

/// A provider of inflammation tables.
pub trait DataSource {
    /// Where the data is loaded from, used in error reports.
    fn location(&self) -> &Path;

    /// Loads every table of the source, in a deterministic order.
    fn load_inflammation_data(&self) -> Result<Vec<Table>, AnalysisError>;
}

/// Lists the inflammation data files of `dir` with the given extension.
///
/// A file matches if it is a regular file whose name starts with
/// [`FILE_PREFIX`] and whose extension is `extension`. The result is sorted
/// by file name.
///
/// # Errors
///
/// Returns [`AnalysisError::NoDataFound`] if `dir` is not a directory or
/// contains no matching file, and [`AnalysisError::Io`] if the directory
/// cannot be listed.
pub fn discover_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, AnalysisError> {
    if !dir.is_dir() {
        return Err(AnalysisError::no_data_in(dir));
    }
    let io_error = |source: io::Error| AnalysisError::Io {
        path: dir.to_owned(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && is_data_file(&path, extension) {
            paths.push(path);
        }
    }
    if paths.is_empty() {
        return Err(AnalysisError::no_data_in(dir));
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

fn is_data_file(path: &Path, extension: &str) -> bool {
    let has_prefix = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(FILE_PREFIX));
    let has_extension = path.extension().is_some_and(|ext| ext == extension);
    has_prefix && has_extension
}

fn load_tables<F>(dir: &Path, extension: &str, parse: F) -> Result<Vec<Table>, AnalysisError>
where
    F: Fn(&Path) -> Result<Table, AnalysisError>,
{
    discover_files(dir, extension)?
        .iter()
        .map(|path| parse(path))
        .collect()
}
