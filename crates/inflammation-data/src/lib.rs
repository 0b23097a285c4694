//! Loading and aggregation of patient inflammation datasets.
//!
//! Each dataset is a [`table::Table`] of readings (patients × days) stored in
//! its own file. This crate discovers the files of a directory, parses them,
//! and reduces them to the standard deviation, day by day, of the per-dataset
//! daily means.
//!
//! # Overview
//!
//! 1. **Discover Files** ([`source::discover_files`]): list `inflammation*` files in name order
//! 2. **Parse Tables** ([`source::CsvDataSource`], [`source::JsonDataSource`]): one table per file
//! 3. **Daily Means** ([`models::daily_mean`]): reduce each table over its patients
//! 4. **Stack** ([`compute::stack_daily_means`]): one row of means per table
//! 5. **Standard Deviation** ([`compute::compute_standard_deviation_by_day`]): population
//!    standard deviation of each day across tables
//!
//! [`compute::analyse_data`] runs the whole pipeline for a [`source::DataSource`].
//!
//! # Examples
//!
//! ```no_run
//! use inflammation_data::{compute, source::CsvDataSource};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let source = CsvDataSource::new("data");
//! let std_by_day = compute::analyse_data(&source)?;
//! println!("{std_by_day}");
//! # Ok(())
//! # }
//! ```
//!
//! Tables can also be aggregated directly:
//!
//! ```
//! use inflammation_data::{compute, error::AnalysisError, table::Table};
//!
//! let tables = [
//!     Table::from_rows(vec![vec![0.0, 1.0, 2.0]]).unwrap(),
//!     Table::from_rows(vec![vec![0.0, 1.0]]).unwrap(),
//! ];
//! let err = compute::compute_standard_deviation_by_day(&tables).unwrap_err();
//! assert!(matches!(err, AnalysisError::ShapeMismatch(_)));
//! ```

pub mod compute;
pub mod error;
pub mod models;
pub mod source;
pub mod table;

#[cfg(test)]
fn testdata(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
}
