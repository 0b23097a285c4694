//! Standard deviation of daily means across datasets.

use inflammation_stats::axis;
use ndarray::{Array1, Array2, Axis};

use crate::{
    error::{AnalysisError, ShapeMismatchKind},
    models,
    source::DataSource,
    table::Table,
};

/// Label under which the result is handed to renderers.
pub const GRAPH_LABEL: &str = "standard deviation by day";

/// Reduces each table to its daily means and stacks them, one row per table.
///
/// Rows keep the order of `tables`. The result has shape
/// `(tables.len(), days)`.
///
/// # Errors
///
/// * [`AnalysisError::NoDataFound`] if `tables` is empty
/// * [`AnalysisError::ShapeMismatch`] if a table has no patients or a day
///   count different from the first table
pub fn stack_daily_means(tables: &[Table]) -> Result<Array2<f64>, AnalysisError> {
    let first = tables
        .first()
        .ok_or(AnalysisError::NoDataFound { path: None })?;
    let expected = first.num_days();

    let means = tables
        .iter()
        .enumerate()
        .map(|(index, table)| {
            let (patients, days) = table.shape();
            if days != expected {
                return Err(AnalysisError::ShapeMismatch(ShapeMismatchKind::DayCount {
                    index,
                    patients,
                    expected,
                    actual: days,
                }));
            }
            models::daily_mean(table).ok_or(AnalysisError::ShapeMismatch(
                ShapeMismatchKind::NoPatients { index, days },
            ))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let views = means.iter().map(Array1::view).collect::<Vec<_>>();
    let stacked = ndarray::stack(Axis(0), &views).expect("daily means share the day count");
    Ok(stacked)
}

/// Computes the population standard deviation, day by day, of the daily
/// means of `tables`.
///
/// # Errors
///
/// Same as [`stack_daily_means`].
///
/// # Examples
///
/// ```
/// use inflammation_data::{compute, table::Table};
///
/// let tables = [
///     Table::from_rows(vec![vec![0.0, 1.0], vec![0.0, 3.0]]).unwrap(),
///     Table::from_rows(vec![vec![0.0, 4.0]]).unwrap(),
/// ];
/// let std = compute::compute_standard_deviation_by_day(&tables).unwrap();
/// assert_eq!(std.to_vec(), vec![0.0, 1.0]);
/// ```
pub fn compute_standard_deviation_by_day(tables: &[Table]) -> Result<Array1<f64>, AnalysisError> {
    let means = stack_daily_means(tables)?;
    let std = axis::std_axis(means.view(), Axis(0)).expect("at least one table is stacked");
    Ok(std)
}

/// Loads every table of `source` and computes the standard deviation by day
/// between them.
///
/// # Errors
///
/// * [`AnalysisError::NoDataFound`] if the source yields no table
/// * Any loading error of the source
/// * [`AnalysisError::ShapeMismatch`] as in [`stack_daily_means`]
pub fn analyse_data<S>(source: &S) -> Result<Array1<f64>, AnalysisError>
where
    S: DataSource + ?Sized,
{
    let tables = source.load_inflammation_data()?;
    if tables.is_empty() {
        return Err(AnalysisError::no_data_in(source.location()));
    }
    compute_standard_deviation_by_day(&tables)
}
