//! Per-day reductions of a single [`Table`].
//!
//! Each function collapses the patient axis and returns one value per day,
//! or `None` when the table has no patients.

use inflammation_stats::axis;
use ndarray::{Array1, Axis};

use crate::table::Table;

/// Mean inflammation of each day across all patients.
///
/// # Examples
///
/// ```
/// use inflammation_data::{models, table::Table};
///
/// let table = Table::from_rows(vec![vec![0.0, 1.0, 2.0], vec![0.0, 3.0, 4.0]]).unwrap();
/// assert_eq!(models::daily_mean(&table).unwrap().to_vec(), vec![0.0, 2.0, 3.0]);
/// ```
#[must_use]
pub fn daily_mean(table: &Table) -> Option<Array1<f64>> {
    axis::mean_axis(table.view(), Axis(0))
}

/// Maximum inflammation of each day across all patients.
#[must_use]
pub fn daily_max(table: &Table) -> Option<Array1<f64>> {
    axis::max_axis(table.view(), Axis(0))
}

/// Minimum inflammation of each day across all patients.
#[must_use]
pub fn daily_min(table: &Table) -> Option<Array1<f64>> {
    axis::min_axis(table.view(), Axis(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_rows(vec![
            vec![0.0, 2.0, 7.0],
            vec![0.0, 4.0, 1.0],
            vec![0.0, 3.0, 4.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_daily_mean() {
        assert_eq!(daily_mean(&sample()).unwrap().to_vec(), vec![0.0, 3.0, 4.0]);
    }

    #[test]
    fn test_daily_max_and_min() {
        assert_eq!(daily_max(&sample()).unwrap().to_vec(), vec![0.0, 4.0, 7.0]);
        assert_eq!(daily_min(&sample()).unwrap().to_vec(), vec![0.0, 2.0, 1.0]);
    }

    #[test]
    fn test_no_patients() {
        let table = Table::from_rows(Vec::new()).unwrap();
        assert!(daily_mean(&table).is_none());
        assert!(daily_max(&table).is_none());
        assert!(daily_min(&table).is_none());
    }
}
