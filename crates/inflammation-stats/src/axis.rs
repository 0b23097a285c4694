//! Reductions of two-dimensional arrays along an explicit axis.
//!
//! Reducing along `Axis(0)` collapses the rows, producing one value per
//! column; reducing along `Axis(1)` collapses the columns, producing one value
//! per row. Every reduction returns `None` when the reduced axis is empty
//! instead of producing `NaN`.

use ndarray::{Array1, ArrayView2, Axis};

use crate::descriptive::DescriptiveStats;

/// Computes [`DescriptiveStats`] for every lane along `axis`.
///
/// # Returns
///
/// * `Some(stats)` - one entry per lane, in lane order
/// * `None` - if `matrix` has length zero along `axis`
///
/// # Panics
///
/// Panics if `axis` is not `Axis(0)` or `Axis(1)`.
///
/// # Examples
///
/// ```
/// use inflammation_stats::axis::describe_axis;
/// use ndarray::{Axis, array};
///
/// let matrix = array![[0.0, 1.0, 2.0], [0.0, 3.0, 6.0]];
/// let stats = describe_axis(matrix.view(), Axis(0)).unwrap();
/// assert_eq!(stats.len(), 3);
/// assert_eq!(stats[2].max, 6.0);
/// ```
#[must_use]
pub fn describe_axis(matrix: ArrayView2<'_, f64>, axis: Axis) -> Option<Vec<DescriptiveStats>> {
    if matrix.len_of(axis) == 0 {
        return None;
    }
    matrix
        .lanes(axis)
        .into_iter()
        .map(|lane| DescriptiveStats::new(lane.iter().copied()))
        .collect()
}

fn reduce_axis<F>(matrix: ArrayView2<'_, f64>, axis: Axis, f: F) -> Option<Array1<f64>>
where
    F: Fn(&DescriptiveStats) -> f64,
{
    let stats = describe_axis(matrix, axis)?;
    Some(stats.iter().map(f).collect())
}

/// Arithmetic mean of every lane along `axis`.
#[must_use]
pub fn mean_axis(matrix: ArrayView2<'_, f64>, axis: Axis) -> Option<Array1<f64>> {
    reduce_axis(matrix, axis, |s| s.mean)
}

/// Population standard deviation of every lane along `axis`.
///
/// ```
/// use inflammation_stats::axis::std_axis;
/// use ndarray::{Axis, array};
///
/// let matrix = array![[1.0, 5.0], [3.0, 5.0]];
/// let std = std_axis(matrix.view(), Axis(0)).unwrap();
/// assert_eq!(std.to_vec(), vec![1.0, 0.0]);
/// ```
#[must_use]
pub fn std_axis(matrix: ArrayView2<'_, f64>, axis: Axis) -> Option<Array1<f64>> {
    reduce_axis(matrix, axis, |s| s.std_dev)
}

/// Maximum of every lane along `axis`.
#[must_use]
pub fn max_axis(matrix: ArrayView2<'_, f64>, axis: Axis) -> Option<Array1<f64>> {
    reduce_axis(matrix, axis, |s| s.max)
}

/// Minimum of every lane along `axis`.
#[must_use]
pub fn min_axis(matrix: ArrayView2<'_, f64>, axis: Axis) -> Option<Array1<f64>> {
    reduce_axis(matrix, axis, |s| s.min)
}

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};

    use super::*;

    #[test]
    fn test_reduce_over_rows_yields_one_value_per_column() {
        let matrix = array![[1.0, 2.0, 3.0], [3.0, 4.0, 5.0]];
        let means = mean_axis(matrix.view(), Axis(0)).unwrap();
        assert_eq!(means.to_vec(), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_reduce_over_columns_yields_one_value_per_row() {
        let matrix = array![[1.0, 2.0, 3.0], [3.0, 4.0, 5.0]];
        assert_eq!(
            max_axis(matrix.view(), Axis(1)).unwrap().to_vec(),
            vec![3.0, 5.0]
        );
        assert_eq!(
            min_axis(matrix.view(), Axis(1)).unwrap().to_vec(),
            vec![1.0, 3.0]
        );
    }

    #[test]
    fn test_std_axis_is_population() {
        let matrix = array![[0.0], [2.0]];
        let std = std_axis(matrix.view(), Axis(0)).unwrap();
        assert_eq!(std.to_vec(), vec![1.0]);
    }

    #[test]
    fn test_empty_reduced_axis() {
        let matrix = Array2::<f64>::zeros((0, 4));
        assert!(describe_axis(matrix.view(), Axis(0)).is_none());
        assert!(mean_axis(matrix.view(), Axis(0)).is_none());

        // Reducing the non-empty axis yields zero lanes
        let matrix = Array2::<f64>::zeros((2, 0));
        assert_eq!(describe_axis(matrix.view(), Axis(0)).unwrap().len(), 0);
    }
}
