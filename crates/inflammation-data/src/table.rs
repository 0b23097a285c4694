use ndarray::{Array2, ArrayView2};

/// Inflammation readings of one dataset: one row per patient, one column per day.
///
/// The shape is fixed when the table is built and the readings are never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    data: Array2<f64>,
}

/// A row whose length differs from the first row of the table.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("row {row} has {actual} values, expected {expected}")]
pub struct RaggedRowError {
    pub row: usize,
    pub expected: usize,
    pub actual: usize,
}

impl Table {
    /// Builds a table from patient rows.
    ///
    /// All rows must have the same length. An empty `rows` yields a `0x0`
    /// table.
    ///
    /// # Examples
    ///
    /// ```
    /// use inflammation_data::table::Table;
    ///
    /// let table = Table::from_rows(vec![vec![0.0, 1.0, 2.0], vec![0.0, 3.0, 4.0]]).unwrap();
    /// assert_eq!(table.shape(), (2, 3));
    ///
    /// assert!(Table::from_rows(vec![vec![0.0, 1.0], vec![2.0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, RaggedRowError> {
        let num_patients = rows.len();
        let num_days = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(num_patients * num_days);
        for (row, readings) in rows.into_iter().enumerate() {
            if readings.len() != num_days {
                return Err(RaggedRowError {
                    row,
                    expected: num_days,
                    actual: readings.len(),
                });
            }
            values.extend(readings);
        }
        let data = Array2::from_shape_vec((num_patients, num_days), values)
            .expect("row lengths are checked above");
        Ok(Self { data })
    }

    #[must_use]
    pub fn from_array(data: Array2<f64>) -> Self {
        Self { data }
    }

    #[must_use]
    pub fn num_patients(&self) -> usize {
        self.data.nrows()
    }

    #[must_use]
    pub fn num_days(&self) -> usize {
        self.data.ncols()
    }

    /// Returns `(patients, days)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    #[must_use]
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn test_from_rows_keeps_row_order() {
        let table = Table::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        assert_eq!(table.num_patients(), 3);
        assert_eq!(table.num_days(), 2);
        assert_eq!(table.view(), array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]].view());
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let err = Table::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]]).unwrap_err();
        assert_eq!(
            err,
            RaggedRowError {
                row: 1,
                expected: 3,
                actual: 2,
            }
        );
    }

    #[test]
    fn test_from_rows_empty() {
        let table = Table::from_rows(Vec::new()).unwrap();
        assert_eq!(table.shape(), (0, 0));
    }

    #[test]
    fn test_from_array() {
        let table = Table::from_array(array![[0.5, 1.5, 2.5]]);
        assert_eq!(table.shape(), (1, 3));
    }
}
