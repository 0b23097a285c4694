//! Statistical utilities for the inflammation analysis tools.
//!
//! This crate provides:
//!
//! - **Descriptive statistics**: min, max, mean, variance and standard deviation of a dataset
//! - **Axis reductions**: the same statistics computed lane-by-lane along an explicit axis
//!   of a two-dimensional array
//!
//! All statistics use double precision and the population convention
//! (the variance denominator is the number of values, not one less).
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`axis`]: Reductions of 2-D arrays along an explicit axis
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use inflammation_stats::descriptive::DescriptiveStats;
//!
//! let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 5.0);
//! assert_eq!(stats.std_dev, 2.0);
//! ```
//!
//! ## Reducing a matrix column by column
//!
//! ```
//! use inflammation_stats::axis;
//! use ndarray::{Axis, array};
//!
//! let matrix = array![[1.0, 2.0], [3.0, 6.0]];
//! let means = axis::mean_axis(matrix.view(), Axis(0)).unwrap();
//! assert_eq!(means.to_vec(), vec![2.0, 4.0]);
//! ```

pub mod axis;
pub mod descriptive;
