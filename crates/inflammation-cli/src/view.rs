//! Text charts of labeled daily series.

use std::{
    collections::BTreeMap,
    io::{self, Write},
};

const BAR_WIDTH: usize = 40;

/// Draws every series of `graph_data` as a horizontal bar chart, one bar per day.
///
/// Bars are scaled to the largest finite value of their own series.
/// Negative and non-finite values get an empty bar.
pub fn render_chart<W>(writer: &mut W, graph_data: &BTreeMap<&str, Vec<f64>>) -> io::Result<()>
where
    W: Write + ?Sized,
{
    for (label, values) in graph_data {
        writeln!(writer, "{label}")?;
        let scale = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max);
        for (day, &value) in values.iter().enumerate() {
            let bar = "#".repeat(bar_len(value, scale));
            writeln!(
                writer,
                "{:>5} |{bar:<width$}| {value:.4}",
                day + 1,
                width = BAR_WIDTH
            )?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn bar_len(value: f64, scale: f64) -> usize {
    if scale <= 0.0 || !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let width = BAR_WIDTH as f64;
    ((value / scale) * width).round().min(width) as usize
}
