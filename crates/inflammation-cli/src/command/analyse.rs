use std::{collections::BTreeMap, io, path::PathBuf};

use anyhow::Context;
use inflammation_data::compute::{self, GRAPH_LABEL};

use crate::{command::DataFormat, util, view};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AnalyseArg {
    /// Directory holding the `inflammation*` data files
    pub data_dir: PathBuf,

    /// Format of the data files
    #[arg(long, value_enum, default_value_t)]
    pub format: DataFormat,

    /// Output file path for the JSON result (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Draw the result as a text chart on stderr
    #[arg(long)]
    pub plot: bool,
}

pub(crate) fn run(arg: &AnalyseArg) -> anyhow::Result<()> {
    let graph_data = graph_data(arg)?;
    if arg.plot {
        view::render_chart(&mut io::stderr().lock(), &graph_data)
            .context("Failed to draw chart")?;
    }
    util::save_json(&graph_data, arg.output.as_deref())?;
    Ok(())
}

/// Computes the labeled result series handed to the renderers.
fn graph_data(arg: &AnalyseArg) -> anyhow::Result<BTreeMap<&'static str, Vec<f64>>> {
    let source = arg.format.data_source(arg.data_dir.clone());

    eprintln!(
        "Computing standard deviation by day for {}...",
        arg.data_dir.display()
    );
    let daily_standard_deviation = compute::analyse_data(&*source).with_context(|| {
        format!(
            "Failed to analyse inflammation data in {}",
            arg.data_dir.display()
        )
    })?;
    eprintln!(
        "Standard deviation computed for {} days",
        daily_standard_deviation.len()
    );

    let series = daily_standard_deviation.to_vec();
    Ok(BTreeMap::from([(GRAPH_LABEL, series)]))
}
