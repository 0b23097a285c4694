use std::{collections::BTreeMap, io, path::PathBuf};

use anyhow::Context;
use inflammation_data::models;

use crate::{command::DataFormat, view};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SummarizeArg {
    /// Path to a single data file
    pub file: PathBuf,

    /// Format of the data file (inferred from the extension if omitted)
    #[arg(long, value_enum)]
    pub format: Option<DataFormat>,

    /// Draw the daily series as text charts
    #[arg(long)]
    pub plot: bool,
}

pub(crate) fn run(arg: &SummarizeArg) -> anyhow::Result<()> {
    let format = arg
        .format
        .or_else(|| DataFormat::from_path(&arg.file))
        .unwrap_or_default();
    let table = format
        .load_file(&arg.file)
        .with_context(|| format!("Failed to load {}", arg.file.display()))?;
    let (patients, days) = table.shape();
    eprintln!("Loaded {patients} patients over {days} days");

    let (Some(mean), Some(max), Some(min)) = (
        models::daily_mean(&table),
        models::daily_max(&table),
        models::daily_min(&table),
    ) else {
        anyhow::bail!("{} has no patients", arg.file.display());
    };

    println!("{:>5} {:>10} {:>10} {:>10}", "day", "mean", "max", "min");
    for (day, ((mean, max), min)) in mean.iter().zip(&max).zip(&min).enumerate() {
        println!("{:>5} {mean:>10.4} {max:>10.4} {min:>10.4}", day + 1);
    }

    if arg.plot {
        let graph_data = BTreeMap::from([
            ("average", mean.to_vec()),
            ("max", max.to_vec()),
            ("min", min.to_vec()),
        ]);
        println!();
        view::render_chart(&mut io::stdout().lock(), &graph_data)
            .context("Failed to draw chart")?;
    }

    Ok(())
}
