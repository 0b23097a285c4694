use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use inflammation_data::{
    error::AnalysisError,
    source::{self, CsvDataSource, DataSource, JsonDataSource},
    table::Table,
};

use self::{analyse::AnalyseArg, summarize::SummarizeArg};

mod analyse;
mod summarize;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Compute the standard deviation by day between all datasets of a directory
    Analyse(#[clap(flatten)] AnalyseArg),
    /// Show the daily mean, max and min of a single dataset
    Summarize(#[clap(flatten)] SummarizeArg),
}

/// On-disk format of inflammation datasets
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum DataFormat {
    /// Comma-separated readings, one patient per line
    #[default]
    Csv,
    /// JSON array of `{"observations": [...]}` patients
    Json,
}

impl DataFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    fn data_source(self, dir: PathBuf) -> Box<dyn DataSource> {
        match self {
            Self::Csv => Box::new(CsvDataSource::new(dir)),
            Self::Json => Box::new(JsonDataSource::new(dir)),
        }
    }

    fn load_file(self, path: &Path) -> Result<Table, AnalysisError> {
        match self {
            Self::Csv => source::load_csv(path),
            Self::Json => source::load_json(path),
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Analyse(arg) => analyse::run(&arg)?,
        Mode::Summarize(arg) => summarize::run(&arg)?,
    }
    Ok(())
}
