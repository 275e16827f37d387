/// Command-line arguments.
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use tilesleuth_core::{OutputFormat, UnreadablePolicy};

#[derive(Debug, Parser)]
#[command(name = "tilesleuth")]
#[command(version)]
#[command(about = "Audit a tile cache: bucket tiles by size and flag oversized ones", long_about = None)]
pub struct Cli {
    /// Tile cache directory to audit (e.g. the extracted VTPK `tile` folder)
    pub root: Option<PathBuf>,

    /// Flag tiles whose size in KB is at or above this value [default: 150]
    #[arg(short = 't', long = "threshold-kb", value_name = "KB")]
    pub threshold_kb: Option<u64>,

    /// Only count files with this extension (repeatable, e.g. -e pbf)
    #[arg(short = 'e', long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Skip files and directories that cannot be read instead of aborting
    #[arg(long)]
    pub skip_unreadable: bool,

    /// Report format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Settings file (TOML). Defaults to ./tilesleuth.toml when present
    #[arg(short, long, value_name = "FILE", env = "TILESLEUTH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

impl Cli {
    /// The unreadable-entry policy requested on the command line, if any.
    pub fn policy_override(&self) -> Option<UnreadablePolicy> {
        self.skip_unreadable.then_some(UnreadablePolicy::Skip)
    }
}
