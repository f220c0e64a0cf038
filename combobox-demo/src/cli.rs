use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "combobox-demo", version, about = "Accessible ComboBox Demo")]
pub struct Cli {
    /// TOML config file. Defaults to config.toml in the platform config dir.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level override: off, error, warn, info, debug or trace
    #[arg(long)]
    pub log_level: Option<LevelFilter>,

    /// Write the log here instead of the platform cache dir
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
