mod app;
mod cli;
mod config;
mod error;
mod paths;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::cli::Cli;
use crate::config::DemoConfig;
use crate::error::DemoError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), DemoError> {
    let config = DemoConfig::load(cli.config.as_deref())?;
    let level = cli.log_level.unwrap_or(config.log_level);
    init_logging(level, cli.log_file)?;

    log::info!(
        "starting with {} options (level {})",
        config.options.len(),
        level
    );
    App::new(config).run()
}

/// Send logs to a file; the terminal belongs to the UI.
fn init_logging(level: LevelFilter, path: Option<PathBuf>) -> Result<(), DemoError> {
    if level == LevelFilter::Off {
        return Ok(());
    }

    let path = match path {
        Some(path) => path,
        None => {
            paths::rotate_logs();
            paths::log_file().ok_or(DemoError::NoHomeDir)?
        }
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let log_file = File::create(&path)?;
    WriteLogger::init(level, Config::default(), log_file)?;
    Ok(())
}
