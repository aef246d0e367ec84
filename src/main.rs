//! vee - a small modal text editor
//!
//! Parses the command line, sets up optional file logging and hands the
//! file to the terminal runner.

mod cli;

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;

use vee::config::Config;
use vee::run;
use vee::user_config;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // The terminal belongs to the editor, so logs only go to a file
    if let Some(path) = &cli.log {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("VEE_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    let mut config = Config::default();
    user_config::configure(&mut config);
    cli.apply_to_config(&mut config);

    run::run_terminal_mode(&cli.file, &config)
}
