//! Command-line argument parsing for vee.

use std::path::PathBuf;

use clap::Parser;

use vee::config::Config;

/// A small modal text editor
#[derive(Parser, Debug)]
#[command(name = "vee", version, about, long_about = None)]
pub struct Cli {
    /// File to edit (created on first save if missing)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Columns per tab stop
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(i64).range(1..))]
    pub tab_width: Option<i64>,

    /// Write diagnostic logs to this file
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,
}

impl Cli {
    /// Apply CLI overrides to a configuration object.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(width) = self.tab_width {
            config.set("tab-width", width);
        }
    }
}
