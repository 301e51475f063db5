//! CLI subcommands.

pub mod config;
pub mod delete;
pub mod export;
pub mod extract;
pub mod list;
pub mod update;

use std::path::{Path, PathBuf};

use console::style;

use bizcard_core::models::config::BizcardConfig;
use bizcard_core::models::record::ContactRecord;

/// Output format for record-producing commands.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable field listing
    Text,
    /// JSON output
    Json,
}

/// Settings shared by the subcommands, resolved from flags and config.
pub struct Settings {
    pub config: BizcardConfig,
    pub db_path: PathBuf,
}

impl Settings {
    /// Database path resolution: `--db` flag first, then the config file,
    /// then the built-in default.
    pub fn resolve(config_path: Option<&Path>, db_flag: Option<&Path>) -> anyhow::Result<Self> {
        let config = match config_path {
            Some(path) => BizcardConfig::from_file(path)?,
            None => BizcardConfig::default(),
        };
        let db_path = match db_flag {
            Some(path) => path.to_path_buf(),
            None => config.database.path.clone(),
        };
        Ok(Self { config, db_path })
    }
}

/// Print the nine fields of a record for review.
pub fn print_record(record: &ContactRecord) {
    for (field, value) in record.fields() {
        let label = format!("{:<13}", field.label());
        println!("{} {}", style(label).cyan().bold(), value);
    }
}

/// Print a classification warning.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}
