//! CLI application for business-card OCR extraction and contact storage.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{config, delete, export, extract, list, update};

/// Business-card OCR - extract contact fields from recognized card text
#[derive(Parser)]
#[command(name = "bizcard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the contact database (overrides the config file)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify recognized card text into contact fields
    Extract(extract::ExtractArgs),

    /// List stored contact records
    List(list::ListArgs),

    /// Edit fields of a stored record
    Update(update::UpdateArgs),

    /// Delete a stored record
    Delete(delete::DeleteArgs),

    /// Export stored records to CSV
    Export(export::ExportArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let settings = commands::Settings::resolve(cli.config.as_deref(), cli.db.as_deref())?;

    // Execute command
    match cli.command {
        Commands::Extract(args) => extract::run(args, &settings),
        Commands::List(args) => list::run(args, &settings),
        Commands::Update(args) => update::run(args, &settings),
        Commands::Delete(args) => delete::run(args, &settings),
        Commands::Export(args) => export::run(args, &settings),
        Commands::Config(args) => config::run(args, cli.config.as_deref()),
    }
}
