//! Config command - manage configuration.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;

use bizcard_core::models::config::BizcardConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new configuration file
    Init(InitArgs),

    /// Get a specific configuration value
    Get {
        /// Configuration key ("database.path" or "extraction.warn_on_short_input")
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// New value
        value: String,
    },
}

#[derive(Args)]
struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite existing file
    #[arg(long)]
    force: bool,
}

fn default_config_path() -> PathBuf {
    PathBuf::from("bizcard.json")
}

fn config_path(flag: Option<&Path>) -> PathBuf {
    flag.map(Path::to_path_buf).unwrap_or_else(default_config_path)
}

fn load(path: &Path) -> anyhow::Result<BizcardConfig> {
    if path.exists() {
        Ok(BizcardConfig::from_file(path)?)
    } else {
        println!(
            "{} no config file at {}, showing defaults",
            style("i").blue(),
            path.display()
        );
        Ok(BizcardConfig::default())
    }
}

pub fn run(args: ConfigArgs, config_flag: Option<&Path>) -> anyhow::Result<()> {
    let path = config_path(config_flag);

    match args.command {
        ConfigCommand::Show => {
            let config = load(&path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigCommand::Init(init) => {
            let output = init.output.unwrap_or(path);
            if output.exists() && !init.force {
                anyhow::bail!(
                    "{} already exists, pass --force to overwrite",
                    output.display()
                );
            }
            BizcardConfig::default().save(&output)?;
            println!("{} wrote default config to {}", style("✓").green(), output.display());
            Ok(())
        }
        ConfigCommand::Get { key } => {
            let config = load(&path)?;
            match key.as_str() {
                "database.path" => println!("{}", config.database.path.display()),
                "extraction.warn_on_short_input" => {
                    println!("{}", config.extraction.warn_on_short_input)
                }
                _ => anyhow::bail!("unknown config key: {key}"),
            }
            Ok(())
        }
        ConfigCommand::Set { key, value } => {
            let mut config = load(&path)?;
            match key.as_str() {
                "database.path" => config.database.path = PathBuf::from(&value),
                "extraction.warn_on_short_input" => {
                    config.extraction.warn_on_short_input = value.parse()?;
                }
                _ => anyhow::bail!("unknown config key: {key}"),
            }
            config.save(&path)?;
            println!("{} set {} = {}", style("✓").green(), key, value);
            Ok(())
        }
    }
}
