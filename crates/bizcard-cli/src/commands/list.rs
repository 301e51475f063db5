//! List command - preview stored contact records.

use clap::Args;
use console::style;

use bizcard_store::{ContactStore, SqliteStore};

use super::{print_record, OutputFormat, Settings};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

pub fn run(args: ListArgs, settings: &Settings) -> anyhow::Result<()> {
    let store = SqliteStore::open(&settings.db_path)?;
    let contacts = store.all()?;

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&contacts)?);
        }
        OutputFormat::Text => {
            if contacts.is_empty() {
                println!("no records stored");
                return Ok(());
            }
            for contact in &contacts {
                println!(
                    "{} {}",
                    style(format!("#{}", contact.id)).green().bold(),
                    style(contact.created_at.format("%Y-%m-%d %H:%M")).dim()
                );
                print_record(&contact.record);
                println!();
            }
        }
    }

    Ok(())
}
