//! Export command - dump stored records to CSV.

use std::path::PathBuf;

use clap::Args;
use console::style;

use bizcard_core::models::record::Field;
use bizcard_store::{ContactStore, SqliteStore};

use super::Settings;

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// Output CSV file
    #[arg(required = true)]
    output: PathBuf,
}

pub fn run(args: ExportArgs, settings: &Settings) -> anyhow::Result<()> {
    let store = SqliteStore::open(&settings.db_path)?;
    let contacts = store.all()?;

    let mut writer = csv::Writer::from_path(&args.output)?;

    let header: Vec<&str> = std::iter::once("id")
        .chain(Field::ALL.iter().map(|f| f.column()))
        .chain(std::iter::once("created_at"))
        .collect();
    writer.write_record(&header)?;

    for contact in &contacts {
        let mut row = vec![contact.id.to_string()];
        row.extend(contact.record.fields().map(|(_, value)| value.to_string()));
        row.push(contact.created_at.to_rfc3339());
        writer.write_record(&row)?;
    }
    writer.flush()?;

    println!(
        "{} exported {} records to {}",
        style("✓").green(),
        contacts.len(),
        args.output.display()
    );
    Ok(())
}
