//! Delete command - remove a stored record by id.

use clap::Args;
use console::style;

use bizcard_store::{ContactStore, SqliteStore};

use super::Settings;

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Record id (see `bizcard list`)
    id: i64,
}

pub fn run(args: DeleteArgs, settings: &Settings) -> anyhow::Result<()> {
    let store = SqliteStore::open(&settings.db_path)?;
    store.delete(args.id)?;
    println!("{} deleted record {}", style("✓").green(), args.id);
    Ok(())
}
