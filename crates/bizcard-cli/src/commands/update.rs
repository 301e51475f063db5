//! Update command - edit fields of a stored record by id.

use clap::Args;
use console::style;

use bizcard_core::models::record::Field;
use bizcard_store::{ContactStore, SqliteStore};

use super::{print_record, Settings};

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Record id (see `bizcard list`)
    id: i64,

    /// Field assignment, e.g. --set email=jane@acme.com (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE", required = true)]
    set: Vec<String>,
}

pub fn run(args: UpdateArgs, settings: &Settings) -> anyhow::Result<()> {
    let store = SqliteStore::open(&settings.db_path)?;
    let mut stored = store.get(args.id)?;

    for assignment in &args.set {
        let (field, value) = assignment
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("expected FIELD=VALUE, got {assignment:?}"))?;
        let field: Field = field.parse()?;
        stored.record.set(field, value);
    }

    store.update(args.id, &stored.record)?;

    println!("{} updated record {}", style("✓").green(), args.id);
    print_record(&stored.record);
    Ok(())
}
