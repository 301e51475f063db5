//! Extract command - classify recognized card text into contact fields.

use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use console::style;
use tracing::info;

use bizcard_core::classify::{FieldClassifier, RecordClassifier};
use bizcard_core::ocr::{read_fragments, read_fragments_from_path};
use bizcard_store::{ContactStore, SqliteStore, StoreError};

use super::{print_record, print_warning, OutputFormat, Settings};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Recognized text fragments, one per line ("-" reads stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Save the extracted record to the contact database
    #[arg(long)]
    save: bool,
}

pub fn run(args: ExtractArgs, settings: &Settings) -> anyhow::Result<()> {
    let fragments = if args.input.as_os_str() == "-" {
        read_fragments(BufReader::new(std::io::stdin()))?
    } else {
        read_fragments_from_path(&args.input)
            .with_context(|| format!("failed to read fragments from {}", args.input.display()))?
    };

    info!("read {} fragments from {}", fragments.len(), args.input.display());

    let classifier = FieldClassifier::new()
        .with_short_input_warning(settings.config.extraction.warn_on_short_input);
    let classification = classifier.classify(&fragments);

    for warning in &classification.warnings {
        print_warning(warning);
    }

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&classification.record)?)
        }
        OutputFormat::Text => print_record(&classification.record),
    }

    // Persistence happens only on the explicit flag, never implicitly.
    if args.save {
        let store = SqliteStore::open(&settings.db_path)?;
        match store.insert(&classification.record) {
            Ok(stored) => {
                println!("{} saved as record {}", style("✓").green(), stored.id)
            }
            Err(err @ StoreError::Duplicate { .. }) => {
                anyhow::bail!("not saved: {err}")
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
