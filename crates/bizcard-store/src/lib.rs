//! SQLite-backed persistence for contact records.
//!
//! One table, `bizcard_info`, one row per stored contact. Rows are keyed by
//! a surrogate id; the (name, designation, company_name) triple is used only
//! to reject duplicate inserts.

mod error;
mod store;

pub use error::{Result, StoreError};
pub use store::{ContactStore, SqliteStore, StoredContact};
