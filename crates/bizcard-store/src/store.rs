//! Contact store over a single `bizcard_info` table.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::Serialize;
use tracing::{debug, info};

use bizcard_core::models::record::ContactRecord;

use crate::error::{Result, StoreError};

/// A record as persisted: surrogate id, creation time, and the fields.
///
/// The id is the update/delete key. Field values (name included) stay freely
/// editable without ever changing a row's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredContact {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub record: ContactRecord,
}

/// Operations the persistence collaborator exposes.
pub trait ContactStore {
    /// Create the `bizcard_info` table if it does not exist yet.
    fn init(&self) -> Result<()>;

    /// Insert a record, rejecting duplicates by the
    /// (name, designation, company_name) triple.
    fn insert(&self, record: &ContactRecord) -> Result<StoredContact>;

    /// All stored records in insertion order.
    fn all(&self) -> Result<Vec<StoredContact>>;

    /// Fetch one record by id.
    fn get(&self, id: i64) -> Result<StoredContact>;

    /// Replace the fields of the record with the given id.
    fn update(&self, id: i64, record: &ContactRecord) -> Result<()>;

    /// Delete the record with the given id.
    fn delete(&self, id: i64) -> Result<()>;

    /// Id of a stored record matching the duplicate key of `record`, if any.
    fn find_duplicate(&self, record: &ContactRecord) -> Result<Option<i64>>;
}

/// SQLite-backed store owning its connection.
///
/// The connection is opened explicitly and released on drop; there is no
/// ambient database state. Every operation is a single statement, so a
/// failed call leaves no partial writes behind.
pub struct SqliteStore {
    conn: Connection,
}

const COLUMNS: &str =
    "id, name, designation, company_name, contact, email, website, address, state, pincode, created_at";

impl SqliteStore {
    /// Open (creating if needed) the database at `path` and ensure the
    /// table exists.
    pub fn open(path: &Path) -> Result<Self> {
        debug!("opening contact store at {}", path.display());
        let store = Self {
            conn: Connection::open(path)?,
        };
        store.init()?;
        Ok(store)
    }

    /// In-memory store, mainly for tests.
    pub fn open_in_memory() -> Result<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.init()?;
        Ok(store)
    }

    fn row_to_contact(row: &Row<'_>) -> rusqlite::Result<StoredContact> {
        Ok(StoredContact {
            id: row.get("id")?,
            created_at: row.get("created_at")?,
            record: ContactRecord {
                name: row.get("name")?,
                designation: row.get("designation")?,
                company_name: row.get("company_name")?,
                contact: row.get("contact")?,
                email: row.get("email")?,
                website: row.get("website")?,
                address: row.get("address")?,
                state: row.get("state")?,
                pincode: row.get("pincode")?,
            },
        })
    }
}

impl ContactStore for SqliteStore {
    fn init(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS bizcard_info (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                designation TEXT NOT NULL,
                company_name TEXT NOT NULL,
                contact TEXT NOT NULL,
                email TEXT NOT NULL,
                website TEXT NOT NULL,
                address TEXT NOT NULL,
                state TEXT NOT NULL,
                pincode TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    fn insert(&self, record: &ContactRecord) -> Result<StoredContact> {
        if self.find_duplicate(record)?.is_some() {
            let (name, designation, company) = record.duplicate_key();
            return Err(StoreError::Duplicate {
                name: name.to_string(),
                designation: designation.to_string(),
                company: company.to_string(),
            });
        }

        let created_at = Utc::now();
        self.conn.execute(
            "INSERT INTO bizcard_info
                (name, designation, company_name, contact, email, website, address, state, pincode, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                record.name,
                record.designation,
                record.company_name,
                record.contact,
                record.email,
                record.website,
                record.address,
                record.state,
                record.pincode,
                created_at,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        info!("stored contact {:?} as record {}", record.name, id);

        Ok(StoredContact {
            id,
            created_at,
            record: record.clone(),
        })
    }

    fn all(&self) -> Result<Vec<StoredContact>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {COLUMNS} FROM bizcard_info ORDER BY id"))?;
        let rows = stmt.query_map([], Self::row_to_contact)?;
        let mut contacts = Vec::new();
        for contact in rows {
            contacts.push(contact?);
        }
        Ok(contacts)
    }

    fn get(&self, id: i64) -> Result<StoredContact> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM bizcard_info WHERE id = ?1"),
                params![id],
                Self::row_to_contact,
            )
            .optional()?
            .ok_or(StoreError::NotFound(id))
    }

    fn update(&self, id: i64, record: &ContactRecord) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE bizcard_info
             SET name = ?1, designation = ?2, company_name = ?3, contact = ?4,
                 email = ?5, website = ?6, address = ?7, state = ?8, pincode = ?9
             WHERE id = ?10",
            params![
                record.name,
                record.designation,
                record.company_name,
                record.contact,
                record.email,
                record.website,
                record.address,
                record.state,
                record.pincode,
                id,
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        info!("updated record {}", id);
        Ok(())
    }

    fn delete(&self, id: i64) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM bizcard_info WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        info!("deleted record {}", id);
        Ok(())
    }

    fn find_duplicate(&self, record: &ContactRecord) -> Result<Option<i64>> {
        let (name, designation, company) = record.duplicate_key();
        let id = self
            .conn
            .query_row(
                "SELECT id FROM bizcard_info
                 WHERE name = ?1 AND designation = ?2 AND company_name = ?3",
                params![name, designation, company],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id)
    }
}
