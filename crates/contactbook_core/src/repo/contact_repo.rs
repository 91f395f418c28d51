//! Relational contact repository.
//!
//! # Responsibility
//! - Push the in-memory store into the `contacts` table and pull it back.
//! - Keep SQL details behind the repository seam.
//!
//! # Invariants
//! - Export appends; prior rows are never truncated, so repeated exports
//!   accumulate duplicate rows.
//! - Import drains: every row is read in id order, then the table is
//!   emptied. After an import the in-memory store is the sole holder of
//!   the data.
//! - The surrogate `id` column stays inside the backend and is never an
//!   index into the in-memory store.

use crate::db::DbError;
use crate::model::contact::Contact;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error shared by the relational and delimited backends.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Io { path: PathBuf, source: io::Error },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Io { path, source } => {
                write!(f, "file backend error at `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Bulk push/pull contract for contact persistence backends.
pub trait ContactRepository {
    /// Appends every record, returning the appended count.
    fn append_all(&self, records: &[Contact]) -> RepoResult<usize>;

    /// Reads every stored record in insertion order, then removes them
    /// from the backend.
    fn drain_all(&self) -> RepoResult<Vec<Contact>>;
}

/// `contacts`-table implementation over a borrowed connection.
pub struct SqliteContactRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ContactRepository for SqliteContactRepository<'_> {
    fn append_all(&self, records: &[Contact]) -> RepoResult<usize> {
        let mut stmt = self.conn.prepare(
            "INSERT INTO contacts (firstName, middleName, lastName, dob, email, phone)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
        )?;

        for record in records {
            stmt.execute(params![
                record.first_name.as_str(),
                record.middle_name.as_str(),
                record.last_name.as_str(),
                record.birth_date.as_str(),
                record.email.as_str(),
                record.phone.as_str(),
            ])?;
        }

        Ok(records.len())
    }

    fn drain_all(&self) -> RepoResult<Vec<Contact>> {
        let mut stmt = self.conn.prepare(
            "SELECT firstName, middleName, lastName, dob, email, phone
             FROM contacts
             ORDER BY id ASC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_contact_row(row)?);
        }

        // The read completed; only now is it safe to empty the table.
        self.conn.execute("DELETE FROM contacts;", [])?;

        Ok(records)
    }
}

fn parse_contact_row(row: &Row<'_>) -> RepoResult<Contact> {
    // Nullable columns surface as empty fields, matching the in-memory
    // representation of absence.
    Ok(Contact {
        first_name: row.get("firstName")?,
        middle_name: row
            .get::<_, Option<String>>("middleName")?
            .unwrap_or_default(),
        last_name: row.get("lastName")?,
        birth_date: row.get::<_, Option<String>>("dob")?.unwrap_or_default(),
        email: row.get::<_, Option<String>>("email")?.unwrap_or_default(),
        phone: row.get::<_, Option<String>>("phone")?.unwrap_or_default(),
    })
}
