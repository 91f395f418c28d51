//! Connection bootstrap utilities.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Trigger schema application before returning a usable connection.
//!
//! # Invariants
//! - Returned connections have the schema fully applied.
//! - Connections are plain values; callers scope them to one operation and
//!   drop them on the way out.

use super::migrations::apply_migrations;
use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens a database file and prepares it for contact storage.
///
/// Emits one `db_open` event with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let started_at = Instant::now();
    let result = Connection::open(path)
        .map_err(DbError::from)
        .and_then(bootstrap);
    log_open("file", started_at, &result);
    result
}

/// Opens an in-memory database, used by tests and throwaway sessions.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    let result = Connection::open_in_memory()
        .map_err(DbError::from)
        .and_then(bootstrap);
    log_open("memory", started_at, &result);
    result
}

fn bootstrap(mut conn: Connection) -> DbResult<Connection> {
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(&mut conn)?;
    Ok(conn)
}

fn log_open(mode: &str, started_at: Instant, result: &DbResult<Connection>) {
    let duration_ms = started_at.elapsed().as_millis();
    match result {
        Ok(_) => info!("event=db_open module=db status=ok mode={mode} duration_ms={duration_ms}"),
        Err(err) => error!(
            "event=db_open module=db status=error mode={mode} duration_ms={duration_ms} error={err}"
        ),
    }
}
