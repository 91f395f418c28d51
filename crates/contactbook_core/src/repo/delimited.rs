//! Delimited flat-file backend.
//!
//! # Responsibility
//! - Serialize the store as comma-joined lines and read such files back.
//!
//! # Invariants
//! - Six fields per line, fixed order, no header, no quoting. A field
//!   containing a comma corrupts its own round trip; the format accepts
//!   that instead of introducing escaping.
//! - Loading returns the full record set or an error; it never hands back
//!   a partial read.

use crate::model::contact::Contact;
use crate::repo::contact_repo::{RepoError, RepoResult};
use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

const FIELDS_PER_LINE: usize = 6;

/// Writes every record to `path`, overwriting existing content.
///
/// Returns the number of records written.
pub fn save(path: impl AsRef<Path>, records: &[Contact]) -> RepoResult<usize> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| io_error(path, source))?;
    let mut out = BufWriter::new(file);

    for record in records {
        writeln!(
            out,
            "{},{},{},{},{},{}",
            record.first_name,
            record.middle_name,
            record.last_name,
            record.birth_date,
            record.email,
            record.phone
        )
        .map_err(|source| io_error(path, source))?;
    }
    out.flush().map_err(|source| io_error(path, source))?;

    info!(
        "event=delimited_save module=repo status=ok records={} path={}",
        records.len(),
        path.display()
    );
    Ok(records.len())
}

/// Reads every well-formed line from `path`.
///
/// Lines that do not split into exactly six comma-separated fields are
/// dropped; only their total count is reported, not each line.
pub fn load(path: impl AsRef<Path>) -> RepoResult<Vec<Contact>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| io_error(path, source))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for line in reader.lines() {
        let line = line.map_err(|source| io_error(path, source))?;
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != FIELDS_PER_LINE {
            dropped += 1;
            continue;
        }
        records.push(Contact::new(
            fields[0], fields[1], fields[2], fields[3], fields[4], fields[5],
        ));
    }

    if dropped > 0 {
        warn!(
            "event=delimited_load module=repo status=partial dropped_lines={dropped} path={}",
            path.display()
        );
    }
    info!(
        "event=delimited_load module=repo status=ok records={} path={}",
        records.len(),
        path.display()
    );
    Ok(records)
}

fn io_error(path: &Path, source: std::io::Error) -> RepoError {
    RepoError::Io {
        path: path.to_path_buf(),
        source,
    }
}
