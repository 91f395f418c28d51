//! Ordered contact store.
//!
//! # Responsibility
//! - Keep contact records in insertion order.
//! - Provide index-addressed mutation, stable sorting and substring
//!   search.
//!
//! # Invariants
//! - The 0-based position is a record's only handle and shifts whenever a
//!   record to its left is inserted or removed.
//! - Out-of-range indices are reported, never panicked on, and leave the
//!   store unchanged.

use crate::model::contact::Contact;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Result type for store mutations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for index and sort-key handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Index at or past the current record count.
    OutOfRange { index: usize, len: usize },
    /// Sort key not among the recognized field names.
    UnknownSortKey(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for {len} records")
            }
            Self::UnknownSortKey(key) => write!(f, "unknown sort key `{key}`"),
        }
    }
}

impl Error for StoreError {}

/// Recognized sort fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    FirstName,
    LastName,
    BirthDate,
}

impl FromStr for SortKey {
    type Err = StoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "firstName" | "first_name" => Ok(Self::FirstName),
            "lastName" | "last_name" => Ok(Self::LastName),
            "dob" | "dateOfBirth" | "date_of_birth" => Ok(Self::BirthDate),
            other => Err(StoreError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Ordered collection of contact records for one session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactBook {
    records: Vec<Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record. No uniqueness check is performed.
    pub fn add(&mut self, contact: Contact) {
        self.records.push(contact);
    }

    /// Read-only access to one record.
    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.records.get(index)
    }

    /// Removes the record at `index`, shifting later records left by one.
    pub fn remove_at(&mut self, index: usize) -> StoreResult<Contact> {
        self.check_index(index)?;
        Ok(self.records.remove(index))
    }

    /// Replaces the whole record at `index`, returning the previous one.
    ///
    /// There is no partial-field update: callers supply all six fields
    /// even when only one changed.
    pub fn replace_at(&mut self, index: usize, contact: Contact) -> StoreResult<Contact> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.records[index], contact))
    }

    /// Ordered listing paired with each record's current index.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Contact)> {
        self.records.iter().enumerate()
    }

    /// All records in store order.
    pub fn records(&self) -> &[Contact] {
        &self.records
    }

    /// Stable in-place sort by one field.
    ///
    /// Records comparing equal on the key keep their prior relative order.
    /// Birth dates compare as text: `DD-MM-YYYY` strings do not order
    /// chronologically, and that observed behavior is kept.
    pub fn sort_by(&mut self, key: SortKey) {
        match key {
            SortKey::FirstName => self
                .records
                .sort_by(|a, b| a.first_name.cmp(&b.first_name)),
            SortKey::LastName => self.records.sort_by(|a, b| a.last_name.cmp(&b.last_name)),
            SortKey::BirthDate => self
                .records
                .sort_by(|a, b| a.birth_date.cmp(&b.birth_date)),
        }
    }

    /// Case-sensitive raw substring search across all six fields.
    ///
    /// No tokenization, no case folding. An empty query matches every
    /// record.
    pub fn search<'a>(&'a self, query: &str) -> Vec<(usize, &'a Contact)> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, contact)| {
                contact.first_name.contains(query)
                    || contact.middle_name.contains(query)
                    || contact.last_name.contains(query)
                    || contact.birth_date.contains(query)
                    || contact.email.contains(query)
                    || contact.phone.contains(query)
            })
            .collect()
    }

    /// Replaces the full contents in one step.
    ///
    /// Importers read their source completely before calling this, so a
    /// failed load never half-clears the store.
    pub fn replace_all(&mut self, records: Vec<Contact>) {
        self.records = records;
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    fn check_index(&self, index: usize) -> StoreResult<()> {
        if index >= self.records.len() {
            return Err(StoreError::OutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(())
    }
}
