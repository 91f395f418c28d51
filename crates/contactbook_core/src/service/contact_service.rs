//! Contact use-case facade.
//!
//! # Responsibility
//! - Expose the operation set consumed by interactive frontends: gather
//!   six raw strings, validate, mutate, search, persist.
//!
//! # Invariants
//! - Imports replace the book only after their source was read
//!   successfully.
//! - Failed validation leaves the book untouched.

use crate::model::contact::Contact;
use crate::repo::contact_repo::{ContactRepository, RepoResult};
use crate::repo::delimited;
use crate::store::book::{ContactBook, SortKey, StoreResult};
use crate::validate::fields::{validate_contact_with, FieldError, NameAlphabet};
use log::info;
use std::path::Path;

/// Facade owning the session's contact book.
///
/// Frontends collect raw field strings and call into this type;
/// everything else (dialogs, table widgets, menu dispatch) stays outside
/// the core.
#[derive(Debug, Default)]
pub struct ContactService {
    book: ContactBook,
    alphabet: NameAlphabet,
}

impl ContactService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service with an explicit name-alphabet policy for
    /// validated adds.
    pub fn with_alphabet(alphabet: NameAlphabet) -> Self {
        Self {
            book: ContactBook::new(),
            alphabet,
        }
    }

    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut ContactBook {
        &mut self.book
    }

    /// Validates all six fields, then appends. Returns the new index.
    pub fn add_validated(&mut self, contact: Contact) -> Result<usize, FieldError> {
        validate_contact_with(self.alphabet, &contact)?;
        self.book.add(contact);
        Ok(self.book.len() - 1)
    }

    /// Appends without validation, for callers that gated input upstream.
    pub fn add_unchecked(&mut self, contact: Contact) -> usize {
        self.book.add(contact);
        self.book.len() - 1
    }

    pub fn remove_at(&mut self, index: usize) -> StoreResult<Contact> {
        self.book.remove_at(index)
    }

    pub fn replace_at(&mut self, index: usize, contact: Contact) -> StoreResult<Contact> {
        self.book.replace_at(index, contact)
    }

    pub fn sort_by(&mut self, key: SortKey) {
        self.book.sort_by(key);
    }

    pub fn search<'a>(&'a self, query: &str) -> Vec<(usize, &'a Contact)> {
        self.book.search(query)
    }

    /// Writes the book to a delimited text file, overwriting it.
    pub fn export_delimited(&self, path: impl AsRef<Path>) -> RepoResult<usize> {
        delimited::save(path, self.book.records())
    }

    /// Replaces the book with the contents of a delimited text file.
    ///
    /// A failed read leaves the current book unchanged.
    pub fn import_delimited(&mut self, path: impl AsRef<Path>) -> RepoResult<usize> {
        let records = delimited::load(path)?;
        let count = records.len();
        self.book.replace_all(records);
        Ok(count)
    }

    /// Appends every record to a relational backend.
    ///
    /// Prior rows stay in place; repeated exports accumulate duplicates.
    pub fn export_to_repository<R: ContactRepository>(&self, repo: &R) -> RepoResult<usize> {
        let count = repo.append_all(self.book.records())?;
        info!("event=repo_export module=service status=ok records={count}");
        Ok(count)
    }

    /// Drains a relational backend into the book.
    ///
    /// The backend is left empty; the book holds the sole copy afterwards.
    pub fn import_from_repository<R: ContactRepository>(&mut self, repo: &R) -> RepoResult<usize> {
        let records = repo.drain_all()?;
        let count = records.len();
        self.book.replace_all(records);
        info!("event=repo_import module=service status=ok records={count}");
        Ok(count)
    }
}
