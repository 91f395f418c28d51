//! Core engine for a personal contact list.
//!
//! The record store, field validation and both persistence backends
//! (delimited text file, single-table SQLite) live here; interactive
//! shells are thin adapters over this crate.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod validate;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::Contact;
pub use repo::contact_repo::{
    ContactRepository, RepoError, RepoResult, SqliteContactRepository,
};
pub use service::contact_service::ContactService;
pub use store::book::{ContactBook, SortKey, StoreError, StoreResult};
pub use validate::fields::{
    is_valid_birth_date, is_valid_email, is_valid_person_name, is_valid_person_name_with,
    is_valid_phone, validate_contact, validate_contact_with, FieldError, NameAlphabet,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
