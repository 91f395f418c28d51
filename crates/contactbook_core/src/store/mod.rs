//! In-memory contact storage.
//!
//! # Responsibility
//! - Hold the session's ordered record collection.
//!
//! # Invariants
//! - Nothing persists automatically; durability always goes through one of
//!   the backends in `repo`.

pub mod book;
