//! Persistence backends for the contact store.
//!
//! # Responsibility
//! - Define the bulk push/pull contract shared by both backends.
//! - Keep serialization details out of the in-memory store.
//!
//! # Invariants
//! - Backends hold their file or connection handle only for the duration
//!   of one operation.
//! - A failed read never hands back a partial record set.

pub mod contact_repo;
pub mod delimited;
