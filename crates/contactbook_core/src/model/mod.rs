//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical record used by the store and both persistence
//!   backends.
//!
//! # Invariants
//! - Records carry no identity field; the owning store's position is the
//!   only handle a caller has.

pub mod contact;
