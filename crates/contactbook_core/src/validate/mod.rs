//! Input validation layer.
//!
//! # Responsibility
//! - Gate every raw field string before it reaches a store.
//!
//! # Invariants
//! - Predicates never mutate caller input; whitespace normalization exists
//!   only inside the acceptance test.

pub mod fields;
