//! Core use-case services.
//!
//! # Responsibility
//! - Tie validation, the in-memory store and the persistence backends
//!   into the operation set interactive frontends consume.
//! - Keep CLI/GUI layers decoupled from storage details.

pub mod contact_service;
