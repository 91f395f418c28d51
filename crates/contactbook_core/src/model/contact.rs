//! Contact record.
//!
//! # Responsibility
//! - Hold one contact's six text fields in canonical order.
//!
//! # Invariants
//! - The record enforces nothing at construction; validity is the caller's
//!   precondition, checked through `validate::fields` before a record
//!   enters a store.
//! - A missing field is represented as an empty string.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One contact's six-field record.
///
/// Construction stays infallible so interactive frontends can decide for
/// themselves whether to reject unvalidated dialog input before or after
/// building the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    /// Day-month-year text (`DD-MM-YYYY`), stored as written.
    pub birth_date: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    /// Creates a record from the six fields in canonical order.
    pub fn new(
        first_name: impl Into<String>,
        middle_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            middle_name: middle_name.into(),
            last_name: last_name.into(),
            birth_date: birth_date.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Joins the three name parts with single spaces, in display order.
    pub fn full_name(&self) -> String {
        format!(
            "{} {} {}",
            self.first_name, self.middle_name, self.last_name
        )
    }
}

impl Display for Contact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {}\nDate of Birth: {}\nEmail: {}\nPhone: {}",
            self.full_name(),
            self.birth_date,
            self.email,
            self.phone
        )
    }
}
