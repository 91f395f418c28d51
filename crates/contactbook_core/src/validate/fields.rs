//! Field-level input validation.
//!
//! # Responsibility
//! - Classify raw strings as acceptable person names, birth dates, email
//!   addresses and phone numbers.
//! - Provide whole-record validation naming the first failing field.
//!
//! # Invariants
//! - Every predicate is pure and side-effect free.
//! - Birth dates must be strictly in the past at local-calendar
//!   granularity, compared year first, then month, then day.

use crate::model::contact::Contact;
use chrono::{Datelike, Local};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static LATIN_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z\s-]*[A-Za-z]$").expect("valid latin name regex"));
static LATIN_CYRILLIC_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-zА-Яа-яЁё][A-Za-zА-Яа-яЁё\s-]*[A-Za-zА-Яа-яЁё]$")
        .expect("valid latin-cyrillic name regex")
});
static ANY_LETTER_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{L}[\p{L}\s-]*\p{L}$").expect("valid unicode name regex"));
static DATE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}-\d{2}-\d{4}$").expect("valid date shape regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+?[78][\s-]?)?(\(?\d{3}\)?[\s-]?)?\d{3}[\s-]?\d{2}[\s-]?\d{2}$")
        .expect("valid phone regex")
});

/// Accepted letter alphabet for person names.
///
/// The historical frontends disagreed on the letter ranges, so the choice
/// is an explicit per-caller policy. `LatinCyrillic` reproduces the richer
/// observed behavior and is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameAlphabet {
    /// ASCII letters only.
    Latin,
    /// ASCII letters plus the Cyrillic range including Ё/ё.
    #[default]
    LatinCyrillic,
    /// Any Unicode letter category.
    AnyLetter,
}

impl NameAlphabet {
    fn regex(self) -> &'static Regex {
        match self {
            Self::Latin => &LATIN_NAME_RE,
            Self::LatinCyrillic => &LATIN_CYRILLIC_NAME_RE,
            Self::AnyLetter => &ANY_LETTER_NAME_RE,
        }
    }
}

/// Accepts a person name under the default alphabet policy.
pub fn is_valid_person_name(raw: &str) -> bool {
    is_valid_person_name_with(NameAlphabet::default(), raw)
}

/// Accepts a trimmed name of the shape "letter, then letters, internal
/// whitespace or hyphens, then a final letter".
///
/// The leading and trailing letter positions are distinct, so a
/// single-character name is rejected.
pub fn is_valid_person_name_with(alphabet: NameAlphabet, raw: &str) -> bool {
    alphabet.regex().is_match(raw.trim())
}

/// Accepts a `DD-MM-YYYY` date that is calendrically valid, within
/// [1900, 2100], and strictly before the current local date.
pub fn is_valid_birth_date(raw: &str) -> bool {
    let today = Local::now().date_naive();
    is_valid_birth_date_at(raw, (today.year(), today.month(), today.day()))
}

/// Date acceptance against an explicit `(year, month, day)` pivot.
///
/// Split out so the strictly-in-the-past rule stays deterministic under
/// test.
pub fn is_valid_birth_date_at(raw: &str, today: (i32, u32, u32)) -> bool {
    if !DATE_SHAPE_RE.is_match(raw) {
        return false;
    }

    let mut parts = raw.splitn(3, '-');
    let (Some(day_text), Some(month_text), Some(year_text)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    let (Ok(day), Ok(month), Ok(year)) = (
        day_text.parse::<u32>(),
        month_text.parse::<u32>(),
        year_text.parse::<i32>(),
    ) else {
        return false;
    };

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return false;
    }
    if day > days_in_month(month, year) {
        return false;
    }
    if !(1900..=2100).contains(&year) {
        return false;
    }

    (year, month, day) < today
}

/// Accepts `localpart@domain.tld` after removing all embedded whitespace.
pub fn is_valid_email(raw: &str) -> bool {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    EMAIL_RE.is_match(&compact)
}

/// Accepts an optional `+7`/`+8`/`7`/`8` country prefix, an optional
/// three-digit operator code (possibly parenthesized) and a 3-2-2 digit
/// subscriber grouping, with optional space or hyphen separators between
/// groups.
///
/// The pattern is permissive: a bare seven-digit string matches too.
pub fn is_valid_phone(raw: &str) -> bool {
    PHONE_RE.is_match(raw)
}

fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Field named by a failed whole-record validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    FirstName,
    MiddleName,
    LastName,
    BirthDate,
    Email,
    Phone,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let field = match self {
            Self::FirstName => "first name",
            Self::MiddleName => "middle name",
            Self::LastName => "last name",
            Self::BirthDate => "date of birth",
            Self::Email => "email",
            Self::Phone => "phone",
        };
        write!(f, "invalid {field}")
    }
}

impl Error for FieldError {}

/// Validates all six fields under the default alphabet, reporting the
/// first failure in field order.
pub fn validate_contact(contact: &Contact) -> Result<(), FieldError> {
    validate_contact_with(NameAlphabet::default(), contact)
}

/// Validates all six fields under an explicit alphabet policy.
///
/// All six fields are mandatory; an empty string fails its predicate.
pub fn validate_contact_with(
    alphabet: NameAlphabet,
    contact: &Contact,
) -> Result<(), FieldError> {
    if !is_valid_person_name_with(alphabet, &contact.first_name) {
        return Err(FieldError::FirstName);
    }
    if !is_valid_person_name_with(alphabet, &contact.middle_name) {
        return Err(FieldError::MiddleName);
    }
    if !is_valid_person_name_with(alphabet, &contact.last_name) {
        return Err(FieldError::LastName);
    }
    if !is_valid_birth_date(&contact.birth_date) {
        return Err(FieldError::BirthDate);
    }
    if !is_valid_email(&contact.email) {
        return Err(FieldError::Email);
    }
    if !is_valid_phone(&contact.phone) {
        return Err(FieldError::Phone);
    }
    Ok(())
}
