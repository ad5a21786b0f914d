//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical name/phone/email record.
//! - Own the field rules applied to new contacts (required fields, email
//!   shape, storage-safe characters).
//!
//! # Invariants
//! - All fields are stored trimmed of surrounding whitespace.
//! - A `Contact` is immutable once constructed.
//! - Name identity is compared case-insensitively.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w{2,}$").expect("valid email regex"));

/// Characters that would break the one-line `name;phone;email` record shape.
const FORBIDDEN_CHARS: [char; 3] = [';', '\n', '\r'];

/// Validation failure for contact input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    /// At least one of name/phone/email is empty after trimming.
    RequiredFields,
    /// Email does not match `local@domain.tld`.
    InvalidEmail,
    /// A field contains a record delimiter or line break.
    ForbiddenCharacter {
        field: &'static str,
        character: char,
    },
    /// Another contact already uses this name (case-insensitive).
    Duplicate(String),
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequiredFields => write!(f, "all fields are required"),
            Self::InvalidEmail => write!(f, "invalid email format"),
            Self::ForbiddenCharacter { field, character } => {
                write!(f, "{field} must not contain {:?}", character)
            }
            Self::Duplicate(name) => write!(f, "contact already exists: {name}"),
        }
    }
}

impl Error for ContactValidationError {}

/// A name/phone/email record, unique by case-insensitive name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactFields")]
pub struct Contact {
    name: String,
    phone: String,
    email: String,
}

/// Wire shape accepted when deserializing; routed through [`Contact::try_new`].
#[derive(Deserialize)]
struct ContactFields {
    name: String,
    phone: String,
    email: String,
}

impl TryFrom<ContactFields> for Contact {
    type Error = ContactValidationError;

    fn try_from(value: ContactFields) -> Result<Self, Self::Error> {
        Self::try_new(&value.name, &value.phone, &value.email)
    }
}

impl Contact {
    /// Creates a contact from raw field values, trimming each one.
    ///
    /// Performs no validation; callers accepting user input should use
    /// [`Contact::try_new`].
    pub fn new(name: &str, phone: &str, email: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: email.trim().to_string(),
        }
    }

    /// Creates a contact after applying the field rules for new input.
    ///
    /// # Errors
    /// - `RequiredFields` when any field is empty after trimming.
    /// - `InvalidEmail` when the trimmed email does not match the pattern.
    /// - `ForbiddenCharacter` when a field contains `;` or a line break.
    pub fn try_new(name: &str, phone: &str, email: &str) -> Result<Self, ContactValidationError> {
        let contact = Self::new(name, phone, email);

        if contact.name.is_empty() || contact.phone.is_empty() || contact.email.is_empty() {
            return Err(ContactValidationError::RequiredFields);
        }
        if !is_valid_email(&contact.email) {
            return Err(ContactValidationError::InvalidEmail);
        }
        for (field, value) in [("name", &contact.name), ("phone", &contact.phone)] {
            if let Some(character) = value.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
                return Err(ContactValidationError::ForbiddenCharacter { field, character });
            }
        }

        Ok(contact)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns whether `name` equals this contact's name, ignoring case.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

impl Display for Contact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {}, Phone: {}, Email: {}",
            self.name, self.phone, self.email
        )
    }
}

/// Returns whether `value` looks like `local@domain.tld` (tld of 2+ word chars).
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn email_pattern_accepts_basic_addresses() {
        assert!(is_valid_email("bob@test.com"));
        assert!(is_valid_email("first.last-1@mail.example.org"));
    }

    #[test]
    fn email_pattern_is_anchored() {
        assert!(!is_valid_email("bob@test.c"));
        assert!(!is_valid_email("bob@test"));
        assert!(!is_valid_email(" bob@test.com"));
        assert!(!is_valid_email("bob@test.com;"));
        assert!(!is_valid_email("bob test@test.com"));
        assert!(!is_valid_email("@test.com"));
    }
}
