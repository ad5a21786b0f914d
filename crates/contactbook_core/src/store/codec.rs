//! One-line text codec for contact records.
//!
//! Record shape: `<name>;<phone>;<email>\n`. No escaping is performed; the
//! repository rejects delimiter characters before anything reaches `encode_line`.

use crate::model::contact::Contact;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const FIELD_DELIMITER: char = ';';
const FIELD_COUNT: usize = 3;

/// A stored line that cannot be decoded into a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The line does not split into exactly three fields.
    FieldCount { found: usize },
    /// The line bytes are not valid UTF-8.
    InvalidUtf8 { valid_up_to: usize },
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldCount { found } => write!(
                f,
                "malformed contact line: expected {FIELD_COUNT} fields, found {found}"
            ),
            Self::InvalidUtf8 { valid_up_to } => write!(
                f,
                "malformed contact line: invalid UTF-8 after byte {valid_up_to}"
            ),
        }
    }
}

impl Error for FormatError {}

/// Encodes one contact as a newline-terminated record line.
pub fn encode_line(contact: &Contact) -> String {
    format!(
        "{}{FIELD_DELIMITER}{}{FIELD_DELIMITER}{}\n",
        contact.name(),
        contact.phone(),
        contact.email()
    )
}

/// Decodes one record line.
///
/// Only the three-field shape is enforced; stored values are trusted and not
/// re-validated.
pub fn decode_line(line: &str) -> Result<Contact, FormatError> {
    let parts: Vec<&str> = line.trim().split(FIELD_DELIMITER).collect();
    match parts.as_slice() {
        [name, phone, email] => Ok(Contact::new(name, phone, email)),
        _ => Err(FormatError::FieldCount { found: parts.len() }),
    }
}

/// Decodes one raw record line as read from a store.
pub fn decode_bytes(line: &[u8]) -> Result<Contact, FormatError> {
    let text = std::str::from_utf8(line).map_err(|err| FormatError::InvalidUtf8 {
        valid_up_to: err.valid_up_to(),
    })?;
    decode_line(text)
}

#[cfg(test)]
mod tests {
    use super::{decode_bytes, decode_line, encode_line, FormatError};
    use crate::model::contact::Contact;

    #[test]
    fn encode_uses_stored_field_values() {
        let contact = Contact::new("  Ana ", "555-0000", " ana@test.com");
        assert_eq!(encode_line(&contact), "Ana;555-0000;ana@test.com\n");
    }

    #[test]
    fn decode_trims_line_and_fields() {
        let contact = decode_line("  Bob ; 555-1234 ;bob@test.com \n").unwrap();
        assert_eq!(contact, Contact::new("Bob", "555-1234", "bob@test.com"));
    }

    #[test]
    fn decode_round_trips_encoded_line() {
        let contact = Contact::new("Zoë Ñúñez", "+34 600 000 000", "zoe@example.es");
        assert_eq!(decode_line(&encode_line(&contact)).unwrap(), contact);
    }

    #[test]
    fn decode_rejects_wrong_field_count() {
        assert_eq!(
            decode_line("onlyonefield").unwrap_err(),
            FormatError::FieldCount { found: 1 }
        );
        assert_eq!(
            decode_line("a;b;c;d").unwrap_err(),
            FormatError::FieldCount { found: 4 }
        );
    }

    #[test]
    fn decode_does_not_validate_stored_values() {
        let contact = decode_line("Eve;;not-an-email").unwrap();
        assert_eq!(contact.phone(), "");
        assert_eq!(contact.email(), "not-an-email");
    }

    #[test]
    fn decode_bytes_reports_invalid_utf8_as_format_error() {
        assert_eq!(
            decode_bytes(b"Jos\xe9;2;jose@test.com").unwrap_err(),
            FormatError::InvalidUtf8 { valid_up_to: 3 }
        );
        assert_eq!(
            decode_bytes("José;2;jose@test.com\r".as_bytes()).unwrap(),
            Contact::new("José", "2", "jose@test.com")
        );
    }
}
