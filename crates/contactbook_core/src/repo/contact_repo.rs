//! Contact repository over a line-oriented backing store.
//!
//! # Responsibility
//! - Own the ordered in-memory contact list (insertion order = display order).
//! - Load the list once at construction and rewrite the store after every
//!   successful mutation.
//!
//! # Invariants
//! - No two contacts share a case-insensitive name.
//! - After a mutating call returns, the store has been rewritten from the
//!   in-memory list, or `RepoError::Persist` reports why it could not be.
//! - A failed rewrite never rolls back the in-memory change.

use crate::model::contact::{Contact, ContactValidationError};
use crate::store::codec::{decode_bytes, encode_line, FormatError};
use crate::store::{ContactStore, StoreError, StoreOp};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error returned by repository operations.
#[derive(Debug)]
pub enum RepoError {
    /// Input rejected by field or uniqueness rules; nothing changed.
    Validation(ContactValidationError),
    /// No contact matches the requested name; nothing changed.
    NotFound(String),
    /// The in-memory list changed but the store rewrite failed.
    Persist(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(name) => write!(f, "contact not found: {name}"),
            Self::Persist(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Persist(err) => Some(err),
        }
    }
}

impl From<ContactValidationError> for RepoError {
    fn from(value: ContactValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Persist(value)
    }
}

/// A stored line skipped during load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWarning {
    /// 1-based line number in the store.
    pub line_number: usize,
    pub error: FormatError,
}

impl Display for LineWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} skipped: {}", self.line_number, self.error)
    }
}

/// Outcome of the initial load.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub warnings: Vec<LineWarning>,
    /// Read failure that stopped loading early, if any.
    pub error: Option<StoreError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.error.is_none()
    }
}

/// In-memory contact list persisted to a [`ContactStore`].
pub struct ContactRepository<S: ContactStore> {
    store: S,
    contacts: Vec<Contact>,
}

impl<S: ContactStore> ContactRepository<S> {
    /// Creates a repository and loads existing contacts from `store`.
    ///
    /// Loading never fails hard: malformed lines and read errors are returned
    /// in the [`LoadReport`] and the repository keeps whatever loaded before.
    pub fn open(store: S) -> (Self, LoadReport) {
        let mut repo = Self {
            store,
            contacts: Vec::new(),
        };
        let report = repo.load();
        (repo, report)
    }

    fn load(&mut self) -> LoadReport {
        let mut report = LoadReport::default();
        let location = self.store.location();
        info!("event=contacts_load module=repo status=start");

        let lines = match self.store.open_lines() {
            Ok(Some(lines)) => lines,
            Ok(None) => {
                info!("event=contacts_load module=repo status=ok count=0 store=missing");
                return report;
            }
            Err(err) => {
                error!("event=contacts_load module=repo status=error error={err}");
                report.error = Some(err);
                return report;
            }
        };

        for (index, line) in lines.enumerate() {
            let line_number = index + 1;
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    let err = StoreError::new(StoreOp::Read, location.as_str(), err);
                    error!(
                        "event=contacts_load module=repo status=error line={line_number} error={err}"
                    );
                    report.error = Some(err);
                    break;
                }
            };
            if line.trim_ascii().is_empty() {
                continue;
            }

            match decode_bytes(&line) {
                Ok(contact) => self.contacts.push(contact),
                Err(err) => {
                    warn!(
                        "event=contact_line_skipped module=repo status=warn line={line_number} reason={}",
                        match err {
                            FormatError::FieldCount { .. } => "field_count",
                            FormatError::InvalidUtf8 { .. } => "invalid_utf8",
                        }
                    );
                    report.warnings.push(LineWarning {
                        line_number,
                        error: err,
                    });
                }
            }
        }

        report.loaded = self.contacts.len();
        if report.error.is_none() {
            info!(
                "event=contacts_load module=repo status=ok count={} skipped={}",
                report.loaded,
                report.warnings.len()
            );
        }
        report
    }

    fn persist(&self) -> RepoResult<()> {
        let lines: Vec<String> = self.contacts.iter().map(encode_line).collect();
        match self.store.write_lines(&lines) {
            Ok(()) => {
                info!(
                    "event=contacts_persist module=repo status=ok count={}",
                    lines.len()
                );
                Ok(())
            }
            Err(err) => {
                error!("event=contacts_persist module=repo status=error error={err}");
                Err(err.into())
            }
        }
    }

    /// Validates and appends a new contact, then rewrites the store.
    ///
    /// # Errors
    /// - `Validation` for empty fields, bad email, forbidden characters, or a
    ///   duplicate name; the list is untouched.
    /// - `Persist` when the rewrite fails; the contact stays in memory.
    pub fn add(&mut self, name: &str, phone: &str, email: &str) -> RepoResult<()> {
        let contact = Contact::try_new(name, phone, email)?;
        if self.position(contact.name()).is_some() {
            return Err(ContactValidationError::Duplicate(contact.name().to_string()).into());
        }

        self.contacts.push(contact);
        info!(
            "event=contact_add module=repo status=ok count={}",
            self.contacts.len()
        );
        self.persist()
    }

    /// Returns all contacts in insertion order.
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    /// Finds the first contact whose name matches `name`, ignoring case.
    pub fn find(&self, name: &str) -> RepoResult<&Contact> {
        self.position(name)
            .map(|index| &self.contacts[index])
            .ok_or_else(|| RepoError::NotFound(name.trim().to_string()))
    }

    /// Removes the first contact whose name matches `name`, then rewrites the store.
    ///
    /// # Errors
    /// - `NotFound` when nothing matches; list and store are untouched.
    /// - `Persist` when the rewrite fails; the contact stays removed in memory.
    pub fn remove(&mut self, name: &str) -> RepoResult<()> {
        let index = self
            .position(name)
            .ok_or_else(|| RepoError::NotFound(name.trim().to_string()))?;

        self.contacts.remove(index);
        info!(
            "event=contact_remove module=repo status=ok count={}",
            self.contacts.len()
        );
        self.persist()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.contacts
            .iter()
            .position(|contact| contact.matches_name(name))
    }
}
