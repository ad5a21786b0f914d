//! Backing-store abstractions for contact persistence.
//!
//! # Responsibility
//! - Define the line-oriented storage contract used by the repository.
//! - Keep file system details out of repository logic.
//!
//! # Invariants
//! - A missing store reads as "no records", never as an error.
//! - Writes replace the whole store; nothing is ever appended.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

pub mod codec;
mod file;
mod memory;

pub use file::FileContactStore;
pub use memory::MemoryContactStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Raw line iterator returned by [`ContactStore::open_lines`].
///
/// Lines are undecoded bytes without the trailing `\n`; text decoding is a
/// per-line concern of the caller.
pub type StoreLines<'a> = Box<dyn Iterator<Item = io::Result<Vec<u8>>> + 'a>;

/// Which store access failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Read,
    Write,
}

impl Display for StoreOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}

/// I/O failure while accessing a backing store.
#[derive(Debug)]
pub struct StoreError {
    pub op: StoreOp,
    pub location: String,
    pub source: io::Error,
}

impl StoreError {
    pub fn new(op: StoreOp, location: impl Into<String>, source: io::Error) -> Self {
        Self {
            op,
            location: location.into(),
            source,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "failed to {} contact store `{}`: {}",
            self.op, self.location, self.source
        )
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Line-oriented storage for encoded contact records.
pub trait ContactStore {
    /// Opens the store for reading.
    ///
    /// Returns `Ok(None)` when the store does not exist yet. Any other failure
    /// to open, such as a permission error, is a `StoreError`.
    fn open_lines(&self) -> StoreResult<Option<StoreLines<'_>>>;

    /// Replaces the whole store content with `lines`, in order.
    fn write_lines(&self, lines: &[String]) -> StoreResult<()>;

    /// Human-readable store location for logs and errors.
    fn location(&self) -> String;
}
