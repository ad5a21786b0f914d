//! Core logic for the contact book.
//! This crate owns contact validation, the record format, and persistence.

pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::contact::{is_valid_email, Contact, ContactValidationError};
pub use repo::contact_repo::{ContactRepository, LineWarning, LoadReport, RepoError, RepoResult};
pub use store::codec::{decode_bytes, decode_line, encode_line, FormatError};
pub use store::{
    ContactStore, FileContactStore, MemoryContactStore, StoreError, StoreLines, StoreOp,
    StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
