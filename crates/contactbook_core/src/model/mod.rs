//! Domain model for the contact book.
//!
//! # Responsibility
//! - Define the canonical contact record used by storage and callers.
//!
//! # Invariants
//! - Contacts are identified by name, compared case-insensitively.
//! - Editing is not supported; records are replaced by remove + add.

pub mod contact;
