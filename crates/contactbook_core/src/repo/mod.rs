//! Repository layer over contact storage.
//!
//! # Responsibility
//! - Provide add/list/find/remove over the in-memory contact list.
//! - Isolate record encoding and store access from callers.
//!
//! # Invariants
//! - Write paths validate input before any mutation.
//! - Repository APIs return semantic errors (`NotFound`, `Validation`) in
//!   addition to store transport errors.

pub mod contact_repo;
