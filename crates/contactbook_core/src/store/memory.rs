//! In-process contact store.
//!
//! Holds the store text in memory. Useful for embedding callers that manage
//! their own durability, and for exercising repository behavior without disk.

use super::{ContactStore, StoreError, StoreLines, StoreOp, StoreResult};
use std::cell::{Cell, RefCell};
use std::io;

/// Contact store holding its content in memory.
///
/// `None` content models a store that does not exist yet.
#[derive(Debug, Default)]
pub struct MemoryContactStore {
    content: RefCell<Option<String>>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryContactStore {
    /// Creates a store that does not exist yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store primed with raw text content.
    pub fn with_content(content: impl Into<String>) -> Self {
        let store = Self::default();
        store.content.replace(Some(content.into()));
        store
    }

    /// Returns the current raw content, `None` if never written.
    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }

    /// Number of successful full rewrites so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Makes subsequent writes fail with an I/O error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl ContactStore for MemoryContactStore {
    fn open_lines(&self) -> StoreResult<Option<StoreLines<'_>>> {
        let lines = self.content.borrow().as_ref().map(|content| {
            content
                .lines()
                .map(|line| Ok(line.as_bytes().to_vec()))
                .collect::<Vec<io::Result<Vec<u8>>>>()
        });
        Ok(lines.map(|lines| Box::new(lines.into_iter()) as StoreLines<'_>))
    }

    fn write_lines(&self, lines: &[String]) -> StoreResult<()> {
        if self.fail_writes.get() {
            return Err(StoreError::new(
                StoreOp::Write,
                self.location(),
                io::Error::other("write disabled"),
            ));
        }

        self.content.replace(Some(lines.concat()));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
