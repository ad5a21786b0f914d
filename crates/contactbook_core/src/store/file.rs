//! Flat-file contact store.
//!
//! # Invariants
//! - File content is UTF-8, one encoded record per line, no header.
//! - Each write truncates and rewrites the file; no handle outlives a call.

use super::{ContactStore, StoreError, StoreLines, StoreOp, StoreResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Contact store backed by a single text file.
#[derive(Debug, Clone)]
pub struct FileContactStore {
    path: PathBuf,
}

impl FileContactStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn error(&self, op: StoreOp, err: std::io::Error) -> StoreError {
        StoreError::new(op, self.location(), err)
    }
}

impl ContactStore for FileContactStore {
    fn open_lines(&self) -> StoreResult<Option<StoreLines<'_>>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.error(StoreOp::Read, err)),
        };
        let lines: StoreLines<'_> = Box::new(BufReader::new(file).split(b'\n'));
        Ok(Some(lines))
    }

    fn write_lines(&self, lines: &[String]) -> StoreResult<()> {
        let file = File::create(&self.path).map_err(|err| self.error(StoreOp::Write, err))?;
        let mut writer = BufWriter::new(file);
        for line in lines {
            writer
                .write_all(line.as_bytes())
                .map_err(|err| self.error(StoreOp::Write, err))?;
        }
        writer
            .flush()
            .map_err(|err| self.error(StoreOp::Write, err))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
