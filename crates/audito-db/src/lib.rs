//! # audito-db
//!
//! Flat-file record store for Audito.
//!
//! Layout under the data directory:
//! - `users.json` : `{ "users": [...] }`, replaced atomically on every write
//! - `checklists.json` : `{ "checklists": [...] }`, replaced atomically
//! - `audits.jsonl` : append-only log, one audit per line
//!
//! Whole-document files are written to a temp file in the same directory,
//! fsynced, then renamed over the target, so readers never observe a torn
//! document. Audits are never rewritten: creation appends one line.

pub mod bootstrap;
pub mod error;
pub mod repos;
pub mod service;
#[cfg(test)]
mod test_support;

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use error::DatabaseError;

pub const USERS_FILE: &str = "users.json";
pub const CHECKLISTS_FILE: &str = "checklists.json";
pub const AUDITS_LOG: &str = "audits.jsonl";
/// Whole-file audit document written by earlier deployments.
pub const LEGACY_AUDITS_FILE: &str = "audits.json";

/// Raw file access for one data directory.
#[derive(Debug, Clone)]
pub struct FileDb {
    data_dir: PathBuf,
}

impl FileDb {
    /// Open (and create if needed) a data directory.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Io` if the directory cannot be created.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, DatabaseError> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir).map_err(|e| DatabaseError::io(&data_dir, e))?;
        Ok(Self { data_dir })
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Read a whole JSON document. A missing file yields `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Corrupt` if the file is not valid JSON for `T`.
    pub fn read_document<T: DeserializeOwned + Default>(
        &self,
        file: &str,
    ) -> Result<T, DatabaseError> {
        let path = self.path(file);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
            Err(e) => return Err(DatabaseError::io(path, e)),
        };
        serde_json::from_str(&text).map_err(|e| DatabaseError::Corrupt {
            path,
            reason: e.to_string(),
        })
    }

    /// Replace a JSON document atomically (temp file + fsync + rename).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Io` if any step of the write fails.
    pub fn write_document<T: Serialize>(&self, file: &str, value: &T) -> Result<(), DatabaseError> {
        let path = self.path(file);
        let mut bytes = serde_json::to_vec_pretty(value).map_err(|e| DatabaseError::Corrupt {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        bytes.push(b'\n');

        let mut temp = tempfile::NamedTempFile::new_in(&self.data_dir)
            .map_err(|e| DatabaseError::io(&self.data_dir, e))?;
        temp.as_file_mut()
            .write_all(&bytes)
            .map_err(|e| DatabaseError::io(temp.path(), e))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| DatabaseError::io(temp.path(), e))?;
        temp.persist(&path)
            .map_err(|e| DatabaseError::io(&path, e.error))?;
        Ok(())
    }

    /// Append one record to a JSON Lines log.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Io` if the append fails.
    pub fn append_line<T: Serialize>(&self, file: &str, value: &T) -> Result<(), DatabaseError> {
        let path = self.path(file);
        serde_jsonlines::append_json_lines(&path, [value]).map_err(|e| DatabaseError::io(path, e))
    }

    /// Read every record of a JSON Lines log. A missing log yields no records.
    ///
    /// Lines that fail to parse (e.g. a torn final line after a crash) are
    /// skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Io` if the log cannot be read.
    pub fn read_lines<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, DatabaseError> {
        let path = self.path(file);
        let lines = match serde_jsonlines::json_lines::<T, _>(&path) {
            Ok(lines) => lines,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(DatabaseError::io(path, e)),
        };

        let mut records = Vec::new();
        for (index, line) in lines.enumerate() {
            match line {
                Ok(record) => records.push(record),
                Err(e)
                    if matches!(e.kind(), ErrorKind::InvalidData | ErrorKind::UnexpectedEof) =>
                {
                    tracing::warn!(
                        path = %path.display(),
                        line = index + 1,
                        error = %e,
                        "skipping unreadable log line"
                    );
                }
                Err(e) => return Err(DatabaseError::io(path, e)),
            }
        }
        Ok(records)
    }

    /// Whether a data file exists.
    #[must_use]
    pub fn exists(&self, file: &str) -> bool {
        self.path(file).exists()
    }
}
