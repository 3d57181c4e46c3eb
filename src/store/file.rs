//! File-backed alias store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::AliasRecord;
use crate::error::{DoualError, Result};

/// The durable list of alias records, kept as a JSON array in one file.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Create a store backed by `path`. Nothing is read or written yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records in stored order.
    ///
    /// A missing or blank file is an empty store.
    pub fn load(&self) -> Result<Vec<AliasRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No alias store at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(DoualError::Io(e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| DoualError::CorruptStore {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Look up one record by alias name.
    pub fn find(&self, alias: &str) -> Result<Option<AliasRecord>> {
        Ok(self.load()?.into_iter().find(|r| r.alias == alias))
    }

    /// Insert or replace the record with the same alias name.
    ///
    /// A replaced record keeps its position. Returns `true` when a record
    /// was replaced, `false` when it was appended.
    pub fn upsert(&self, record: AliasRecord) -> Result<bool> {
        let mut records = self.load()?;

        let replaced = match records.iter_mut().find(|r| r.alias == record.alias) {
            Some(existing) => {
                *existing = record;
                true
            }
            None => {
                records.push(record);
                false
            }
        };

        self.save(&records)?;
        Ok(replaced)
    }

    /// Remove the record with this alias name.
    ///
    /// Returns `true` when a record was removed. A missing store file is
    /// left missing.
    pub fn remove(&self, alias: &str) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }

        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.alias != alias);
        let removed = records.len() != before;

        self.save(&records)?;
        Ok(removed)
    }

    fn save(&self, records: &[AliasRecord]) -> Result<()> {
        let content = serde_json::to_string_pretty(records).map_err(anyhow::Error::from)?;
        write_atomic(&self.path, &content)?;
        tracing::debug!(
            "Saved {} alias(es) to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Overwrite `path` with `content` using write-to-temp-then-rename.
///
/// The temp file sits next to the target so the rename stays on one
/// filesystem, and is named `.<file>.doual-<pid>.tmp` so it cannot clobber
/// a user's own `<file>.tmp`. Permissions of an existing target are carried
/// over.
pub(crate) fn write_atomic(path: &Path, content: impl AsRef<[u8]>) -> io::Result<()> {
    let temp_path = temp_path_for(path)?;

    fs::write(&temp_path, content)?;

    if let Ok(metadata) = fs::metadata(path) {
        if let Err(e) = fs::set_permissions(&temp_path, metadata.permissions()) {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> io::Result<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let mut temp_name = std::ffi::OsString::from(".");
    temp_name.push(file_name);
    temp_name.push(format!(".doual-{}.tmp", std::process::id()));
    Ok(path.with_file_name(temp_name))
}
