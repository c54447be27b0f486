//! JSON document store
//!
//! The whole ledger is persisted as one pretty-printed JSON file. Every
//! load reads and parses the full file; every save rewrites it through a
//! temp file and rename so a failed write never leaves a half-written
//! store behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::LedgerError;
use crate::models::Document;

/// Handle to the single on-disk document
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store handle for the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with an empty document if it does not
    /// exist yet. Idempotent.
    pub fn ensure_store(&self) -> Result<(), LedgerError> {
        if self.path.exists() {
            return Ok(());
        }
        self.write_document(&Document::default())
    }

    /// Read and parse the full document, creating an empty store first if
    /// needed. Malformed contents fail with a Parse error.
    pub fn load(&self) -> Result<Document, LedgerError> {
        self.ensure_store()?;

        let file = File::open(&self.path).map_err(|e| {
            LedgerError::Io(format!("failed to open {}: {}", self.path.display(), e))
        })?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            LedgerError::Parse(format!(
                "{} is not a valid ledger document: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Serialize the full document and replace the file in one shot
    pub fn save(&self, doc: &Document) -> Result<(), LedgerError> {
        self.write_document(doc)
    }

    fn write_document(&self, doc: &Document) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    LedgerError::Io(format!(
                        "failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        // Temp file in the same directory so the rename stays atomic
        let temp_path = self.path.with_extension("json.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| LedgerError::Io(format!("failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, doc)
            .map_err(|e| LedgerError::Io(format!("failed to serialize document: {}", e)))?;

        writer
            .flush()
            .map_err(|e| LedgerError::Io(format!("failed to flush document: {}", e)))?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            LedgerError::Io(format!("failed to rename temp file: {}", e))
        })?;

        Ok(())
    }
}
