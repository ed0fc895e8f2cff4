//! Full-snapshot persistence for the note store
//!
//! The whole collection is rewritten on every mutation as one pretty-printed
//! JSON array in store order (newest first). Non-ASCII text is written as-is.

use journal_types::Note;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use super::errors::JournalError;

/// Durable backing for the note collection.
pub trait Persistence: Send + Sync {
    /// Saved notes in store order. Missing or unreadable storage yields an
    /// empty collection; this never fails.
    fn load(&self) -> Vec<Note>;

    /// Overwrite storage with `notes` (store order).
    fn save(&self, notes: &[Note]) -> Result<(), JournalError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Snapshot stored as a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_snapshot(&self) -> Result<Option<Vec<Note>>, String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(format!("read failed: {}", e)),
        };
        serde_json::from_str::<Vec<Note>>(&content)
            .map(Some)
            .map_err(|e| format!("parse failed: {}", e))
    }

    /// Sibling file the snapshot is staged in before the rename.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_snapshot(&self, content: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let staging = self.staging_path();
        let written = fs::File::create(&staging)
            .and_then(|mut file| {
                file.write_all(content.as_bytes())?;
                file.sync_all()
            })
            .and_then(|()| fs::rename(&staging, &self.path));
        if written.is_err() && staging.exists() {
            if let Err(e) = fs::remove_file(&staging) {
                log::warn!("[JOURNAL] Could not remove {}: {}", staging.display(), e);
            }
        }
        written
    }
}

impl Persistence for JsonFile {
    fn load(&self) -> Vec<Note> {
        match self.read_snapshot() {
            Ok(Some(notes)) => {
                log::info!("[JOURNAL] Loaded {} notes from {}", notes.len(), self.path.display());
                notes
            }
            Ok(None) => {
                log::info!("[JOURNAL] No data file at {}, starting empty", self.path.display());
                Vec::new()
            }
            Err(e) => {
                log::error!(
                    "[JOURNAL] Error loading {} ({}), starting empty",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&self, notes: &[Note]) -> Result<(), JournalError> {
        let content = serde_json::to_string_pretty(notes)?;
        self.write_snapshot(&content)
            .map_err(|source| JournalError::Persistence {
                path: self.path.clone(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
