//! Journal — the process-wide note context handed to request handlers.
//!
//! Owns the NoteStore behind a single lock. Every mutation and the snapshot
//! save that follows it happen under that lock, so concurrent actix workers
//! see a serial history and the data file is never written out of order.

use chrono::{DateTime, NaiveDate, TimeZone};
use journal_types::{NewNote, Note, PhotoEntry};
use parking_lot::Mutex;

use super::entry::build_note;
use super::errors::JournalError;
use super::persistence::Persistence;
use super::query::{CalendarMonth, PhotoQuery, QueryService};
use super::store::NoteStore;
use crate::models::JournalConfig;

pub struct Journal {
    store: Mutex<NoteStore>,
    persistence: Box<dyn Persistence>,
    queries: QueryService,
    /// Surface snapshot save failures to the caller instead of only logging
    strict_persistence: bool,
}

impl Journal {
    /// Load the saved snapshot and build the context around it.
    pub fn open(persistence: Box<dyn Persistence>, settings: &JournalConfig) -> Self {
        let store = NoteStore::from_snapshot(persistence.load());
        log::info!(
            "[JOURNAL] {} notes ready (backing file: {})",
            store.len(),
            persistence.describe()
        );

        Self {
            store: Mutex::new(store),
            persistence,
            queries: QueryService::new(settings.week_window_days),
            strict_persistence: settings.strict_persistence,
        }
    }

    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn all_notes(&self) -> Vec<Note> {
        self.store.lock().get_all_notes()
    }

    pub fn notes_by_date(&self, date: &str) -> Vec<Note> {
        self.store.lock().get_notes_by_date(date)
    }

    pub fn trashed_notes(&self) -> Vec<Note> {
        self.store.lock().get_deleted_notes()
    }

    pub fn photos(&self, query: &PhotoQuery, today: NaiveDate) -> Vec<PhotoEntry> {
        self.queries.photos(&self.store.lock(), query, today)
    }

    pub fn calendar(&self, year: i32, month: u32) -> Result<CalendarMonth, JournalError> {
        self.queries.calendar(&self.store.lock(), year, month)
    }

    /// Validate, fill defaults, insert at the front and save.
    pub fn add_note<Tz: TimeZone>(&self, request: NewNote, now: &DateTime<Tz>) -> Result<Note, JournalError> {
        let note = build_note(request, now)?;

        let mut store = self.store.lock();
        if store.find(note.id).is_some() {
            // Kept as-is; id lookups act on the newest match
            log::warn!("[JOURNAL] Adding note {} which shares its id with an existing note", note.id);
        }
        let stored = store.add_note(note).clone();
        self.persist(&store)?;
        Ok(stored)
    }

    /// Soft-delete: move an active note to the trash.
    pub fn trash_note(&self, id: i64) -> Result<(), JournalError> {
        let mut store = self.store.lock();
        if !store.mark_deleted(id) {
            log::debug!("[JOURNAL] trash: no active note {}", id);
            return Err(JournalError::NotFound("Not found"));
        }
        self.persist(&store)
    }

    pub fn restore_note(&self, id: i64) -> Result<(), JournalError> {
        let mut store = self.store.lock();
        if !store.restore_note(id) {
            log::debug!("[JOURNAL] restore: no trashed note {}", id);
            return Err(JournalError::NotFound("Not found in trash"));
        }
        self.persist(&store)
    }

    /// Remove a note for good, trashed or not.
    pub fn purge_note(&self, id: i64) -> Result<(), JournalError> {
        let mut store = self.store.lock();
        if !store.delete_note(id) {
            log::debug!("[JOURNAL] purge: no note {}", id);
            return Err(JournalError::NotFound("Not found"));
        }
        self.persist(&store)
    }

    /// Write the full snapshot. The in-memory change is kept either way.
    fn persist(&self, store: &NoteStore) -> Result<(), JournalError> {
        match self.persistence.save(&store.get_all_notes()) {
            Ok(()) => Ok(()),
            Err(e) => {
                log::error!("[JOURNAL] Error saving: {}", e);
                if self.strict_persistence { Err(e) } else { Ok(()) }
            }
        }
    }
}
