//! NoteStore — ordered in-memory collection of journal notes
//!
//! Notes are kept most-recently-added first, regardless of their `date`.
//! All id lookups are linear scans that stop at the first match, so with
//! duplicate ids the newest note shadows the older ones.

use journal_types::{Note, PhotoEntry};
use std::collections::VecDeque;

/// Exclusive owner of every note; reads hand out clones.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: VecDeque<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from a saved snapshot (which is in store order).
    ///
    /// Re-adds from the oldest entry forward so the front of the snapshot ends
    /// up at the front of the store again.
    pub fn from_snapshot(saved: Vec<Note>) -> Self {
        let mut store = Self::new();
        for note in saved.into_iter().rev() {
            store.add_note(note);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Borrowing traversal in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    /// Insert at the front. No duplicate-id check; callers own uniqueness.
    pub fn add_note(&mut self, note: Note) -> &Note {
        self.notes.push_front(note);
        &self.notes[0]
    }

    /// First note with this id, trashed or not.
    pub fn find(&self, id: i64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Permanently remove the first note with this id.
    pub fn delete_note(&mut self, id: i64) -> bool {
        match self.notes.iter().position(|n| n.id == id) {
            Some(idx) => {
                self.notes.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Move the first active note with this id to the trash.
    pub fn mark_deleted(&mut self, id: i64) -> bool {
        match self.notes.iter_mut().find(|n| n.id == id && !n.deleted) {
            Some(note) => {
                note.deleted = true;
                true
            }
            None => false,
        }
    }

    /// Take the first trashed note with this id back out of the trash.
    /// An id that exists but isn't trashed counts as not found.
    pub fn restore_note(&mut self, id: i64) -> bool {
        match self.notes.iter_mut().find(|n| n.id == id && n.deleted) {
            Some(note) => {
                note.deleted = false;
                true
            }
            None => false,
        }
    }

    /// Every note, trashed ones included.
    pub fn get_all_notes(&self) -> Vec<Note> {
        self.notes.iter().cloned().collect()
    }

    /// Notes (trashed included) whose date portion is exactly `target_date`.
    pub fn get_notes_by_date(&self, target_date: &str) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|n| n.date_portion() == target_date)
            .cloned()
            .collect()
    }

    /// One entry per (note, photo) pair, note order then photo order.
    pub fn get_notes_with_photos(&self) -> Vec<PhotoEntry> {
        self.notes
            .iter()
            .flat_map(|note| {
                note.photos.iter().map(move |src| PhotoEntry {
                    src: src.clone(),
                    mood: note.mood.clone(),
                    date: note.date.clone(),
                    text: note.text.clone(),
                    note_id: note.id,
                    deleted: note.deleted,
                })
            })
            .collect()
    }

    pub fn get_deleted_notes(&self) -> Vec<Note> {
        self.notes.iter().filter(|n| n.deleted).cloned().collect()
    }
}
