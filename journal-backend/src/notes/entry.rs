//! Turning a create request into a stored note.

use chrono::{DateTime, TimeZone};
use journal_types::{NewNote, Note};

use super::errors::JournalError;

pub const MISSING_FIELDS: &str = "Text and mood required";

/// Timestamp layout written into `date` when the client sends none.
const NOTE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Validate `request` and fill in every default.
///
/// `id` comes from `now` in epoch milliseconds when absent or zero. Two
/// requests within the same millisecond get the same id.
pub fn build_note<Tz: TimeZone>(request: NewNote, now: &DateTime<Tz>) -> Result<Note, JournalError> {
    let text = non_empty(request.text);
    let mood = non_empty(request.mood);
    let (text, mood) = match (text, mood) {
        (Some(text), Some(mood)) => (text, mood),
        _ => return Err(JournalError::Validation(MISSING_FIELDS.to_string())),
    };

    let date = non_empty(request.date)
        .unwrap_or_else(|| now.naive_local().format(NOTE_DATE_FORMAT).to_string());
    let id = request
        .id
        .filter(|id| *id != 0)
        .unwrap_or_else(|| now.timestamp_millis());

    Ok(Note {
        id,
        text,
        mood,
        date,
        title: request.title.unwrap_or_default(),
        photos: request.photos.unwrap_or_default(),
        deleted: request.deleted.unwrap_or(false),
        extra: request.extra,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
