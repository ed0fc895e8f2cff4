//! Shared types for the journal backend and its HTTP clients.
//!
//! `Note` is both the wire format and the on-disk record, so any field
//! change here is a data-file format change.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =====================================================
// Records
// =====================================================

/// A single journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub text: String,
    pub mood: String,
    /// Extended ISO-8601 local timestamp, `YYYY-MM-DDTHH:MM:SS[.ffffff]`
    pub date: String,
    #[serde(default)]
    pub title: String,
    /// Opaque photo references (encoded images or paths)
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub deleted: bool,
    /// Client-supplied fields we don't model, kept so they survive a save
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Note {
    /// Calendar day of this note (`date` up to the first `T`).
    pub fn date_portion(&self) -> &str {
        date_portion(&self.date)
    }

    pub fn is_active(&self) -> bool {
        !self.deleted
    }
}

/// Substring of an ISO timestamp before the first `T`; the whole string when
/// there is no `T`.
pub fn date_portion(date: &str) -> &str {
    date.split('T').next().unwrap_or(date)
}

/// One photo of one note, flattened for the gallery view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoEntry {
    pub src: String,
    pub mood: String,
    pub date: String,
    pub text: String,
    pub note_id: i64,
    pub deleted: bool,
}

impl PhotoEntry {
    pub fn date_portion(&self) -> &str {
        date_portion(&self.date)
    }
}

/// All active notes for one calendar day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub notes: Vec<Note>,
}

// =====================================================
// Request Types
// =====================================================

/// Body of `POST /api/notes`. Everything is optional on the wire; the
/// backend validates `text`/`mood` and fills in the rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewNote {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub photos: Option<Vec<String>>,
    #[serde(default)]
    pub deleted: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// =====================================================
// Response Types
// =====================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Note>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            note: None,
        }
    }

    pub fn with_note(message: impl Into<String>, note: Note) -> Self {
        Self {
            message: message.into(),
            note: Some(note),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_portion() {
        assert_eq!(date_portion("2024-03-15T10:00:00"), "2024-03-15");
        assert_eq!(date_portion("2024-03-15T10:00:00.123456"), "2024-03-15");
        assert_eq!(date_portion("2024-03-15"), "2024-03-15");
        assert_eq!(date_portion(""), "");
    }

    #[test]
    fn test_note_defaults_on_load() {
        let note: Note = serde_json::from_str(
            r#"{"id": 1, "text": "hi", "mood": "calm", "date": "2024-01-01T08:00:00"}"#,
        )
        .unwrap();
        assert_eq!(note.title, "");
        assert!(note.photos.is_empty());
        assert!(!note.deleted);
        assert!(note.extra.is_empty());
    }

    #[test]
    fn test_unknown_fields_survive() {
        let raw = r#"{"id": 7, "text": "t", "mood": "m", "date": "2024-01-01", "weather": "rain"}"#;
        let note: Note = serde_json::from_str(raw).unwrap();
        assert_eq!(note.extra.get("weather"), Some(&Value::from("rain")));

        let back = serde_json::to_value(&note).unwrap();
        assert_eq!(back["weather"], "rain");
        assert_eq!(back["deleted"], false);
    }

    #[test]
    fn test_message_response_skips_missing_note() {
        let json = serde_json::to_value(MessageResponse::new("Moved to trash")).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Moved to trash" }));
    }
}
