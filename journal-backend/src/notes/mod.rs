//! Notes system — the journal's in-memory note store and its JSON snapshot
//!
//! NoteStore holds the ordered notes, QueryService shapes gallery and calendar
//! views, and Journal ties both to the data file.

pub mod entry;
pub mod errors;
pub mod journal;
pub mod persistence;
pub mod query;
pub mod store;

pub use errors::JournalError;
pub use journal::Journal;
pub use persistence::JsonFile;
pub use query::PhotoQuery;
