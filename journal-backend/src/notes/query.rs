//! Gallery and calendar queries on top of NoteStore traversals.
//!
//! Filter keywords arrive as free strings from the HTTP layer; anything
//! unrecognised means "no filtering".

use chrono::{Datelike, NaiveDate, TimeDelta};
use journal_types::{CalendarDay, PhotoEntry};
use std::collections::BTreeMap;

use super::errors::JournalError;
use super::store::NoteStore;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Gallery date window, relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    All,
    Today,
    Week,
    Month,
}

impl DateFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("today") => DateFilter::Today,
            Some("week") => DateFilter::Week,
            Some("month") => DateFilter::Month,
            _ => DateFilter::All,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoodFilter {
    All,
    Exact(String),
}

impl MoodFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("all") | Some("") => MoodFilter::All,
            Some(mood) => MoodFilter::Exact(mood.to_string()),
        }
    }

    fn matches(&self, mood: &str) -> bool {
        match self {
            MoodFilter::All => true,
            MoodFilter::Exact(wanted) => wanted == mood,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoQuery {
    pub date: DateFilter,
    pub mood: MoodFilter,
}

impl PhotoQuery {
    pub fn parse(date_filter: Option<&str>, mood_filter: Option<&str>) -> Self {
        Self {
            date: DateFilter::parse(date_filter),
            mood: MoodFilter::parse(mood_filter),
        }
    }
}

/// Date → that day's active notes, for one calendar month.
pub type CalendarMonth = BTreeMap<String, CalendarDay>;

#[derive(Debug, Clone)]
pub struct QueryService {
    week_window_days: i64,
}

impl QueryService {
    pub fn new(week_window_days: i64) -> Self {
        Self { week_window_days }
    }

    /// Photos of active notes matching both filters, in store order.
    pub fn photos(&self, store: &NoteStore, query: &PhotoQuery, today: NaiveDate) -> Vec<PhotoEntry> {
        let today_str = today.format(DATE_FORMAT).to_string();
        let window_start = match query.date {
            DateFilter::Week => self.window_start(today),
            _ => None,
        };

        store
            .get_notes_with_photos()
            .into_iter()
            .filter(|photo| !photo.deleted)
            .filter(|photo| {
                let day = photo.date_portion();
                match query.date {
                    DateFilter::All => true,
                    DateFilter::Today => day == today_str,
                    // ISO dates order lexically
                    DateFilter::Week => window_start.as_deref().is_none_or(|start| day >= start),
                    DateFilter::Month => NaiveDate::parse_from_str(day, DATE_FORMAT)
                        .map(|d| d.year() == today.year() && d.month() == today.month())
                        .unwrap_or(false),
                }
            })
            .filter(|photo| query.mood.matches(&photo.mood))
            .collect()
    }

    /// First day of the `week` window. None when it reaches past the
    /// representable calendar, which matches everything.
    fn window_start(&self, today: NaiveDate) -> Option<String> {
        let start = TimeDelta::try_days(self.week_window_days)
            .and_then(|window| today.checked_sub_signed(window));
        if start.is_none() {
            log::warn!("[JOURNAL] week window of {} days is out of range, not filtering", self.week_window_days);
        }
        start.map(|d| d.format(DATE_FORMAT).to_string())
    }

    /// Active notes in `year`/`month`, grouped by day. Empty days are absent.
    pub fn calendar(&self, store: &NoteStore, year: i32, month: u32) -> Result<CalendarMonth, JournalError> {
        let (first, last) = month_bounds(year, month)?;
        let mut days = CalendarMonth::new();

        for note in store.iter().filter(|n| n.is_active()) {
            let day = note.date_portion();
            let parsed = match NaiveDate::parse_from_str(day, DATE_FORMAT) {
                Ok(d) => d,
                Err(_) => {
                    log::warn!("[JOURNAL] Note {} has unparseable date {:?}, skipping", note.id, note.date);
                    continue;
                }
            };
            if parsed < first || parsed > last {
                continue;
            }
            days.entry(day.to_string()).or_default().notes.push(note.clone());
        }

        Ok(days)
    }
}

/// First and last calendar day of a month.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), JournalError> {
    let invalid = || JournalError::Validation(format!("Invalid calendar month {}/{}", year, month));

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or_else(invalid)?;
    let last = next_first.pred_opt().ok_or_else(invalid)?;

    Ok((first, last))
}
