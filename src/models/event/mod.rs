// Event module
// One scheduled game with a normalized start instant

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::utils::date::local_from_naive;

/// One element of the schedule document as it appears on disk.
///
/// Only `date` is required; `id` and `opponent` are carried through when the
/// document provides them.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub id: Option<u32>,
    pub date: String,
    #[serde(default)]
    pub opponent: Option<String>,
}

/// A scheduled game with its start instant normalized to local time.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: Option<u32>,
    pub raw_date: String,
    pub start: DateTime<Local>,
    pub opponent: Option<String>,
}

impl Event {
    /// Build an event from a raw document entry.
    ///
    /// The stored date string carries no timezone context; it is parsed as a
    /// naive timestamp and interpreted as local wall-clock time. Date-only
    /// strings are taken as midnight.
    ///
    /// # Returns
    /// Returns `Result<Event, String>` with the offending date string in the
    /// error message when parsing fails.
    pub fn from_raw(raw: &RawEntry) -> Result<Self, String> {
        let start = parse_start(&raw.date)?;

        Ok(Self {
            id: raw.id,
            raw_date: raw.date.clone(),
            start,
            opponent: raw.opponent.clone(),
        })
    }

    /// The calendar date this game starts on.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }
}

fn parse_start(raw: &str) -> Result<DateTime<Local>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("date string is empty".to_string());
    }

    let naive = parse_naive(trimmed)
        .ok_or_else(|| format!("unparseable date string '{}'", trimmed))?;

    local_from_naive(naive)
        .ok_or_else(|| format!("'{}' is not a valid local time", trimmed))
}

fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    // Date-only entries mean midnight
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
