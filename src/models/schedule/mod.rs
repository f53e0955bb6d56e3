// Schedule module
// Ordered, validated season schedule and its derived window

use chrono::NaiveDate;

use crate::models::event::Event;

/// The ordered set of games for a single season.
///
/// Construction enforces the invariants the rest of the crate relies on:
/// the schedule is never empty and events are sorted ascending by start
/// instant, regardless of document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    events: Vec<Event>,
}

impl Schedule {
    /// Validate and sort a list of events into a schedule.
    pub fn new(mut events: Vec<Event>) -> Result<Self, String> {
        if events.is_empty() {
            return Err("schedule must contain at least one event".to_string());
        }

        events.sort_by_key(|event| event.start);
        Ok(Self { events })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The season opener.
    pub fn first(&self) -> &Event {
        &self.events[0]
    }

    /// The season finale.
    pub fn last(&self) -> &Event {
        &self.events[self.events.len() - 1]
    }

    /// The earliest event whose calendar date is on or after `date`.
    pub fn next_on_or_after(&self, date: NaiveDate) -> Option<&Event> {
        self.events.iter().find(|event| event.start_date() >= date)
    }

    /// The inclusive date range this schedule spans.
    pub fn season_window(&self) -> SeasonWindow {
        SeasonWindow {
            start: self.first().start_date(),
            end: self.last().start_date(),
        }
    }
}

/// Inclusive date range between the first and last scheduled game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SeasonWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
