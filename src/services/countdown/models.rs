use chrono::{DateTime, Local};

pub(crate) const MILLIS_PER_SECOND: i64 = 1_000;
pub(crate) const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub(crate) const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub(crate) const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;
pub(crate) const MILLIS_PER_WEEK: i64 = 7 * MILLIS_PER_DAY;

/// Remaining duration to a target instant, broken into display units.
///
/// Negative totals are clamped to zero: the tick loop stops at expiry, so a
/// past target reads as an expired countdown rather than as modular leftovers
/// of a negative millisecond count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRemaining {
    pub total_ms: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeRemaining {
    /// Break a millisecond total into weeks/days/hours/minutes/seconds.
    pub fn from_millis(total: i64) -> Self {
        let total = total.max(0);

        Self {
            total_ms: total,
            weeks: total / MILLIS_PER_WEEK,
            days: (total / MILLIS_PER_DAY) % 7,
            hours: (total / MILLIS_PER_HOUR) % 24,
            minutes: (total / MILLIS_PER_MINUTE) % 60,
            seconds: (total / MILLIS_PER_SECOND) % 60,
        }
    }

    /// Remaining duration from `now` until `target`.
    pub fn until(target: DateTime<Local>, now: DateTime<Local>) -> Self {
        Self::from_millis((target - now).num_milliseconds())
    }

    /// The target has been reached or passed.
    pub fn is_expired(&self) -> bool {
        self.total_ms == 0
    }
}
