// Date utility functions

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Truncate a local timestamp to midnight of its calendar date.
pub fn start_of_day(date: DateTime<Local>) -> DateTime<Local> {
    date.date_naive()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_local_timezone(date.timezone())
        .unwrap()
}

/// Interpret a naive timestamp as local wall-clock time.
///
/// Schedule documents store start times without timezone context; the
/// convention is that they mean local time wherever the countdown runs.
/// Returns `None` for wall-clock times that do not exist locally (DST gaps).
pub fn local_from_naive(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    Local.from_local_datetime(&naive).earliest()
}
