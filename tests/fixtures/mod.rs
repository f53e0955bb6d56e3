// Test fixtures - reusable test data
// Provides consistent schedule documents and dates across test files

#![allow(dead_code)]

use chrono::NaiveDate;

/// A two-game 2016 season, intentionally out of document order to exercise
/// the loader's sorting.
pub const SEASON_2016: &str = r#"[
    {"id": 2, "date": "2016-12-31", "opponent": "Finale FC"},
    {"id": 1, "date": "2016-09-08", "opponent": "Opener United"}
]"#;

/// A four-game season with a timed midseason game.
pub const SEASON_2016_FULL: &str = r#"[
    {"id": 1, "date": "2016-09-08"},
    {"id": 2, "date": "2016-10-20"},
    {"id": 3, "date": "2016-11-02T18:30:00"},
    {"id": 4, "date": "2016-12-31"}
]"#;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// A week before the 2016 opener
    pub fn before_season() -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, 9, 1).unwrap()
    }

    /// Mid-October, between the first two games
    pub fn mid_season() -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, 10, 15).unwrap()
    }

    /// Well past the 2016 finale
    pub fn after_season() -> NaiveDate {
        NaiveDate::from_ymd_opt(2017, 3, 1).unwrap()
    }
}
