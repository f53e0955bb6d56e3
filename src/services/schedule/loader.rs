use std::fs;
use std::path::Path;

use crate::models::event::{Event, RawEntry};
use crate::models::schedule::Schedule;

use super::error::ScheduleError;
use super::fetcher::ScheduleFetcher;

/// Loads and validates the season schedule from a file or HTTPS URL.
pub struct ScheduleLoader {
    fetcher: ScheduleFetcher,
}

impl ScheduleLoader {
    pub fn new() -> Result<Self, ScheduleError> {
        Ok(Self {
            fetcher: ScheduleFetcher::new()?,
        })
    }

    /// Load the schedule once from `source`.
    ///
    /// Sources starting with `http` are fetched over the network; anything
    /// else is treated as a local path.
    pub fn load(&self, source: &str) -> Result<Schedule, ScheduleError> {
        let body = if source.starts_with("http") {
            log::info!("fetching schedule from {}", source);
            self.fetcher.fetch(source)?
        } else {
            log::info!("reading schedule from {}", source);
            read_file(Path::new(source))?
        };

        parse_schedule(&body)
    }
}

fn read_file(path: &Path) -> Result<String, ScheduleError> {
    fs::read_to_string(path).map_err(|source| ScheduleError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Parse a schedule document body into a validated `Schedule`.
pub fn parse_schedule(body: &str) -> Result<Schedule, ScheduleError> {
    let entries: Vec<RawEntry> = serde_json::from_str(body)?;

    if entries.is_empty() {
        return Err(ScheduleError::NoScheduleData);
    }

    let events = entries
        .iter()
        .map(Event::from_raw)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|reason| ScheduleError::MalformedEntry { reason })?;

    let schedule = Schedule::new(events)
        .map_err(|reason| ScheduleError::MalformedEntry { reason })?;

    log::info!(
        "loaded {} events spanning {} to {}",
        schedule.len(),
        schedule.first().start_date(),
        schedule.last().start_date()
    );

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"[
        {"id": 2, "date": "2016-12-31"},
        {"id": 1, "date": "2016-09-08", "opponent": "Visitors"}
    ]"#;

    #[test]
    fn test_parse_schedule_sorts_entries() {
        let schedule = parse_schedule(SAMPLE).unwrap();

        assert_eq!(schedule.len(), 2);
        assert_eq!(
            schedule.first().start_date(),
            NaiveDate::from_ymd_opt(2016, 9, 8).unwrap()
        );
        assert_eq!(schedule.first().opponent.as_deref(), Some("Visitors"));
    }

    #[test]
    fn test_parse_schedule_empty_array_is_no_data() {
        let result = parse_schedule("[]");

        assert!(matches!(result, Err(ScheduleError::NoScheduleData)));
    }

    #[test]
    fn test_parse_schedule_rejects_malformed_date() {
        let result = parse_schedule(r#"[{"date": "week 3"}]"#);

        match result {
            Err(ScheduleError::MalformedEntry { reason }) => {
                assert!(reason.contains("week 3"));
            }
            other => panic!("expected MalformedEntry, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_parse_schedule_rejects_invalid_json() {
        assert!(matches!(
            parse_schedule("not json"),
            Err(ScheduleError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let loader = ScheduleLoader::new().unwrap();
        let schedule = loader.load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let loader = ScheduleLoader::new().unwrap();

        let result = loader.load("/nonexistent/schedule.json");
        assert!(matches!(result, Err(ScheduleError::Io { .. })));
    }
}
