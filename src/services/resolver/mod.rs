// Season resolver
// Decides the in-season status and the instant the countdown targets

use chrono::{DateTime, Datelike, Local, NaiveDate};

use crate::models::schedule::Schedule;
use crate::models::settings::Settings;
use crate::utils::date::local_from_naive;

/// Everything the caller needs to display: the in-season answer, the target
/// instant, and the phrasing. The resolver is pure; writing these values to
/// the terminal is the binary's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub in_season: bool,
    pub target: DateTime<Local>,
    pub status_label: &'static str,
    pub headline: String,
}

/// Resolve the countdown target for `today` against a validated schedule.
///
/// `today` is the local calendar date with time-of-day already truncated.
///
/// - today before the opener: out of season, count down to the opener.
/// - today within the season window: in season, count down to the earliest
///   event on or after today. When today is the finale's own date that event
///   is the target, so the countdown expires immediately.
/// - today past the finale: out of season, count down to the estimated start
///   of the following year's season (fallback month/day from settings).
pub fn resolve(schedule: &Schedule, today: NaiveDate, settings: &Settings) -> Resolution {
    let window = schedule.season_window();

    if window.contains(today) {
        let next = schedule
            .next_on_or_after(today)
            .unwrap_or_else(|| schedule.last());
        log::info!("in season; next game on {}", next.start_date());

        return Resolution {
            in_season: true,
            target: next.start,
            status_label: "YES",
            headline: match &next.opponent {
                Some(opponent) => format!("Next game vs {}", opponent),
                None => "Next game".to_string(),
            },
        };
    }

    if today < window.start {
        log::info!("before season; opener on {}", window.start);

        return Resolution {
            in_season: false,
            target: schedule.first().start,
            status_label: "NO",
            headline: "Season opener".to_string(),
        };
    }

    let fallback = fallback_season_start(today, settings);
    log::info!("season over; estimated next season {}", fallback.date_naive());

    Resolution {
        in_season: false,
        target: fallback,
        status_label: "NO",
        headline: "Next season start (estimated)".to_string(),
    }
}

/// Estimated start of the following year's season: the configured month/day
/// constant in the year after `today`'s year.
fn fallback_season_start(today: NaiveDate, settings: &Settings) -> DateTime<Local> {
    let date = NaiveDate::from_ymd_opt(today.year() + 1, settings.fallback_month, settings.fallback_day)
        // validate() guarantees the month/day pair; Feb 29 degrades to Mar 1
        .or_else(|| NaiveDate::from_ymd_opt(today.year() + 1, 3, 1))
        .expect("fallback date must construct");

    let naive = date.and_hms_opt(0, 0, 0).expect("midnight is always valid");
    local_from_naive(naive).expect("local midnight must exist")
}
