// Settings module
// Runtime configuration for the countdown binary

use chrono::NaiveDate;
use serde::Deserialize;

/// Runtime settings, normally read from `config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path or https URL of the schedule JSON document.
    pub schedule_source: String,
    /// Month of the estimated next-season start used once the season is over.
    pub fallback_month: u32,
    /// Day of the estimated next-season start.
    pub fallback_day: u32,
    /// Tick interval for the countdown loop, in milliseconds.
    pub tick_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schedule_source: "schedule.json".to_string(),
            fallback_month: 10, // October 1st
            fallback_day: 1,
            tick_ms: 1_000,
        }
    }
}

impl Settings {
    /// Validate field ranges.
    pub fn validate(&self) -> Result<(), String> {
        if self.schedule_source.trim().is_empty() {
            return Err("schedule_source cannot be empty".to_string());
        }

        // A leap year makes Feb 29 acceptable as a fallback constant
        if NaiveDate::from_ymd_opt(2024, self.fallback_month, self.fallback_day).is_none() {
            return Err(format!(
                "invalid fallback date: month {} day {}",
                self.fallback_month, self.fallback_day
            ));
        }

        if self.tick_ms == 0 {
            return Err("tick_ms must be greater than zero".to_string());
        }

        Ok(())
    }
}
