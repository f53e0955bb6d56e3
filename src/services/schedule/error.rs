use thiserror::Error;

/// Failures while loading the schedule document.
///
/// All variants are terminal for the current run; the schedule is a one-shot
/// load with no retry policy.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The document loaded fine but held no entries.
    #[error("no schedule data")]
    NoScheduleData,

    /// An entry's date string failed to parse. One bad entry rejects the
    /// whole schedule so ordering assumptions never see an invalid instant.
    #[error("malformed schedule entry: {reason}")]
    MalformedEntry { reason: String },

    #[error("failed to read schedule from {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch schedule: {0}")]
    Fetch(String),

    #[error("failed to parse schedule document")]
    Parse(#[from] serde_json::Error),
}

impl ScheduleError {
    /// Whether this failure means the data simply was not available, as
    /// opposed to being present but corrupt.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(
            self,
            ScheduleError::NoScheduleData | ScheduleError::Io { .. } | ScheduleError::Fetch(_)
        )
    }
}
