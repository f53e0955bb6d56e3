use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;

use super::error::ScheduleError;

/// One-shot blocking fetch of a remote schedule document.
pub struct ScheduleFetcher {
    client: Client,
    max_response_bytes: usize,
}

impl ScheduleFetcher {
    pub fn new() -> Result<Self, ScheduleError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .map_err(|err| ScheduleError::Fetch(format!("failed to build HTTP client: {}", err)))?;

        Ok(Self {
            client,
            max_response_bytes: 1024 * 1024,
        })
    }

    /// Fetch the schedule document body from an HTTPS URL.
    ///
    /// No retries: the schedule is static data and the load happens once per
    /// run, so a failure is reported immediately.
    pub fn fetch(&self, url: &str) -> Result<String, ScheduleError> {
        if !url.starts_with("https://") {
            return Err(ScheduleError::Fetch(
                "schedule URL must use HTTPS".to_string(),
            ));
        }

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| ScheduleError::Fetch(format!("network error: {}", err)))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ScheduleError::Fetch(format!(
                "schedule fetch failed with HTTP status {}",
                status
            )));
        }

        let bytes = response
            .bytes()
            .map_err(|err| ScheduleError::Fetch(format!("failed to read response body: {}", err)))?;

        if bytes.len() > self.max_response_bytes {
            return Err(ScheduleError::Fetch(format!(
                "schedule response too large ({} bytes > {} bytes)",
                bytes.len(),
                self.max_response_bytes
            )));
        }

        String::from_utf8(bytes.to_vec())
            .map_err(|_| ScheduleError::Fetch("schedule response is not valid UTF-8".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_rejects_plain_http() {
        let fetcher = ScheduleFetcher::new().unwrap();

        let result = fetcher.fetch("http://example.com/schedule.json");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("HTTPS"));
    }
}
