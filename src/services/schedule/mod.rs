mod error;
mod fetcher;
mod loader;

pub use error::ScheduleError;
pub use fetcher::ScheduleFetcher;
pub use loader::ScheduleLoader;
