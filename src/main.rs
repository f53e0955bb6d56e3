// Season Countdown Application
// Main entry point

use anyhow::{Context, Result};
use chrono::Local;

use season_countdown::services::countdown::CountdownTimer;
use season_countdown::services::resolver::resolve;
use season_countdown::services::schedule::ScheduleLoader;
use season_countdown::services::settings;
use season_countdown::utils::date::start_of_day;

use std::time::Duration;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting season countdown");

    let mut config = settings::load(None).context("Failed to load configuration")?;
    if let Some(source) = std::env::args().nth(1) {
        config.schedule_source = source;
    }

    let loader = ScheduleLoader::new().context("Failed to initialize schedule loader")?;
    let schedule = match loader.load(&config.schedule_source) {
        Ok(schedule) => schedule,
        Err(err) if err.is_data_unavailable() => {
            // No data is a terminal but non-crashing condition: answer NO
            // with a placeholder instead of a countdown.
            log::warn!("schedule unavailable: {}", err);
            println!("Is it game season yet? NO");
            println!("No schedule data available.");
            return Ok(());
        }
        Err(err) => {
            return Err(err).context("Failed to load schedule");
        }
    };

    let today = start_of_day(Local::now()).date_naive();
    let resolution = resolve(&schedule, today, &config);

    println!("Is it game season yet? {}", resolution.status_label);
    println!("{}", resolution.headline);

    let timer = CountdownTimer::with_tick(resolution.target, Duration::from_millis(config.tick_ms));
    timer
        .run(&mut std::io::stdout())
        .context("Countdown render failed")?;

    Ok(())
}
