use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Local};

use super::models::TimeRemaining;
use super::render::render_table;

/// Owns the repeating render cycle for one countdown.
///
/// The timer goes Idle -> Ticking on `run` and Ticking -> Stopped when the
/// remaining duration reaches zero; it never ticks again after that. A new
/// countdown means a new `run` with a new target. Ticks are wall-clock
/// sleeps, not drift-corrected: each tick completes, including the expiry
/// check, before the next is scheduled.
pub struct CountdownTimer {
    target: DateTime<Local>,
    tick: Duration,
}

impl CountdownTimer {
    /// Countdown to `target` at the conventional 1 Hz tick.
    pub fn new(target: DateTime<Local>) -> Self {
        Self::with_tick(target, Duration::from_millis(1_000))
    }

    pub fn with_tick(target: DateTime<Local>, tick: Duration) -> Self {
        Self { target, tick }
    }

    /// Render the countdown to `out` until the target is reached.
    ///
    /// Repaints in place using ANSI cursor movement, clearing rows that
    /// disappear as larger units drop to zero. Self-terminating: the loop's
    /// own expiry check is the only cancellation.
    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut painted_rows = 0usize;

        loop {
            let remaining = TimeRemaining::until(self.target, Local::now());
            painted_rows = self.paint(out, &remaining, painted_rows)?;

            if remaining.is_expired() {
                log::info!("countdown reached zero");
                return Ok(());
            }

            thread::sleep(self.tick);
        }
    }

    fn paint<W: Write>(
        &self,
        out: &mut W,
        remaining: &TimeRemaining,
        painted_rows: usize,
    ) -> io::Result<usize> {
        if painted_rows > 0 {
            write!(out, "\x1b[{}A", painted_rows)?;
        }

        let table = render_table(remaining);
        let mut rows = 0usize;
        for line in table.lines() {
            writeln!(out, "\x1b[2K{}", line)?;
            rows += 1;
        }

        // Blank out rows left over from the previous, taller paint
        for _ in rows..painted_rows {
            writeln!(out, "\x1b[2K")?;
        }
        if painted_rows > rows {
            write!(out, "\x1b[{}A", painted_rows - rows)?;
        }

        out.flush()?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    #[test]
    fn test_run_with_past_target_stops_immediately() {
        let timer = CountdownTimer::new(Local::now() - ChronoDuration::hours(1));
        let mut out = Vec::new();

        timer.run(&mut out).unwrap();

        // expired countdown paints nothing
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_ticks_until_expiry() {
        let target = Local::now() + ChronoDuration::milliseconds(1_200);
        let timer = CountdownTimer::with_tick(target, Duration::from_millis(100));
        let mut out = Vec::new();

        timer.run(&mut out).unwrap();

        let rendered = String::from_utf8(out).unwrap();
        // at least one real paint before the expired (empty) one
        assert!(rendered.contains("01  second"));
    }

    #[test]
    fn test_paint_clears_shrinking_rows() {
        let timer = CountdownTimer::new(Local::now());
        let mut out = Vec::new();

        let tall = TimeRemaining::from_millis(61_000); // minute + second rows
        let rows = timer.paint(&mut out, &tall, 0).unwrap();
        assert_eq!(rows, 2);

        let short = TimeRemaining::from_millis(5_000); // seconds row only
        let rows = timer.paint(&mut out, &short, rows).unwrap();
        assert_eq!(rows, 1);

        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("\x1b[2A")); // moved up over the old paint
        assert!(rendered.contains("05  seconds"));
    }
}
