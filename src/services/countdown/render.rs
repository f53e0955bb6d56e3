use super::models::TimeRemaining;

/// Render the remaining duration as a two-column table, one row per visible
/// unit.
///
/// A unit's row is shown when its value is non-zero or when any larger unit
/// is already shown, so inner zeros stay visible ("01 week" keeps a
/// "00 days" row) while leading zeros are suppressed. Values are zero-padded
/// to two digits; labels are singular when the value equals 1.
///
/// Pure function of its input: rendering the same remaining duration twice
/// yields identical output.
pub fn render_table(remaining: &TimeRemaining) -> String {
    let units = [
        (remaining.weeks, "week", "weeks"),
        (remaining.days, "day", "days"),
        (remaining.hours, "hour", "hours"),
        (remaining.minutes, "minute", "minutes"),
        (remaining.seconds, "second", "seconds"),
    ];

    let mut out = String::new();
    let mut larger_shown = false;

    for (value, singular, plural) in units {
        if value == 0 && !larger_shown {
            continue;
        }
        larger_shown = true;

        let label = if value == 1 { singular } else { plural };
        out.push_str(&format!("{:02}  {}\n", value, label));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_minute_and_seconds() {
        // 90000 ms: minutes and seconds only
        let remaining = TimeRemaining::from_millis(90_000);

        assert_eq!(render_table(&remaining), "01  minute\n30  seconds\n");
    }

    #[test]
    fn test_render_cascades_zero_inner_units() {
        let remaining = TimeRemaining {
            total_ms: 1,
            weeks: 1,
            days: 0,
            hours: 0,
            minutes: 2,
            seconds: 0,
        };

        assert_eq!(
            render_table(&remaining),
            "01  week\n00  days\n00  hours\n02  minutes\n00  seconds\n"
        );
    }

    #[test]
    fn test_render_singular_and_plural_labels() {
        use super::super::models::{MILLIS_PER_HOUR, MILLIS_PER_SECOND};

        let remaining = TimeRemaining::from_millis(MILLIS_PER_HOUR + MILLIS_PER_SECOND);

        assert_eq!(
            render_table(&remaining),
            "01  hour\n00  minutes\n01  second\n"
        );
    }

    #[test]
    fn test_render_expired_is_empty() {
        let remaining = TimeRemaining::from_millis(0);

        assert_eq!(render_table(&remaining), "");
    }

    #[test]
    fn test_render_is_idempotent() {
        let remaining = TimeRemaining::from_millis(123_456_789);

        assert_eq!(render_table(&remaining), render_table(&remaining));
    }

    #[test]
    fn test_render_zero_pads_values() {
        let remaining = TimeRemaining::from_millis(9_000);

        assert_eq!(render_table(&remaining), "09  seconds\n");
    }
}
