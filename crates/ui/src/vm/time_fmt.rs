use chrono::Duration;

/// Compact elapsed time, e.g. `1h 02m 09s`, `12m 05s`, `42s`.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.num_seconds().max(0);
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}h {minutes:02}m {seconds:02}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds:02}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_each_magnitude() {
        assert_eq!(format_elapsed(Duration::seconds(42)), "42s");
        assert_eq!(format_elapsed(Duration::seconds(725)), "12m 05s");
        assert_eq!(format_elapsed(Duration::seconds(3729)), "1h 02m 09s");
        assert_eq!(format_elapsed(Duration::seconds(-5)), "0s");
    }
}
