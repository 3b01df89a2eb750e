//! Minute/second formatting for countdown displays.
//!
//! The display rule is deliberately narrow: a component is prefixed with a
//! single `0` only when it is below 10. Anything from 10 upwards is printed
//! as-is, so a 100 minute countdown shows `100:00`.
//!
//! ```rust
//! use countdown_widget::format::format_time;
//!
//! assert_eq!(format_time(125), "02:05");
//! assert_eq!(format_time(600), "10:00");
//! ```

/// Renders a single time component, prefixing a `0` when it is below 10.
pub fn pad(value: u64) -> String {
    if value < 10 {
        format!("0{}", value)
    } else {
        value.to_string()
    }
}

/// Converts a number of seconds into a `MM:SS` string.
///
/// Minutes are `seconds / 60` and seconds are the remainder; both go
/// through [`pad`].
pub fn format_time(seconds: u64) -> String {
    format!("{}:{}", pad(seconds / 60), pad(seconds % 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(59), "00:59");
        assert_eq!(format_time(60), "01:00");
        assert_eq!(format_time(125), "02:05");
        assert_eq!(format_time(600), "10:00");
    }

    #[test]
    fn test_pad_threshold() {
        assert_eq!(pad(0), "00");
        assert_eq!(pad(9), "09");
        assert_eq!(pad(10), "10");
        assert_eq!(pad(59), "59");
        // Only values under 10 are padded, wider values pass through.
        assert_eq!(pad(100), "100");
        assert_eq!(format_time(100 * 60 + 7), "100:07");
    }

    #[test]
    fn test_split_holds_below_one_hundred_minutes() {
        for s in 0..(60 * 100) {
            let formatted = format_time(s);
            let (min, sec) = formatted
                .split_once(':')
                .unwrap_or_else(|| panic!("missing colon in {formatted}"));

            assert_eq!(min.len(), 2, "minutes of {s} rendered as {min}");
            assert_eq!(sec.len(), 2, "seconds of {s} rendered as {sec}");
            assert_eq!(min.parse::<u64>().unwrap(), s / 60);
            assert_eq!(sec.parse::<u64>().unwrap(), s % 60);
        }
    }
}
