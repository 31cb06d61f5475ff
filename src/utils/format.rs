use std::fmt::Write;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::{Result, TimesinceError};

/// Elapsed time since `raw_ms`, rendered with the largest applicable unit
/// and a single-letter suffix. `offset_ms` is the configured client/server
/// clock delta and is added back before the cascade.
///
/// Elapsed time beyond 7 days wraps into 0-6 "d" instead of growing.
pub fn format_time_since(now_ms: i64, raw_ms: i64, offset_ms: i64) -> String {
    let seconds = ((now_ms - raw_ms + offset_ms) as f64 / 1000.0).round() as i64;

    let minutes = seconds / 60;
    if minutes < 1 {
        return format!("{}s", seconds % 60);
    }
    let hours = minutes / 60;
    if hours < 1 {
        return format!("{}m", minutes % 60);
    }
    let days = hours / 24;
    if days < 1 {
        return format!("{}h", hours % 24);
    }
    format!("{}d", days % 7)
}

/// The millisecond value actually displayed by the absolute formatter: the
/// raw server-stamped value mapped into the client's wall-clock frame.
pub fn corrected_millis(raw_ms: i64, offset_ms: i64) -> i64 {
    raw_ms - offset_ms
}

/// Formats `raw_ms` as an absolute date string in the local timezone,
/// corrected by the configured clock offset.
pub fn format_absolute(raw_ms: i64, offset_ms: i64, pattern: &str) -> Result<String> {
    format_absolute_in(corrected_millis(raw_ms, offset_ms), pattern, &Local)
}

pub fn format_absolute_in<Tz: TimeZone>(display_ms: i64, pattern: &str, tz: &Tz) -> Result<String>
where
    Tz::Offset: std::fmt::Display,
{
    let utc = DateTime::<Utc>::from_timestamp_millis(display_ms).ok_or_else(|| {
        TimesinceError::InvalidTimestamp {
            value: display_ms.to_string(),
        }
    })?;

    // chrono reports bad strftime specifiers through the Display impl
    let mut out = String::new();
    write!(out, "{}", utc.with_timezone(tz).format(pattern))
        .map_err(|_| crate::error!("Invalid date format pattern: '{}'", pattern))?;
    Ok(out)
}

/// Normalizes a timestamp input to milliseconds since epoch. Numeric input
/// is taken as-is; otherwise the value is parsed as a date/time string.
pub fn parse_timestamp(value: &str) -> Result<i64> {
    let value = value.trim();
    if let Ok(ms) = value.parse::<i64>() {
        return Ok(ms);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.and_utc().timestamp_millis());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt.and_utc().timestamp_millis());
        }
    }
    Err(TimesinceError::InvalidTimestamp {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn seconds_band() {
        assert_eq!(format_time_since(NOW, NOW, 0), "0s");
        assert_eq!(format_time_since(NOW, NOW - 45_000, 0), "45s");
        assert_eq!(format_time_since(NOW, NOW - 59_000, 0), "59s");
    }

    #[test]
    fn minutes_band() {
        assert_eq!(format_time_since(NOW, NOW - 60_000, 0), "1m");
        assert_eq!(format_time_since(NOW, NOW - 125_000, 0), "2m");
        assert_eq!(format_time_since(NOW, NOW - 3_599_000, 0), "59m");
    }

    #[test]
    fn hours_band() {
        assert_eq!(format_time_since(NOW, NOW - 3_600_000, 0), "1h");
        assert_eq!(format_time_since(NOW, NOW - 7_200_000, 0), "2h");
        assert_eq!(format_time_since(NOW, NOW - 86_399_000, 0), "23h");
    }

    #[test]
    fn days_band_wraps_at_seven() {
        assert_eq!(format_time_since(NOW, NOW - 86_400_000, 0), "1d");
        assert_eq!(format_time_since(NOW, NOW - 9 * 86_400_000, 0), "2d");
        assert_eq!(format_time_since(NOW, NOW - 7 * 86_400_000, 0), "0d");
        assert_eq!(format_time_since(NOW, NOW - 20 * 86_400_000, 0), "6d");
    }

    #[test]
    fn rounds_before_cascading() {
        assert_eq!(format_time_since(NOW, NOW - 45_400, 0), "45s");
        assert_eq!(format_time_since(NOW, NOW - 45_600, 0), "46s");
    }

    #[test]
    fn offset_is_added_back() {
        assert_eq!(format_time_since(NOW, NOW - 45_000, -10_000), "35s");
        assert_eq!(format_time_since(NOW, NOW - 45_000, 10_000), "55s");
    }

    #[test]
    fn recomputation_is_idempotent() {
        let first = format_time_since(NOW, NOW - 125_000, 3_000);
        let second = format_time_since(NOW, NOW - 125_000, 3_000);
        assert_eq!(first, second);
    }

    #[test]
    fn absolute_subtracts_offset() {
        assert_eq!(
            corrected_millis(1_700_000_000_000, 3_600_000),
            1_699_996_400_000
        );
        let formatted =
            format_absolute_in(1_699_996_400_000, "%Y-%m-%d %H:%M:%S", &Utc).unwrap();
        assert_eq!(formatted, "2023-11-14 21:13:20");
    }

    #[test]
    fn absolute_rejects_out_of_range_millis() {
        assert!(format_absolute_in(i64::MAX, "%Y", &Utc).is_err());
    }

    #[test]
    fn absolute_rejects_bad_pattern() {
        assert!(format_absolute_in(NOW, "%Q", &Utc).is_err());
    }

    #[test]
    fn parses_numeric_input_as_millis() {
        assert_eq!(parse_timestamp("1700000000000").unwrap(), NOW);
        assert_eq!(parse_timestamp(" 1700000000000 ").unwrap(), NOW);
    }

    #[test]
    fn parses_date_strings() {
        assert_eq!(parse_timestamp("2023-11-14T22:13:20Z").unwrap(), NOW);
        assert_eq!(parse_timestamp("2023-11-14 22:13:20").unwrap(), NOW);
        assert_eq!(parse_timestamp("2023-11-14").unwrap(), 1_699_920_000_000);
    }

    #[test]
    fn rejects_garbage_input() {
        assert!(matches!(
            parse_timestamp("not a date"),
            Err(TimesinceError::InvalidTimestamp { .. })
        ));
    }
}
