//! ISO-8601 timestamp parsing
//!
//! A trailing `Z` is rewritten to `+00:00` before parsing. Basic-format
//! dates and times (`20240101T1000`) and hour-only times (`2024-01-01T10`)
//! are rewritten to the extended form. Timestamps without an offset are read
//! as UTC so that every stored record can be ordered against every other.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{CoreError, CoreResult};

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 date-time into a UTC instant
pub fn parse_timestamp(value: &str) -> CoreResult<DateTime<Utc>> {
    let normalized = match value.strip_suffix('Z') {
        Some(rest) => format!("{}+00:00", rest),
        None => value.to_string(),
    };

    parse_normalized(&to_extended(&normalized)).ok_or_else(|| CoreError::InvalidTimestamp {
        value: value.to_string(),
    })
}

/// Rewrite basic-format and hour-only components into extended form
///
/// Anything that does not look like digits is left alone for the parser to
/// reject.
fn to_extended(value: &str) -> String {
    let (date, rest) = match value.find(|c: char| c == 'T' || c == ' ') {
        Some(i) => value.split_at(i),
        None => (value, ""),
    };

    let date = if date.len() == 8 && all_digits(date) {
        format!("{}-{}-{}", &date[..4], &date[4..6], &date[6..])
    } else {
        date.to_string()
    };

    if rest.is_empty() {
        return date;
    }

    let (separator, time_and_offset) = rest.split_at(1);
    let offset_at = time_and_offset
        .find(|c: char| c == '+' || c == '-')
        .unwrap_or(time_and_offset.len());
    let (time, offset) = time_and_offset.split_at(offset_at);
    let (clock, fraction) = match time.find('.') {
        Some(i) => time.split_at(i),
        None => (time, ""),
    };

    let clock = if all_digits(clock) {
        match clock.len() {
            2 => format!("{}:00", clock),
            4 => format!("{}:{}", &clock[..2], &clock[2..]),
            6 => format!("{}:{}:{}", &clock[..2], &clock[2..4], &clock[4..]),
            _ => clock.to_string(),
        }
    } else {
        clock.to_string()
    };

    format!("{}{}{}{}{}", date, separator, clock, fraction, offset)
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn parse_normalized(value: &str) -> Option<DateTime<Utc>> {
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    // Date only: midnight
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_trailing_z_is_utc() {
        let ts = parse_timestamp("2024-01-01T00:00:00Z").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_explicit_offset() {
        let ts = parse_timestamp("2024-01-01T02:30:00+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 1, 0, 30, 0).unwrap());
    }

    #[test]
    fn test_fractional_seconds() {
        let ts = parse_timestamp("2024-03-05T10:11:12.250Z").unwrap();
        assert_eq!(ts.second(), 12);
        assert_eq!(ts.nanosecond(), 250_000_000);
    }

    #[test]
    fn test_space_separator_and_minutes_only() {
        let ts = parse_timestamp("2024-03-05 10:11+00:00").unwrap();
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.minute(), 11);
    }

    #[test]
    fn test_naive_timestamp_read_as_utc() {
        let naive = parse_timestamp("2024-06-15T08:00:00").unwrap();
        let zulu = parse_timestamp("2024-06-15T08:00:00Z").unwrap();
        assert_eq!(naive, zulu);
    }

    #[test]
    fn test_date_only_is_midnight() {
        let ts = parse_timestamp("2024-06-15").unwrap();
        assert_eq!(ts.day(), 15);
        assert_eq!(ts.hour(), 0);
    }

    #[test]
    fn test_ordering_across_offsets() {
        let earlier = parse_timestamp("2024-01-01T10:00:00+05:00").unwrap();
        let later = parse_timestamp("2024-01-01T06:00:00Z").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_hour_only_time() {
        let ts = parse_timestamp("2024-01-01T10").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());

        let ts = parse_timestamp("2024-01-01T10+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap());
    }

    #[test]
    fn test_basic_format() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        assert_eq!(parse_timestamp("20240101T100000Z").unwrap(), expected);
        assert_eq!(parse_timestamp("20240101T1000").unwrap(), expected);
        assert_eq!(parse_timestamp("20240101T10").unwrap(), expected);
        assert_eq!(parse_timestamp("20240101T120000+02:00").unwrap(), expected);
        assert_eq!(
            parse_timestamp("20240101").unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );

        let ts = parse_timestamp("20240101T100000.5Z").unwrap();
        assert_eq!(ts.nanosecond(), 500_000_000);
    }

    #[test]
    fn test_compact_offset_and_minute_precision() {
        let ts = parse_timestamp("2024-01-01T10:00:00+0530").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 1, 4, 30, 0).unwrap());
        assert!(parse_timestamp("2024-01-01T10:00Z").is_ok());
    }

    #[test]
    fn test_rejects_garbage() {
        for value in ["", "Z", "yesterday", "2024011", "20241301T10", "2024-01-01T1", "2024-01-01T25", "2024-13-01T00:00:00Z", "2024-01-01T25:00:00Z", "2024-01-01T00:00:00ZZ"] {
            let err = parse_timestamp(value).unwrap_err();
            assert!(matches!(err, CoreError::InvalidTimestamp { .. }), "{value}");
        }
    }
}
