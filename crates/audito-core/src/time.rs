//! Timestamp parsing helpers.
//!
//! Audit timestamps arrive from clients as free-form strings. Accepts RFC 3339
//! (`"2026-02-09T14:30:00Z"`), `SQLite`-style (`"2026-02-09 14:30:00"`), and
//! bare dates (`"2026-02-09"`, read as midnight UTC).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a client-supplied timestamp. Returns `None` when no format matches.
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("2026-02-09T14:30:00Z")]
    #[case("2026-02-09T14:30:00+00:00")]
    #[case("2026-02-09T14:30:00.000Z")]
    #[case("2026-02-09 14:30:00")]
    #[case("2026-02-09T14:30:00")]
    fn parses_supported_formats(#[case] input: &str) {
        let dt = parse_timestamp(input).expect("should parse");
        assert_eq!(dt.year(), 2026);
        assert_eq!(dt.month(), 2);
        assert_eq!(dt.day(), 9);
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn parses_bare_date_as_midnight() {
        let dt = parse_timestamp("2026-02-09").unwrap();
        assert_eq!((dt.hour(), dt.minute()), (0, 0));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("yesterday")]
    #[case("2026-13-45")]
    fn rejects_garbage(#[case] input: &str) {
        assert!(parse_timestamp(input).is_none());
    }
}
