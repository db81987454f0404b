//! Value formatting for report text.

use chrono::{DateTime, Local, Utc};

/// Day-first local time, e.g. `09/02/2026, 14:30:00`.
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Format a number the way a person writes it: `3`, not `3.0`; `2.5` stays `2.5`.
///
/// Non-finite values print as `0`.
#[must_use]
pub fn number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation)]
        let whole = value as i64;
        return whole.to_string();
    }
    value.to_string()
}

/// Format an instant in the server's local time zone.
#[must_use]
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string()
}
