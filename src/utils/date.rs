//! Date utilities: tolerant parsing of snapshot dates/timestamps and the
//! fixed display formats used by listings and exports.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;

/// Naive datetime layouts accepted besides RFC 3339.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Unix values above this are taken as milliseconds.
const MILLIS_THRESHOLD: u64 = 100_000_000_000;

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Strict `YYYY-MM-DD`, used for user input.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a datetime string in any of the shapes the sources emit.
/// A bare date resolves to midnight.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    parse_date(s).map(|d| d.and_time(NaiveTime::MIN))
}

/// Calendar date of a (possibly timestamped) string.
pub fn parse_flexible_date(s: &str) -> Option<NaiveDate> {
    parse_datetime(s).map(|dt| dt.date())
}

/// Timestamp from a JSON scalar: strings go through [`parse_datetime`],
/// numbers are unix seconds (or milliseconds when large enough).
pub fn timestamp_from_value(v: &Value) -> Option<NaiveDateTime> {
    match v {
        Value::String(s) => parse_datetime(s),
        Value::Number(n) => {
            let raw = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            let (secs, nanos) = if raw.unsigned_abs() >= MILLIS_THRESHOLD {
                (raw.div_euclid(1000), (raw.rem_euclid(1000) * 1_000_000) as u32)
            } else {
                (raw, 0)
            };
            DateTime::from_timestamp(secs, nanos).map(|dt| dt.naive_utc())
        }
        _ => None,
    }
}

/// vi-VN short date: `d/m/yyyy`.
pub fn format_short_date(d: NaiveDate) -> String {
    d.format("%-d/%-m/%Y").to_string()
}

/// vi-VN date and time: `HH:MM:SS d/m/yyyy`.
pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format("%H:%M:%S %-d/%-m/%Y").to_string()
}
