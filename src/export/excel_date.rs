// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Try to read an exported cell as a date, datetime or time of day,
/// returning the Excel serial plus its number format.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%H:%M:%S %d/%m/%Y") {
        return Some(("hh:mm:ss d/m/yyyy", naive_datetime_to_excel_serial(&dt)));
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%d/%m/%Y") {
        let dt = d.and_time(NaiveTime::MIN);
        return Some(("d/m/yyyy", naive_datetime_to_excel_serial(&dt)));
    }

    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M") {
        let seconds = t.num_seconds_from_midnight() as f64;
        return Some(("hh:mm", seconds / 86400.0));
    }

    None
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> f64 {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .unwrap_or_default()
        .and_time(NaiveTime::MIN);

    let duration = *dt - excel_epoch;
    duration.num_seconds() as f64 / 86400.0
}
