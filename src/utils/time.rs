//! Time-of-day helpers for clock-in / clock-out fields.

pub const TIME_PLACEHOLDER: &str = "--:--";

/// Truncate `HH:MM[:SS...]` to `HH:MM`; empty or missing values become `--:--`.
pub fn hour_minute(t: Option<&str>) -> String {
    match t.map(str::trim) {
        Some(s) if !s.is_empty() => s.chars().take(5).collect(),
        _ => TIME_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_seconds() {
        assert_eq!(hour_minute(Some("08:05:59")), "08:05");
        assert_eq!(hour_minute(Some("17:30")), "17:30");
        assert_eq!(hour_minute(Some("  ")), "--:--");
        assert_eq!(hour_minute(None), "--:--");
    }
}
