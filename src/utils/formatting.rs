//! Formatting utilities used for CLI and export outputs.

/// Hours as `x.xxh`. Missing and zero values both render as `placeholder`.
pub fn format_hours(hours: Option<f64>, placeholder: &str) -> String {
    match hours {
        Some(h) if h != 0.0 && h.is_finite() => format!("{:.2}h", h),
        _ => placeholder.to_string(),
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Ratio in `[0, 1]` as a one-decimal percentage.
pub fn percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Empty / missing text becomes `placeholder`.
pub fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    }
}
