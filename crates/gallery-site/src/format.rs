//! Display formatting for dates

use chrono::{DateTime, NaiveDate};

const LONG_DATE: &str = "%B %-d, %Y";

/// Render an ISO-8601 date as `January 15, 2024`
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp; timestamps keep the date
/// as written, with no timezone conversion. Returns `None` for anything else.
#[must_use]
pub fn format_date(iso: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(iso).ok().map(|dt| dt.date_naive()))?;
    Some(date.format(LONG_DATE).to_string())
}

/// [`format_date`], falling back to the input
#[must_use]
pub fn date_label(iso: &str) -> String {
    format_date(iso).unwrap_or_else(|| iso.to_string())
}
