//! Calendar date validation functions

use chrono::NaiveDate;

/// Format of `<input type="date">` values
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO calendar date (`YYYY-MM-DD`)
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).ok()
}

/// Formats a date the way date inputs expect it
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// True unless `value` is a parseable date strictly earlier than `today`.
///
/// Unparseable input is not rejected here; comparing against an invalid date never fails.
pub fn is_not_before(value: &str, today: NaiveDate) -> bool {
    match parse_iso_date(value) {
        Some(date) => date >= today,
        None => true,
    }
}
