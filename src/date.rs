//! Date helpers: the `YYYY-MM-DD` codec, filtering activities by day, and display formatting

use chrono::{Local, NaiveDate};

use crate::Activity;

/// The format dates are stored and compared with
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, ISO_DATE_FORMAT)
}

/// Render a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// The current calendar day, in the local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Returns the activities planned on `date`, in the order they have in `activities`
pub fn filter_by_date(activities: &[Activity], date: NaiveDate) -> Vec<&Activity> {
    activities.iter()
        .filter(|activity| activity.date() == date)
        .collect()
}

/// A long, human-readable form, e.g. `Monday, April 1, 2024`.
///
/// This is meant for display only, never for comparisons.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// The header of a month view, e.g. `April 2024`
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// A compact form, e.g. `4/1/2024`
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
