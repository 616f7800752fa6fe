//! Month grid computation
//!
//! Months are 0-indexed in this module (0 is January, 11 is December), and weeks start on Sunday.

mod month_cursor;
pub use month_cursor::MonthCursor;

use std::convert::TryFrom;

use chrono::{Datelike, NaiveDate};

use crate::Activity;
use crate::date::filter_by_date;

/// The labels of the seven grid columns
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One slot of the grid. `None` is leading padding, before the 1st of the month.
pub type DayCell = Option<NaiveDate>;

/// Returns the 1st of the given month.
///
/// `month` may be out of `0..12`: it is normalized the usual way, so that month 12 is January of the next year and month -1 is December of the previous one. \
/// Returns `None` when the result is out of the range `chrono` supports.
pub fn first_of_month(year: i32, month: i64) -> Option<NaiveDate> {
    let total = i64::from(year).checked_mul(12)?.checked_add(month)?;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = total.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Build the cells of a month view.
///
/// The grid starts with one `None` per weekday before the 1st of the month (0 for a Sunday, 6 for a Saturday),
/// then holds one cell per day of the month. There is no trailing padding.
///
/// The month is normalized as in [`first_of_month`]. An empty grid is returned for dates `chrono` cannot represent.
pub fn days_in_month(year: i32, month: i64) -> Vec<DayCell> {
    let first = match first_of_month(year, month) {
        Some(first) => first,
        None => {
            log::warn!("Month {} of year {} is out of range", month, year);
            return Vec::new();
        }
    };

    let leading_padding = first.weekday().num_days_from_sunday() as usize;
    let mut cells: Vec<DayCell> = vec![None; leading_padding];

    let mut day = first;
    loop {
        cells.push(Some(day));
        match day.succ_opt() {
            Some(next) if next.month() == first.month() => day = next,
            _ => break,
        }
    }
    cells
}

/// Returns the activities planned on a given grid day.
///
/// This compares calendar dates directly, so that a day never shifts to its neighbour because of a time zone.
pub fn activities_for_day(activities: &[Activity], day: NaiveDate) -> Vec<&Activity> {
    filter_by_date(activities, day)
}

/// Returns the 1st of the month that is `offset` months away from the month of `current`.
///
/// `offset` may be negative. Returns `None` when the result is out of the range `chrono` supports.
pub fn change_month(current: NaiveDate, offset: i64) -> Option<NaiveDate> {
    let month = i64::from(current.month0()).checked_add(offset)?;
    first_of_month(current.year(), month)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::ActivityId;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn april_2024_grid() {
        // April 1st, 2024 is a Monday
        let cells = days_in_month(2024, 3);
        assert_eq!(cells.len(), 31);
        assert_eq!(cells[0], None);
        assert_eq!(cells[1], Some(ymd(2024, 4, 1)));
        assert_eq!(cells[30], Some(ymd(2024, 4, 30)));
        assert_eq!(cells.iter().filter(|c| c.is_none()).count(), 1);
    }

    #[test]
    fn month_starting_on_sunday_has_no_padding() {
        // September 1st, 2024 is a Sunday
        let cells = days_in_month(2024, 8);
        assert_eq!(cells.len(), 30);
        assert_eq!(cells[0], Some(ymd(2024, 9, 1)));
    }

    #[test]
    fn month_starting_on_saturday() {
        // March 1st, 2025 is a Saturday
        let cells = days_in_month(2025, 2);
        assert_eq!(cells.iter().take_while(|c| c.is_none()).count(), 6);
        assert_eq!(cells.len(), 6 + 31);
    }

    #[test]
    fn february_lengths() {
        let leap = days_in_month(2024, 1);
        assert_eq!(leap.iter().flatten().count(), 29);
        let common = days_in_month(2023, 1);
        assert_eq!(common.iter().flatten().count(), 28);
    }

    #[test]
    fn out_of_range_months_are_normalized() {
        assert_eq!(first_of_month(2024, 12), Some(ymd(2025, 1, 1)));
        assert_eq!(first_of_month(2024, -1), Some(ymd(2023, 12, 1)));
        assert_eq!(first_of_month(2024, -13), Some(ymd(2022, 12, 1)));
        assert_eq!(days_in_month(2024, 12), days_in_month(2025, 0));
    }

    #[test]
    fn change_month_rolls_years() {
        assert_eq!(change_month(ymd(2024, 12, 1), 1), Some(ymd(2025, 1, 1)));
        assert_eq!(change_month(ymd(2024, 1, 15), -1), Some(ymd(2023, 12, 1)));
        assert_eq!(change_month(ymd(2024, 5, 31), 0), Some(ymd(2024, 5, 1)));
        assert_eq!(change_month(ymd(2024, 3, 10), 25), Some(ymd(2026, 4, 1)));
        assert_eq!(change_month(ymd(2024, 3, 10), i64::MAX), None);
    }

    #[test]
    fn activities_of_a_day() {
        let day = ymd(2024, 4, 10);
        let activities = vec![
            Activity::new_with_parameters(ActivityId::from("1"), day, "Eid prayer".to_string(), String::new(), false),
            Activity::new_with_parameters(ActivityId::from("2"), ymd(2024, 4, 9), "Last iftar".to_string(), String::new(), false),
        ];
        let found = activities_for_day(&activities, day);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title(), "Eid prayer");
    }
}
