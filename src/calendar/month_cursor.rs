use chrono::{Datelike, NaiveDate};

use super::{change_month, days_in_month, DayCell};
use crate::date::format_month_year;

/// The month a calendar view currently displays
///
/// It can be moved one month backwards or forwards, with no bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthCursor {
    /// Always the 1st of a month
    first_day: NaiveDate,
}

impl MonthCursor {
    /// A cursor on the month that contains `date`
    pub fn new(date: NaiveDate) -> Self {
        Self { first_day: date.with_day(1).unwrap_or(date) }
    }

    pub fn first_day(&self) -> NaiveDate { self.first_day }
    pub fn year(&self) -> i32            { self.first_day.year() }
    /// 0-indexed month (0 is January)
    pub fn month0(&self) -> u32          { self.first_day.month0() }

    /// Move to the previous month
    pub fn previous(&mut self) {
        self.shift(-1);
    }

    /// Move to the next month
    pub fn next(&mut self) {
        self.shift(1);
    }

    fn shift(&mut self, offset: i64) {
        match change_month(self.first_day, offset) {
            Some(first_day) => self.first_day = first_day,
            None => log::warn!("Cannot move {} month(s) away from {}", offset, self.first_day),
        }
    }

    /// The grid cells of the displayed month
    pub fn days(&self) -> Vec<DayCell> {
        days_in_month(self.year(), i64::from(self.month0()))
    }

    /// e.g. `April 2024`
    pub fn label(&self) -> String {
        format_month_year(self.first_day)
    }
}
