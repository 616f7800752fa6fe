use chrono::{Datelike, NaiveDate};

use crate::{ActivityId, ActivityStore, MonthCursor};
use crate::calendar::activities_for_day;
use crate::date::format_short_date;
use crate::traits::KeyValueStorage;
use super::ActivityForm;

/// How many activity titles a day cell shows before summarizing the rest
pub const PREVIEW_LIMIT: usize = 2;

/// What a single day of the month grid shows
#[derive(Clone, Debug, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub is_today: bool,
    /// How many activities are planned on this day
    pub count: usize,
    /// The titles of the first activities, at most [`PREVIEW_LIMIT`] of them
    pub preview_titles: Vec<String>,
}

impl DaySummary {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// How many activities are not listed in `preview_titles`
    pub fn hidden_count(&self) -> usize {
        self.count.saturating_sub(self.preview_titles.len())
    }

    /// e.g. `+3 more`, or `None` if every activity is previewed
    pub fn more_label(&self) -> Option<String> {
        match self.hidden_count() {
            0 => None,
            n => Some(format!("+{} more", n)),
        }
    }
}

/// A slot of the rendered grid
#[derive(Clone, Debug, PartialEq)]
pub enum CalendarCell {
    /// Leading padding, before the 1st of the month
    Padding,
    Day(DaySummary),
}


/// A month grid, that can be navigated month after month
#[derive(Clone, Debug)]
pub struct CalendarView {
    cursor: MonthCursor,
    /// The day the add form is opened for
    selected_date: Option<NaiveDate>,
    form: ActivityForm,
}

impl CalendarView {
    /// A view that displays the month of `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            cursor: MonthCursor::new(today),
            selected_date: None,
            form: ActivityForm::new(),
        }
    }

    pub fn cursor(&self) -> &MonthCursor {
        &self.cursor
    }

    /// e.g. `April 2024`
    pub fn month_label(&self) -> String {
        self.cursor.label()
    }

    pub fn previous_month(&mut self) {
        self.cursor.previous();
    }

    pub fn next_month(&mut self) {
        self.cursor.next();
    }

    /// The cells of the displayed month
    pub fn cells<S: KeyValueStorage>(&self, store: &ActivityStore<S>, today: NaiveDate) -> Vec<CalendarCell> {
        self.cursor.days().into_iter()
            .map(|cell| match cell {
                None => CalendarCell::Padding,
                Some(date) => {
                    let activities = activities_for_day(store.activities(), date);
                    CalendarCell::Day(DaySummary {
                        date,
                        is_today: date == today,
                        count: activities.len(),
                        preview_titles: activities.iter()
                            .take(PREVIEW_LIMIT)
                            .map(|a| a.title().to_string())
                            .collect(),
                    })
                },
            })
            .collect()
    }

    /// Open the add form for `date`
    pub fn select_day(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
        self.form.open();
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    /// e.g. `Add Activity for 4/1/2024`, when a day has been selected
    pub fn form_heading(&self) -> Option<String> {
        self.selected_date
            .map(|date| format!("Add Activity for {}", format_short_date(date)))
    }

    pub fn form(&self) -> &ActivityForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ActivityForm {
        &mut self.form
    }

    /// Submit the add form, for the selected day.
    /// Returns `None` if no day has been selected, or if the title is empty.
    pub fn submit_form<S: KeyValueStorage>(&mut self, store: &mut ActivityStore<S>) -> Option<ActivityId> {
        let date = self.selected_date?;
        self.form.submit(store, date)
    }
}
