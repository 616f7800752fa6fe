use chrono::NaiveDate;

use crate::{Activity, ActivityId, ActivityStore};
use crate::date::{filter_by_date, format_display_date};
use crate::traits::KeyValueStorage;
use super::ActivityForm;

/// Shown instead of the checklist when the selected day has no activity
pub const EMPTY_MESSAGE: &str = "No activities planned for this day";

/// One line of the daily checklist
#[derive(Clone, Debug, PartialEq)]
pub struct DailyRow {
    pub id: ActivityId,
    pub title: String,
    /// e.g. `Monday, April 1, 2024`
    pub display_date: String,
    pub description: String,
    pub completed: bool,
}

impl From<&Activity> for DailyRow {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id().clone(),
            title: activity.title().to_string(),
            display_date: format_display_date(activity.date()),
            description: activity.description().to_string(),
            completed: activity.completed(),
        }
    }
}


/// The checklist of a single day
#[derive(Clone, Debug)]
pub struct DailyView {
    selected_date: NaiveDate,
    form: ActivityForm,
}

impl DailyView {
    /// A view on `selected_date` (usually, today)
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            selected_date,
            form: ActivityForm::new(),
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    /// The activities of the selected day, in insertion order
    pub fn activities<'a, S: KeyValueStorage>(&self, store: &'a ActivityStore<S>) -> Vec<&'a Activity> {
        filter_by_date(store.activities(), self.selected_date)
    }

    pub fn rows<S: KeyValueStorage>(&self, store: &ActivityStore<S>) -> Vec<DailyRow> {
        self.activities(store).into_iter()
            .map(DailyRow::from)
            .collect()
    }

    pub fn is_empty<S: KeyValueStorage>(&self, store: &ActivityStore<S>) -> bool {
        self.activities(store).is_empty()
    }

    pub fn toggle_complete<S: KeyValueStorage>(&self, store: &mut ActivityStore<S>, id: &ActivityId) -> bool {
        store.toggle_complete(id)
    }

    pub fn form(&self) -> &ActivityForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ActivityForm {
        &mut self.form
    }

    /// Submit the add form, for the selected day
    pub fn submit_form<S: KeyValueStorage>(&mut self, store: &mut ActivityStore<S>) -> Option<ActivityId> {
        self.form.submit(store, self.selected_date)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn shows_only_the_selected_day() {
        let mut store = ActivityStore::from_storage(MemoryStorage::new());
        store.add("Suhoor", "", ymd(2024, 4, 1));
        store.add("Iftar", "", ymd(2024, 4, 2));
        store.add("Taraweeh", "", ymd(2024, 4, 1));

        let mut view = DailyView::new(ymd(2024, 4, 1));
        let titles: Vec<String> = view.rows(&store).into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Suhoor", "Taraweeh"]);
        assert_eq!(view.rows(&store)[0].display_date, "Monday, April 1, 2024");

        view.select_date(ymd(2024, 4, 3));
        assert!(view.is_empty(&store));
    }

    #[test]
    fn add_and_toggle() {
        let mut store = ActivityStore::from_storage(MemoryStorage::new());
        let mut view = DailyView::new(ymd(2024, 3, 11));

        view.form_mut().open();
        view.form_mut().set_title("Read Al-Fatiha");
        let id = view.submit_form(&mut store).unwrap();
        assert!(!view.form().is_open());

        let rows = view.rows(&store);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].completed, false);

        assert!(view.toggle_complete(&mut store, &id));
        assert_eq!(view.rows(&store)[0].completed, true);
    }
}
