use chrono::NaiveDate;

use crate::{ActivityId, ActivityStore};
use crate::traits::KeyValueStorage;

/// The state of an "add activity" dialog
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityForm {
    is_open: bool,
    title: String,
    description: String,
}

impl ActivityForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool      { self.is_open      }
    pub fn title(&self) -> &str        { &self.title       }
    pub fn description(&self) -> &str  { &self.description }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Close the dialog. Whatever has been typed is kept for the next time it opens.
    pub fn cancel(&mut self) {
        self.is_open = false;
    }

    pub fn set_title<T: ToString>(&mut self, title: T) {
        self.title = title.to_string();
    }

    pub fn set_description<T: ToString>(&mut self, description: T) {
        self.description = description.to_string();
    }

    /// Add the activity the form describes on `date`.
    ///
    /// With an empty title, nothing is added and the form stays open. \
    /// Otherwise, the fields are cleared and the form closes.
    pub fn submit<S: KeyValueStorage>(&mut self, store: &mut ActivityStore<S>, date: NaiveDate) -> Option<ActivityId> {
        let id = store.add(&self.title, &self.description, date)?;
        self.title.clear();
        self.description.clear();
        self.is_open = false;
        Some(id)
    }
}
