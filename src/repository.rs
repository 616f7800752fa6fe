//! Loading and saving the activity collection
//!
//! This is the only place that knows the storage key and the serialization format.

use std::error::Error;

use crate::Activity;
use crate::traits::KeyValueStorage;

/// The key the whole collection is stored at
pub const STORAGE_KEY: &str = "ramadan-activities";


/// Reads and writes the full activity collection from a [`KeyValueStorage`]
#[derive(Debug)]
pub struct ActivityRepository<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> ActivityRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Read the stored collection.
    ///
    /// This never fails: a missing value, a storage error or a value that is not a JSON array all result in an empty collection. \
    /// Inside a valid array, entries that are not valid activities (e.g. with an empty date) are skipped one by one,
    /// so that they do not take the rest of the collection with them.
    pub fn load(&self) -> Vec<Activity> {
        let raw = match self.storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("Nothing stored at {:?} yet", STORAGE_KEY);
                return Vec::new();
            },
            Err(err) => {
                log::warn!("Unable to read stored activities: {}. Starting with an empty list", err);
                return Vec::new();
            },
        };

        let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("Invalid stored activities: {}. Starting with an empty list", err);
                return Vec::new();
            },
        };

        entries.into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<Activity>(entry) {
                Ok(activity) => Some(activity),
                Err(err) => {
                    log::warn!("Skipping invalid stored activity #{}: {}", index, err);
                    None
                },
            })
            .collect()
    }

    /// Overwrite the stored collection with `activities`
    pub fn save(&mut self, activities: &[Activity]) -> Result<(), Box<dyn Error>> {
        let raw = serde_json::to_string(activities)?;
        self.storage.set_item(STORAGE_KEY, &raw)
    }
}
