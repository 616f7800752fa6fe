//! The activity collection, and the operations that change it
//!
//! [`add`] and [`toggle_complete`] are pure: they return a new collection and never touch storage. \
//! An [`ActivityStore`] wraps them, so that a single in-memory collection is shared by every view,
//! persisted once per change, and observed through a [`FeedbackReceiver`].

use chrono::NaiveDate;

use crate::{Activity, ActivityId};
use crate::repository::ActivityRepository;
use crate::traits::KeyValueStorage;

pub mod feedback;
use feedback::{feedback_channel, FeedbackReceiver, FeedbackSender, StoreEvent};

/// Returns `activities` with a new, uncompleted activity appended.
///
/// An exactly empty `title` is rejected, and `activities` is returned unchanged.
/// Titles are not trimmed, so a title made of spaces only is accepted.
pub fn add(activities: &[Activity], title: &str, description: &str, date: NaiveDate) -> Vec<Activity> {
    let mut result = activities.to_vec();
    if title.is_empty() {
        log::debug!("Ignoring an activity with an empty title");
        return result;
    }
    result.push(Activity::new(title.to_string(), description.to_string(), date));
    result
}

/// Returns `activities` where the completion status of the activity `id` is flipped.
///
/// Every other activity is unchanged. This is a no-op when no activity has this id.
pub fn toggle_complete(activities: &[Activity], id: &ActivityId) -> Vec<Activity> {
    activities.iter()
        .map(|activity| {
            let mut activity = activity.clone();
            if activity.id() == id {
                activity.toggle_completion();
            }
            activity
        })
        .collect()
}



/// The single in-memory copy of the activity collection
///
/// Every effective change is saved to the repository right away, then announced to subscribers. \
/// Changes that do nothing (an empty title, an unknown id) are neither saved nor announced.
#[derive(Debug)]
pub struct ActivityStore<S: KeyValueStorage> {
    repository: ActivityRepository<S>,
    activities: Vec<Activity>,
    feedback: FeedbackSender,
}

impl<S: KeyValueStorage> ActivityStore<S> {
    /// Create a store, initialized with what the repository currently holds
    pub fn load(repository: ActivityRepository<S>) -> Self {
        let activities = repository.load();
        log::info!("Loaded {} activities", activities.len());
        let (feedback, _) = feedback_channel(StoreEvent::Loaded{ count: activities.len() });
        Self { repository, activities, feedback }
    }

    /// Create a store on top of a storage, using the default [`ActivityRepository`]
    pub fn from_storage(storage: S) -> Self {
        Self::load(ActivityRepository::new(storage))
    }

    /// Every activity, in insertion order
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn get(&self, id: &ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.id() == id)
    }

    pub fn repository(&self) -> &ActivityRepository<S> {
        &self.repository
    }

    /// Get notified of every subsequent change
    pub fn subscribe(&self) -> FeedbackReceiver {
        self.feedback.subscribe()
    }

    /// Add an activity, and return its id.
    /// Returns `None` when the title is empty, in which case nothing changes.
    pub fn add(&mut self, title: &str, description: &str, date: NaiveDate) -> Option<ActivityId> {
        let updated = add(&self.activities, title, description, date);
        if updated.len() == self.activities.len() {
            return None;
        }

        let id = updated.last()?.id().clone();
        self.commit(updated, StoreEvent::Added{ id: id.clone(), date });
        Some(id)
    }

    /// Flip the completion status of an activity.
    /// Returns `false` when there is no activity with this id.
    pub fn toggle_complete(&mut self, id: &ActivityId) -> bool {
        let completed = match self.get(id) {
            None => {
                log::debug!("No activity {} to toggle", id);
                return false;
            },
            Some(activity) => !activity.completed(),
        };

        let updated = toggle_complete(&self.activities, id);
        self.commit(updated, StoreEvent::Toggled{ id: id.clone(), completed });
        true
    }

    fn commit(&mut self, activities: Vec<Activity>, event: StoreEvent) {
        self.activities = activities;

        if let Err(err) = self.repository.save(&self.activities) {
            log::warn!("Unable to save activities: {}", err);
        }

        log::debug!("{}", event);
        self.feedback.send_replace(event);
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Activity> {
        let day = ymd(2024, 3, 11);
        vec![
            Activity::new_with_parameters(ActivityId::from("a"), day, "Suhoor".to_string(), String::new(), false),
            Activity::new_with_parameters(ActivityId::from("b"), day, "Fajr".to_string(), String::new(), true),
            Activity::new_with_parameters(ActivityId::from("c"), ymd(2024, 3, 12), "Iftar".to_string(), String::new(), false),
        ]
    }

    #[test]
    fn add_with_empty_title_is_a_no_op() {
        let activities = sample();
        assert_eq!(add(&activities, "", "whatever", ymd(2024, 3, 11)), activities);
        assert!(add(&[], "", "", ymd(2024, 3, 11)).is_empty());
    }

    #[test]
    fn add_appends_an_uncompleted_activity() {
        let activities = sample();
        let updated = add(&activities, "Taraweeh", "at the mosque", ymd(2024, 3, 11));
        assert_eq!(updated.len(), activities.len() + 1);
        assert_eq!(&updated[..activities.len()], &activities[..]);

        let new = updated.last().unwrap();
        assert_eq!(new.completed(), false);
        assert_eq!(new.title(), "Taraweeh");
        assert_eq!(new.description(), "at the mosque");
        assert_eq!(new.date(), ymd(2024, 3, 11));
    }

    #[test]
    fn whitespace_titles_are_accepted() {
        let updated = add(&[], "   ", "", ymd(2024, 3, 11));
        assert_eq!(updated.len(), 1);
    }

    #[test]
    fn toggle_only_touches_the_matching_activity() {
        let activities = sample();
        let updated = toggle_complete(&activities, &ActivityId::from("a"));
        assert_eq!(updated[0].completed(), true);
        assert_eq!(updated[1], activities[1]);
        assert_eq!(updated[2], activities[2]);
    }

    #[test]
    fn double_toggle_is_identity() {
        let activities = sample();
        for activity in &activities {
            let id = activity.id();
            assert_eq!(toggle_complete(&toggle_complete(&activities, id), id), activities);
        }
    }

    #[test]
    fn toggle_unknown_id_is_a_no_op() {
        let activities = sample();
        assert_eq!(toggle_complete(&activities, &ActivityId::from("zzz")), activities);
    }

    #[test]
    fn store_persists_every_change() {
        let mut store = ActivityStore::from_storage(MemoryStorage::new());
        let id = store.add("Quran", "", ymd(2024, 3, 11)).unwrap();
        assert_eq!(store.repository().load(), store.activities());

        assert!(store.toggle_complete(&id));
        assert_eq!(store.repository().load(), store.activities());
        assert!(store.get(&id).unwrap().completed());
    }

    #[test]
    fn store_rejections() {
        let mut store = ActivityStore::from_storage(MemoryStorage::new());
        assert_eq!(store.add("", "desc", ymd(2024, 3, 11)), None);
        assert_eq!(store.toggle_complete(&ActivityId::from("missing")), false);
        assert!(store.activities().is_empty());
        // nothing was ever written
        assert_eq!(store.repository().storage().get_item(crate::repository::STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn subscribers_see_effective_changes_only() {
        let mut store = ActivityStore::from_storage(MemoryStorage::new());
        let mut receiver = store.subscribe();
        assert_eq!(receiver.has_changed().unwrap(), false);

        store.add("", "", ymd(2024, 3, 11));
        assert_eq!(receiver.has_changed().unwrap(), false);

        let id = store.add("Dhikr", "", ymd(2024, 3, 11)).unwrap();
        assert_eq!(receiver.has_changed().unwrap(), true);
        assert_eq!(*receiver.borrow_and_update(), StoreEvent::Added{ id: id.clone(), date: ymd(2024, 3, 11) });

        store.toggle_complete(&id);
        assert_eq!(*receiver.borrow_and_update(), StoreEvent::Toggled{ id, completed: true });
        assert_eq!(receiver.has_changed().unwrap(), false);
    }
}
