//! Utilities to tell subscribers that the activity collection has changed

use std::fmt::{Display, Error, Formatter};

use chrono::NaiveDate;

use crate::ActivityId;

/// The last change that happened to an [`ActivityStore`](super::ActivityStore)
#[derive(Clone, Debug, PartialEq)]
pub enum StoreEvent {
    /// The collection has just been read from storage
    Loaded{ count: usize },
    /// A new activity has been added
    Added{ id: ActivityId, date: NaiveDate },
    /// The completion status of an activity has been flipped
    Toggled{ id: ActivityId, completed: bool },
}

impl Display for StoreEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            StoreEvent::Loaded{count} => write!(f, "Loaded {} activities", count),
            StoreEvent::Added{id, date} => write!(f, "Added {} on {}", id, date),
            StoreEvent::Toggled{id, completed} => match completed {
                true => write!(f, "Completed {}", id),
                false => write!(f, "Reopened {}", id),
            }
        }
    }
}



/// See [`feedback_channel`]
pub type FeedbackSender = tokio::sync::watch::Sender<StoreEvent>;
/// See [`feedback_channel`]
pub type FeedbackReceiver = tokio::sync::watch::Receiver<StoreEvent>;

/// Create a feedback channel, that subscribers use to learn the collection has changed
pub fn feedback_channel(initial: StoreEvent) -> (FeedbackSender, FeedbackReceiver) {
    tokio::sync::watch::channel(initial)
}
