//! Planned activities

use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use chrono::NaiveDate;
use uuid::Uuid;


/// The identifier of an [`Activity`]
///
/// New activities get a random UUID. Identifiers read from storage are kept as-is, whatever their shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActivityId {
    content: String,
}

impl ActivityId {
    /// Generate a random ActivityId.
    pub fn random() -> Self {
        let random = Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<String> for ActivityId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for ActivityId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}
impl FromStr for ActivityId {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Display for ActivityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for ActivityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for ActivityId {
    fn deserialize<D>(deserializer: D) -> Result<ActivityId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let content = String::deserialize(deserializer)?;
        Ok(ActivityId{ content })
    }
}



/// Something the user plans to do on a given day
///
/// The serialized form is `{"id", "date": "YYYY-MM-DD", "title", "description", "completed"}`.
/// `description` and `completed` may be missing from stored data; they default to an empty string and `false`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Immutable once the activity is created
    id: ActivityId,

    /// The day this activity belongs to. This has no time zone.
    date: NaiveDate,

    /// The display name of the activity
    title: String,

    #[serde(default)]
    description: String,

    #[serde(default)]
    completed: bool,
}

impl Activity {
    /// Create a brand new, uncompleted activity.
    /// This will pick a new (random) ID.
    pub fn new(title: String, description: String, date: NaiveDate) -> Self {
        Self::new_with_parameters(ActivityId::random(), date, title, description, false)
    }

    /// Create an activity with every field given, e.g. for one that has been stored already
    pub fn new_with_parameters(id: ActivityId, date: NaiveDate, title: String, description: String, completed: bool) -> Self {
        Self {
            id,
            date,
            title,
            description,
            completed,
        }
    }

    pub fn id(&self) -> &ActivityId     { &self.id          }
    pub fn date(&self) -> NaiveDate     { self.date         }
    pub fn title(&self) -> &str         { &self.title       }
    pub fn description(&self) -> &str   { &self.description }
    pub fn completed(&self) -> bool     { self.completed    }

    /// Flip the completion flag
    pub fn toggle_completion(&mut self) {
        self.completed = !self.completed;
    }
}
