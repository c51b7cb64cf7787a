//! Scheduled activities

use std::fmt::{Display, Formatter};
use std::iter::FromIterator;

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};


/// The identifier of an [`Activity`]
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId {
    content: String,
}
impl ActivityId {
    /// Generate a random ActivityId.
    pub fn random() -> Self {
        let random = uuid::Uuid::new_v4().to_hyphenated().to_string();
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
impl Display for ActivityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}


/// Something scheduled on a given day
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    id: ActivityId,
    name: String,
    /// When this activity starts. Grids place it on the UTC date of this timestamp
    start: DateTime<Utc>,
    /// An optional category, that can be used in a [`SearchFilter`](crate::traits::SearchFilter)
    #[serde(default)]
    category: Option<String>,
}

impl Activity {
    /// Create a brand new activity, with a random ID
    pub fn new(name: String, start: DateTime<Utc>) -> Self {
        Self::new_with_parameters(ActivityId::random(), name, start, None)
    }

    pub fn new_with_parameters(id: ActivityId, name: String, start: DateTime<Utc>, category: Option<String>) -> Self {
        Self { id, name, start, category }
    }

    pub fn id(&self) -> &ActivityId       { &self.id }
    pub fn name(&self) -> &str            { &self.name }
    pub fn start(&self) -> &DateTime<Utc> { &self.start }
    pub fn category(&self) -> Option<&str> { self.category.as_deref() }

    /// The calendar date this activity falls on
    pub fn date(&self) -> NaiveDate {
        self.start.date_naive()
    }
}


/// The ordered list of activities of a given day
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Activities {
    activities: Vec<Activity>,
}

impl Activities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an activity, after the ones that are already there
    pub fn push(&mut self, activity: Activity) {
        self.activities.push(activity);
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.activities.iter()
    }

    pub fn as_slice(&self) -> &[Activity] {
        &self.activities
    }
}

impl FromIterator<Activity> for Activities {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        Self { activities: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Activities {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.iter()
    }
}

impl IntoIterator for Activities {
    type Item = Activity;
    type IntoIter = std::vec::IntoIter<Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.into_iter()
    }
}
