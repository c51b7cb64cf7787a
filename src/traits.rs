use std::error::Error;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::Activity;

/// Flags to tell which activities should be retrieved
#[derive(Clone, Debug, PartialEq)]
pub enum SearchFilter {
    /// Return all activities
    All,
    /// Return only activities of a given category
    Category(String),
}

impl Default for SearchFilter {
    fn default() -> Self {
        SearchFilter::All
    }
}

impl SearchFilter {
    /// Whether an activity passes this filter
    pub fn matches(&self, activity: &Activity) -> bool {
        match self {
            SearchFilter::All => true,
            SearchFilter::Category(cat) => activity.category() == Some(cat.as_str()),
        }
    }
}

#[async_trait]
pub trait ActivitySource {
    /// Returns the activities whose date is between `start` and `end` (both inclusive), that match `filter`.
    /// This function may be a long process, or can even fail (e.g. in case of a remote server)
    async fn find_by_date_range(&self, start: NaiveDate, end: NaiveDate, filter: &SearchFilter) -> Result<Vec<Activity>, Box<dyn Error>>;
}
