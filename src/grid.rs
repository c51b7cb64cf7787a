//! Month grids
//!
//! A [`MonthGridBuilder`] turns a [`Month`] into the [`Days`] of a month view: a few days of the previous month
//! so that the first day lands on its weekday column, every day of the month, then a few days of the next month to complete the last row.
//!
//! The activities of the whole grid are fetched with a single query to the [`ActivitySource`], then dispatched to each day.

use std::collections::HashMap;
use std::error::Error;

use chrono::{Duration, NaiveDate, Weekday};

use crate::activity::Activities;
use crate::day::{Day, Days, DAYS_PER_WEEK};
use crate::month::Month;
use crate::traits::{ActivitySource, SearchFilter};
use crate::Activity;


/// The first and last dates (both inclusive) of the grid of a month
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Number of days of the previous month before the first day of the month
    pub leading: u32,
    /// Number of days of the next month after the last day of the month
    pub trailing: u32,
}

impl GridRange {
    /// Compute the grid boundaries of a month, for weeks that begin on `week_start`
    pub fn of(month: &Month, week_start: Weekday) -> Result<Self, Box<dyn Error>> {
        // Padding dates are plain date arithmetic around the month, so the adjacent months never need to be built
        let leading = month.first_weekday(week_start) - 1;
        let week = DAYS_PER_WEEK as u32;
        let trailing = (week - (leading + month.days_in_month()) % week) % week;

        let start = month.first_day().checked_sub_signed(Duration::days(leading.into()))
            .ok_or_else(|| format!("Grid of {} starts before the supported date range", month))?;
        let end = month.last_day().checked_add_signed(Duration::days(trailing.into()))
            .ok_or_else(|| format!("Grid of {} ends after the supported date range", month))?;

        Ok(Self { start, end, leading, trailing })
    }

    /// Total number of cells of this grid
    pub fn len(&self) -> usize {
        // Both bounds are inclusive
        ((self.end - self.start).num_days() + 1) as usize
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}


/// Builds month grids, using activities from a given source
pub struct MonthGridBuilder<S>
where
    S: ActivitySource,
{
    source: S,
    week_start: Weekday,
}

impl<S> MonthGridBuilder<S>
where
    S: ActivitySource,
{
    /// Create a builder that will query `source`.
    /// Weeks begin on [`config::WEEK_START`](crate::config::WEEK_START), unless [`Self::with_week_start`] is used
    pub fn new(source: S) -> Self {
        Self {
            source,
            week_start: crate::config::week_start(),
        }
    }

    /// Use a specific first day of the week
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// Returns the activity source
    pub fn source(&self) -> &S { &self.source }

    pub fn week_start(&self) -> Weekday { self.week_start }

    /// Build the grid of a month.
    ///
    /// This sends exactly one query to the source. Errors from the source are returned as-is.
    pub async fn build(&self, month: &Month) -> Result<Days, Box<dyn Error>> {
        let range = GridRange::of(month, self.week_start)?;
        log::debug!("Grid of {}: from {} to {} ({} leading, {} trailing days)",
            month, range.start, range.end, range.leading, range.trailing);

        let activities = self.source.find_by_date_range(range.start, range.end, &SearchFilter::All).await?;
        log::info!("Retrieved {} activities for {}", activities.len(), month);
        let mut by_date = group_by_date(activities);

        let mut days = Days::with_capacity(range.len());
        for date in range.start.iter_days().take(range.len()) {
            let activities = by_date.remove(&date).unwrap_or_default();
            days.push(Day::new(date, month.contains(date), activities));
        }

        for (date, orphans) in &by_date {
            log::debug!("Ignoring {} activities on {}, which is outside of the grid of {}", orphans.len(), date, month);
        }

        Ok(days)
    }
}


/// Dispatch activities into buckets of the same date. Within a bucket, activities keep their original order
pub fn group_by_date<I>(activities: I) -> HashMap<NaiveDate, Activities>
where
    I: IntoIterator<Item = Activity>,
{
    let mut map: HashMap<NaiveDate, Activities> = HashMap::new();
    for activity in activities {
        map.entry(activity.date())
            .or_default()
            .push(activity);
    }
    map
}
