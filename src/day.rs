//! Grid cells

use serde::ser::{Serialize, SerializeStruct, Serializer};
use chrono::{Datelike, NaiveDate};

use crate::activity::Activities;

/// Number of days in a grid row
pub const DAYS_PER_WEEK: usize = 7;

/// A cell of a month grid
#[derive(Clone, Debug, PartialEq)]
pub struct Day {
    date: NaiveDate,
    /// Whether this day belongs to the displayed month, or is a padding day from an adjacent month
    current_month: bool,
    activities: Activities,
}

impl Day {
    pub fn new(date: NaiveDate, current_month: bool, activities: Activities) -> Self {
        Self {
            date,
            current_month,
            activities,
        }
    }

    /// The day of month (1 to 31)
    pub fn number(&self) -> u32                { self.date.day() }
    pub fn date(&self) -> NaiveDate            { self.date }
    pub fn is_current_month(&self) -> bool     { self.current_month }
    pub fn activities(&self) -> &Activities    { &self.activities }
}

/// Also exposes the day of month as `number`, for rendering layers
impl Serialize for Day {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Day", 4)?;
        state.serialize_field("number", &self.number())?;
        state.serialize_field("date", &self.date)?;
        state.serialize_field("current_month", &self.current_month)?;
        state.serialize_field("activities", &self.activities)?;
        state.end()
    }
}


/// The ordered cells of a month grid.
///
/// Once returned by a [`MonthGridBuilder`](crate::MonthGridBuilder), its length is always a multiple of [`DAYS_PER_WEEK`]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Days {
    days: Vec<Day>,
}

impl Days {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { days: Vec::with_capacity(capacity) }
    }

    pub(crate) fn push(&mut self, day: Day) {
        self.days.push(day);
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Day> {
        self.days.iter()
    }

    pub fn as_slice(&self) -> &[Day] {
        &self.days
    }

    pub fn first(&self) -> Option<&Day> {
        self.days.first()
    }

    pub fn last(&self) -> Option<&Day> {
        self.days.last()
    }

    /// The grid, split into rows of [`DAYS_PER_WEEK`] days
    pub fn weeks(&self) -> std::slice::Chunks<'_, Day> {
        self.days.chunks(DAYS_PER_WEEK)
    }

    /// Only the days of the displayed month, without padding
    pub fn current_month_days(&self) -> impl Iterator<Item = &Day> {
        self.days.iter().filter(|day| day.is_current_month())
    }

    /// Number of padding days before the first day of the displayed month
    pub fn leading_count(&self) -> usize {
        self.days.iter()
            .take_while(|day| day.is_current_month() == false)
            .count()
    }

    /// Number of padding days after the last day of the displayed month
    pub fn trailing_count(&self) -> usize {
        self.days.iter().rev()
            .take_while(|day| day.is_current_month() == false)
            .count()
    }

    /// Total number of activities attached to this grid
    pub fn activity_count(&self) -> usize {
        self.days.iter()
            .map(|day| day.activities().len())
            .sum()
    }

    /// The cell of a given date, if it is part of this grid
    pub fn get(&self, date: NaiveDate) -> Option<&Day> {
        self.days.iter().find(|day| day.date() == date)
    }
}

impl<'a> IntoIterator for &'a Days {
    type Item = &'a Day;
    type IntoIter = std::slice::Iter<'a, Day>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn padding_counts() {
        let mut days = Days::default();
        days.push(Day::new(date(2024, 1, 31), false, Activities::new()));
        days.push(Day::new(date(2024, 2, 1), true, Activities::new()));
        days.push(Day::new(date(2024, 2, 2), true, Activities::new()));
        days.push(Day::new(date(2024, 3, 1), false, Activities::new()));
        days.push(Day::new(date(2024, 3, 2), false, Activities::new()));

        assert_eq!(days.leading_count(), 1);
        assert_eq!(days.trailing_count(), 2);
        assert_eq!(days.current_month_days().map(|d| d.number()).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(days.get(date(2024, 3, 2)).map(|d| d.number()), Some(2));
        assert!(days.get(date(2024, 3, 3)).is_none());
    }

    #[test]
    fn serialize_day() {
        let day = Day::new(date(2024, 2, 29), true, Activities::new());
        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(json["number"], 29);
        assert_eq!(json["date"], "2024-02-29");
        assert_eq!(json["current_month"], true);
        assert!(json["activities"].as_array().unwrap().is_empty());
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn number_follows_date() {
        let day = Day::new(date(2023, 12, 31), false, Activities::new());
        assert_eq!(day.number(), 31);
        assert_eq!(day.date().day(), day.number());
    }
}
