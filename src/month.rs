//! Calendar months

use std::convert::TryFrom;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Extra days a grid may reach before the first day or after the last day of its month
const MAX_PADDING_DAYS: i64 = 6;

/// A calendar month (e.g. February 2024)
///
/// A `Month` can only be built if its whole grid (the month plus up to a week of padding on each side) is a representable date range.
/// This means that computing grid boundaries for a valid `Month` never fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Month {
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl Month {
    /// Create a month from a year and a 1-based month number
    pub fn new(year: i32, month: u32) -> Result<Self, Box<dyn Error>> {
        if month < 1 || month > 12 {
            return Err(format!("Invalid month number {} (expected 1 to 12)", month).into());
        }

        let first_day = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| format!("Year {} is out of the supported range", year))?;
        // Months have at least 28 days, the first existing candidate is the last day
        let last_day = (28..=31).rev()
            .find_map(|day| NaiveDate::from_ymd_opt(year, month, day))
            .ok_or_else(|| format!("Unable to find the last day of {}-{:02}", year, month))?;

        let padding = Duration::days(MAX_PADDING_DAYS);
        if first_day.checked_sub_signed(padding).is_none() || last_day.checked_add_signed(padding).is_none() {
            return Err(format!("{}-{:02} is too close to the limits of the supported date range", year, month).into());
        }

        Ok(Self { first_day, last_day })
    }

    /// The month a given date belongs to
    pub fn containing(date: NaiveDate) -> Result<Self, Box<dyn Error>> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32          { self.first_day.year() }
    pub fn month(&self) -> u32         { self.first_day.month() }
    pub fn first_day(&self) -> NaiveDate { self.first_day }
    pub fn last_day(&self) -> NaiveDate  { self.last_day }

    /// Number of days in this month (28 to 31)
    pub fn days_in_month(&self) -> u32 {
        self.last_day.day()
    }

    /// Whether a date is part of this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day <= date && date <= self.last_day
    }

    /// The column (from 1 to 7) of the first day of this month, in weeks that begin on `week_start`.
    ///
    /// `1` means the month starts right on the first column.
    pub fn first_weekday(&self, week_start: Weekday) -> u32 {
        let first = self.first_day.weekday().num_days_from_monday();
        let start = week_start.num_days_from_monday();
        (7 + first - start) % 7 + 1
    }

    /// The month before this one
    pub fn previous(&self) -> Result<Self, Box<dyn Error>> {
        match self.month() {
            1 => Self::new(self.year() - 1, 12),
            m => Self::new(self.year(), m - 1),
        }
    }

    /// The month after this one
    pub fn next(&self) -> Result<Self, Box<dyn Error>> {
        match self.month() {
            12 => Self::new(self.year() + 1, 1),
            m => Self::new(self.year(), m + 1),
        }
    }
}

impl TryFrom<NaiveDate> for Month {
    type Error = Box<dyn Error>;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::containing(date)
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}-{:02}", self.year(), self.month())
    }
}

/// Parses `YYYY-MM`
impl FromStr for Month {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s.trim().rsplit_once('-')
            .ok_or_else(|| format!("Invalid month '{}'. Expected YYYY-MM", s))?;
        let year: i32 = year.parse()
            .map_err(|err| format!("Invalid year in '{}': {}", s, err))?;
        let month: u32 = month.parse()
            .map_err(|err| format!("Invalid month in '{}': {}", s, err))?;
        Self::new(year, month)
    }
}
