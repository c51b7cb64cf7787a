//! This crate builds the day grids of month views.
//!
//! A month view shows every day of a [`Month`], padded with days of the adjacent months so that it is made of whole weeks. \
//! A [`MonthGridBuilder`] computes these [`Days`], and attaches the [`Activity`]s of each of them.
//!
//! Activities come from an [`ActivitySource`](traits::ActivitySource), which is queried once for the whole visible range rather than once per day. \
//! This crate provides a file-backed source in the [`cache`] module.

pub mod traits;

mod month;
pub use month::Month;
mod activity;
pub use activity::{Activity, ActivityId, Activities};
mod day;
pub use day::{Day, Days, DAYS_PER_WEEK};
pub mod grid;
pub use grid::MonthGridBuilder;

pub mod cache;
pub mod mock_behaviour;

pub mod config;
pub mod utils;
