//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;
use chrono::Weekday;

/// The day that opens every week row of a grid.
/// Feel free to override it when initing this library. Builders can also override it with [`MonthGridBuilder::with_week_start`](crate::MonthGridBuilder::with_week_start).
pub static WEEK_START: Lazy<Arc<Mutex<Weekday>>> = Lazy::new(|| Arc::new(Mutex::new(Weekday::Mon)));

/// Returns the current value of [`WEEK_START`]
pub fn week_start() -> Weekday {
    match WEEK_START.lock() {
        Ok(ws) => *ws,
        Err(_) => {
            log::warn!("WEEK_START is poisoned, falling back to Monday");
            Weekday::Mon
        },
    }
}
