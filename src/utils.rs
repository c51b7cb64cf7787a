//! Some utility functions

use chrono::Datelike;

use crate::day::{Day, Days};
use crate::month::Month;

/// A debug utility that pretty-prints a grid, one week per line
pub fn print_days(days: &Days) {
    if let Some(first) = days.first() {
        let header: Vec<String> = days.iter()
            .take(7)
            .map(|day| format!("{:^5}", day.date().weekday().to_string()))
            .collect();
        println!("{}", header.join(""));
        log::debug!("Grid starts on {}", first.date());
    }

    for week in days.weeks() {
        let line: Vec<String> = week.iter().map(format_cell).collect();
        println!("{}", line.join(""));
    }
}

/// Pretty-prints a grid, then the activities of every day of its month
pub fn print_month(month: &Month, days: &Days) {
    println!("---- {} -----", month);
    print_days(days);

    for day in days.iter().filter(|day| day.activities().is_empty() == false) {
        let marker = if day.is_current_month() { " " } else { "~" };
        println!("  {}{}", marker, day.date());
        for activity in day.activities() {
            println!("      {}\t{}\t{}", activity.start().format("%H:%M"), activity.name(), activity.id());
        }
    }
}

/// ` 12* ` for a day of the month with activities, `(30) ` for a padding day without activities
fn format_cell(day: &Day) -> String {
    let busy = if day.activities().is_empty() { " " } else { "*" };
    if day.is_current_month() {
        format!(" {:>2}{} ", day.number(), busy)
    } else {
        format!("({:>2}){}", day.number(), busy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;
    use crate::activity::Activities;

    #[test]
    fn cells() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 30).unwrap();
        assert_eq!(format_cell(&Day::new(date, false, Activities::new())), "(30) ");
        assert_eq!(format_cell(&Day::new(date, true, Activities::new())), " 30  ");
    }
}
