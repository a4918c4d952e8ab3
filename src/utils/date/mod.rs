// Date utility functions
// Weekday ordering helpers keyed on the "0 = Sunday" convention used in settings

use chrono::{NaiveDate, Weekday};

/// Convert a Sunday-based day number (0 = Sunday ... 6 = Saturday) into a
/// weekday. Values past 6 wrap around.
pub fn weekday_from_sunday_index(index: u8) -> Weekday {
    let mut day = Weekday::Sun;
    for _ in 0..(index % 7) {
        day = day.succ();
    }
    day
}

/// Seven consecutive weekdays starting at `first`.
pub fn week_starting_on(first: Weekday) -> [Weekday; 7] {
    let mut days = [first; 7];
    for i in 1..7 {
        days[i] = days[i - 1].succ();
    }
    days
}

/// A fixed date falling on `weekday`, used when a formatter needs a concrete
/// date to render a weekday name.
pub fn reference_date(weekday: Weekday) -> Option<NaiveDate> {
    NaiveDate::from_isoywd_opt(2024, 1, weekday)
}
