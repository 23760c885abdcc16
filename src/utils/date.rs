use chrono::{Datelike, Weekday};

/// Weekday of the local wall clock
pub fn current_weekday() -> Weekday {
    chrono::Local::now().date_naive().weekday()
}
