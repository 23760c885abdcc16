//! Three-letter weekday tokens as they appear in schedule entries.

use crate::errors::AppError;
use chrono::Weekday;

/// Only this contiguous run may be collapsed into a single row.
pub const COLLAPSIBLE_DAYS: [&str; 4] = ["Mon", "Tue", "Wed", "Thu"];

const DAY_NAMES: [(&str, &str); 7] = [
    ("Mon", "Monday"),
    ("Tue", "Tuesday"),
    ("Wed", "Wednesday"),
    ("Thu", "Thursday"),
    ("Fri", "Friday"),
    ("Sat", "Saturday"),
    ("Sun", "Sunday"),
];

pub fn is_collapsible(day: &str) -> bool {
    COLLAPSIBLE_DAYS.contains(&day)
}

/// "Mon" → "Monday". Unknown tokens have no full name.
pub fn full_name(day: &str) -> Option<&'static str> {
    DAY_NAMES
        .iter()
        .find(|(abbr, _)| *abbr == day)
        .map(|(_, name)| *name)
}

/// chrono prints weekdays with the same three-letter tokens
pub fn token(day: Weekday) -> String {
    day.to_string()
}

/// Accepts "mon", "Monday", "THU"... as used by the `--today` flag
pub fn parse_weekday(s: &str) -> Result<Weekday, AppError> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| AppError::InvalidWeekday(s.to_string()))
}
