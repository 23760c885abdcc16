//! Splits raw weekly entries into day token + schedule text, and pulls clock
//! times out of free text.

use crate::models::{Meridian, TimeOfDay};
use crate::utils::text::{title_case, trim_non_word};
use once_cell::sync::Lazy;
use regex::Regex;

static DAY_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^([a-z]+):").unwrap());

static TIME_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([0-9]?[0-9])(:[0-9][0-9])?\s*([ap]m)?").unwrap());

/// One entry of a weekly schedule after cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Title-cased day token, empty when the entry had no `Day:` prefix
    pub day: String,
    /// Title-cased schedule text without footnote annotations
    pub text: String,
}

/// `"mon: 9:00 AM - 5:00 PM*"` → `{ day: "Mon", text: "9:00 Am - 5:00 Pm" }`
pub fn split_entry(entry: &str) -> RawEntry {
    let (day, rest) = match DAY_PREFIX.captures(entry) {
        Some(caps) => {
            let prefix_len = caps[0].len();
            (title_case(&caps[1]), &entry[prefix_len..])
        }
        None => (String::new(), entry),
    };

    // keep what surrounds a *footnote*, drop the footnote itself
    let mut parts = rest.split('*');
    let head = parts.next().unwrap_or("");
    let tail = parts.last().unwrap_or("");
    let joined = format!("{head}{tail}");

    RawEntry {
        day,
        text: title_case(trim_non_word(&joined)),
    }
}

/// Every clock time in `text`, left to right. Text without digits yields none.
pub fn parse_times(text: &str) -> Vec<TimeOfDay> {
    TIME_TOKEN
        .captures_iter(text)
        .filter_map(|caps| {
            let hour = caps.get(1)?.as_str().parse::<u32>().ok()?;
            let minute = caps
                .get(2)
                .and_then(|m| m.as_str().trim_start_matches(':').parse::<u32>().ok())
                .unwrap_or(0);
            let meridian = caps.get(3).and_then(|m| Meridian::from_marker(m.as_str()));

            Some(TimeOfDay::new(hour, minute, meridian))
        })
        .collect()
}

/// First clock time in `text`, used for live open/close overrides
pub fn parse_single_time(text: Option<&str>) -> Option<TimeOfDay> {
    text.and_then(|t| parse_times(t).into_iter().next())
}
