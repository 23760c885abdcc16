pub mod config;
pub mod export;
pub mod init;
pub mod show;
pub mod timetable;
pub mod today;

use crate::config::Config;
use crate::core::LocationTimeTableParser;
use crate::errors::AppResult;
use crate::models::{Location, ScheduleKind, location, weekday};
use crate::utils::path::expand_tilde;

/// Parser configured from `cfg`, with today optionally pinned via `--today`
pub(crate) fn build_parser(cfg: &Config, today: Option<&str>) -> AppResult<LocationTimeTableParser> {
    let settings = cfg.parser.clone();
    match today {
        Some(day) => Ok(LocationTimeTableParser::with_today(
            settings,
            weekday::parse_weekday(day)?,
        )),
        None => Ok(LocationTimeTableParser::new(settings)),
    }
}

pub(crate) fn load_locations(file: &str) -> AppResult<Vec<Location>> {
    location::load_locations(&expand_tilde(file))
}

/// Requested kinds, or all of them when none was given
pub(crate) fn kinds_or_all(kinds: &[ScheduleKind]) -> Vec<ScheduleKind> {
    if kinds.is_empty() {
        ScheduleKind::ALL.to_vec()
    } else {
        kinds.to_vec()
    }
}
