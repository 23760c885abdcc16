// src/export/model.rs

use crate::core::LocationTimeTableParser;
use crate::core::formatter::day_labels;
use crate::models::{Location, ScheduleKind};
use serde::Serialize;

/// Flat row: one weekly timetable row of one schedule kind of one location.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TimeTableExport {
    pub location: String,
    pub kind: String,
    pub days: String,
    pub sr_days: String,
    pub schedule: String,
    /// Today's (possibly status-adjusted) text, repeated on every row of the kind
    pub today: String,
    pub today_class: String,
}

/// Rows for every location and kind, in input order.
pub(crate) fn collect_rows(
    parser: &mut LocationTimeTableParser,
    locations: &[Location],
    kinds: &[ScheduleKind],
) -> Vec<TimeTableExport> {
    let style = parser.settings().text_style;
    let mut rows = Vec::new();

    for loc in locations {
        parser.set_location(loc.clone());

        for kind in kinds {
            let table = parser.time_table(*kind);
            let (today, today_class) = table
                .today
                .as_ref()
                .map(|t| (t.markup.clone(), t.css_flag.css_class().to_string()))
                .unwrap_or_default();

            for entry in &table.entries {
                let (days, sr_days) = day_labels(entry, style);
                rows.push(TimeTableExport {
                    location: loc.display_name.clone(),
                    kind: kind.key().to_string(),
                    days: days.trim_end_matches(':').to_string(),
                    sr_days: sr_days.trim_end_matches(':').to_string(),
                    schedule: entry.schedule.clone(),
                    today: today.clone(),
                    today_class: today_class.clone(),
                });
            }
        }
    }

    rows
}
