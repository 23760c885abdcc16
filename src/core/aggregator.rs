//! Walks a week of raw entries and collapses consecutive Mon–Thu days that
//! share identical hours into one row.

use crate::core::formatter::{TextStyle, format_schedule};
use crate::core::normalizer::to_blocks;
use crate::core::status::{StatusLinks, resolve_today};
use crate::core::tokenizer::{parse_times, split_entry};
use crate::models::{CollapsibleEntry, Location, ScheduleKind, TimeTable, weekday};
use log::debug;

/// Shown for ATMs until the API reports their real schedules.
pub const ATM_ALWAYS_OPEN: &str = "24 hours";

pub struct Aggregator<'a> {
    pub location: &'a Location,
    pub links: StatusLinks<'a>,
    pub style: TextStyle,
    /// Three-letter token of the current weekday
    pub today: &'a str,
}

impl Aggregator<'_> {
    pub fn build(&self, kind: ScheduleKind) -> TimeTable {
        if kind == ScheduleKind::AtmHours && (self.location.is_atm || self.location.has_atm) {
            return self.atm_time_table();
        }

        match self.location.schedule(kind) {
            Some(entries) => entries.iter().fold(TimeTable::default(), |table, entry| {
                self.push_entry(table, entry)
            }),
            None => TimeTable::default(),
        }
    }

    fn atm_time_table(&self) -> TimeTable {
        let today = resolve_today(
            self.location,
            true,
            ATM_ALWAYS_OPEN,
            &[],
            &self.links,
            self.style,
        );

        TimeTable {
            entries: vec![CollapsibleEntry {
                days: vec!["Mon".into(), "Sun".into()],
                schedule: ATM_ALWAYS_OPEN.into(),
            }],
            today: Some(today),
        }
    }

    fn push_entry(&self, mut table: TimeTable, entry: &str) -> TimeTable {
        let raw = split_entry(entry);
        let blocks = to_blocks(&parse_times(&raw.text));

        let formatted = format_schedule(&blocks, self.style);
        let schedule = if formatted.is_empty() {
            raw.text.clone()
        } else {
            formatted
        };

        if schedule.is_empty() {
            debug!("Skipping empty schedule entry {entry:?}");
            return table;
        }

        debug!("Entry {entry:?} → day '{}', schedule '{schedule}'", raw.day);

        let merge = table.entries.last().is_some_and(|prev| {
            prev.schedule == schedule
                && weekday::is_collapsible(&raw.day)
                && weekday::is_collapsible(prev.last_day())
        });

        if let Some(prev) = table.entries.last_mut().filter(|_| merge) {
            prev.days.push(raw.day.clone());
        } else {
            table.entries.push(CollapsibleEntry::new(&raw.day, &schedule));
        }

        // entries without a day prefix always count as today
        if raw.day.is_empty() || raw.day == self.today {
            table.today = Some(resolve_today(
                self.location,
                false,
                &schedule,
                &blocks,
                &self.links,
                self.style,
            ));
        }

        table
    }
}
