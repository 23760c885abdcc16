use crate::core::aggregator::Aggregator;
use crate::core::formatter::{self, TextStyle};
use crate::core::status::StatusLinks;
use crate::models::{Location, ScheduleKind, TimeTable, TodaySchedule, weekday};
use crate::utils::date;
use chrono::Weekday;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Templates and status labels supplied by the rendering side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserSettings {
    /// `{0}` css class, `{1}` label, `{2}` schedule
    #[serde(default = "default_today_template")]
    pub today_schedule_template: String,
    /// `{0}` day label, `{1}` screen-reader day label, `{2}` schedule
    #[serde(default = "default_entry_template")]
    pub time_table_entry_template: String,
    /// `{0}` location display name, `{1}` status label text
    #[serde(default = "default_status_link_template")]
    pub status_link_template: String,
    /// `atm-<flags>` / `branch-<status>` → label text
    #[serde(default = "default_status_labels")]
    pub status_labels: BTreeMap<String, String>,
    #[serde(default)]
    pub text_style: TextStyle,
}

fn default_today_template() -> String {
    "{1}: {2}\n".to_string()
}
fn default_entry_template() -> String {
    "  {0} {2}\n".to_string()
}
fn default_status_link_template() -> String {
    "{1}".to_string()
}
fn default_status_labels() -> BTreeMap<String, String> {
    [
        ("branch-closed", "Closed today"),
        ("branch-closed-early", "Closing early today"),
        ("branch-delayed-opening", "Opening late today"),
        ("branch-holiday", "Closed for the holiday"),
        ("atm-C", "ATM temporarily unavailable"),
        ("atm-D", "ATM open, deposits only"),
        ("atm-W", "ATM open, withdrawals only"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            today_schedule_template: default_today_template(),
            time_table_entry_template: default_entry_template(),
            status_link_template: default_status_link_template(),
            status_labels: default_status_labels(),
            text_style: TextStyle::default(),
        }
    }
}

/// Formats the weekly schedules of one location at a time.
///
/// Results are cached per schedule kind until the next `set_location`.
pub struct LocationTimeTableParser {
    settings: ParserSettings,
    today: Weekday,
    location: Location,
    time_tables: HashMap<ScheduleKind, TimeTable>,
}

impl LocationTimeTableParser {
    pub fn new(settings: ParserSettings) -> Self {
        Self::with_today(settings, date::current_weekday())
    }

    /// Same as `new`, with "today" pinned to the given weekday
    pub fn with_today(settings: ParserSettings, today: Weekday) -> Self {
        Self {
            settings,
            today,
            location: Location::default(),
            time_tables: HashMap::new(),
        }
    }

    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    pub fn set_location(&mut self, location: Location) {
        debug!("Binding parser to '{}'", location.display_name);
        self.location = location;
        self.time_tables.clear();
    }

    /// Structured timetable for `kind`, computed once per location
    pub fn time_table(&mut self, kind: ScheduleKind) -> &TimeTable {
        if !self.time_tables.contains_key(&kind) {
            let today = weekday::token(self.today);
            let aggregator = Aggregator {
                location: &self.location,
                links: StatusLinks {
                    labels: &self.settings.status_labels,
                    template: &self.settings.status_link_template,
                    display_name: &self.location.display_name,
                },
                style: self.settings.text_style,
                today: &today,
            };
            let table = aggregator.build(kind);
            self.time_tables.insert(kind, table);
        } else {
            debug!("Cached timetable hit for {kind}");
        }

        &self.time_tables[&kind]
    }

    pub fn today_schedule(&mut self, kind: ScheduleKind) -> Option<TodaySchedule> {
        self.time_table(kind).today.clone()
    }

    /// Today's row rendered through the today template, or "" if there is none
    pub fn get_today_schedule_markup(&mut self, kind: ScheduleKind, label: &str) -> String {
        let template = self.settings.today_schedule_template.clone();
        self.time_table(kind)
            .today
            .as_ref()
            .map(|today| formatter::format_today(&template, today, label))
            .unwrap_or_default()
    }

    /// All weekly rows rendered through the entry template, concatenated
    pub fn get_time_table_markup(&mut self, kind: ScheduleKind) -> String {
        let template = self.settings.time_table_entry_template.clone();
        let style = self.settings.text_style;
        self.time_table(kind)
            .entries
            .iter()
            .map(|entry| formatter::format_entry(&template, entry, style))
            .collect()
    }
}
