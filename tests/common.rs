#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::Weekday;
use rtimetable::models::Location;
use rtimetable::{LocationTimeTableParser, ParserSettings, TextStyle};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtt() -> Command {
    cargo_bin_cmd!("rtimetable")
}

/// Path inside the system temp dir, removed if it already exists
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimetable.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Writes `content` to a fresh temp file and returns its path
pub fn temp_file(name: &str, ext: &str, content: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, content).expect("write temp file");
    p
}

/// Templates that expose every placeholder, separated by `|`
pub fn pipe_settings() -> ParserSettings {
    ParserSettings {
        today_schedule_template: "{0}|{1}|{2}".into(),
        time_table_entry_template: "{0}|{1}|{2};".into(),
        status_link_template: String::new(),
        status_labels: BTreeMap::new(),
        text_style: TextStyle::Plain,
    }
}

pub fn with_labels(mut settings: ParserSettings, labels: &[(&str, &str)]) -> ParserSettings {
    settings.status_labels = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    settings
}

pub fn parser_on(settings: ParserSettings, today: Weekday, loc: Location) -> LocationTimeTableParser {
    let mut parser = LocationTimeTableParser::with_today(settings, today);
    parser.set_location(loc);
    parser
}

pub fn branch_with_lobby(lobby: &[&str]) -> Location {
    Location {
        location_name: "Main Street".into(),
        location_type: Some("Branch".into()),
        lobby_hours: Some(lobby.iter().map(|s| s.to_string()).collect()),
        ..Default::default()
    }
    .scrub()
}

pub fn standard_week() -> Vec<&'static str> {
    vec![
        "Mon: 9:00 am - 5:00 pm",
        "Tue: 9:00 am - 5:00 pm",
        "Wed: 9:00 am - 5:00 pm",
        "Thu: 9:00 am - 5:00 pm",
        "Fri: 9:00 am - 5:00 pm",
        "Sat: 9:00 am - 12:00 pm",
        "Sun: Closed",
    ]
}

pub const SAMPLE_LOCATIONS: &str = r#"[
  {
    "locationName": "MAIN STREET",
    "locationType": "Branch",
    "branchStatus": "open",
    "atmDetail": [
      { "atmOpenClosedInd": "O", "atmServiceAvailable": "D" }
    ],
    "lobbyHours": [
      "Mon: 9:00 am - 5:00 pm",
      "Tue: 9:00 am - 5:00 pm",
      "Wed: 9:00 am - 5:00 pm",
      "Thu: 9:00 am - 5:00 pm",
      "Fri: 9:00 am - 6:00 pm",
      "Sat: 9:00 am - 12:00 pm*by appointment*",
      "Sun: Closed"
    ]
  },
  {
    "locationName": "airport terminal b",
    "locationType": "ATM",
    "atmDetail": [
      { "atmOpenClosedInd": "C" }
    ]
  }
]"#;
