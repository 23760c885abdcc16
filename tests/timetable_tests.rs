use chrono::Weekday;
use rtimetable::models::{AtmDetail, BranchStatusDetail, CssFlag, Location, ScheduleKind};
use rtimetable::{LocationTimeTableParser, TextStyle};

mod common;
use common::{branch_with_lobby, parser_on, pipe_settings, standard_week, with_labels};

const LOBBY: ScheduleKind = ScheduleKind::LobbyHours;
const ATM: ScheduleKind = ScheduleKind::AtmHours;

#[test]
fn test_mon_to_thu_collapse_into_one_row() {
    let mut p = parser_on(pipe_settings(), Weekday::Wed, branch_with_lobby(&standard_week()));

    let table = p.time_table(LOBBY).clone();
    assert_eq!(table.entries.len(), 4);
    assert_eq!(table.entries[0].days, vec!["Mon", "Tue", "Wed", "Thu"]);
    assert_eq!(table.entries[0].schedule, "9 am – 5 pm");

    assert_eq!(
        p.get_time_table_markup(LOBBY),
        "Mon–Thu:|Monday to Thursday:|9 am – 5 pm;\
         Fri:|Friday:|9 am – 5 pm;\
         Sat:|Saturday:|9 am – 12 pm;\
         Sun:|Sunday:|Closed;"
    );
}

#[test]
fn test_thu_and_fri_never_merge() {
    let mut p = parser_on(
        pipe_settings(),
        Weekday::Mon,
        branch_with_lobby(&["Thu: 9-5", "Fri: 9-5"]),
    );

    let entries = p.time_table(LOBBY).entries.clone();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].days, vec!["Thu"]);
    assert_eq!(entries[1].days, vec!["Fri"]);
}

#[test]
fn test_weekend_days_never_merge() {
    let mut p = parser_on(
        pipe_settings(),
        Weekday::Mon,
        branch_with_lobby(&["Sat: Closed", "Sun: Closed"]),
    );

    assert_eq!(p.time_table(LOBBY).entries.len(), 2);
}

#[test]
fn test_only_the_previous_row_is_compared() {
    let mut p = parser_on(
        pipe_settings(),
        Weekday::Mon,
        branch_with_lobby(&["Mon: 9-5", "Tue: 10-5", "Wed: 9-5"]),
    );

    let days: Vec<Vec<String>> = p
        .time_table(LOBBY)
        .entries
        .iter()
        .map(|e| e.days.clone())
        .collect();
    assert_eq!(days, vec![vec!["Mon"], vec!["Tue"], vec!["Wed"]]);
}

#[test]
fn test_two_day_row_uses_first_and_last_day() {
    let mut p = parser_on(
        pipe_settings(),
        Weekday::Sun,
        branch_with_lobby(&["Mon: 9-5", "Tue: 9-5", "Fri: 9-6"]),
    );

    assert_eq!(
        p.get_time_table_markup(LOBBY),
        "Mon–Tue:|Monday to Tuesday:|9 am – 5 pm;Fri:|Friday:|9 am – 6 pm;"
    );
}

#[test]
fn test_today_row_for_current_weekday() {
    let mut p = parser_on(pipe_settings(), Weekday::Wed, branch_with_lobby(&standard_week()));
    assert_eq!(
        p.get_today_schedule_markup(LOBBY, "Today"),
        "|Today|9 am – 5 pm"
    );

    let mut p = parser_on(pipe_settings(), Weekday::Sun, branch_with_lobby(&standard_week()));
    assert_eq!(p.get_today_schedule_markup(LOBBY, "Today"), "|Today|Closed");
}

#[test]
fn test_today_label_is_applied_per_call() {
    let mut p = parser_on(pipe_settings(), Weekday::Sat, branch_with_lobby(&standard_week()));

    assert!(!p.get_time_table_markup(LOBBY).is_empty());
    assert_eq!(p.get_today_schedule_markup(LOBBY, ""), "||9 am – 12 pm");
    assert_eq!(p.get_today_schedule_markup(LOBBY, "Now"), "|Now|9 am – 12 pm");
}

#[test]
fn test_no_today_row_when_weekday_missing_from_table() {
    let mut p = parser_on(
        pipe_settings(),
        Weekday::Fri,
        branch_with_lobby(&["Mon: 9-5", "Tue: 9-5"]),
    );

    assert_eq!(p.get_today_schedule_markup(LOBBY, "Today"), "");
    assert!(!p.get_time_table_markup(LOBBY).is_empty());
}

#[test]
fn test_entry_without_day_counts_as_today() {
    let loc = Location {
        atm_hours: Some(vec!["24 hours".into()]),
        ..Default::default()
    };
    let mut p = parser_on(pipe_settings(), Weekday::Tue, loc);

    assert_eq!(p.get_time_table_markup(ATM), "||24 Hours;");
    assert_eq!(p.get_today_schedule_markup(ATM, "Today"), "|Today|24 Hours");
}

#[test]
fn test_empty_schedule_kind_renders_nothing() {
    let mut p = parser_on(pipe_settings(), Weekday::Mon, branch_with_lobby(&standard_week()));

    assert_eq!(p.get_time_table_markup(ATM), "");
    assert_eq!(p.get_today_schedule_markup(ATM, "Today"), "");
    assert_eq!(p.get_time_table_markup(ScheduleKind::DriveThruHours), "");

    let mut p = parser_on(pipe_settings(), Weekday::Mon, branch_with_lobby(&[]));
    assert_eq!(p.get_time_table_markup(LOBBY), "");
    assert_eq!(p.get_today_schedule_markup(LOBBY, "Today"), "");
}

#[test]
fn test_blank_entries_are_skipped() {
    let mut p = parser_on(
        pipe_settings(),
        Weekday::Mon,
        branch_with_lobby(&["Mon: 9-5", "", "Tue: 9-5"]),
    );

    let entries = &p.time_table(LOBBY).entries;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].days, vec!["Mon", "Tue"]);
}

// ---------------------------
// ATM
// ---------------------------

fn atm(detail: Vec<AtmDetail>) -> Location {
    Location {
        location_name: "Airport".into(),
        location_type: Some("ATM".into()),
        atm_detail: Some(detail),
        ..Default::default()
    }
    .scrub()
}

#[test]
fn test_atm_gets_synthesised_week() {
    let mut p = parser_on(pipe_settings(), Weekday::Thu, atm(vec![]));

    assert_eq!(
        p.get_time_table_markup(ATM),
        "Mon–Sun:|Monday to Sunday:|24 hours;"
    );
    assert_eq!(p.get_today_schedule_markup(ATM, "Today"), "|Today|24 hours");
}

#[test]
fn test_atm_closed_without_label_falls_back_to_24_hours() {
    let mut p = parser_on(
        pipe_settings(),
        Weekday::Thu,
        atm(vec![AtmDetail::with_indicator("C")]),
    );

    let today = p.today_schedule(ATM).expect("today row");
    assert_eq!(today.css_flag, CssFlag::Normal);
    assert_eq!(today.markup, "24 hours");
}

#[test]
fn test_atm_closed_with_label_is_an_alert() {
    let settings = with_labels(pipe_settings(), &[("atm-C", "ATM unavailable")]);
    let mut p = parser_on(settings, Weekday::Thu, atm(vec![AtmDetail::with_indicator("C")]));

    assert_eq!(
        p.get_today_schedule_markup(ATM, "Today"),
        "location-schedule-alert|Today|ATM unavailable"
    );
}

#[test]
fn test_atm_closed_flag_ignored_when_another_atm_is_open() {
    let settings = with_labels(
        pipe_settings(),
        &[("atm-C", "ATM unavailable"), ("atm-D,W", "Deposits and withdrawals")],
    );
    let mut p = parser_on(
        settings,
        Weekday::Thu,
        atm(vec![AtmDetail::open("W,D"), AtmDetail::with_indicator("C")]),
    );

    let today = p.today_schedule(ATM).expect("today row");
    assert!(today.css_flag.is_alert());
    assert_eq!(today.markup, "Deposits and withdrawals");
}

#[test]
fn test_status_link_template_wraps_label() {
    let mut settings = with_labels(pipe_settings(), &[("atm-C", "ATM unavailable")]);
    settings.status_link_template = "<a>{0}: {1}</a>".into();
    let mut p = parser_on(settings, Weekday::Thu, atm(vec![AtmDetail::with_indicator("C")]));

    assert_eq!(
        p.today_schedule(ATM).map(|t| t.markup),
        Some("<a>Airport ATM: ATM unavailable</a>".to_string())
    );
}

#[test]
fn test_branch_with_atm_also_gets_synthesised_week() {
    let mut loc = branch_with_lobby(&standard_week());
    loc.atm_detail = Some(vec![AtmDetail::open("D")]);
    let loc = loc.scrub();
    assert!(loc.has_atm);

    let mut p = parser_on(pipe_settings(), Weekday::Mon, loc);
    assert_eq!(p.time_table(ATM).entries[0].days, vec!["Mon", "Sun"]);
}

// ---------------------------
// Branch status
// ---------------------------

fn branch_today(open: Option<&str>, close: Option<&str>, status: Option<&str>) -> Location {
    let mut loc = branch_with_lobby(&["Wed: 9:00 am - 5:00 pm"]);
    loc.branch_status = status.map(String::from);
    loc.branch_status_detail = Some(BranchStatusDetail {
        open_time: open.map(String::from),
        close_time: close.map(String::from),
    });
    loc
}

#[test]
fn test_branch_late_opening_narrows_today() {
    let mut p = parser_on(pipe_settings(), Weekday::Wed, branch_today(Some("10am"), None, None));

    let today = p.today_schedule(LOBBY).expect("today row");
    assert_eq!(today.css_flag, CssFlag::Alert);
    assert_eq!(today.markup, "10 am – 5 pm");
}

#[test]
fn test_branch_open_and_close_override() {
    let mut p = parser_on(
        pipe_settings(),
        Weekday::Wed,
        branch_today(Some("10am"), Some("3pm"), None),
    );

    assert_eq!(
        p.today_schedule(LOBBY).map(|t| t.markup),
        Some("10 am – 3 pm".to_string())
    );
    // the weekly row keeps the printed hours
    assert_eq!(p.time_table(LOBBY).entries[0].schedule, "9 am – 5 pm");
}

#[test]
fn test_branch_early_close_drops_later_blocks() {
    let mut loc = branch_with_lobby(&["Wed: 9am-12pm, 1pm-5pm"]);
    loc.branch_status_detail = Some(BranchStatusDetail {
        open_time: None,
        close_time: Some("11am".into()),
    });
    let mut p = parser_on(pipe_settings(), Weekday::Wed, loc);

    assert_eq!(
        p.today_schedule(LOBBY).map(|t| t.markup),
        Some("9 am – 11 am".to_string())
    );
}

#[test]
fn test_branch_override_outside_hours_uses_status_label() {
    let settings = with_labels(pipe_settings(), &[("branch-closed-early", "Closing early")]);
    let mut p = parser_on(
        settings,
        Weekday::Wed,
        branch_today(Some("6pm"), None, Some("closed-early")),
    );

    let today = p.today_schedule(LOBBY).expect("today row");
    assert!(today.css_flag.is_alert());
    assert_eq!(today.markup, "Closing early");
}

#[test]
fn test_branch_status_without_times_uses_label() {
    let settings = with_labels(pipe_settings(), &[("branch-holiday", "Closed for the holiday")]);
    let mut p = parser_on(settings, Weekday::Wed, branch_today(None, None, Some("holiday")));

    assert_eq!(
        p.get_today_schedule_markup(LOBBY, "Today"),
        "location-schedule-alert|Today|Closed for the holiday"
    );
}

#[test]
fn test_override_time_without_meridian_orders_as_am() {
    let mut loc = branch_with_lobby(&["Wed: 7am-9am, 1pm-5pm"]);
    loc.branch_status_detail = Some(BranchStatusDetail {
        open_time: Some("10".into()),
        close_time: None,
    });
    let mut p = parser_on(pipe_settings(), Weekday::Wed, loc);

    // 10 sorts as 10 am, so the morning block closes before it and is dropped
    let today = p.today_schedule(LOBBY).expect("today row");
    assert!(today.css_flag.is_alert());
    assert_eq!(today.markup, "10 – 5 pm");
}

#[test]
fn test_missing_branch_status_looks_up_bare_key() {
    let settings = with_labels(pipe_settings(), &[("branch-", "Call for hours")]);

    let mut p = parser_on(settings.clone(), Weekday::Wed, branch_today(None, None, None));
    assert_eq!(
        p.today_schedule(LOBBY).map(|t| t.markup),
        Some("Call for hours".to_string())
    );

    // bare "4" is 4 am: no block opens before it, so the label applies
    let mut p = parser_on(settings, Weekday::Wed, branch_today(None, Some("4"), None));
    let today = p.today_schedule(LOBBY).expect("today row");
    assert_eq!(today.css_flag, CssFlag::Alert);
    assert_eq!(today.markup, "Call for hours");
}

#[test]
fn test_unknown_branch_status_keeps_printed_hours() {
    let mut p = parser_on(pipe_settings(), Weekday::Wed, branch_today(None, None, Some("open")));

    let today = p.today_schedule(LOBBY).expect("today row");
    assert_eq!(today.css_flag, CssFlag::Normal);
    assert_eq!(today.markup, "9 am – 5 pm");
}

// ---------------------------
// Parser state
// ---------------------------

#[test]
fn test_set_location_clears_cached_tables() {
    let mut p = LocationTimeTableParser::with_today(pipe_settings(), Weekday::Mon);

    p.set_location(branch_with_lobby(&["Mon: 9-5"]));
    assert_eq!(p.get_today_schedule_markup(LOBBY, "Today"), "|Today|9 am – 5 pm");

    p.set_location(branch_with_lobby(&["Mon: 10-4"]));
    assert_eq!(p.get_today_schedule_markup(LOBBY, "Today"), "|Today|10 am – 4 pm");
}

#[test]
fn test_html_style_separators() {
    let mut settings = pipe_settings();
    settings.text_style = TextStyle::Html;
    let mut p = parser_on(
        settings,
        Weekday::Sun,
        branch_with_lobby(&["Mon: 9-5", "Tue: 9-5"]),
    );

    assert_eq!(
        p.get_time_table_markup(LOBBY),
        "Mon&ndash;Tue:|Monday to Tuesday:|9&nbsp;am&nbsp;&ndash;&nbsp;5&nbsp;pm;"
    );
}
