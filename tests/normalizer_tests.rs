use rtimetable::TextStyle;
use rtimetable::core::formatter::{format_schedule, format_time};
use rtimetable::core::normalizer::to_blocks;
use rtimetable::core::tokenizer::parse_times;
use rtimetable::models::{ScheduleBlock, TimeOfDay};

fn bare(hour: u32) -> TimeOfDay {
    TimeOfDay::new(hour, 0, None)
}

fn schedule(text: &str) -> String {
    format_schedule(&to_blocks(&parse_times(text)), TextStyle::Plain)
}

#[test]
fn test_minutes_past_midnight() {
    assert_eq!(TimeOfDay::am(12, 0).minutes_past_midnight(), 0);
    assert_eq!(TimeOfDay::pm(12, 30).minutes_past_midnight(), 750);
    assert_eq!(TimeOfDay::pm(5, 0).minutes_past_midnight(), 1020);
    assert_eq!(bare(7).minutes_past_midnight(), 420);
}

#[test]
fn test_open_after_close_becomes_am_pm() {
    let blocks = to_blocks(&[bare(9), bare(5)]);
    assert_eq!(
        blocks,
        vec![ScheduleBlock::new(TimeOfDay::am(9, 0), TimeOfDay::pm(5, 0))]
    );
}

#[test]
fn test_eleven_to_one_is_read_as_am_pm() {
    // 11:00 (660) >= 1:00 (60), so the first rule applies
    assert_eq!(schedule("11-1"), "11 am – 1 pm");
}

#[test]
fn test_late_morning_range_becomes_am_am() {
    assert_eq!(schedule("7-11"), "7 am – 11 am");
    assert_eq!(schedule("8:30-10"), "8:30 am – 10 am");
}

#[test]
fn test_early_range_becomes_pm_pm() {
    assert_eq!(schedule("1-5"), "1 pm – 5 pm");
    assert_eq!(schedule("6 - 9pm"), "6 pm – 9 pm");
}

#[test]
fn test_one_explicit_marker_is_still_overwritten() {
    assert_eq!(schedule("10 - 2pm"), "10 am – 2 am");
}

#[test]
fn test_explicit_markers_are_kept_verbatim() {
    assert_eq!(schedule("9:30 Am - 2:15 Pm"), "9:30 am – 2:15 pm");
    assert_eq!(schedule("10pm - 6am"), "10 pm – 6 am");
}

#[test]
fn test_dangling_time_is_dropped() {
    assert_eq!(to_blocks(&[bare(9), bare(5), bare(6)]).len(), 1);
    assert!(to_blocks(&[bare(9)]).is_empty());
}

#[test]
fn test_split_hours_join_with_comma() {
    assert_eq!(
        schedule("9am-12pm, 1pm-5pm"),
        "9 am – 12 pm, 1 pm – 5 pm"
    );
}

#[test]
fn test_format_time_styles() {
    assert_eq!(format_time(&TimeOfDay::pm(5, 5), TextStyle::Plain), "5:05 pm");
    assert_eq!(
        format_time(&TimeOfDay::am(9, 0), TextStyle::Html),
        "9&nbsp;am"
    );
    assert_eq!(format_time(&bare(10), TextStyle::Plain), "10");
}
