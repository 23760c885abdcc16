//! Turns blocks and collapsed rows into display strings and fills the
//! caller's templates.

use crate::models::{CollapsibleEntry, ScheduleBlock, TimeOfDay, TodaySchedule, weekday};
use crate::utils::text::fill_template;
use serde::{Deserialize, Serialize};

/// Separator flavour used in generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    /// plain space and `–`, for terminals and plain text
    #[default]
    Plain,
    /// `&nbsp;` and `&ndash;`, for dropping into web pages
    Html,
}

impl TextStyle {
    pub fn space(&self) -> &'static str {
        match self {
            TextStyle::Plain => " ",
            TextStyle::Html => "&nbsp;",
        }
    }

    pub fn dash(&self) -> &'static str {
        match self {
            TextStyle::Plain => "–",
            TextStyle::Html => "&ndash;",
        }
    }
}

/// `9 am`, `9:05 pm`. The minute part is omitted when zero.
pub fn format_time(t: &TimeOfDay, style: TextStyle) -> String {
    let mut out = t.hour.to_string();
    if t.minute != 0 {
        out.push_str(&format!(":{:02}", t.minute));
    }
    if let Some(m) = t.meridian {
        out.push_str(style.space());
        out.push_str(m.as_str());
    }
    out
}

/// `9 am – 5 pm, 6 pm – 8 pm`; empty when there are no blocks
pub fn format_schedule(blocks: &[ScheduleBlock], style: TextStyle) -> String {
    let sep = format!("{sp}{dash}{sp}", sp = style.space(), dash = style.dash());
    blocks
        .iter()
        .map(|b| {
            format!(
                "{}{}{}",
                format_time(&b.open, style),
                sep,
                format_time(&b.close, style)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Visible and screen-reader labels for a row, e.g. `("Mon–Thu:", "Monday to Thursday:")`.
pub fn day_labels(entry: &CollapsibleEntry, style: TextStyle) -> (String, String) {
    let first = entry.first_day();
    let mut label = first.to_string();
    let mut sr_label = weekday::full_name(first).unwrap_or(first).to_string();

    if entry.days.len() > 1 {
        let last = entry.last_day();
        label.push_str(style.dash());
        label.push_str(last);
        sr_label.push_str(" to ");
        sr_label.push_str(weekday::full_name(last).unwrap_or(last));
    }

    if !label.is_empty() {
        label.push(':');
        sr_label.push(':');
    }

    (label, sr_label)
}

/// Template placeholders: `{0}` day label, `{1}` screen-reader label, `{2}` schedule.
pub fn format_entry(template: &str, entry: &CollapsibleEntry, style: TextStyle) -> String {
    let (label, sr_label) = day_labels(entry, style);
    fill_template(template, &[&label, &sr_label, &entry.schedule])
}

/// Template placeholders: `{0}` css class, `{1}` label, `{2}` schedule.
pub fn format_today(template: &str, today: &TodaySchedule, label: &str) -> String {
    fill_template(
        template,
        &[today.css_flag.css_class(), label, &today.markup],
    )
}
