//! Replaces today's printed hours with live branch/ATM status when it applies.

use crate::core::formatter::{TextStyle, format_schedule};
use crate::core::tokenizer::parse_single_time;
use crate::models::{AtmDetail, Location, ScheduleBlock, TodaySchedule};
use crate::utils::text::fill_template;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

const CLOSED_FLAG: &str = "C";

/// Status label table plus the markup wrapped around a matching label.
pub struct StatusLinks<'a> {
    pub labels: &'a BTreeMap<String, String>,
    /// `{0}` location display name, `{1}` label text
    pub template: &'a str,
    pub display_name: &'a str,
}

impl StatusLinks<'_> {
    /// Markup for `key`, or None when no label is configured for it
    pub fn markup(&self, key: &str) -> Option<String> {
        let label = self.labels.get(key)?;
        debug!("Status label matched for key '{key}'");

        if self.template.is_empty() {
            return Some(label.clone());
        }
        Some(fill_template(self.template, &[self.display_name, label]))
    }
}

/// Distinct status flags across all ATMs on site, split on `,` as reported.
/// An open ATM with no services still contributes `""`, so "C" is dropped
/// whenever anything else is present.
pub fn atm_flags(atm_detail: &[AtmDetail]) -> BTreeSet<String> {
    let mut flags: BTreeSet<String> = atm_detail
        .iter()
        .filter_map(|atm| {
            if atm.atm_open_closed_ind.as_deref() == Some("O") {
                atm.atm_service_available.as_deref()
            } else {
                atm.atm_open_closed_ind.as_deref()
            }
        })
        .flat_map(|codes| codes.split(','))
        .map(String::from)
        .collect();

    if flags.len() > 1 {
        flags.remove(CLOSED_FLAG);
    }
    flags
}

/// `atm-<sorted,comma,separated,flags>`
pub fn atm_status_key(atm_detail: &[AtmDetail]) -> String {
    let flags = atm_flags(atm_detail);
    format!(
        "atm-{}",
        flags.into_iter().collect::<Vec<_>>().join(",")
    )
}

pub fn altered_schedule_atm(location: &Location, links: &StatusLinks) -> Option<String> {
    let detail = location.atm_detail.as_deref().unwrap_or_default();
    links.markup(&atm_status_key(detail))
}

/// Narrows today's blocks to the live open/close window and rewrites the
/// edges. Falls back to the `branch-<status>` label.
pub fn altered_schedule_branch(
    location: &Location,
    blocks: &[ScheduleBlock],
    links: &StatusLinks,
    style: TextStyle,
) -> Option<String> {
    let detail = location.branch_status_detail.as_ref();
    let alt_open = parse_single_time(detail.and_then(|d| d.open_time.as_deref()));
    let alt_close = parse_single_time(detail.and_then(|d| d.close_time.as_deref()));

    if alt_open.is_some() || alt_close.is_some() {
        let mut today_blocks: Vec<ScheduleBlock> = blocks
            .iter()
            .filter(|b| {
                alt_open.is_none_or(|o| o.minutes_past_midnight() < b.close.minutes_past_midnight())
                    && alt_close
                        .is_none_or(|c| b.open.minutes_past_midnight() < c.minutes_past_midnight())
            })
            .copied()
            .collect();

        if let Some(open) = alt_open
            && let Some(first) = today_blocks.first_mut()
        {
            first.open = open;
        }
        if let Some(close) = alt_close
            && let Some(last) = today_blocks.last_mut()
        {
            last.close = close;
        }

        let altered = format_schedule(&today_blocks, style);
        if !altered.is_empty() {
            return Some(altered);
        }
    }

    let key = format!(
        "branch-{}",
        location.branch_status.as_deref().unwrap_or_default()
    );
    links.markup(&key)
}

/// Today's row: the altered schedule flagged as alert, or the plain one.
pub fn resolve_today(
    location: &Location,
    is_atm: bool,
    schedule: &str,
    blocks: &[ScheduleBlock],
    links: &StatusLinks,
    style: TextStyle,
) -> TodaySchedule {
    let altered = if is_atm {
        altered_schedule_atm(location, links)
    } else {
        altered_schedule_branch(location, blocks, links, style)
    };

    match altered {
        Some(markup) if !markup.is_empty() => TodaySchedule::alert(&markup),
        _ => TodaySchedule::normal(schedule),
    }
}
