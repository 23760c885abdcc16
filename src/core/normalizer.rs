//! Pairs clock times into open/close blocks and guesses missing am/pm.

use crate::models::{Meridian, ScheduleBlock, TimeOfDay};
use log::debug;

/// 7:00 in minutes. Ranges starting at or after this are read as morning.
pub const EARLIEST_OPENING: u32 = 420;

/// Consumes `times` two at a time. A dangling last time is dropped.
pub fn to_blocks(times: &[TimeOfDay]) -> Vec<ScheduleBlock> {
    times
        .chunks_exact(2)
        .map(|pair| infer_meridians(pair[0], pair[1]))
        .collect()
}

/// When either side lacks a marker, both sides are overwritten:
/// - open >= close → am / pm ("9-5")
/// - open >= 7:00 → am / am
/// - otherwise → pm / pm
pub fn infer_meridians(mut open: TimeOfDay, mut close: TimeOfDay) -> ScheduleBlock {
    if open.meridian.is_some() && close.meridian.is_some() {
        return ScheduleBlock::new(open, close);
    }

    let (open_mer, close_mer) = if open.minutes_past_midnight() >= close.minutes_past_midnight() {
        (Meridian::Am, Meridian::Pm)
    } else if open.minutes_past_midnight() >= EARLIEST_OPENING {
        (Meridian::Am, Meridian::Am)
    } else {
        (Meridian::Pm, Meridian::Pm)
    };

    debug!(
        "Inferred meridians {}:{:02} {} - {}:{:02} {}",
        open.hour,
        open.minute,
        open_mer.as_str(),
        close.hour,
        close.minute,
        close_mer.as_str()
    );

    open.meridian = Some(open_mer);
    close.meridian = Some(close_mer);
    ScheduleBlock::new(open, close)
}
