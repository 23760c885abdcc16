use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Meridian {
    Am,
    Pm,
}

impl Meridian {
    pub fn as_str(&self) -> &'static str {
        match self {
            Meridian::Am => "am",
            Meridian::Pm => "pm",
        }
    }

    pub fn from_marker(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "am" => Some(Meridian::Am),
            "pm" => Some(Meridian::Pm),
            _ => None,
        }
    }
}

/// A clock time exactly as written in the schedule text.
/// Hour and minute are kept verbatim for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub meridian: Option<Meridian>,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32, meridian: Option<Meridian>) -> Self {
        Self {
            hour,
            minute,
            meridian,
        }
    }

    pub fn am(hour: u32, minute: u32) -> Self {
        Self::new(hour, minute, Some(Meridian::Am))
    }

    pub fn pm(hour: u32, minute: u32) -> Self {
        Self::new(hour, minute, Some(Meridian::Pm))
    }

    /// Ordering key only. A missing meridian counts as am.
    pub fn minutes_past_midnight(&self) -> u32 {
        let pm_offset = if self.meridian == Some(Meridian::Pm) {
            12
        } else {
            0
        };
        (self.hour % 12 + pm_offset) * 60 + self.minute
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleBlock {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
}

impl ScheduleBlock {
    pub fn new(open: TimeOfDay, close: TimeOfDay) -> Self {
        Self { open, close }
    }
}
