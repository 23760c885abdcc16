use serde::Serialize;

/// One weekly row: consecutive days sharing the same formatted hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollapsibleEntry {
    /// Day tokens in iteration order ("" when the entry had no day prefix)
    pub days: Vec<String>,
    pub schedule: String,
}

impl CollapsibleEntry {
    pub fn new(day: &str, schedule: &str) -> Self {
        Self {
            days: vec![day.to_string()],
            schedule: schedule.to_string(),
        }
    }

    pub fn first_day(&self) -> &str {
        self.days.first().map(String::as_str).unwrap_or("")
    }

    pub fn last_day(&self) -> &str {
        self.days.last().map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CssFlag {
    #[default]
    Normal,
    Alert,
}

impl CssFlag {
    pub fn css_class(&self) -> &'static str {
        match self {
            CssFlag::Normal => "",
            CssFlag::Alert => "location-schedule-alert",
        }
    }

    pub fn is_alert(&self) -> bool {
        matches!(self, CssFlag::Alert)
    }
}

/// Today's row, possibly replaced by a live status label.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TodaySchedule {
    pub css_flag: CssFlag,
    pub markup: String,
}

impl TodaySchedule {
    pub fn normal(markup: &str) -> Self {
        Self {
            css_flag: CssFlag::Normal,
            markup: markup.to_string(),
        }
    }

    pub fn alert(markup: &str) -> Self {
        Self {
            css_flag: CssFlag::Alert,
            markup: markup.to_string(),
        }
    }
}

/// Result of walking one schedule kind of one location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimeTable {
    pub entries: Vec<CollapsibleEntry>,
    pub today: Option<TodaySchedule>,
}
