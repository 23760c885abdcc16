pub mod location;
pub mod schedule_kind;
pub mod time_of_day;
pub mod timetable;
pub mod weekday;

pub use location::{AtmDetail, BranchStatusDetail, Location, LocationType};
pub use schedule_kind::ScheduleKind;
pub use time_of_day::{Meridian, ScheduleBlock, TimeOfDay};
pub use timetable::{CollapsibleEntry, CssFlag, TimeTable, TodaySchedule};
