use crate::errors::AppError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which weekly schedule of a location is being formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum ScheduleKind {
    #[value(name = "lobbyHours", alias = "lobby")]
    LobbyHours,
    #[value(name = "driveThruHours", alias = "drive-thru")]
    DriveThruHours,
    #[value(name = "atmHours", alias = "atm")]
    AtmHours,
}

impl ScheduleKind {
    pub const ALL: [ScheduleKind; 3] = [
        ScheduleKind::LobbyHours,
        ScheduleKind::DriveThruHours,
        ScheduleKind::AtmHours,
    ];

    /// Field name used by the location API
    pub fn key(&self) -> &'static str {
        match self {
            ScheduleKind::LobbyHours => "lobbyHours",
            ScheduleKind::DriveThruHours => "driveThruHours",
            ScheduleKind::AtmHours => "atmHours",
        }
    }

    /// Human readable section title
    pub fn title(&self) -> &'static str {
        match self {
            ScheduleKind::LobbyHours => "Lobby hours",
            ScheduleKind::DriveThruHours => "Drive-thru hours",
            ScheduleKind::AtmHours => "ATM hours",
        }
    }
}

impl fmt::Display for ScheduleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ScheduleKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScheduleKind::ALL
            .into_iter()
            .find(|k| k.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::InvalidScheduleKind(s.to_string()))
    }
}
