use super::schedule_kind::ScheduleKind;
use crate::errors::{AppError, AppResult};
use crate::utils::text::title_case;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationType {
    Branch,
    Atm,
}

impl LocationType {
    /// Case-insensitive lookup, as the API is not consistent about it
    pub fn from_api_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "branch" => Some(LocationType::Branch),
            "atm" => Some(LocationType::Atm),
            _ => None,
        }
    }
}

/// One ATM on site, as reported by the live status feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtmDetail {
    /// "O" = open, "C" = closed, other single-letter codes possible
    #[serde(default)]
    pub atm_open_closed_ind: Option<String>,
    /// Comma separated service codes, only meaningful when open
    #[serde(default)]
    pub atm_service_available: Option<String>,
}

impl AtmDetail {
    pub fn open(services: &str) -> Self {
        Self {
            atm_open_closed_ind: Some("O".into()),
            atm_service_available: Some(services.into()),
        }
    }

    pub fn with_indicator(ind: &str) -> Self {
        Self {
            atm_open_closed_ind: Some(ind.into()),
            atm_service_available: None,
        }
    }
}

/// Today's actual open/close when they differ from the printed schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchStatusDetail {
    #[serde(default)]
    pub open_time: Option<String>,
    #[serde(default)]
    pub close_time: Option<String>,
}

/// A location record as delivered by the search API (camelCase fields).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub location_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub location_type: Option<String>,

    #[serde(default, rename = "isATM")]
    pub is_atm: bool,
    #[serde(default, rename = "hasATM")]
    pub has_atm: bool,
    #[serde(default)]
    pub is_branch: bool,

    #[serde(default)]
    pub atm_detail: Option<Vec<AtmDetail>>,
    #[serde(default)]
    pub branch_status: Option<String>,
    #[serde(default)]
    pub branch_status_detail: Option<BranchStatusDetail>,

    #[serde(default)]
    pub lobby_hours: Option<Vec<String>>,
    #[serde(default)]
    pub drive_thru_hours: Option<Vec<String>>,
    #[serde(default)]
    pub atm_hours: Option<Vec<String>>,
}

impl Location {
    /// Raw weekly entries for the given kind, if the API sent any
    pub fn schedule(&self, kind: ScheduleKind) -> Option<&[String]> {
        match kind {
            ScheduleKind::LobbyHours => self.lobby_hours.as_deref(),
            ScheduleKind::DriveThruHours => self.drive_thru_hours.as_deref(),
            ScheduleKind::AtmHours => self.atm_hours.as_deref(),
        }
    }

    pub fn kind(&self) -> Option<LocationType> {
        self.location_type
            .as_deref()
            .and_then(LocationType::from_api_str)
    }

    /// `"Branch"`, `"ATM"` or `"Branch/ATM"`
    pub fn display_type(&self) -> String {
        let base = self.location_type.clone().unwrap_or_default();
        if self.has_atm {
            format!("{base}/ATM")
        } else {
            base
        }
    }

    /// Derives the flags and display name the formatter relies on.
    /// Flags already set by the caller are kept.
    pub fn scrub(mut self) -> Self {
        let kind = self.kind();
        self.is_branch |= kind == Some(LocationType::Branch);
        self.is_atm |= kind == Some(LocationType::Atm);
        self.has_atm |= self.is_branch
            && self
                .atm_detail
                .as_ref()
                .is_some_and(|detail| !detail.is_empty());

        if self.display_name.trim().is_empty() {
            let name = title_case(&self.location_name);
            self.display_name = format!("{} {}", name, self.display_type())
                .trim()
                .to_string();
        }

        self
    }
}

/// The API returns either a single record or a result list.
#[derive(Deserialize)]
#[serde(untagged)]
enum LocationPayload {
    Many(Vec<Location>),
    One(Box<Location>),
}

pub fn parse_locations(json: &str) -> AppResult<Vec<Location>> {
    let payload: LocationPayload = serde_json::from_str(json)?;
    let locations = match payload {
        LocationPayload::Many(list) => list,
        LocationPayload::One(loc) => vec![*loc],
    };

    Ok(locations.into_iter().map(Location::scrub).collect())
}

pub fn load_locations(path: &Path) -> AppResult<Vec<Location>> {
    let content = std::fs::read_to_string(path)?;
    let locations = parse_locations(&content)?;

    if locations.is_empty() {
        return Err(AppError::NoLocations(path.display().to_string()));
    }

    log::info!(
        "Loaded {} location(s) from {}",
        locations.len(),
        path.display()
    );
    Ok(locations)
}
