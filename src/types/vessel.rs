//! Fleet reference data: vessels, routes and the cleaning log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hull class, also the key of the power curve table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VesselType {
    Tanker,
    Cargo,
    Container,
}

impl std::fmt::Display for VesselType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VesselType::Tanker => write!(f, "tanker"),
            VesselType::Cargo => write!(f, "cargo"),
            VesselType::Container => write!(f, "container"),
        }
    }
}

/// Operating state of a vessel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum VesselStatus {
    #[default]
    Operating,
    Maintenance,
    Docked,
}

impl std::fmt::Display for VesselStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VesselStatus::Operating => write!(f, "Operating"),
            VesselStatus::Maintenance => write!(f, "Maintenance"),
            VesselStatus::Docked => write!(f, "Docked"),
        }
    }
}

/// Latitude / longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

/// Current voyage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub origin: String,
    pub destination: String,
    pub departure_date: DateTime<Utc>,
    pub estimated_arrival: DateTime<Utc>,
    pub current_position: Position,
}

impl Route {
    /// True when either end of the voyage names `port`
    pub fn touches(&self, port: &str) -> bool {
        self.origin.contains(port) || self.destination.contains(port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vessel {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub vessel_type: VesselType,
    pub imo: String,
    /// Length overall (m)
    pub length: f64,
    /// Beam (m)
    pub beam: f64,
    /// Design draft (m)
    pub draft: f64,
    pub last_cleaning: DateTime<Utc>,
    pub current_route: Route,
    pub status: VesselStatus,
}

impl Vessel {
    /// Whole days since the last hull cleaning. A cleaning stamped in the
    /// future counts as zero days.
    pub fn days_since_cleaning(&self, now: DateTime<Utc>) -> u32 {
        let days = (now - self.last_cleaning).num_days();
        u32::try_from(days.max(0)).unwrap_or(u32::MAX)
    }

    /// Reset the fouling clock after a cleaning
    pub fn record_cleaning(&mut self, at: DateTime<Utc>) {
        self.last_cleaning = at;
    }

    pub fn set_status(&mut self, status: VesselStatus) {
        self.status = status;
    }

    pub fn is_operating(&self) -> bool {
        self.status == VesselStatus::Operating
    }
}

/// How the hull was cleaned
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CleaningMethod {
    DryDock,
    Underwater,
    Robotic,
}

impl std::fmt::Display for CleaningMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CleaningMethod::DryDock => write!(f, "dry-dock"),
            CleaningMethod::Underwater => write!(f, "underwater"),
            CleaningMethod::Robotic => write!(f, "robotic"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CleaningRecord {
    pub id: String,
    pub vessel_id: String,
    pub date: DateTime<Utc>,
    /// Fouling level (0-5) measured before the cleaning
    pub fouling_level_before: f64,
    /// Duration (h)
    pub duration: f64,
    /// Cost (R$)
    pub cost: f64,
    pub method: CleaningMethod,
    pub location: String,
}

/// Append-only history of hull cleanings across the fleet
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CleaningLog {
    records: Vec<CleaningRecord>,
}

impl CleaningLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: CleaningRecord) {
        self.records.push(record);
    }

    /// Records for one vessel, newest first
    pub fn for_vessel(&self, vessel_id: &str) -> Vec<&CleaningRecord> {
        let mut records: Vec<&CleaningRecord> = self
            .records
            .iter()
            .filter(|r| r.vessel_id == vessel_id)
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<CleaningRecord> for CleaningLog {
    fn from_iter<I: IntoIterator<Item = CleaningRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
