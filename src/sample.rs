//! Demonstration fleet
//!
//! Four Brazilian coastal and river vessels with their clean-hull power
//! curves, one operational frame per vessel and the recorded cleanings.
//! Used by the `fleet-report` binary and as fixtures in tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::error::Result;
use crate::fleet::PowerCurveTable;
use crate::types::{
    CleaningLog, CleaningMethod, CleaningRecord, EnvironmentalConditions, GpsPosition, LoadStatus,
    OperationalData, OperationalProfile, Position, PowerCurve, PowerCurvePoint, Route,
    SeaConditions, Vessel, VesselStatus, VesselType,
};

fn midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

#[allow(clippy::too_many_arguments)]
fn vessel(
    id: &str,
    name: &str,
    vessel_type: VesselType,
    imo: &str,
    dimensions: (f64, f64, f64),
    last_cleaning: DateTime<Utc>,
    route: (&str, &str, DateTime<Utc>, DateTime<Utc>, Position),
    status: VesselStatus,
) -> Vessel {
    let (length, beam, draft) = dimensions;
    let (origin, destination, departure_date, estimated_arrival, current_position) = route;
    Vessel {
        id: id.to_string(),
        name: name.to_string(),
        vessel_type,
        imo: imo.to_string(),
        length,
        beam,
        draft,
        last_cleaning,
        current_route: Route {
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_date,
            estimated_arrival,
            current_position,
        },
        status,
    }
}

/// The demonstration fleet, v001 to v004
pub fn demo_fleet() -> Vec<Vessel> {
    vec![
        vessel(
            "v001",
            "Transpetro Navigator",
            VesselType::Tanker,
            "IMO9234567",
            (274.0, 48.0, 16.5),
            midnight(2024, 8, 15),
            (
                "Santos, SP",
                "Vitória, ES",
                midnight(2024, 11, 25),
                midnight(2024, 11, 30),
                Position { lat: -23.9608, lon: -46.3334 },
            ),
            VesselStatus::Operating,
        ),
        vessel(
            "v002",
            "Atlântico Sul",
            VesselType::Tanker,
            "IMO9234568",
            (290.0, 50.0, 17.2),
            midnight(2024, 10, 1),
            (
                "Rio de Janeiro, RJ",
                "Salvador, BA",
                midnight(2024, 11, 26),
                midnight(2024, 11, 29),
                Position { lat: -22.9068, lon: -43.1729 },
            ),
            VesselStatus::Operating,
        ),
        vessel(
            "v003",
            "Petrobras 58",
            VesselType::Tanker,
            "IMO9234569",
            (265.0, 46.0, 15.8),
            midnight(2024, 6, 20),
            (
                "Manaus, AM",
                "Belém, PA",
                midnight(2024, 11, 24),
                midnight(2024, 11, 30),
                Position { lat: -3.119, lon: -60.0217 },
            ),
            VesselStatus::Operating,
        ),
        vessel(
            "v004",
            "Oceano Azul",
            VesselType::Cargo,
            "IMO9234570",
            (250.0, 44.0, 14.5),
            midnight(2024, 9, 10),
            (
                "Suape, PE",
                "Suape, PE",
                midnight(2024, 11, 20),
                midnight(2024, 11, 20),
                Position { lat: -8.3889, lon: -34.9544 },
            ),
            VesselStatus::Docked,
        ),
    ]
}

fn point(rpm: f64, expected_power: f64, expected_speed: f64, expected_fuel_rate: f64) -> PowerCurvePoint {
    PowerCurvePoint {
        rpm,
        expected_power,
        expected_speed,
        expected_fuel_rate,
    }
}

/// Sea-trial curve for the tanker class
pub fn tanker_power_curve() -> Result<PowerCurve> {
    PowerCurve::new(vec![
        point(60.0, 8500.0, 12.0, 1450.0),
        point(70.0, 11200.0, 13.5, 1680.0),
        point(80.0, 14500.0, 15.0, 1950.0),
        point(90.0, 18200.0, 16.2, 2280.0),
    ])
}

/// Sea-trial curve for the general cargo class
pub fn cargo_power_curve() -> Result<PowerCurve> {
    PowerCurve::new(vec![
        point(60.0, 6200.0, 12.5, 1080.0),
        point(70.0, 8300.0, 14.0, 1290.0),
        point(80.0, 10900.0, 15.4, 1540.0),
        point(90.0, 13800.0, 16.6, 1830.0),
    ])
}

/// Power curves for every class in the demonstration fleet
pub fn demo_power_curves() -> Result<PowerCurveTable> {
    let mut table = PowerCurveTable::new();
    table.insert(VesselType::Tanker, tanker_power_curve()?);
    table.insert(VesselType::Cargo, cargo_power_curve()?);
    Ok(table)
}

/// Operational frame of a laden tanker at 78 rpm in moderate seas
pub fn demo_operational(vessel_id: &str, now: DateTime<Utc>) -> OperationalData {
    OperationalData {
        vessel_id: vessel_id.to_string(),
        timestamp: now,
        speed: 14.2,
        rpm: 78.0,
        torque: 125_000.0,
        gps_position: GpsPosition {
            lat: -23.5,
            lon: -45.2,
            heading: 135.0,
        },
        fuel_consumption: 1850.0,
        sea_conditions: SeaConditions {
            wave_height: 1.8,
            wind_speed: 12.0,
            wind_direction: 90.0,
            current_speed: 1.2,
            current_direction: 180.0,
        },
        environmental_conditions: EnvironmentalConditions {
            water_temperature: 24.5,
            salinity: 35.2,
            chlorophyll: 0.8,
            oxygen_level: 7.2,
        },
        operational_profile: OperationalProfile {
            load_status: LoadStatus::Laden,
            cargo_type: Some("Crude oil".to_string()),
            draft_forward: 12.5,
            draft_aft: 13.2,
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn cleaning(
    id: &str,
    vessel_id: &str,
    date: DateTime<Utc>,
    fouling_level_before: f64,
    duration: f64,
    cost: f64,
    method: CleaningMethod,
    location: &str,
) -> CleaningRecord {
    CleaningRecord {
        id: id.to_string(),
        vessel_id: vessel_id.to_string(),
        date,
        fouling_level_before,
        duration,
        cost,
        method,
        location: location.to_string(),
    }
}

/// Cleanings on record for the demonstration fleet
pub fn demo_cleaning_log() -> CleaningLog {
    [
        cleaning("c001", "v001", midnight(2024, 8, 15), 3.8, 48.0, 180_000.0, CleaningMethod::DryDock, "Santos, SP"),
        cleaning("c002", "v002", midnight(2024, 10, 1), 3.2, 24.0, 95_000.0, CleaningMethod::Underwater, "Rio de Janeiro, RJ"),
        cleaning("c003", "v003", midnight(2024, 6, 20), 4.5, 36.0, 150_000.0, CleaningMethod::DryDock, "Manaus, AM"),
    ]
    .into_iter()
    .collect()
}
