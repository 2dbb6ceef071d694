//! Operator alerts from the latest reading of each vessel

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::config::ModelConfig;
use crate::types::{Alert, AlertSeverity, SensorReading, Vessel};

fn alert(
    vessel: &Vessel,
    suffix: &str,
    severity: AlertSeverity,
    priority: u8,
    title: &str,
    message: String,
    now: DateTime<Utc>,
) -> Alert {
    Alert {
        id: format!("alert-{}-{suffix}", vessel.id),
        vessel_id: vessel.id.clone(),
        severity,
        title: title.to_string(),
        message,
        timestamp: now,
        is_read: false,
        priority,
    }
}

/// Alerts for every vessel with a reading, most urgent first.
///
/// Ties keep vessel order. Vessels without a reading produce no alerts.
pub fn generate_alerts(
    vessels: &[Vessel],
    readings: &HashMap<String, SensorReading>,
    config: &ModelConfig,
    now: DateTime<Utc>,
) -> Vec<Alert> {
    let level = &config.compliance.level;
    let mut alerts = Vec::new();

    for vessel in vessels {
        let Some(sensor) = readings.get(&vessel.id) else {
            continue;
        };

        if sensor.fouling_level >= level.violation {
            alerts.push(alert(
                vessel,
                "critical",
                AlertSeverity::Critical,
                1,
                "Critical fouling level",
                format!(
                    "{}: level {:.1} detected. Urgent cleaning recommended, NORMAM 401 violation imminent.",
                    vessel.name, sensor.fouling_level
                ),
                now,
            ));
        } else if sensor.fouling_level >= level.warning {
            alerts.push(alert(
                vessel,
                "warning",
                AlertSeverity::Warning,
                2,
                "Optimal cleaning point approaching",
                format!(
                    "{}: level {:.1}. Schedule cleaning within the next 2-3 weeks.",
                    vessel.name, sensor.fouling_level
                ),
                now,
            ));
        }

        if sensor.drag_increase > config.alerts.drag_increase_percent {
            alerts.push(alert(
                vessel,
                "fuel",
                AlertSeverity::Warning,
                3,
                "High fuel consumption",
                format!(
                    "{}: drag up {:.1}%, burning an extra {:.0} L/h.",
                    vessel.name,
                    sensor.drag_increase,
                    sensor.fuel_consumption - config.economics.daily_fuel_baseline_lh
                ),
                now,
            ));
        }
    }

    alerts.sort_by_key(|a| a.priority);
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::demo_fleet;

    fn reading(vessel_id: &str, fouling: f64, drag_increase: f64) -> SensorReading {
        SensorReading {
            vessel_id: vessel_id.to_string(),
            timestamp: Utc::now(),
            drag_coefficient: 0.2 * (1.0 + drag_increase / 100.0),
            hull_pressure: 101_325.0,
            speed: 12.0,
            fuel_consumption: 800.0 * (1.0 + drag_increase / 100.0),
            water_temperature: 24.0,
            salinity: 35.0,
            fouling_level: fouling,
            drag_increase,
        }
    }

    #[test]
    fn test_alerts_sorted_by_priority() {
        let fleet = demo_fleet();
        let config = ModelConfig::default();
        let readings: HashMap<String, SensorReading> = [
            reading("v001", 3.0, 60.0),
            reading("v002", 3.6, 20.0),
            reading("v003", 4.8, 90.0),
        ]
        .into_iter()
        .map(|r| (r.vessel_id.clone(), r))
        .collect();

        let alerts = generate_alerts(&fleet, &readings, &config, Utc::now());
        let ids: Vec<_> = alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "alert-v003-critical",
                "alert-v002-warning",
                "alert-v001-fuel",
                "alert-v003-fuel",
            ]
        );
        assert_eq!(alerts[0].severity, AlertSeverity::Critical);
        assert!(alerts.iter().all(|a| !a.is_read));
        assert!(alerts[2].message.contains("480 L/h"));
    }

    #[test]
    fn test_no_reading_no_alert() {
        let fleet = demo_fleet();
        let alerts = generate_alerts(&fleet, &HashMap::new(), &ModelConfig::default(), Utc::now());
        assert!(alerts.is_empty());
    }
}
