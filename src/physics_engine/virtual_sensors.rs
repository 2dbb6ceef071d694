//! Virtual sensors derived from a computed twin

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::types::{DigitalTwin, OperationalData, VirtualSensor, VirtualSensorKind};

const DRAG_CONFIDENCE: f64 = 0.88;
const FOULING_CONFIDENCE: f64 = 0.92;
const EFFICIENCY_CONFIDENCE: f64 = 0.85;

struct SensorSpec {
    kind: VirtualSensorKind,
    name: &'static str,
    description: &'static str,
    calculated_from: &'static [&'static str],
    unit: &'static str,
    confidence: f64,
    algorithm: &'static str,
}

const DRAG: SensorSpec = SensorSpec {
    kind: VirtualSensorKind::Drag,
    name: "Virtual Drag Coefficient",
    description: "Derived by the digital twin from shaft RPM, torque and speed log",
    calculated_from: &["rpm-sensor", "torque-sensor", "speed-log"],
    unit: "dimensionless",
    confidence: DRAG_CONFIDENCE,
    algorithm: "Computational hydrodynamics",
};

const FOULING: SensorSpec = SensorSpec {
    kind: VirtualSensorKind::Fouling,
    name: "Biofouling Index",
    description: "Weighted gap between ideal and actual hull performance",
    calculated_from: &["digital-twin-engine"],
    unit: "%",
    confidence: FOULING_CONFIDENCE,
    algorithm: "Digital twin comparison",
};

const EFFICIENCY: SensorSpec = SensorSpec {
    kind: VirtualSensorKind::Efficiency,
    name: "Energy Efficiency",
    description: "Useful work over energy consumed, relative to the clean hull",
    calculated_from: &["fuel-flow", "speed-log", "gps"],
    unit: "%",
    confidence: EFFICIENCY_CONFIDENCE,
    algorithm: "Thermodynamic analysis",
};

fn build(spec: &SensorSpec, vessel_id: &str, value: f64, now: DateTime<Utc>) -> VirtualSensor {
    VirtualSensor {
        id: format!("vs-{}-{}", spec.kind, vessel_id),
        vessel_id: vessel_id.to_string(),
        kind: spec.kind,
        name: spec.name.to_string(),
        description: spec.description.to_string(),
        calculated_from: spec.calculated_from.iter().map(|s| (*s).to_string()).collect(),
        value,
        unit: spec.unit.to_string(),
        confidence: spec.confidence,
        last_update: now,
        algorithm: spec.algorithm.to_string(),
    }
}

/// Drag, fouling-index and efficiency sensors for one twin, in that order
pub fn generate_virtual_sensors(
    twin: &DigitalTwin,
    operational: &OperationalData,
    now: DateTime<Utc>,
) -> Vec<VirtualSensor> {
    if operational.vessel_id != twin.vessel_id {
        warn!(
            twin = %twin.vessel_id,
            frame = %operational.vessel_id,
            "Operational frame belongs to another vessel, sensors follow the twin"
        );
    }

    let id = twin.vessel_id.as_str();
    vec![
        build(&DRAG, id, twin.actual_hull.drag_coefficient, now),
        build(&FOULING, id, twin.biofouling_index.value(), now),
        build(
            &EFFICIENCY,
            id,
            100.0 - twin.performance_degradation.efficiency_loss,
            now,
        ),
    ]
}
