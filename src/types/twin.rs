//! Digital twin types: power curve, ideal/actual hull, degradation and
//! virtual sensors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::BiofoulingIndex;
use crate::error::{ensure_non_negative, HullError, Result};

/// Manufacturer sea-trial point for a clean hull
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PowerCurvePoint {
    pub rpm: f64,
    /// kW
    pub expected_power: f64,
    /// kn
    pub expected_speed: f64,
    /// L/h
    pub expected_fuel_rate: f64,
}

/// Clean-hull power curve: non-empty, RPM strictly increasing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Vec<PowerCurvePoint>", into = "Vec<PowerCurvePoint>")]
pub struct PowerCurve(Vec<PowerCurvePoint>);

impl PowerCurve {
    pub fn new(points: Vec<PowerCurvePoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(HullError::invalid("power_curve", "must contain at least one point"));
        }
        for p in &points {
            ensure_non_negative("power_curve.rpm", p.rpm)?;
            ensure_non_negative("power_curve.expected_power", p.expected_power)?;
            ensure_non_negative("power_curve.expected_speed", p.expected_speed)?;
            ensure_non_negative("power_curve.expected_fuel_rate", p.expected_fuel_rate)?;
        }
        if let Some(w) = points.windows(2).find(|w| w[1].rpm <= w[0].rpm) {
            return Err(HullError::invalid(
                "power_curve",
                format!(
                    "rpm must be strictly increasing ({} followed by {})",
                    w[0].rpm, w[1].rpm
                ),
            ));
        }
        Ok(Self(points))
    }

    pub fn points(&self) -> &[PowerCurvePoint] {
        &self.0
    }

    pub fn first(&self) -> &PowerCurvePoint {
        &self.0[0]
    }

    pub fn last(&self) -> &PowerCurvePoint {
        &self.0[self.0.len() - 1]
    }
}

impl TryFrom<Vec<PowerCurvePoint>> for PowerCurve {
    type Error = HullError;

    fn try_from(points: Vec<PowerCurvePoint>) -> Result<Self> {
        Self::new(points)
    }
}

impl From<PowerCurve> for Vec<PowerCurvePoint> {
    fn from(curve: PowerCurve) -> Self {
        curve.0
    }
}

/// Expected clean-hull performance at the current RPM and sea state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IdealHull {
    pub drag_coefficient: f64,
    /// kn
    pub expected_speed: f64,
    /// L/h
    pub expected_fuel_consumption: f64,
    /// kW
    pub expected_power: f64,
    pub power_curve: PowerCurve,
}

/// Measured performance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActualHull {
    pub drag_coefficient: f64,
    /// kn
    pub actual_speed: f64,
    /// L/h
    pub actual_fuel_consumption: f64,
    /// kW
    pub measured_power: f64,
}

/// All values in percent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceDegradation {
    pub speed_loss: f64,
    pub fuel_increase: f64,
    pub power_increase: f64,
    pub efficiency_loss: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DigitalTwin {
    pub vessel_id: String,
    pub ideal_hull: IdealHull,
    pub actual_hull: ActualHull,
    pub biofouling_index: BiofoulingIndex,
    pub performance_degradation: PerformanceDegradation,
    pub last_calibration: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VirtualSensorKind {
    Drag,
    Fouling,
    Efficiency,
}

impl std::fmt::Display for VirtualSensorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VirtualSensorKind::Drag => write!(f, "drag"),
            VirtualSensorKind::Fouling => write!(f, "fouling"),
            VirtualSensorKind::Efficiency => write!(f, "efficiency"),
        }
    }
}

/// Quantity inferred from physical sensors rather than measured directly
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualSensor {
    pub id: String,
    pub vessel_id: String,
    #[serde(rename = "type")]
    pub kind: VirtualSensorKind,
    pub name: String,
    pub description: String,
    /// Physical sensor ids the value was derived from
    pub calculated_from: Vec<String>,
    pub value: f64,
    pub unit: String,
    /// 0-1
    pub confidence: f64,
    pub last_update: DateTime<Utc>,
    pub algorithm: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(rpm: f64) -> PowerCurvePoint {
        PowerCurvePoint {
            rpm,
            expected_power: 8500.0,
            expected_speed: 12.0,
            expected_fuel_rate: 1450.0,
        }
    }

    #[test]
    fn test_power_curve_rejects_empty() {
        assert!(PowerCurve::new(Vec::new()).is_err());
    }

    #[test]
    fn test_power_curve_rejects_non_increasing_rpm() {
        assert!(PowerCurve::new(vec![point(60.0), point(60.0)]).is_err());
        assert!(PowerCurve::new(vec![point(70.0), point(60.0)]).is_err());
        assert!(PowerCurve::new(vec![point(60.0), point(70.0)]).is_ok());
    }

    #[test]
    fn test_power_curve_rejects_nan() {
        let mut p = point(60.0);
        p.expected_speed = f64::NAN;
        assert!(PowerCurve::new(vec![p]).is_err());
    }

    #[test]
    fn test_power_curve_deserialize_validates() {
        let bad = r#"[{"rpm":70,"expectedPower":1,"expectedSpeed":1,"expectedFuelRate":1},
                      {"rpm":60,"expectedPower":1,"expectedSpeed":1,"expectedFuelRate":1}]"#;
        assert!(serde_json::from_str::<PowerCurve>(bad).is_err());
    }
}
