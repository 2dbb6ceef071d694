//! Hydrodynamic models for the clean-hull baseline
//!
//! - Power curve interpolation (clamped at the table ends)
//! - Sea-state adjustment of expected speed and fuel
//! - Shaft power from torque and the drag estimate derived from it

use crate::config::defaults::{KNOTS_TO_MS, TORQUE_RPM_TO_KW};
use crate::config::TwinConfig;
use crate::types::{OperationalData, PowerCurve, PowerCurvePoint};

/// Expected clean-hull performance at `rpm`.
///
/// Linear between the bracketing table points, exact at table points, and
/// clamped to the first/last point outside the table. The returned point
/// carries the requested RPM.
pub fn interpolate_power_curve(curve: &PowerCurve, rpm: f64) -> PowerCurvePoint {
    let points = curve.points();
    let first = curve.first();
    let last = curve.last();

    if rpm <= first.rpm {
        return PowerCurvePoint { rpm, ..*first };
    }
    if rpm >= last.rpm {
        return PowerCurvePoint { rpm, ..*last };
    }

    // first.rpm < rpm < last.rpm, so an upper bracket with index >= 1 exists
    let upper_idx = points.iter().position(|p| p.rpm >= rpm).unwrap_or(points.len() - 1);
    let upper = &points[upper_idx];
    if upper.rpm == rpm {
        return *upper;
    }
    let lower = &points[upper_idx - 1];

    let fraction = (rpm - lower.rpm) / (upper.rpm - lower.rpm);
    let lerp = |a: f64, b: f64| a + fraction * (b - a);

    PowerCurvePoint {
        rpm,
        expected_power: lerp(lower.expected_power, upper.expected_power),
        expected_speed: lerp(lower.expected_speed, upper.expected_speed),
        expected_fuel_rate: lerp(lower.expected_fuel_rate, upper.expected_fuel_rate),
    }
}

/// Sea-state multipliers applied to the clean-hull baseline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentalFactors {
    pub wave: f64,
    pub wind: f64,
    pub current: f64,
    /// wave × wind × current
    pub speed_factor: f64,
    /// 1 / (wave × wind)
    pub fuel_factor: f64,
}

/// Adjust for waves, wind and the along-track current component.
///
/// With zero speed over ground the current term is undefined and the
/// current factor falls back to 1.0.
pub fn environmental_factors(data: &OperationalData, cfg: &TwinConfig) -> EnvironmentalFactors {
    let sea = &data.sea_conditions;

    let wave = (1.0 - sea.wave_height * cfg.wave_coefficient).max(cfg.wave_floor);
    let wind = (1.0 - sea.wind_speed * cfg.wind_coefficient).max(cfg.wind_floor);

    let current = if data.speed > 0.0 {
        let relative = (sea.current_direction - data.gps_position.heading).to_radians();
        1.0 + (sea.current_speed * relative.cos() / data.speed) * cfg.current_gain
    } else {
        1.0
    };

    EnvironmentalFactors {
        wave,
        wind,
        current,
        speed_factor: wave * wind * current,
        fuel_factor: 1.0 / (wave * wind),
    }
}

/// Shaft power (kW) = torque (N·m) × rpm × 2π / 60 000
pub fn power_from_torque(rpm: f64, torque: f64) -> f64 {
    torque * rpm * 2.0 * std::f64::consts::PI / TORQUE_RPM_TO_KW
}

/// Simplified drag estimate: clean drag + power / v³ × scale, v in m/s.
///
/// A vessel with no way on falls back to the clean-hull drag.
pub fn estimate_drag(power_kw: f64, speed_kn: f64, cfg: &TwinConfig) -> f64 {
    let velocity = speed_kn * KNOTS_TO_MS;
    if velocity <= f64::EPSILON {
        return cfg.clean_hull_drag;
    }
    cfg.clean_hull_drag + (power_kw / velocity.powi(3)) * cfg.drag_power_scale
}
