//! Voyage environment inference for the growth model

use chrono::{DateTime, Datelike, Utc};

use crate::config::GrowthConfig;
use crate::types::{Route, RouteType};

/// River when either end of the voyage is a configured river port,
/// otherwise coastal.
pub fn infer_route_type(route: &Route, river_ports: &[String]) -> RouteType {
    if river_ports.iter().any(|port| route.touches(port)) {
        RouteType::River
    } else {
        RouteType::Coastal
    }
}

/// Southern-hemisphere summer (November to March) accelerates growth.
///
/// `month` is 1-based.
pub fn seasonal_factor(month: u32, growth: &GrowthConfig) -> f64 {
    match month {
        11 | 12 | 1..=3 => growth.summer_seasonal_factor,
        _ => 1.0,
    }
}

/// Seasonal factor for the calendar month of `at`
pub fn seasonal_factor_at(at: DateTime<Utc>, growth: &GrowthConfig) -> f64 {
    seasonal_factor(at.month(), growth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::demo_fleet;

    #[test]
    fn test_route_type_from_ports() {
        let growth = GrowthConfig::default();
        let fleet = demo_fleet();
        assert_eq!(infer_route_type(&fleet[0].current_route, &growth.river_ports), RouteType::Coastal);
        assert_eq!(infer_route_type(&fleet[2].current_route, &growth.river_ports), RouteType::River);
        assert_eq!(infer_route_type(&fleet[2].current_route, &[]), RouteType::Coastal);
    }

    #[test]
    fn test_seasonal_factor() {
        let growth = GrowthConfig::default();
        for month in [11, 12, 1, 2, 3] {
            assert_eq!(seasonal_factor(month, &growth), 1.2);
        }
        for month in 4..=10 {
            assert_eq!(seasonal_factor(month, &growth), 1.0);
        }
    }
}
