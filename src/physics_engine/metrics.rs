//! Numeric helpers shared by every engine

use chrono::{DateTime, Duration, Utc};

/// Round half away from zero to `decimals` places.
///
/// Every published figure goes through this so dashboards, reports and
/// alerts agree to the last digit.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Relative change of `actual` over `reference`, in percent.
///
/// Returns 0.0 when the reference is zero or not finite.
pub fn percent_delta(actual: f64, reference: f64) -> f64 {
    if reference == 0.0 || !reference.is_finite() {
        return 0.0;
    }
    (actual - reference) / reference * 100.0
}

/// Shortfall of `actual` under `reference`, in percent. Positive when
/// `actual` is below `reference`.
pub fn percent_shortfall(actual: f64, reference: f64) -> f64 {
    -percent_delta(actual, reference)
}

/// Floor a non-negative day count into `u32`, saturating at `cap`.
///
/// Negative and NaN inputs map to 0.
pub fn floor_days(days: f64, cap: u32) -> u32 {
    if days.is_nan() || days <= 0.0 {
        return 0;
    }
    let floored = days.floor();
    if floored >= f64::from(cap) {
        cap
    } else {
        // in [0, cap) so the cast is exact
        floored as u32
    }
}

/// `now` plus whole days, saturating at the latest representable instant
pub fn days_after(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    now.checked_add_signed(Duration::days(i64::from(days)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(2.583_36, 2), 2.58);
        assert_eq!(round_to(0.028_704, 4), 0.0287);
        assert_eq!(round_to(12.345, 1), 12.3);
        assert_eq!(round_to(-1.25, 1), -1.3);
    }

    #[test]
    fn test_percent_delta_zero_reference() {
        assert_eq!(percent_delta(5.0, 0.0), 0.0);
        assert_eq!(percent_shortfall(5.0, 0.0), 0.0);
        assert!((percent_delta(1200.0, 800.0) - 50.0).abs() < 1e-9);
        assert!((percent_shortfall(9.0, 10.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_floor_days_saturates() {
        assert_eq!(floor_days(74.9, 999), 74);
        assert_eq!(floor_days(-3.0, 999), 0);
        assert_eq!(floor_days(f64::NAN, 999), 0);
        assert_eq!(floor_days(f64::INFINITY, 999), 999);
        assert_eq!(floor_days(5000.0, 999), 999);
    }

    #[test]
    fn test_days_after_saturates() {
        use chrono::TimeZone;
        let now = Utc.with_ymd_and_hms(2024, 11, 28, 12, 0, 0).unwrap();
        assert_eq!(days_after(now, 7), now + Duration::days(7));
        assert_eq!(days_after(now, u32::MAX), DateTime::<Utc>::MAX_UTC);
    }
}
