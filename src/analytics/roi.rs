//! Return on investment of the monitoring programme

use crate::error::{ensure_non_negative, Result};
use crate::physics_engine::metrics::round_to;
use crate::types::RoiSummary;

/// ROI over `months` of operation.
///
/// Payback is None when monthly savings do not exceed the operating cost.
pub fn calculate_roi(
    implementation_cost: f64,
    monthly_operational_cost: f64,
    monthly_savings: f64,
    months: u32,
) -> Result<RoiSummary> {
    ensure_non_negative("implementation_cost", implementation_cost)?;
    ensure_non_negative("monthly_operational_cost", monthly_operational_cost)?;
    ensure_non_negative("monthly_savings", monthly_savings)?;

    let months = f64::from(months);
    let total_cost = implementation_cost + monthly_operational_cost * months;
    let total_savings = monthly_savings * months;
    let net_benefit = total_savings - total_cost;
    let roi = if total_cost > 0.0 {
        net_benefit / total_cost * 100.0
    } else {
        0.0
    };

    let monthly_net = monthly_savings - monthly_operational_cost;
    let payback_period = (monthly_net > 0.0).then(|| round_to(implementation_cost / monthly_net, 1));

    Ok(RoiSummary {
        total_cost: round_to(total_cost, 2),
        total_savings: round_to(total_savings, 2),
        net_benefit: round_to(net_benefit, 2),
        roi: round_to(roi, 2),
        payback_period,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roi_two_years() {
        let roi = calculate_roi(500_000.0, 20_000.0, 80_000.0, 24).unwrap();
        assert_eq!(roi.total_cost, 980_000.0);
        assert_eq!(roi.total_savings, 1_920_000.0);
        assert_eq!(roi.net_benefit, 940_000.0);
        assert_eq!(roi.roi, 95.92);
        assert_eq!(roi.payback_period, Some(8.3));
    }

    #[test]
    fn test_no_payback_when_savings_do_not_cover_costs() {
        let roi = calculate_roi(100_000.0, 30_000.0, 30_000.0, 12).unwrap();
        assert_eq!(roi.payback_period, None);
        assert!(roi.net_benefit < 0.0);
    }

    #[test]
    fn test_zero_cost_programme() {
        let roi = calculate_roi(0.0, 0.0, 0.0, 0).unwrap();
        assert_eq!(roi.roi, 0.0);
        assert_eq!(roi.payback_period, None);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(calculate_roi(-1.0, 0.0, 0.0, 12).is_err());
        assert!(calculate_roi(0.0, f64::NAN, 0.0, 12).is_err());
    }
}
