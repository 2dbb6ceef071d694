//! Fixed fouling thresholds shared by risk classification and alerting

/// Risk bands on the 0-5 fouling level scale
pub mod fouling_thresholds {
    /// Level at or above which risk is medium
    pub const RISK_MEDIUM: f64 = 2.5;
    /// Level at or above which risk is high
    pub const RISK_HIGH: f64 = 3.5;
    /// Level at or above which risk is critical
    pub const RISK_CRITICAL: f64 = 4.5;
}

/// Trend bands on the 0-100 % biofouling index
pub mod index_thresholds {
    /// Index above this is reported as an increasing trend (%)
    pub const TREND_INCREASING: f64 = 45.0;
    /// Index above this (and not increasing) is reported as stable (%)
    pub const TREND_STABLE: f64 = 30.0;
    /// Projected index above this calls for urgent cleaning (%)
    pub const ACTION_URGENT: f64 = 70.0;
    /// Projected index above this calls for scheduling a cleaning (%)
    pub const ACTION_SCHEDULE: f64 = 50.0;
}
