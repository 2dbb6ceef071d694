//! Analytics: per-vessel reports, operator alerts and programme ROI
//!
//! - `report`: fuel and GHG deltas, level-scale compliance, ranked recommendations
//! - `alerts`: critical / warning / high-consumption alerts ordered by priority
//! - `roi`: return on investment of the monitoring programme

pub mod alerts;
pub mod report;
pub mod roi;

pub use alerts::generate_alerts;
pub use report::generate_report;
pub use roi::calculate_roi;
