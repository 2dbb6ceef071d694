//! HullGuard: Hull Biofouling Intelligence
//!
//! Predicts biofouling growth on vessel hulls, quantifies its fuel, cost and
//! emissions impact, and recommends when to clean.
//!
//! ## Architecture
//!
//! - **Sensors**: synthetic hull readings from cleaning age, seeded per vessel
//! - **ML Engine**: fixed parametric growth model, forecasts, optimal cleaning point
//! - **Physics Engine**: digital twin comparing the clean-hull baseline to measured performance
//! - **Compliance**: NORMAM 401 on the 0-5 level and 0-100 % index scales
//! - **Analytics**: per-vessel reports, alerts, ROI
//! - **Fleet**: parallel fan-out, KPIs, strategy comparison, programme metrics

pub mod analytics;
pub mod compliance;
pub mod config;
pub mod error;
pub mod fleet;
pub mod ml_engine;
pub mod physics_engine;
pub mod pipeline;
pub mod sample;
pub mod sensors;
pub mod types;

// Re-export configuration
pub use config::{ConfigError, ModelConfig};

// Re-export errors
pub use error::{HullError, Result};

// Re-export commonly used types
pub use types::{
    AnalyticsReport, BiofoulingIndex, BiofoulingPrediction, ComplianceResult, DigitalTwin,
    ExtendedPrediction, FoulingLevel, OperationalData, PowerCurve, RiskLevel, SensorReading,
    Vessel,
};

// Re-export engines
pub use fleet::{FleetAggregator, PowerCurveTable};
pub use ml_engine::BiofoulingPredictor;
pub use physics_engine::DigitalTwinEngine;
pub use pipeline::{TwinAnalysis, VesselAnalysis, VesselPipeline};
pub use sensors::SensorSynthesizer;
