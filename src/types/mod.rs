//! Shared data structures for the hull biofouling pipeline
//!
//! This module defines the value objects exchanged between the engines and
//! handed to the presentation layer:
//! - Fouling scales: `FoulingLevel` (0-5) and `BiofoulingIndex` (0-100 %)
//! - Reference data: `Vessel`, `Route`, `CleaningRecord`
//! - Telemetry: `SensorReading`, `OperationalData`
//! - Model: `ModelInput`, `ModelOutput`, `CleaningPoint`, `ModelMetadata`
//! - Outputs: `BiofoulingPrediction`, `DigitalTwin`, `VirtualSensor`,
//!   `ComplianceResult`, `AnalyticsReport`, `Alert`, fleet summaries

mod scale;
mod vessel;
mod telemetry;
mod ml;
mod prediction;
mod twin;
mod compliance;
mod report;
mod alert;
mod fleet;
pub mod thresholds;

pub use scale::*;
pub use vessel::*;
pub use telemetry::*;
pub use ml::*;
pub use prediction::*;
pub use twin::*;
pub use compliance::*;
pub use report::*;
pub use alert::*;
pub use fleet::*;
pub use thresholds::*;
