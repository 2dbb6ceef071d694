//! Per-vessel Processing Pipeline
//!
//! ```text
//! PHASE 1: Cleaning age (days since last cleaning at `now`)
//! PHASE 2: Sensor synthesis (seeded per vessel)
//! PHASE 3: Growth prediction + optimal cleaning point
//! PHASE 4: Analytics report (fuel, GHG, compliance, recommendations)
//! ```
//!
//! The digital twin path is separate: it needs an operational frame and a
//! power curve, neither of which the synthetic phases produce.
//!
//! Phases run sequentially for one vessel. Fleet-wide fan-out lives in
//! `fleet`, which calls into this pipeline once per vessel.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::analytics::generate_report;
use crate::config::ModelConfig;
use crate::error::Result;
use crate::fleet::PowerCurveTable;
use crate::ml_engine::{extended_prediction, forecast_vessel, BiofoulingPredictor, VesselForecast};
use crate::physics_engine::{generate_virtual_sensors, DigitalTwinEngine};
use crate::sensors::{vessel_rng, SensorSynthesizer};
use crate::types::{
    AnalyticsReport, DigitalTwin, ExtendedPrediction, OperationalData, SensorReading, Vessel,
    VirtualSensor,
};

/// Everything the sequential phases produce for one vessel
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VesselAnalysis {
    pub vessel_id: String,
    pub days_since_cleaning: u32,
    pub sensor: SensorReading,
    pub forecast: VesselForecast,
    pub report: AnalyticsReport,
}

/// Twin, derived sensors and the index-based projection for one frame
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TwinAnalysis {
    pub twin: DigitalTwin,
    pub virtual_sensors: Vec<VirtualSensor>,
    pub extended: ExtendedPrediction,
}

/// Runs the phases for one vessel at a time
#[derive(Debug, Clone)]
pub struct VesselPipeline<'a> {
    config: &'a ModelConfig,
    predictor: BiofoulingPredictor<'a>,
    synthesizer: SensorSynthesizer,
    seed: u64,
}

impl<'a> VesselPipeline<'a> {
    /// `seed` fixes the sensor noise of every vessel for this run
    pub fn new(config: &'a ModelConfig, seed: u64) -> Self {
        Self {
            config,
            predictor: BiofoulingPredictor::new(config),
            synthesizer: SensorSynthesizer::new(&config.sensors, &config.economics),
            seed,
        }
    }

    pub fn config(&self) -> &'a ModelConfig {
        self.config
    }

    pub fn predictor(&self) -> &BiofoulingPredictor<'a> {
        &self.predictor
    }

    pub fn synthesizer(&self) -> &SensorSynthesizer {
        &self.synthesizer
    }

    /// PHASES 1-2. The same vessel and seed always read the same.
    pub fn reading(&self, vessel: &Vessel, now: DateTime<Utc>) -> SensorReading {
        let days = vessel.days_since_cleaning(now);
        let mut rng = vessel_rng(self.seed, &vessel.id);
        self.synthesizer.synthesize(&vessel.id, days, now, &mut rng)
    }

    /// PHASES 1-3
    pub fn forecast(&self, vessel: &Vessel, now: DateTime<Utc>) -> Result<(SensorReading, VesselForecast)> {
        let sensor = self.reading(vessel, now);
        let forecast = forecast_vessel(&self.predictor, vessel, &sensor, now)?;
        Ok((sensor, forecast))
    }

    /// PHASES 1-4
    pub fn analyze(&self, vessel: &Vessel, now: DateTime<Utc>) -> Result<VesselAnalysis> {
        let (sensor, forecast) = self.forecast(vessel, now)?;
        let report = generate_report(vessel, &sensor, &forecast.prediction, self.config, now)?;

        debug!(
            vessel = %vessel.id,
            level = sensor.fouling_level,
            risk = %forecast.prediction.risk_level,
            status = %report.compliance.status,
            "Vessel analysis complete"
        );

        Ok(VesselAnalysis {
            vessel_id: vessel.id.clone(),
            days_since_cleaning: forecast.input.days_since_cleaning,
            sensor,
            forecast,
            report,
        })
    }

    /// Twin path: power curve lookup, twin, virtual sensors, projection
    pub fn twin(
        &self,
        vessel: &Vessel,
        operational: &OperationalData,
        history: &[OperationalData],
        curves: &PowerCurveTable,
        now: DateTime<Utc>,
    ) -> Result<TwinAnalysis> {
        let curve = curves.for_vessel(vessel)?;
        let twin = DigitalTwinEngine::new(&self.config.twin)
            .compute_twin(&vessel.id, operational, curve, history, now)?;
        let virtual_sensors = generate_virtual_sensors(&twin, operational, now);

        let mut rng = vessel_rng(self.seed, &vessel.id);
        let extended = extended_prediction(&vessel.id, twin.biofouling_index, now, &mut rng, self.config);

        Ok(TwinAnalysis {
            twin,
            virtual_sensors,
            extended,
        })
    }
}
