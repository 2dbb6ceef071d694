//! Growth Prediction Engine
//!
//! Fixed parametric model of hull biofouling growth. Nothing is trained at
//! runtime; the model metadata describes the offline calibration.
//!
//! ## Architecture
//! - `environment`: route type and seasonal factor from voyage and calendar
//! - `predictor`: growth rate, fouling level, confidence and cleaning point
//! - `forecast`: weekly level forecast and the index-based extended projection

pub mod environment;
pub mod forecast;
pub mod predictor;

pub use environment::{infer_route_type, seasonal_factor, seasonal_factor_at};
pub use forecast::{extended_prediction, forecast_vessel, model_input, VesselForecast};
pub use predictor::BiofoulingPredictor;
