//! Model Configuration Module
//!
//! Every coefficient of the growth model, digital twin, compliance regimes
//! and economics lives in one `ModelConfig`, loaded from TOML.
//!
//! ## Loading Order
//!
//! 1. `HULLGUARD_CONFIG` environment variable (path to TOML file)
//! 2. `hullguard.toml` in the current working directory
//! 3. Built-in defaults (the reference constants)
//!
//! ## Usage
//!
//! There is no global instance. Load once and pass a reference to the
//! engines that need it:
//!
//! ```ignore
//! let config = ModelConfig::load();
//! let predictor = BiofoulingPredictor::new(&config);
//! ```

mod model_config;
pub mod defaults;
pub mod validation;

pub use model_config::*;
