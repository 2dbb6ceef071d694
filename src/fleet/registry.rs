//! Reference data lookups: vessels by id, power curves by vessel class

use std::collections::HashMap;

use crate::error::{HullError, Result};
use crate::types::{PowerCurve, Vessel, VesselType};

pub fn find_vessel<'a>(fleet: &'a [Vessel], vessel_id: &str) -> Result<&'a Vessel> {
    fleet
        .iter()
        .find(|v| v.id == vessel_id)
        .ok_or_else(|| HullError::VesselNotFound(vessel_id.to_string()))
}

/// Clean-hull power curves keyed by vessel class
#[derive(Debug, Clone, Default)]
pub struct PowerCurveTable {
    curves: HashMap<VesselType, PowerCurve>,
}

impl PowerCurveTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace the curve for a class
    pub fn insert(&mut self, vessel_type: VesselType, curve: PowerCurve) {
        self.curves.insert(vessel_type, curve);
    }

    pub fn get(&self, vessel_type: VesselType) -> Result<&PowerCurve> {
        self.curves
            .get(&vessel_type)
            .ok_or(HullError::PowerCurveNotFound(vessel_type))
    }

    pub fn for_vessel(&self, vessel: &Vessel) -> Result<&PowerCurve> {
        self.get(vessel.vessel_type)
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}
