//! # Pile Axial Capacity
//!
//! Static capacity as shaft friction plus end bearing, with no interaction
//! between the two mechanisms. Unit resistances in kPa times areas in m²
//! give kN directly.

use serde::{Deserialize, Serialize};

use crate::equations::structures::{pile_shaft_area, unit_resistance_capacity};
use crate::errors::{ensure_non_negative, ensure_positive, CalcResult};

/// Input parameters for pile axial capacity.
///
/// ## JSON Example
///
/// ```json
/// {
///   "shaft_length_m": 20.0,
///   "perimeter_m": 1.2,
///   "tip_area_m2": 0.09,
///   "unit_skin_friction_kpa": 50.0,
///   "unit_end_bearing_kpa": 5000.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PileAxialInputs {
    /// Embedded shaft length (m), > 0
    pub shaft_length_m: f64,
    /// Shaft perimeter (m), > 0
    pub perimeter_m: f64,
    /// Tip area (m²), > 0
    pub tip_area_m2: f64,
    /// Unit skin friction q_s (kPa), ≥ 0
    pub unit_skin_friction_kpa: f64,
    /// Unit end bearing q_b (kPa), ≥ 0
    pub unit_end_bearing_kpa: f64,
}

impl PileAxialInputs {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("shaft_length_m", self.shaft_length_m)?;
        ensure_positive("perimeter_m", self.perimeter_m)?;
        ensure_positive("tip_area_m2", self.tip_area_m2)?;
        ensure_non_negative("unit_skin_friction_kpa", self.unit_skin_friction_kpa)?;
        ensure_non_negative("unit_end_bearing_kpa", self.unit_end_bearing_kpa)?;
        Ok(())
    }
}

/// Results from the pile capacity calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PileAxialResult {
    /// Shaft surface area A_s (m²)
    pub shaft_area_m2: f64,
    /// q_s·A_s (kN)
    pub skin_capacity_kn: f64,
    /// q_b·A_b (kN)
    pub end_bearing_capacity_kn: f64,
    /// Total Q (kN)
    pub capacity_kn: f64,
}

/// Calculate pile axial capacity.
pub fn calculate(input: &PileAxialInputs) -> CalcResult<PileAxialResult> {
    input.validate()?;

    let shaft_area_m2 = pile_shaft_area(input.perimeter_m, input.shaft_length_m);
    let skin_capacity_kn = unit_resistance_capacity(input.unit_skin_friction_kpa, shaft_area_m2);
    let end_bearing_capacity_kn = unit_resistance_capacity(input.unit_end_bearing_kpa, input.tip_area_m2);

    Ok(PileAxialResult {
        shaft_area_m2,
        skin_capacity_kn,
        end_bearing_capacity_kn,
        capacity_kn: skin_capacity_kn + end_bearing_capacity_kn,
    })
}
