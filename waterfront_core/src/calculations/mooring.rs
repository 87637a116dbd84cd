//! # Mooring Environmental Load
//!
//! Steady wind and current drag on a moored vessel, summed and then
//! multiplied by a safety factor. Zero areas or speeds are valid and simply
//! remove that term.

use serde::{Deserialize, Serialize};

use crate::constants::{AIR_DENSITY_KG_M3, SEAWATER_DENSITY_KG_M3};
use crate::equations::hydrodynamics::drag_force;
use crate::errors::{ensure_non_negative, ensure_positive, CalcResult};

fn unity() -> f64 {
    1.0
}

fn default_safety_factor() -> f64 {
    1.5
}

/// Environmental load inputs.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wind_area_m2": 1200.0,
///   "current_area_m2": 300.0,
///   "wind_speed_mps": 25.0,
///   "current_speed_mps": 1.0,
///   "safety_factor": 1.5
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalLoadInputs {
    /// Projected above-water area (m²), ≥ 0
    pub wind_area_m2: f64,
    /// Projected underwater area (m²), ≥ 0
    pub current_area_m2: f64,
    /// Wind speed (m/s), ≥ 0
    pub wind_speed_mps: f64,
    /// Current speed (m/s), ≥ 0
    pub current_speed_mps: f64,
    /// Wind drag coefficient, ≥ 0
    #[serde(default = "unity")]
    pub wind_drag_coefficient: f64,
    /// Current drag coefficient, ≥ 0
    #[serde(default = "unity")]
    pub current_drag_coefficient: f64,
    /// Factor applied to the summed load, > 0
    #[serde(default = "default_safety_factor")]
    pub safety_factor: f64,
}

impl EnvironmentalLoadInputs {
    pub fn new(wind_area_m2: f64, current_area_m2: f64, wind_speed_mps: f64, current_speed_mps: f64) -> Self {
        EnvironmentalLoadInputs {
            wind_area_m2,
            current_area_m2,
            wind_speed_mps,
            current_speed_mps,
            wind_drag_coefficient: 1.0,
            current_drag_coefficient: 1.0,
            safety_factor: default_safety_factor(),
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("wind_area_m2", self.wind_area_m2)?;
        ensure_non_negative("current_area_m2", self.current_area_m2)?;
        ensure_non_negative("wind_speed_mps", self.wind_speed_mps)?;
        ensure_non_negative("current_speed_mps", self.current_speed_mps)?;
        ensure_non_negative("wind_drag_coefficient", self.wind_drag_coefficient)?;
        ensure_non_negative("current_drag_coefficient", self.current_drag_coefficient)?;
        ensure_positive("safety_factor", self.safety_factor)?;
        Ok(())
    }
}

/// Results from the mooring load calculation (N).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MooringResult {
    pub wind_load_n: f64,
    pub current_load_n: f64,
    /// F_wind + F_current, before the safety factor
    pub unfactored_load_n: f64,
    /// (F_wind + F_current)·SF
    pub total_load_n: f64,
}

/// Calculate the factored mooring load.
pub fn calculate(input: &EnvironmentalLoadInputs) -> CalcResult<MooringResult> {
    input.validate()?;

    let wind_load_n = drag_force(
        AIR_DENSITY_KG_M3,
        input.wind_drag_coefficient,
        input.wind_area_m2,
        input.wind_speed_mps,
    );
    let current_load_n = drag_force(
        SEAWATER_DENSITY_KG_M3,
        input.current_drag_coefficient,
        input.current_area_m2,
        input.current_speed_mps,
    );
    let unfactored_load_n = wind_load_n + current_load_n;

    Ok(MooringResult {
        wind_load_n,
        current_load_n,
        unfactored_load_n,
        total_load_n: unfactored_load_n * input.safety_factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superposition() {
        // Fw = 0.5*1.225*100*20^2 = 24500; Fc = 0.5*1025*50*1^2 = 25625
        let r = calculate(&EnvironmentalLoadInputs::new(100.0, 50.0, 20.0, 1.0)).unwrap();
        assert!((r.wind_load_n - 24_500.0).abs() < 1e-9);
        assert!((r.current_load_n - 25_625.0).abs() < 1e-9);
        assert!((r.total_load_n - 50_125.0 * 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_zero_terms_allowed() {
        let r = calculate(&EnvironmentalLoadInputs::new(0.0, 50.0, 0.0, 1.0)).unwrap();
        assert_eq!(r.wind_load_n, 0.0);
        let r = calculate(&EnvironmentalLoadInputs::new(0.0, 0.0, 0.0, 0.0)).unwrap();
        assert_eq!(r.total_load_n, 0.0);
    }

    #[test]
    fn test_safety_factor_scales_linearly() {
        let mut input = EnvironmentalLoadInputs::new(500.0, 200.0, 15.0, 0.8);
        input.safety_factor = 1.0;
        let f1 = calculate(&input).unwrap().total_load_n;
        input.safety_factor = 2.0;
        let f2 = calculate(&input).unwrap().total_load_n;
        assert!((f2 / f1 - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_invalid_inputs() {
        let mut input = EnvironmentalLoadInputs::new(100.0, 50.0, 20.0, 1.0);
        input.safety_factor = 0.0;
        assert_eq!(calculate(&input).unwrap_err().field(), Some("safety_factor"));
        assert!(calculate(&EnvironmentalLoadInputs::new(-1.0, 50.0, 20.0, 1.0)).is_err());
        assert!(calculate(&EnvironmentalLoadInputs::new(1.0, 50.0, 20.0, -1.0)).is_err());
    }
}
