//! # Local Scour at a Pile
//!
//! Screening estimate y_s = K·D·Fr_D^m with the pile Froude number
//! Fr_D = U/√(gD). K and m are tunable; the defaults (2.0, 1.0) are a
//! conservative starting point, not a calibrated design method.

use serde::{Deserialize, Serialize};

use crate::equations::hydrodynamics::{local_scour_depth, pile_froude_number};
use crate::errors::{ensure_non_negative, ensure_positive, CalcResult};

fn default_scour_coefficient() -> f64 {
    2.0
}

fn default_scour_exponent() -> f64 {
    1.0
}

/// Input parameters for local scour.
///
/// ## JSON Example
///
/// ```json
/// { "diameter_m": 1.0, "current_speed_mps": 1.5, "coefficient": 2.0, "exponent": 1.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScourInput {
    /// Pile diameter D (m), > 0
    pub diameter_m: f64,
    /// Depth-averaged current U (m/s), ≥ 0
    pub current_speed_mps: f64,
    /// Scour coefficient K, > 0
    #[serde(default = "default_scour_coefficient")]
    pub coefficient: f64,
    /// Froude exponent m, > 0
    #[serde(default = "default_scour_exponent")]
    pub exponent: f64,
}

impl ScourInput {
    pub fn new(diameter_m: f64, current_speed_mps: f64) -> Self {
        ScourInput {
            diameter_m,
            current_speed_mps,
            coefficient: default_scour_coefficient(),
            exponent: default_scour_exponent(),
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("diameter_m", self.diameter_m)?;
        ensure_non_negative("current_speed_mps", self.current_speed_mps)?;
        ensure_positive("coefficient", self.coefficient)?;
        ensure_positive("exponent", self.exponent)?;
        Ok(())
    }
}

/// Results from the scour calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScourResult {
    /// Fr_D = U/√(gD)
    pub pile_froude_number: f64,
    /// y_s (m)
    pub scour_depth_m: f64,
}

/// Calculate the screening scour depth.
pub fn calculate(input: &ScourInput) -> CalcResult<ScourResult> {
    input.validate()?;

    let froude = pile_froude_number(input.current_speed_mps, input.diameter_m);
    Ok(ScourResult {
        pile_froude_number: froude,
        scour_depth_m: local_scour_depth(input.coefficient, input.diameter_m, froude, input.exponent),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_current_zero_scour() {
        let r = calculate(&ScourInput::new(1.0, 0.0)).unwrap();
        assert_eq!(r.scour_depth_m, 0.0);
    }

    #[test]
    fn test_default_coefficients() {
        // 2 * 1 * 1.5/sqrt(9.80665) = 0.958
        let r = calculate(&ScourInput::new(1.0, 1.5)).unwrap();
        assert!((r.scour_depth_m - 0.958).abs() < 1e-3);
    }

    #[test]
    fn test_increases_with_speed() {
        let mut prev = -1.0;
        for u in [0.0, 0.25, 0.5, 1.0, 2.0, 3.0] {
            let mut input = ScourInput::new(1.2, u);
            input.exponent = 0.43;
            let ys = calculate(&input).unwrap().scour_depth_m;
            assert!(ys > prev);
            prev = ys;
        }
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(calculate(&ScourInput::new(0.0, 1.0)).is_err());
        assert!(calculate(&ScourInput::new(1.0, -0.1)).is_err());
        let mut input = ScourInput::new(1.0, 1.0);
        input.exponent = 0.0;
        assert_eq!(calculate(&input).unwrap_err().field(), Some("exponent"));
        input.exponent = 1.0;
        input.coefficient = -2.0;
        assert_eq!(calculate(&input).unwrap_err().field(), Some("coefficient"));
    }
}
