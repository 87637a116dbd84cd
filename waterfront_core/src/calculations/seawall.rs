//! # Seawall Sliding Stability
//!
//! Factor of safety against sliding on the base. The result is reported as
//! a number; judging adequacy (commonly FS > 1.5) is left to the engineer.

use serde::{Deserialize, Serialize};

use crate::equations::structures::sliding_factor_of_safety;
use crate::errors::{ensure_positive, CalcResult};

/// Input parameters for the sliding check.
///
/// ## JSON Example
///
/// ```json
/// { "friction_coefficient": 0.6, "weight_kn": 1000.0, "thrust_kn": 400.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeawallInput {
    /// Base friction coefficient μ, > 0
    pub friction_coefficient: f64,
    /// Stabilizing weight W (kN), > 0
    pub weight_kn: f64,
    /// Horizontal thrust T (kN), > 0
    pub thrust_kn: f64,
}

impl SeawallInput {
    pub fn new(friction_coefficient: f64, weight_kn: f64, thrust_kn: f64) -> Self {
        SeawallInput {
            friction_coefficient,
            weight_kn,
            thrust_kn,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("friction_coefficient", self.friction_coefficient)?;
        ensure_positive("weight_kn", self.weight_kn)?;
        ensure_positive("thrust_kn", self.thrust_kn)?;
        Ok(())
    }
}

/// Results from the sliding check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeawallResult {
    /// μ·W (kN)
    pub resisting_force_kn: f64,
    /// μ·W/T
    pub sliding_factor_of_safety: f64,
}

/// Calculate the sliding factor of safety.
pub fn calculate(input: &SeawallInput) -> CalcResult<SeawallResult> {
    input.validate()?;

    Ok(SeawallResult {
        resisting_force_kn: input.friction_coefficient * input.weight_kn,
        sliding_factor_of_safety: sliding_factor_of_safety(
            input.friction_coefficient,
            input.weight_kn,
            input.thrust_kn,
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sliding_fs() {
        let r = calculate(&SeawallInput::new(0.6, 1000.0, 400.0)).unwrap();
        assert!((r.resisting_force_kn - 600.0).abs() < 1e-12);
        assert!((r.sliding_factor_of_safety - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_below_unity_is_still_reported() {
        let r = calculate(&SeawallInput::new(0.4, 500.0, 400.0)).unwrap();
        assert!((r.sliding_factor_of_safety - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_inputs() {
        let err = calculate(&SeawallInput::new(0.6, -100.0, 400.0)).unwrap_err();
        assert_eq!(err.field(), Some("weight_kn"));
        assert!(calculate(&SeawallInput::new(0.0, 100.0, 400.0)).is_err());
        assert!(calculate(&SeawallInput::new(0.6, 100.0, 0.0)).is_err());
    }
}
