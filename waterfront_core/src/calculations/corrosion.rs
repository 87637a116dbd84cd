//! # Corrosion Allowance
//!
//! Remaining steel thickness under a constant corrosion rate. The result is
//! floored at zero (full section loss); that floor is physical and is never
//! used to mask invalid input.

use serde::{Deserialize, Serialize};

use crate::equations::structures::remaining_thickness;
use crate::errors::{ensure_non_negative, ensure_positive, CalcResult};

/// Input parameters for the corrosion allowance.
///
/// ## JSON Example
///
/// ```json
/// { "initial_thickness_mm": 12.0, "corrosion_rate_mm_per_year": 0.1, "service_years": 50.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrosionInputs {
    /// Initial thickness t₀ (mm), > 0
    pub initial_thickness_mm: f64,
    /// Loss rate (mm/yr), ≥ 0
    pub corrosion_rate_mm_per_year: f64,
    /// Service life (yr), ≥ 0
    pub service_years: f64,
}

impl CorrosionInputs {
    pub fn new(initial_thickness_mm: f64, corrosion_rate_mm_per_year: f64, service_years: f64) -> Self {
        CorrosionInputs {
            initial_thickness_mm,
            corrosion_rate_mm_per_year,
            service_years,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("initial_thickness_mm", self.initial_thickness_mm)?;
        ensure_non_negative("corrosion_rate_mm_per_year", self.corrosion_rate_mm_per_year)?;
        ensure_non_negative("service_years", self.service_years)?;
        Ok(())
    }
}

/// Results from the corrosion calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrosionResult {
    /// rate·years (mm), not clamped
    pub thickness_loss_mm: f64,
    /// max(0, t₀ − rate·years) (mm)
    pub remaining_thickness_mm: f64,
    /// True when the projected loss consumes the whole section
    pub fully_corroded: bool,
}

/// Calculate the remaining thickness.
pub fn calculate(input: &CorrosionInputs) -> CalcResult<CorrosionResult> {
    input.validate()?;

    let thickness_loss_mm = input.corrosion_rate_mm_per_year * input.service_years;
    let remaining_thickness_mm = remaining_thickness(
        input.initial_thickness_mm,
        input.corrosion_rate_mm_per_year,
        input.service_years,
    );

    Ok(CorrosionResult {
        thickness_loss_mm,
        remaining_thickness_mm,
        fully_corroded: remaining_thickness_mm == 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_loss() {
        let r = calculate(&CorrosionInputs::new(20.0, 0.2, 25.0)).unwrap();
        assert!((r.remaining_thickness_mm - 15.0).abs() < 1e-12);
        assert!(!r.fully_corroded);
    }

    #[test]
    fn test_clamped_at_zero() {
        let r = calculate(&CorrosionInputs::new(10.0, 0.5, 30.0)).unwrap();
        assert_eq!(r.remaining_thickness_mm, 0.0);
        assert!((r.thickness_loss_mm - 15.0).abs() < 1e-12);
        assert!(r.fully_corroded);

        // Exactly consumed
        let r = calculate(&CorrosionInputs::new(10.0, 0.5, 20.0)).unwrap();
        assert_eq!(r.remaining_thickness_mm, 0.0);
    }

    #[test]
    fn test_no_corrosion() {
        let r = calculate(&CorrosionInputs::new(12.0, 0.0, 50.0)).unwrap();
        assert_eq!(r.remaining_thickness_mm, 12.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(calculate(&CorrosionInputs::new(0.0, 0.1, 10.0)).is_err());
        assert!(calculate(&CorrosionInputs::new(10.0, -0.1, 10.0)).is_err());
        assert!(calculate(&CorrosionInputs::new(10.0, 0.1, -1.0)).is_err());
    }
}
