//! # Linear Wave Properties
//!
//! Solves the dispersion relation once for a (period, depth) pair and derives
//! wavelength, phase and group celerity, and the shoaling coefficient.
//!
//! ## Example
//!
//! ```rust
//! use waterfront_core::calculations::waves::{calculate, WaveInput};
//!
//! let result = calculate(&WaveInput::new(10.0, 50.0)).unwrap();
//! assert!(result.wavelength_m > 0.0);
//! assert!(result.group_celerity_mps <= result.celerity_mps);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::waves::{
    angular_frequency, deep_water_group_celerity, group_celerity_ratio, phase_celerity,
    shoaling_coefficient, solve_wavenumber, wavelength,
};
use crate::errors::{ensure_positive, CalcResult};

/// Relative depth h/L at or above which water is classed as deep
pub const DEEP_WATER_RELATIVE_DEPTH: f64 = 0.5;

/// Relative depth h/L at or below which water is classed as shallow
pub const SHALLOW_WATER_RELATIVE_DEPTH: f64 = 0.05;

/// Input parameters for linear wave properties.
///
/// ## JSON Example
///
/// ```json
/// { "period_s": 10.0, "depth_m": 50.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveInput {
    /// Wave period T (s), > 0
    pub period_s: f64,

    /// Still water depth h (m), > 0
    pub depth_m: f64,

    /// Deep-water group celerity c_g0 (m/s) for the shoaling coefficient.
    /// When absent, g·T/(4π) is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deep_water_group_celerity_mps: Option<f64>,
}

impl WaveInput {
    pub fn new(period_s: f64, depth_m: f64) -> Self {
        WaveInput {
            period_s,
            depth_m,
            deep_water_group_celerity_mps: None,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("period_s", self.period_s)?;
        ensure_positive("depth_m", self.depth_m)?;
        if let Some(cg0) = self.deep_water_group_celerity_mps {
            ensure_positive("deep_water_group_celerity_mps", cg0)?;
        }
        Ok(())
    }
}

/// Informational depth classification by relative depth h/L.
///
/// Reported alongside the results only; every formula is evaluated the same
/// way regardless of regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepthRegime {
    Shallow,
    Intermediate,
    Deep,
}

impl DepthRegime {
    pub fn classify(relative_depth: f64) -> Self {
        if relative_depth >= DEEP_WATER_RELATIVE_DEPTH {
            DepthRegime::Deep
        } else if relative_depth <= SHALLOW_WATER_RELATIVE_DEPTH {
            DepthRegime::Shallow
        } else {
            DepthRegime::Intermediate
        }
    }
}

/// Results from the wave property calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveResult {
    /// Wavenumber k (1/m)
    pub wavenumber_per_m: f64,

    /// Wavelength L = 2π/k (m)
    pub wavelength_m: f64,

    /// Phase celerity c = ω/k (m/s)
    pub celerity_mps: f64,

    /// Group-to-phase celerity ratio n
    pub group_celerity_ratio: f64,

    /// Group celerity c_g = n·c (m/s)
    pub group_celerity_mps: f64,

    /// Shoaling coefficient K_s = √(c_g0/c_g)
    pub shoaling_coefficient: f64,

    /// Relative depth h/L
    pub relative_depth: f64,

    /// Depth classification (informational)
    pub depth_regime: DepthRegime,
}

/// Calculate linear wave properties.
///
/// The dispersion solver runs exactly once; every other quantity is derived
/// from its wavenumber.
///
/// # Errors
///
/// * `InvalidInput` - non-positive period, depth or supplied c_g0
/// * `NumericalConvergence` - the dispersion solve failed
pub fn calculate(input: &WaveInput) -> CalcResult<WaveResult> {
    input.validate()?;

    let omega = angular_frequency(input.period_s);
    let k = solve_wavenumber(input.period_s, input.depth_m)?;

    let wavelength_m = wavelength(k);
    let celerity_mps = phase_celerity(omega, k);
    let n = group_celerity_ratio(k, input.depth_m);
    let group_celerity_mps = n * celerity_mps;

    let cg0 = input
        .deep_water_group_celerity_mps
        .unwrap_or_else(|| deep_water_group_celerity(input.period_s));
    let relative_depth = input.depth_m / wavelength_m;

    Ok(WaveResult {
        wavenumber_per_m: k,
        wavelength_m,
        celerity_mps,
        group_celerity_ratio: n,
        group_celerity_mps,
        shoaling_coefficient: shoaling_coefficient(cg0, group_celerity_mps),
        relative_depth,
        depth_regime: DepthRegime::classify(relative_depth),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    use crate::constants::GRAVITY_MPS2;

    #[test]
    fn test_wavelength_wavenumber_product() {
        for (t, h) in [(10.0, 50.0), (4.0, 2.0), (12.0, 300.0), (1.0, 0.1)] {
            let r = calculate(&WaveInput::new(t, h)).unwrap();
            assert!((r.wavelength_m * r.wavenumber_per_m - TAU).abs() < 1e-12);
        }
    }

    #[test]
    fn test_intermediate_depth_values() {
        // T = 10 s, h = 50 m: L ~ 151.3 m (deep-water L0 = 156.1 m)
        let r = calculate(&WaveInput::new(10.0, 50.0)).unwrap();
        assert!((r.wavelength_m - 151.3).abs() < 0.5);
        assert_eq!(r.depth_regime, DepthRegime::Intermediate);
        assert!(r.group_celerity_mps < r.celerity_mps);
    }

    #[test]
    fn test_shallow_water_celerity() {
        let r = calculate(&WaveInput::new(10.0, 0.5)).unwrap();
        let shallow = (GRAVITY_MPS2 * 0.5).sqrt();
        assert!(((r.celerity_mps - shallow) / shallow).abs() < 0.05);
        assert_eq!(r.depth_regime, DepthRegime::Shallow);
    }

    #[test]
    fn test_deep_water_shoaling_near_unity() {
        let r = calculate(&WaveInput::new(8.0, 1000.0)).unwrap();
        assert_eq!(r.depth_regime, DepthRegime::Deep);
        assert!((r.shoaling_coefficient - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_supplied_deep_water_group_celerity() {
        let mut input = WaveInput::new(10.0, 10.0);
        input.deep_water_group_celerity_mps = Some(15.0);
        let r = calculate(&input).unwrap();
        assert!((r.shoaling_coefficient - (15.0 / r.group_celerity_mps).sqrt()).abs() < 1e-12);
        assert!(r.shoaling_coefficient > 0.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(calculate(&WaveInput::new(-1.0, 50.0)).is_err());
        assert!(calculate(&WaveInput::new(10.0, -5.0)).is_err());
        let mut input = WaveInput::new(10.0, 10.0);
        input.deep_water_group_celerity_mps = Some(0.0);
        assert_eq!(calculate(&input).unwrap_err().field(), Some("deep_water_group_celerity_mps"));
    }

    #[test]
    fn test_json_defaults() {
        let input: WaveInput = serde_json::from_str(r#"{"period_s": 8.0, "depth_m": 20.0}"#).unwrap();
        assert_eq!(input, WaveInput::new(8.0, 20.0));
    }
}
