//! # Linear Wave Theory
//!
//! Dispersion relation and the wave properties derived from its root.
//!
//! ## Notation
//!
//! - `T` = Wave period (s)
//! - `h` = Still water depth (m)
//! - `ω` = Angular frequency 2π/T (rad/s)
//! - `k` = Wavenumber (1/m)
//! - `L` = Wavelength (m)
//! - `c` = Phase celerity (m/s)
//! - `c_g` = Group celerity (m/s)
//! - `n` = Group-to-phase celerity ratio
//!
//! ## References
//!
//! - USACE Coastal Engineering Manual, EM 1110-2-1100, Part II, Chapter 1
//! - Dean & Dalrymple, Water Wave Mechanics for Engineers and Scientists

use std::f64::consts::{PI, TAU};

use tracing::{debug, warn};

use crate::constants::GRAVITY_MPS2;
use crate::errors::{ensure_positive, CalcError, CalcResult};

/// Absolute step tolerance for the Newton-Raphson dispersion solve (1/m)
pub(crate) const DISPERSION_TOLERANCE: f64 = 1e-10;

/// Iteration cap for the Newton-Raphson dispersion solve
pub(crate) const DISPERSION_MAX_ITERATIONS: usize = 100;

/// Angular frequency ω = 2π/T
#[inline]
pub fn angular_frequency(period_s: f64) -> f64 {
    TAU / period_s
}

/// Deep-water wavenumber k₀ = ω²/g, the exact root as h → ∞
#[inline]
pub fn deep_water_wavenumber(omega: f64) -> f64 {
    omega * omega / GRAVITY_MPS2
}

/// Dispersion residual f(k) = g·k·tanh(kh) − ω²
#[inline]
pub fn dispersion_residual(k: f64, omega: f64, depth_m: f64) -> f64 {
    GRAVITY_MPS2 * k * (k * depth_m).tanh() - omega * omega
}

/// f′(k) = g·tanh(kh) + g·k·h·sech²(kh)
#[inline]
fn dispersion_slope(k: f64, depth_m: f64) -> f64 {
    let kh = k * depth_m;
    let sech = 1.0 / kh.cosh();
    GRAVITY_MPS2 * kh.tanh() + GRAVITY_MPS2 * kh * sech * sech
}

/// Solve ω² = g·k·tanh(kh) for the wavenumber k (1/m).
///
/// Newton-Raphson from the deep-water guess k₀ = ω²/g. Iteration stops once
/// the update step falls below [`DISPERSION_TOLERANCE`] or after
/// [`DISPERSION_MAX_ITERATIONS`] updates.
///
/// # Errors
///
/// * `InvalidInput` - period or depth is not a finite positive number
/// * `NumericalConvergence` - the iterate ends non-positive or non-finite
///
/// # Example
///
/// ```rust
/// use waterfront_core::equations::waves::solve_wavenumber;
///
/// let k = solve_wavenumber(10.0, 1000.0).unwrap();
/// // Deep water: k ≈ ω²/g ≈ 0.0403 1/m
/// assert!((k - 0.04026).abs() < 1e-4);
/// ```
pub fn solve_wavenumber(period_s: f64, depth_m: f64) -> CalcResult<f64> {
    ensure_positive("period_s", period_s)?;
    ensure_positive("depth_m", depth_m)?;

    let omega = angular_frequency(period_s);
    let mut k = deep_water_wavenumber(omega);
    let mut iterations = 0;
    let mut converged = false;

    while iterations < DISPERSION_MAX_ITERATIONS {
        let step = dispersion_residual(k, omega, depth_m) / dispersion_slope(k, depth_m);
        k -= step;
        iterations += 1;
        if step.abs() < DISPERSION_TOLERANCE {
            converged = true;
            break;
        }
    }

    if !(k > 0.0) || !k.is_finite() {
        warn!(period_s, depth_m, k, iterations, "dispersion solve produced an invalid root");
        return Err(CalcError::numerical_convergence(
            "dispersion",
            iterations,
            format!("wavenumber {} is not a positive finite root", k),
        ));
    }

    if converged {
        debug!(period_s, depth_m, k, iterations, "dispersion solve converged");
    } else {
        warn!(period_s, depth_m, k, iterations, "dispersion solve hit the iteration cap");
    }

    Ok(k)
}

/// Wavelength L = 2π/k
#[inline]
pub fn wavelength(k: f64) -> f64 {
    TAU / k
}

/// Phase celerity c = ω/k
#[inline]
pub fn phase_celerity(omega: f64, k: f64) -> f64 {
    omega / k
}

/// Group-to-phase celerity ratio n = ½·(1 + 2kh/sinh(2kh))
///
/// Evaluated as written for every depth. For very large kh, sinh overflows to
/// infinity and n takes its deep-water value of ½ exactly.
#[inline]
pub fn group_celerity_ratio(k: f64, depth_m: f64) -> f64 {
    let two_kh = 2.0 * k * depth_m;
    0.5 * (1.0 + two_kh / two_kh.sinh())
}

/// Deep-water group celerity c_g0 = g·T/(4π)
#[inline]
pub fn deep_water_group_celerity(period_s: f64) -> f64 {
    GRAVITY_MPS2 * period_s / (4.0 * PI)
}

/// Shoaling coefficient K_s = √(c_g0 / c_g)
#[inline]
pub fn shoaling_coefficient(deep_group_celerity: f64, group_celerity: f64) -> f64 {
    (deep_group_celerity / group_celerity).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residual_small_for_intermediate_depth() {
        let k = solve_wavenumber(8.0, 20.0).unwrap();
        let omega = angular_frequency(8.0);
        assert!(dispersion_residual(k, omega, 20.0).abs() < 1e-6);
    }

    #[test]
    fn test_deep_water_limit() {
        let omega = angular_frequency(10.0);
        let k = solve_wavenumber(10.0, 1000.0).unwrap();
        let k0 = deep_water_wavenumber(omega);
        assert!(((k - k0) / k0).abs() < 0.01);
    }

    #[test]
    fn test_very_shallow_converges() {
        let k = solve_wavenumber(1.0, 0.1).unwrap();
        assert!(k > 0.0);
        let k = solve_wavenumber(5.0, 2.0).unwrap();
        assert!(k > 0.0);
    }

    #[test]
    fn test_invalid_period_and_depth() {
        let err = solve_wavenumber(-1.0, 50.0).unwrap_err();
        assert_eq!(err.field(), Some("period_s"));
        let err = solve_wavenumber(10.0, 0.0).unwrap_err();
        assert_eq!(err.field(), Some("depth_m"));
        assert!(solve_wavenumber(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn test_deterministic() {
        let a = solve_wavenumber(7.3, 13.1).unwrap();
        let b = solve_wavenumber(7.3, 13.1).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_group_ratio_limits() {
        // Deep water: n -> 1/2
        assert!((group_celerity_ratio(1.0, 1000.0) - 0.5).abs() < 1e-12);
        // Shallow water: n -> 1
        assert!((group_celerity_ratio(0.01, 0.1) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_shoaling_unity_when_equal() {
        assert!((shoaling_coefficient(7.8, 7.8) - 1.0).abs() < 1e-15);
    }
}
