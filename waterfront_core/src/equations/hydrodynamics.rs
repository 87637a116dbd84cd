//! # Hydrodynamic Loads and Scour
//!
//! Drag and inertia on slender piles, steady-flow drag on projected areas,
//! and the Froude-number scour screening relation.
//!
//! ## Notation
//!
//! - `ρ` = Fluid density (kg/m³)
//! - `C_d` = Drag coefficient, `C_m` = Inertia coefficient
//! - `D` = Pile diameter (m)
//! - `u` = Velocity amplitude (m/s), `a` = Acceleration amplitude (m/s²)
//! - `A` = Projected area normal to the flow (m²)
//! - `U` = Steady flow speed (m/s)
//!
//! ## References
//!
//! - Morison, O'Brien, Johnson & Schaaf (1950), "The Force Exerted by
//!   Surface Waves on Piles"
//! - USACE Coastal Engineering Manual, EM 1110-2-1100, Part VI, Chapter 5

use std::f64::consts::PI;

use crate::constants::GRAVITY_MPS2;

/// Drag term of the Morison equation per unit length: ½·ρ·C_d·D·u²
#[inline]
pub fn morison_drag_per_length(rho: f64, cd: f64, diameter_m: f64, u: f64) -> f64 {
    0.5 * rho * cd * diameter_m * u * u
}

/// Inertia term of the Morison equation per unit length: ρ·C_m·(πD²/4)·a
///
/// `a` enters linearly with its sign; callers pass the amplitude magnitude.
#[inline]
pub fn morison_inertia_per_length(rho: f64, cm: f64, diameter_m: f64, a: f64) -> f64 {
    rho * cm * (PI * diameter_m * diameter_m / 4.0) * a
}

/// Steady drag force F = ½·ρ·C_d·A·U² (N)
#[inline]
pub fn drag_force(rho: f64, cd: f64, area_m2: f64, speed_mps: f64) -> f64 {
    0.5 * rho * cd * area_m2 * speed_mps * speed_mps
}

/// Pile Froude number Fr_D = U/√(g·D)
#[inline]
pub fn pile_froude_number(speed_mps: f64, diameter_m: f64) -> f64 {
    speed_mps / (GRAVITY_MPS2 * diameter_m).sqrt()
}

/// Local scour depth y_s = K·D·Fr_D^m (m)
#[inline]
pub fn local_scour_depth(k: f64, diameter_m: f64, froude: f64, exponent: f64) -> f64 {
    k * diameter_m * froude.powf(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_morison_terms() {
        assert!((morison_drag_per_length(1025.0, 1.0, 1.0, 1.0) - 512.5).abs() < 1e-9);
        let inertia = morison_inertia_per_length(1025.0, 2.0, 1.0, 0.5);
        assert!((inertia - 805.033).abs() < 0.01);
    }

    #[test]
    fn test_drag_force() {
        // 0.5 * 1.225 * 1.0 * 100 * 20^2 = 24500
        assert!((drag_force(1.225, 1.0, 100.0, 20.0) - 24_500.0).abs() < 1e-9);
    }

    #[test]
    fn test_froude_and_scour() {
        let fr = pile_froude_number(0.0, 1.0);
        assert_eq!(fr, 0.0);
        assert_eq!(local_scour_depth(2.0, 1.0, fr, 1.0), 0.0);

        let fr = pile_froude_number((GRAVITY_MPS2 * 4.0).sqrt(), 4.0);
        assert!((fr - 1.0).abs() < 1e-12);
        assert!((local_scour_depth(2.0, 4.0, fr, 0.43) - 8.0).abs() < 1e-12);
    }
}
