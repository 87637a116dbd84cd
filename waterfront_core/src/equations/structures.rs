//! # Berthing, Capacity and Durability Formulas
//!
//! Closed-form screening relations for fenders, piles, steel section loss
//! and gravity-wall sliding. All functions are unit-agnostic arithmetic; the
//! calculation modules own the unit conversions and validation.
//!
//! ## References
//!
//! - PIANC WG 33 (2002), Guidelines for the Design of Fender Systems
//! - FHWA-NHI-16-009, Design and Construction of Driven Pile Foundations
//! - USACE EM 1110-2-2502, Retaining and Flood Walls

/// Berthing energy E = ½·m·v²·C_e·C_c·C_s (J, with m in kg and v in m/s)
#[inline]
pub fn berthing_energy(mass_kg: f64, speed_mps: f64, ce: f64, cc: f64, cs: f64) -> f64 {
    0.5 * mass_kg * speed_mps * speed_mps * ce * cc * cs
}

/// Fender reaction R = E/(η·δ) (N, with E in J and δ in m)
#[inline]
pub fn fender_reaction(energy_j: f64, efficiency: f64, deflection_m: f64) -> f64 {
    energy_j / (efficiency * deflection_m)
}

/// Pile shaft surface area A_s = perimeter · length
#[inline]
pub fn pile_shaft_area(perimeter_m: f64, shaft_length_m: f64) -> f64 {
    perimeter_m * shaft_length_m
}

/// Resistance q·A; kPa·m² yields kN directly
#[inline]
pub fn unit_resistance_capacity(unit_resistance_kpa: f64, area_m2: f64) -> f64 {
    unit_resistance_kpa * area_m2
}

/// Remaining thickness t = max(0, t₀ − r·years)
#[inline]
pub fn remaining_thickness(initial_mm: f64, rate_mm_per_year: f64, years: f64) -> f64 {
    (initial_mm - rate_mm_per_year * years).max(0.0)
}

/// Sliding factor of safety FS = μ·W/T
#[inline]
pub fn sliding_factor_of_safety(mu: f64, weight_kn: f64, thrust_kn: f64) -> f64 {
    mu * weight_kn / thrust_kn
}
