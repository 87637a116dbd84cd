//! # Physical Constants
//!
//! Process-wide immutable values shared by every model. They are plain
//! `const` items: there is no runtime configuration and nothing to initialize.

use serde::Serialize;

/// Standard gravitational acceleration (m/s²)
pub const GRAVITY_MPS2: f64 = 9.80665;

/// Seawater density (kg/m³)
pub const SEAWATER_DENSITY_KG_M3: f64 = 1025.0;

/// Fresh water density (kg/m³), for inland lakes and rivers
pub const FRESHWATER_DENSITY_KG_M3: f64 = 1000.0;

/// Air density at sea level (kg/m³)
pub const AIR_DENSITY_KG_M3: f64 = 1.225;

/// Gravity and fluid densities used by the models.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicalConstants {
    /// Gravitational acceleration g (m/s²)
    pub gravity_mps2: f64,
    /// Seawater density ρ_w (kg/m³)
    pub seawater_density_kg_m3: f64,
    /// Air density ρ_a (kg/m³)
    pub air_density_kg_m3: f64,
}

impl PhysicalConstants {
    /// The values every model in this crate is evaluated with
    pub const STANDARD: PhysicalConstants = PhysicalConstants {
        gravity_mps2: GRAVITY_MPS2,
        seawater_density_kg_m3: SEAWATER_DENSITY_KG_M3,
        air_density_kg_m3: AIR_DENSITY_KG_M3,
    };
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_values() {
        let c = PhysicalConstants::default();
        assert_eq!(c.gravity_mps2, 9.80665);
        assert_eq!(c.seawater_density_kg_m3, 1025.0);
        assert_eq!(c.air_density_kg_m3, 1.225);
    }
}
