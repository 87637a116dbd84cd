//! # Berthing Energy and Fender Reaction
//!
//! Kinetic energy of a berthing vessel, reduced by the PIANC modification
//! coefficients, and the fender reaction needed to absorb it.
//!
//! Vessel mass is entered in metric tonnes and approach speed in knots;
//! both are converted to SI before the energy is computed.
//!
//! ## Example
//!
//! ```rust
//! use waterfront_core::calculations::berthing::{calculate, BerthingInput};
//!
//! let result = calculate(&BerthingInput::new(10_000.0, 0.3)).unwrap();
//! println!("E = {:.0} J, R = {:.1} kN", result.energy_j, result.fender_reaction_kn);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::structures;
use crate::errors::{ensure_non_negative, ensure_positive, CalcResult};
use crate::units::{Joules, Kilograms, Kilonewtons, Knots, MetersPerSecond, Newtons, Tonnes};

fn unity() -> f64 {
    1.0
}

fn default_efficiency() -> f64 {
    0.7
}

fn default_deflection_m() -> f64 {
    0.5
}

/// Berthing energy modification coefficients (dimensionless, default 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BerthingCoefficients {
    /// Eccentricity coefficient C_e
    #[serde(default = "unity")]
    pub eccentricity: f64,
    /// Berth configuration coefficient C_c
    #[serde(default = "unity")]
    pub configuration: f64,
    /// Softness coefficient C_s
    #[serde(default = "unity")]
    pub softness: f64,
}

impl Default for BerthingCoefficients {
    fn default() -> Self {
        BerthingCoefficients {
            eccentricity: 1.0,
            configuration: 1.0,
            softness: 1.0,
        }
    }
}

impl BerthingCoefficients {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("eccentricity", self.eccentricity)?;
        ensure_non_negative("configuration", self.configuration)?;
        ensure_non_negative("softness", self.softness)?;
        Ok(())
    }

    /// C_e·C_c·C_s
    pub fn product(&self) -> f64 {
        self.eccentricity * self.configuration * self.softness
    }
}

/// Input parameters for a berthing check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mass_tonnes": 50000.0,
///   "speed_knots": 0.3,
///   "coefficients": { "eccentricity": 0.5 },
///   "efficiency": 0.7,
///   "deflection_m": 0.5
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BerthingInput {
    /// Vessel mass (metric tonnes), > 0
    pub mass_tonnes: f64,

    /// Approach speed normal to the berth (knots), > 0
    pub speed_knots: f64,

    #[serde(default)]
    pub coefficients: BerthingCoefficients,

    /// Fender efficiency η, > 0
    #[serde(default = "default_efficiency")]
    pub efficiency: f64,

    /// Fender deflection δ (m), > 0
    #[serde(default = "default_deflection_m")]
    pub deflection_m: f64,
}

impl BerthingInput {
    pub fn new(mass_tonnes: f64, speed_knots: f64) -> Self {
        BerthingInput {
            mass_tonnes,
            speed_knots,
            coefficients: BerthingCoefficients::default(),
            efficiency: default_efficiency(),
            deflection_m: default_deflection_m(),
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("mass_tonnes", self.mass_tonnes)?;
        ensure_positive("speed_knots", self.speed_knots)?;
        self.coefficients.validate()?;
        ensure_positive("efficiency", self.efficiency)?;
        ensure_positive("deflection_m", self.deflection_m)?;
        Ok(())
    }
}

/// Results from the berthing calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BerthingResult {
    /// Vessel mass (kg)
    pub mass_kg: f64,
    /// Approach speed (m/s)
    pub speed_mps: f64,
    /// Berthing energy E (J)
    pub energy_j: f64,
    /// Fender reaction R (kN)
    pub fender_reaction_kn: f64,
}

/// Berthing energy E = ½·m·v²·C_e·C_c·C_s in joules.
///
/// # Errors
///
/// * `InvalidInput` - mass or speed not > 0, or a negative coefficient
pub fn berthing_energy(mass_tonnes: f64, speed_knots: f64, coefficients: &BerthingCoefficients) -> CalcResult<f64> {
    ensure_positive("mass_tonnes", mass_tonnes)?;
    ensure_positive("speed_knots", speed_knots)?;
    coefficients.validate()?;

    let mass: Kilograms = Tonnes(mass_tonnes).into();
    let speed: MetersPerSecond = Knots(speed_knots).into();
    let energy = Joules(structures::berthing_energy(
        mass.value(),
        speed.value(),
        coefficients.eccentricity,
        coefficients.configuration,
        coefficients.softness,
    ));
    Ok(energy.value())
}

/// Fender reaction R = E/(η·δ) in kilonewtons, for an energy in joules.
///
/// Strictly decreasing in both efficiency and deflection for a fixed energy.
///
/// # Errors
///
/// * `InvalidInput` - efficiency or deflection not > 0, or negative energy
pub fn fender_reaction(energy_j: f64, efficiency: f64, deflection_m: f64) -> CalcResult<f64> {
    ensure_non_negative("energy_j", energy_j)?;
    ensure_positive("efficiency", efficiency)?;
    ensure_positive("deflection_m", deflection_m)?;

    let reaction = Newtons(structures::fender_reaction(energy_j, efficiency, deflection_m));
    Ok(Kilonewtons::from(reaction).value())
}

/// Calculate berthing energy and the resulting fender reaction.
pub fn calculate(input: &BerthingInput) -> CalcResult<BerthingResult> {
    input.validate()?;

    let energy_j = berthing_energy(input.mass_tonnes, input.speed_knots, &input.coefficients)?;
    let fender_reaction_kn = fender_reaction(energy_j, input.efficiency, input.deflection_m)?;

    Ok(BerthingResult {
        mass_kg: Kilograms::from(Tonnes(input.mass_tonnes)).value(),
        speed_mps: MetersPerSecond::from(Knots(input.speed_knots)).value(),
        energy_j,
        fender_reaction_kn,
    })
}
