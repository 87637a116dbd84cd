//! # Morison Inline Force
//!
//! Maximum hydrodynamic force per unit length on a vertical pile from the
//! local velocity and acceleration amplitudes.
//!
//! The drag and inertia maxima are added even though they occur a quarter
//! period apart in the full time history. The sum is a conservative
//! screening envelope, not a phase-resolved peak.
//!
//! ## Sign of the acceleration
//!
//! `acceleration_amplitude_mps2` enters the inertia term linearly. Pass the
//! amplitude magnitude: a negative value reduces the envelope.

use serde::{Deserialize, Serialize};

use crate::constants::SEAWATER_DENSITY_KG_M3;
use crate::equations::hydrodynamics::{morison_drag_per_length, morison_inertia_per_length};
use crate::errors::{ensure_finite, ensure_non_negative, ensure_positive, CalcResult};

fn default_cd() -> f64 {
    1.0
}

fn default_cm() -> f64 {
    2.0
}

/// Drag and inertia coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MorisonCoefficients {
    /// Drag coefficient C_d (≥ 0)
    #[serde(default = "default_cd")]
    pub drag_coefficient: f64,

    /// Inertia coefficient C_m (≥ 0)
    #[serde(default = "default_cm")]
    pub inertia_coefficient: f64,
}

impl Default for MorisonCoefficients {
    fn default() -> Self {
        MorisonCoefficients {
            drag_coefficient: default_cd(),
            inertia_coefficient: default_cm(),
        }
    }
}

/// Input parameters for the Morison force.
///
/// ## JSON Example
///
/// ```json
/// {
///   "diameter_m": 1.0,
///   "velocity_amplitude_mps": 1.0,
///   "acceleration_amplitude_mps2": 0.5,
///   "coefficients": { "drag_coefficient": 1.0, "inertia_coefficient": 2.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorisonInput {
    /// Pile diameter D (m), > 0
    pub diameter_m: f64,

    /// Velocity amplitude u (m/s); may be zero for an inertia-only check
    pub velocity_amplitude_mps: f64,

    /// Acceleration amplitude a (m/s²), used as given
    pub acceleration_amplitude_mps2: f64,

    #[serde(default)]
    pub coefficients: MorisonCoefficients,

    /// Water density override (kg/m³); seawater when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_density_kg_m3: Option<f64>,
}

impl MorisonInput {
    pub fn new(diameter_m: f64, velocity_amplitude_mps: f64, acceleration_amplitude_mps2: f64) -> Self {
        MorisonInput {
            diameter_m,
            velocity_amplitude_mps,
            acceleration_amplitude_mps2,
            coefficients: MorisonCoefficients::default(),
            water_density_kg_m3: None,
        }
    }

    pub fn with_coefficients(mut self, drag: f64, inertia: f64) -> Self {
        self.coefficients = MorisonCoefficients {
            drag_coefficient: drag,
            inertia_coefficient: inertia,
        };
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("diameter_m", self.diameter_m)?;
        ensure_finite("velocity_amplitude_mps", self.velocity_amplitude_mps)?;
        ensure_finite("acceleration_amplitude_mps2", self.acceleration_amplitude_mps2)?;
        ensure_non_negative("drag_coefficient", self.coefficients.drag_coefficient)?;
        ensure_non_negative("inertia_coefficient", self.coefficients.inertia_coefficient)?;
        if let Some(rho) = self.water_density_kg_m3 {
            ensure_positive("water_density_kg_m3", rho)?;
        }
        Ok(())
    }

    pub fn water_density(&self) -> f64 {
        self.water_density_kg_m3.unwrap_or(SEAWATER_DENSITY_KG_M3)
    }
}

/// Results from the Morison calculation (N/m).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorisonResult {
    pub drag_per_length_n_per_m: f64,
    pub inertia_per_length_n_per_m: f64,
    /// Drag maximum plus inertia maximum
    pub force_per_length_n_per_m: f64,
}

/// Calculate the maximum inline force per unit pile length.
pub fn calculate(input: &MorisonInput) -> CalcResult<MorisonResult> {
    input.validate()?;

    let rho = input.water_density();
    let drag = morison_drag_per_length(
        rho,
        input.coefficients.drag_coefficient,
        input.diameter_m,
        input.velocity_amplitude_mps,
    );
    let inertia = morison_inertia_per_length(
        rho,
        input.coefficients.inertia_coefficient,
        input.diameter_m,
        input.acceleration_amplitude_mps2,
    );

    Ok(MorisonResult {
        drag_per_length_n_per_m: drag,
        inertia_per_length_n_per_m: inertia,
        force_per_length_n_per_m: drag + inertia,
    })
}
