//! # Waterfront Calculations
//!
//! Each model follows the same shape:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Headline value plus intermediate terms (JSON-serializable)
//! - `calculate(&input) -> CalcResult<*Result>` - Validates, then evaluates
//!
//! Inputs are validated before any arithmetic, so a call either returns a
//! complete result or an error, never a partial one.
//!
//! ## Available Calculations
//!
//! - [`waves`] - Dispersion solve and linear wave properties
//! - [`morison`] - Maximum inline force per unit pile length
//! - [`berthing`] - Berthing energy and fender reaction
//! - [`mooring`] - Factored wind plus current load
//! - [`pile_axial`] - Skin friction plus end bearing
//! - [`corrosion`] - Remaining steel thickness
//! - [`seawall`] - Sliding factor of safety
//! - [`scour`] - Screening local scour depth
//! - [`tides`] - Harmonic tide series

pub mod berthing;
pub mod corrosion;
pub mod mooring;
pub mod morison;
pub mod pile_axial;
pub mod scour;
pub mod seawall;
pub mod tides;
pub mod waves;

use serde::{Deserialize, Serialize};

use crate::equations::Equation;
use crate::errors::CalcResult;

pub use berthing::{BerthingCoefficients, BerthingInput, BerthingResult};
pub use corrosion::{CorrosionInputs, CorrosionResult};
pub use mooring::{EnvironmentalLoadInputs, MooringResult};
pub use morison::{MorisonCoefficients, MorisonInput, MorisonResult};
pub use pile_axial::{PileAxialInputs, PileAxialResult};
pub use scour::{ScourInput, ScourResult};
pub use seawall::{SeawallInput, SeawallResult};
pub use tides::{TideConstituent, TideSeries, TideSeriesInput};
pub use waves::{DepthRegime, WaveInput, WaveResult};

/// Enum wrapper for all calculation types.
///
/// Lets a batch file or a single HTTP endpoint carry any model, keyed by a
/// `"type"` tag:
///
/// ```json
/// { "type": "Seawall", "friction_coefficient": 0.6, "weight_kn": 1000.0, "thrust_kn": 400.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    Waves(WaveInput),
    Morison(MorisonInput),
    Berthing(BerthingInput),
    Mooring(EnvironmentalLoadInputs),
    PileAxial(PileAxialInputs),
    Corrosion(CorrosionInputs),
    Seawall(SeawallInput),
    Scour(ScourInput),
    Tides(TideSeriesInput),
}

/// Result of running a [`CalculationItem`], tagged the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Waves(WaveResult),
    Morison(MorisonResult),
    Berthing(BerthingResult),
    Mooring(MooringResult),
    PileAxial(PileAxialResult),
    Corrosion(CorrosionResult),
    Seawall(SeawallResult),
    Scour(ScourResult),
    Tides(TideSeries),
}

impl CalculationItem {
    /// Validate and evaluate the wrapped model.
    pub fn run(&self) -> CalcResult<CalculationOutput> {
        Ok(match self {
            CalculationItem::Waves(i) => CalculationOutput::Waves(waves::calculate(i)?),
            CalculationItem::Morison(i) => CalculationOutput::Morison(morison::calculate(i)?),
            CalculationItem::Berthing(i) => CalculationOutput::Berthing(berthing::calculate(i)?),
            CalculationItem::Mooring(i) => CalculationOutput::Mooring(mooring::calculate(i)?),
            CalculationItem::PileAxial(i) => CalculationOutput::PileAxial(pile_axial::calculate(i)?),
            CalculationItem::Corrosion(i) => CalculationOutput::Corrosion(corrosion::calculate(i)?),
            CalculationItem::Seawall(i) => CalculationOutput::Seawall(seawall::calculate(i)?),
            CalculationItem::Scour(i) => CalculationOutput::Scour(scour::calculate(i)?),
            CalculationItem::Tides(i) => CalculationOutput::Tides(tides::calculate(i)?),
        })
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Waves(_) => "Waves",
            CalculationItem::Morison(_) => "Morison",
            CalculationItem::Berthing(_) => "Berthing",
            CalculationItem::Mooring(_) => "Mooring",
            CalculationItem::PileAxial(_) => "PileAxial",
            CalculationItem::Corrosion(_) => "Corrosion",
            CalculationItem::Seawall(_) => "Seawall",
            CalculationItem::Scour(_) => "Scour",
            CalculationItem::Tides(_) => "Tides",
        }
    }

    /// Registry entries this model evaluates
    pub fn equations(&self) -> &'static [Equation] {
        match self {
            CalculationItem::Waves(_) => &[
                Equation::DispersionRelation,
                Equation::Wavelength,
                Equation::PhaseCelerity,
                Equation::GroupCelerity,
                Equation::ShoalingCoefficient,
            ],
            CalculationItem::Morison(_) => &[Equation::MorisonInlineForce],
            CalculationItem::Berthing(_) => &[Equation::BerthingEnergy, Equation::FenderReaction],
            CalculationItem::Mooring(_) => &[
                Equation::WindDragForce,
                Equation::CurrentDragForce,
                Equation::MooringDesignLoad,
            ],
            CalculationItem::PileAxial(_) => &[Equation::PileAxialCapacity],
            CalculationItem::Corrosion(_) => &[Equation::CorrosionRemainingThickness],
            CalculationItem::Seawall(_) => &[Equation::SlidingFactorOfSafety],
            CalculationItem::Scour(_) => &[Equation::PileFroudeNumber, Equation::LocalScourDepth],
            CalculationItem::Tides(_) => &[Equation::HarmonicTideSynthesis],
        }
    }
}

impl CalculationOutput {
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationOutput::Waves(_) => "Waves",
            CalculationOutput::Morison(_) => "Morison",
            CalculationOutput::Berthing(_) => "Berthing",
            CalculationOutput::Mooring(_) => "Mooring",
            CalculationOutput::PileAxial(_) => "PileAxial",
            CalculationOutput::Corrosion(_) => "Corrosion",
            CalculationOutput::Seawall(_) => "Seawall",
            CalculationOutput::Scour(_) => "Scour",
            CalculationOutput::Tides(_) => "Tides",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::ALL_EQUATIONS;

    #[test]
    fn test_tagged_deserialization() {
        let json = r#"{"type": "Seawall", "friction_coefficient": 0.6, "weight_kn": 1000.0, "thrust_kn": 400.0}"#;
        let item: CalculationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.calc_type(), "Seawall");
        match item.run().unwrap() {
            CalculationOutput::Seawall(r) => assert!((r.sliding_factor_of_safety - 1.5).abs() < 1e-12),
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_output_tag_matches_input() {
        let items = vec![
            CalculationItem::Waves(WaveInput::new(8.0, 20.0)),
            CalculationItem::Scour(ScourInput::new(1.0, 1.0)),
            CalculationItem::Corrosion(CorrosionInputs::new(12.0, 0.1, 10.0)),
        ];
        for item in items {
            assert_eq!(item.run().unwrap().calc_type(), item.calc_type());
        }
    }

    #[test]
    fn test_error_passes_through() {
        let item = CalculationItem::Waves(WaveInput::new(0.0, 20.0));
        assert_eq!(item.run().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_every_equation_is_used_by_some_model() {
        let items = [
            CalculationItem::Waves(WaveInput::new(8.0, 20.0)),
            CalculationItem::Morison(MorisonInput::new(1.0, 1.0, 0.5)),
            CalculationItem::Berthing(BerthingInput::new(100.0, 0.3)),
            CalculationItem::Mooring(EnvironmentalLoadInputs::new(1.0, 1.0, 1.0, 1.0)),
            CalculationItem::PileAxial(PileAxialInputs {
                shaft_length_m: 1.0,
                perimeter_m: 1.0,
                tip_area_m2: 1.0,
                unit_skin_friction_kpa: 1.0,
                unit_end_bearing_kpa: 1.0,
            }),
            CalculationItem::Corrosion(CorrosionInputs::new(1.0, 0.0, 0.0)),
            CalculationItem::Seawall(SeawallInput::new(1.0, 1.0, 1.0)),
            CalculationItem::Scour(ScourInput::new(1.0, 0.0)),
            CalculationItem::Tides(TideSeriesInput {
                duration_s: 1.0,
                step_s: 1.0,
                constituents: vec![],
            }),
        ];
        for eq in ALL_EQUATIONS {
            assert!(
                items.iter().any(|item| item.equations().contains(eq)),
                "{:?} is not evaluated by any model",
                eq
            );
        }
    }
}
