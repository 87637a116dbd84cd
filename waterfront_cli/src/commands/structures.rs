//! Berthing, pile capacity, corrosion and seawall commands.

use anyhow::Result;
use clap::Args;

use waterfront_core::calculations::{
    BerthingCoefficients, BerthingInput, CalculationItem, CorrosionInputs, PileAxialInputs, SeawallInput,
};

use super::run_item;
use crate::output::Output;

/// Berthing energy and fender reaction
#[derive(Args, Debug)]
pub struct BerthingArgs {
    /// Vessel mass (tonnes)
    #[arg(long = "mass")]
    pub mass_tonnes: f64,
    /// Berthing speed (knots)
    #[arg(long = "speed")]
    pub speed_knots: f64,
    #[arg(long = "Ce", default_value_t = 1.0)]
    pub eccentricity: f64,
    #[arg(long = "Cc", default_value_t = 1.0)]
    pub configuration: f64,
    #[arg(long = "Cs", default_value_t = 1.0)]
    pub softness: f64,
    /// Fender efficiency
    #[arg(long = "eff", default_value_t = 0.7)]
    pub efficiency: f64,
    /// Fender deflection (m)
    #[arg(long = "defl", default_value_t = 0.5)]
    pub deflection_m: f64,
}

impl BerthingArgs {
    pub fn item(&self) -> CalculationItem {
        CalculationItem::Berthing(BerthingInput {
            mass_tonnes: self.mass_tonnes,
            speed_knots: self.speed_knots,
            coefficients: BerthingCoefficients {
                eccentricity: self.eccentricity,
                configuration: self.configuration,
                softness: self.softness,
            },
            efficiency: self.efficiency,
            deflection_m: self.deflection_m,
        })
    }
}

/// Pile axial capacity
#[derive(Args, Debug)]
pub struct PileAxialArgs {
    /// Shaft length (m)
    #[arg(long = "L")]
    pub shaft_length_m: f64,
    /// Perimeter (m)
    #[arg(long = "perim")]
    pub perimeter_m: f64,
    /// Tip area (m^2)
    #[arg(long = "Atip")]
    pub tip_area_m2: f64,
    /// Unit skin friction (kPa)
    #[arg(long = "qs")]
    pub unit_skin_friction_kpa: f64,
    /// Unit end bearing (kPa)
    #[arg(long = "qb")]
    pub unit_end_bearing_kpa: f64,
}

impl PileAxialArgs {
    pub fn item(&self) -> CalculationItem {
        CalculationItem::PileAxial(PileAxialInputs {
            shaft_length_m: self.shaft_length_m,
            perimeter_m: self.perimeter_m,
            tip_area_m2: self.tip_area_m2,
            unit_skin_friction_kpa: self.unit_skin_friction_kpa,
            unit_end_bearing_kpa: self.unit_end_bearing_kpa,
        })
    }
}

/// Remaining thickness after corrosion
#[derive(Args, Debug)]
pub struct CorrosionArgs {
    /// Initial thickness (mm)
    #[arg(long = "t0")]
    pub initial_thickness_mm: f64,
    /// Corrosion rate (mm/yr)
    #[arg(long = "rate")]
    pub rate_mm_per_year: f64,
    /// Service life (years)
    #[arg(long = "years")]
    pub years: f64,
}

impl CorrosionArgs {
    pub fn item(&self) -> CalculationItem {
        CalculationItem::Corrosion(CorrosionInputs::new(
            self.initial_thickness_mm,
            self.rate_mm_per_year,
            self.years,
        ))
    }
}

/// Seawall sliding factor of safety
#[derive(Args, Debug)]
pub struct SeawallArgs {
    /// Base friction coefficient
    #[arg(long = "mu")]
    pub friction_coefficient: f64,
    /// Wall weight (kN)
    #[arg(long = "W")]
    pub weight_kn: f64,
    /// Horizontal thrust (kN)
    #[arg(long = "T")]
    pub thrust_kn: f64,
}

impl SeawallArgs {
    pub fn item(&self) -> CalculationItem {
        CalculationItem::Seawall(SeawallInput::new(self.friction_coefficient, self.weight_kn, self.thrust_kn))
    }
}

pub fn berthing(args: BerthingArgs, out: &Output) -> Result<()> {
    run_item(args.item(), out)
}

pub fn pile_axial(args: PileAxialArgs, out: &Output) -> Result<()> {
    run_item(args.item(), out)
}

pub fn corrosion(args: CorrosionArgs, out: &Output) -> Result<()> {
    run_item(args.item(), out)
}

pub fn seawall(args: SeawallArgs, out: &Output) -> Result<()> {
    run_item(args.item(), out)
}
