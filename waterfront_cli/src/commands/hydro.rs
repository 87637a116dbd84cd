//! Wave, hydrodynamic load, scour and tide commands.

use anyhow::Result;
use clap::Args;

use waterfront_core::calculations::{
    CalculationItem, EnvironmentalLoadInputs, MorisonInput, ScourInput, TideConstituent, TideSeriesInput,
    WaveInput,
};

use super::run_item;
use crate::output::Output;

/// Linear wave properties: wavelength, celerity, group velocity, shoaling
#[derive(Args, Debug)]
pub struct WavesArgs {
    /// Wave period (s)
    #[arg(long = "T")]
    pub period_s: f64,
    /// Water depth (m)
    #[arg(long = "h")]
    pub depth_m: f64,
    /// Deep-water group celerity (m/s); defaults to gT/4π
    #[arg(long = "cg0")]
    pub deep_water_group_celerity_mps: Option<f64>,
}

impl WavesArgs {
    pub fn item(&self) -> CalculationItem {
        CalculationItem::Waves(WaveInput {
            period_s: self.period_s,
            depth_m: self.depth_m,
            deep_water_group_celerity_mps: self.deep_water_group_celerity_mps,
        })
    }
}

/// Maximum Morison inline force per unit length on a pile
#[derive(Args, Debug)]
pub struct MorisonArgs {
    /// Pile diameter (m)
    #[arg(long = "D")]
    pub diameter_m: f64,
    /// Velocity amplitude (m/s)
    #[arg(long = "u", allow_negative_numbers = true)]
    pub velocity_mps: f64,
    /// Acceleration amplitude (m/s^2)
    #[arg(long = "a", allow_negative_numbers = true)]
    pub acceleration_mps2: f64,
    #[arg(long = "Cd", default_value_t = 1.0)]
    pub drag_coefficient: f64,
    #[arg(long = "Cm", default_value_t = 2.0)]
    pub inertia_coefficient: f64,
    /// Water density (kg/m^3); seawater when omitted
    #[arg(long = "rho")]
    pub water_density_kg_m3: Option<f64>,
}

impl MorisonArgs {
    pub fn item(&self) -> CalculationItem {
        let mut input = MorisonInput::new(self.diameter_m, self.velocity_mps, self.acceleration_mps2)
            .with_coefficients(self.drag_coefficient, self.inertia_coefficient);
        input.water_density_kg_m3 = self.water_density_kg_m3;
        CalculationItem::Morison(input)
    }
}

/// Total mooring load from wind and current
#[derive(Args, Debug)]
pub struct MooringArgs {
    /// Projected wind area (m^2)
    #[arg(long = "Aw")]
    pub wind_area_m2: f64,
    /// Projected current area (m^2)
    #[arg(long = "Ac")]
    pub current_area_m2: f64,
    /// Wind speed (m/s)
    #[arg(long = "Uw")]
    pub wind_speed_mps: f64,
    /// Current speed (m/s)
    #[arg(long = "Uc")]
    pub current_speed_mps: f64,
    #[arg(long = "Cdw", default_value_t = 1.0)]
    pub wind_drag_coefficient: f64,
    #[arg(long = "Cdc", default_value_t = 1.0)]
    pub current_drag_coefficient: f64,
    /// Safety factor
    #[arg(long = "SF", default_value_t = 1.5)]
    pub safety_factor: f64,
}

impl MooringArgs {
    pub fn item(&self) -> CalculationItem {
        CalculationItem::Mooring(EnvironmentalLoadInputs {
            wind_area_m2: self.wind_area_m2,
            current_area_m2: self.current_area_m2,
            wind_speed_mps: self.wind_speed_mps,
            current_speed_mps: self.current_speed_mps,
            wind_drag_coefficient: self.wind_drag_coefficient,
            current_drag_coefficient: self.current_drag_coefficient,
            safety_factor: self.safety_factor,
        })
    }
}

/// Local scour depth at a pile (screening)
#[derive(Args, Debug)]
pub struct ScourArgs {
    /// Pile diameter (m)
    #[arg(long = "D")]
    pub diameter_m: f64,
    /// Depth-averaged current (m/s)
    #[arg(long = "U")]
    pub current_speed_mps: f64,
    #[arg(long = "K", default_value_t = 2.0)]
    pub coefficient: f64,
    #[arg(long = "m", default_value_t = 1.0)]
    pub exponent: f64,
}

impl ScourArgs {
    pub fn item(&self) -> CalculationItem {
        CalculationItem::Scour(ScourInput {
            diameter_m: self.diameter_m,
            current_speed_mps: self.current_speed_mps,
            coefficient: self.coefficient,
            exponent: self.exponent,
        })
    }
}

/// Tide synthesis from up to two constituents
#[derive(Args, Debug)]
pub struct TidesArgs {
    /// Constituent 1 amplitude (m)
    #[arg(long = "A1")]
    pub amplitude_1_m: f64,
    /// Constituent 1 period (s)
    #[arg(long = "T1")]
    pub period_1_s: f64,
    /// Constituent 1 phase (rad)
    #[arg(long = "P1", default_value_t = 0.0, allow_negative_numbers = true)]
    pub phase_1_rad: f64,
    /// Constituent 2 amplitude (m); ignored unless > 0
    #[arg(long = "A2", default_value_t = 0.0)]
    pub amplitude_2_m: f64,
    /// Constituent 2 period (s); ignored unless > 0
    #[arg(long = "T2", default_value_t = 0.0)]
    pub period_2_s: f64,
    /// Constituent 2 phase (rad)
    #[arg(long = "P2", default_value_t = 0.0, allow_negative_numbers = true)]
    pub phase_2_rad: f64,
    /// Duration (s)
    #[arg(long = "dur", default_value_t = 43_200.0)]
    pub duration_s: f64,
    /// Time step (s)
    #[arg(long = "dt", default_value_t = 600.0)]
    pub step_s: f64,
}

impl TidesArgs {
    pub fn item(&self) -> Result<CalculationItem> {
        let mut constituents = vec![TideConstituent::from_period(
            self.amplitude_1_m,
            self.period_1_s,
            self.phase_1_rad,
        )?];
        if self.amplitude_2_m > 0.0 && self.period_2_s > 0.0 {
            constituents.push(TideConstituent::from_period(
                self.amplitude_2_m,
                self.period_2_s,
                self.phase_2_rad,
            )?);
        }
        Ok(CalculationItem::Tides(TideSeriesInput {
            duration_s: self.duration_s,
            step_s: self.step_s,
            constituents,
        }))
    }
}

pub fn waves(args: WavesArgs, out: &Output) -> Result<()> {
    run_item(args.item(), out)
}

pub fn morison(args: MorisonArgs, out: &Output) -> Result<()> {
    run_item(args.item(), out)
}

pub fn mooring(args: MooringArgs, out: &Output) -> Result<()> {
    run_item(args.item(), out)
}

pub fn scour(args: ScourArgs, out: &Output) -> Result<()> {
    run_item(args.item(), out)
}

pub fn tides(args: TidesArgs, out: &Output) -> Result<()> {
    run_item(args.item()?, out)
}
