//! # waterfront_core - Marine and Waterfront Screening Calculations
//!
//! `waterfront_core` provides screening-level calculations for waterfront
//! structures: linear wave properties, Morison pile forces, berthing energy,
//! mooring loads, pile axial capacity, corrosion allowance, seawall sliding,
//! local scour and harmonic tides. Results support preliminary design only
//! and require review by a licensed engineer.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over immutable inputs, safe to call from
//!   any thread
//! - **JSON-First**: All inputs, results and errors implement Serialize
//! - **Validate first**: Every model checks its inputs before computing
//! - **Auditable**: Each formula is registered with its reference in
//!   [`equations::registry`]
//!
//! ## Quick Start
//!
//! ```rust
//! use waterfront_core::calculations::waves::{calculate, WaveInput};
//!
//! let result = calculate(&WaveInput::new(8.0, 12.0)).unwrap();
//! println!("L = {:.1} m, Ks = {:.3}", result.wavelength_m, result.shoaling_coefficient);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The screening models
//! - [`equations`] - Formulas and the equation registry
//! - [`constants`] - Physical constants
//! - [`units`] - Type-safe unit wrappers
//! - [`jurisdictions`] - State profiles
//! - [`report`] - CSV report template
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod constants;
pub mod equations;
pub mod errors;
pub mod jurisdictions;
pub mod report;
pub mod units;

pub use calculations::{CalculationItem, CalculationOutput};
pub use errors::{CalcError, CalcResult};
pub use jurisdictions::{jurisdiction, list_jurisdictions, JurisdictionProfile, StateCode};
pub use report::{report_template_csv, write_report_template, REPORT_TEMPLATE_COLUMNS};
