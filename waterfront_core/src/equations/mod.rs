//! # Waterfront Engineering Equations
//!
//! Every formula the calculation modules evaluate lives here, as small pure
//! functions over `f64`. Keeping the math in one place makes it auditable
//! against its references and lets [`registry`] document it.
//!
//! Functions in this module do not validate their arguments; the
//! `calculations` layer does that before calling them. The one exception is
//! [`waves::solve_wavenumber`], which owns an iterative solve and its failure
//! modes.
//!
//! ## Modules
//!
//! - [`waves`] - Dispersion solver and linear wave properties
//! - [`hydrodynamics`] - Morison, steady drag, pile Froude number, scour
//! - [`structures`] - Berthing energy, fender reaction, pile capacity,
//!   corrosion, sliding
//! - [`tides`] - Harmonic synthesis
//! - [`registry`] - Equation metadata and EQUATIONS.md generation

pub mod hydrodynamics;
pub mod registry;
pub mod structures;
pub mod tides;
pub mod waves;

pub use waves::{
    angular_frequency,
    deep_water_group_celerity,
    deep_water_wavenumber,
    dispersion_residual,
    group_celerity_ratio,
    phase_celerity,
    shoaling_coefficient,
    solve_wavenumber,
    wavelength,
};

pub use hydrodynamics::{
    drag_force,
    local_scour_depth,
    morison_drag_per_length,
    morison_inertia_per_length,
    pile_froude_number,
};

pub use structures::{
    berthing_energy,
    fender_reaction,
    pile_shaft_area,
    remaining_thickness,
    sliding_factor_of_safety,
    unit_resistance_capacity,
};

pub use tides::{constituent_elevation, harmonic_elevation};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
