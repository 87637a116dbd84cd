//! # Equation Registry
//!
//! Central registry of every closed-form relation the models evaluate. Each
//! equation carries its formula, source reference, variables and the code
//! location that implements it, so results can be audited line by line.
//!
//! ## Usage
//!
//! ```rust
//! use waterfront_core::equations::registry::{Equation, EquationCategory};
//!
//! let meta = Equation::MorisonInlineForce.metadata();
//! assert_eq!(meta.category, EquationCategory::Hydrodynamics);
//! println!("{}: {}", meta.name, meta.formula);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::PhysicalConstants;

// ============================================================================
// Code References
// ============================================================================

/// Source document for an equation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// USACE Coastal Engineering Manual (EM 1110-2-1100)
    CoastalEngineeringManual { part: &'static str, chapter: u8 },
    /// PIANC working group report
    Pianc { working_group: u8, year: u16 },
    /// Morison, O'Brien, Johnson & Schaaf (1950)
    Morison1950,
    /// FHWA manual by publication number
    Fhwa { publication: &'static str },
    /// USACE Engineer Manual by number
    UsaceEngineerManual { number: &'static str },
    /// Schureman (1958), harmonic tide prediction
    Schureman1958,
    /// Empirical screening relation with tunable coefficients
    Screening,
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::CoastalEngineeringManual { part, chapter } => {
                format!("USACE Coastal Engineering Manual, Part {}, Chapter {}", part, chapter)
            }
            CodeReference::Pianc { working_group, year } => {
                format!("PIANC WG {} ({})", working_group, year)
            }
            CodeReference::Morison1950 => "Morison et al. (1950)".to_string(),
            CodeReference::Fhwa { publication } => format!("FHWA {}", publication),
            CodeReference::UsaceEngineerManual { number } => format!("USACE EM {}", number),
            CodeReference::Schureman1958 => "Schureman (1958), USC&GS SP 98".to_string(),
            CodeReference::Screening => "Screening relation (calibrate coefficients to site data)".to_string(),
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::CoastalEngineeringManual { .. } => "CEM",
            CodeReference::Pianc { .. } => "PIANC",
            CodeReference::Morison1950 => "Morison",
            CodeReference::Fhwa { .. } => "FHWA",
            CodeReference::UsaceEngineerManual { .. } => "USACE EM",
            CodeReference::Schureman1958 => "Schureman",
            CodeReference::Screening => "Screening",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in generated documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Linear wave theory
    Waves,
    /// Fluid forces on piles and moored vessels
    Hydrodynamics,
    /// Vessel berthing and fenders
    Berthing,
    /// Pile capacity and wall stability
    Geotechnical,
    /// Section loss over service life
    Durability,
    /// Local scour at structures
    Scour,
    /// Water level prediction
    Tides,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Waves => "Waves",
            EquationCategory::Hydrodynamics => "Hydrodynamics",
            EquationCategory::Berthing => "Berthing",
            EquationCategory::Geotechnical => "Geotechnical",
            EquationCategory::Durability => "Durability",
            EquationCategory::Scour => "Scour",
            EquationCategory::Tides => "Tides",
        }
    }

    /// Sort order for generated documents (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Waves => 1,
            EquationCategory::Tides => 2,
            EquationCategory::Hydrodynamics => 3,
            EquationCategory::Berthing => 4,
            EquationCategory::Geotechnical => 5,
            EquationCategory::Scour => 6,
            EquationCategory::Durability => 7,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone, Serialize)]
pub struct Variable {
    /// Symbol (e.g., "k", "T", "h")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "m", "s", "kN")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for an equation.
#[derive(Debug, Clone, Serialize)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula: &'static str,
    /// Source reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used by the waterfront models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // Linear waves
    /// ω² = g·k·tanh(kh)
    DispersionRelation,
    /// L = 2π/k
    Wavelength,
    /// c = ω/k
    PhaseCelerity,
    /// c_g = n·c
    GroupCelerity,
    /// K_s = √(c_g0/c_g)
    ShoalingCoefficient,

    // Hydrodynamic loads
    /// F/L = ½ρC_dDu² + ρC_m(πD²/4)a
    MorisonInlineForce,
    /// F_w = ½ρ_aC_dwA_wU_w²
    WindDragForce,
    /// F_c = ½ρ_wC_dcA_cU_c²
    CurrentDragForce,
    /// F = (F_w + F_c)·SF
    MooringDesignLoad,

    // Berthing
    /// E = ½mv²C_eC_cC_s
    BerthingEnergy,
    /// R = E/(ηδ)
    FenderReaction,

    // Geotechnical
    /// Q = q_sA_s + q_bA_b
    PileAxialCapacity,
    /// FS = μW/T
    SlidingFactorOfSafety,

    // Durability
    /// t = max(0, t₀ − r·years)
    CorrosionRemainingThickness,

    // Scour
    /// Fr_D = U/√(gD)
    PileFroudeNumber,
    /// y_s = K·D·Fr_D^m
    LocalScourDepth,

    // Tides
    /// η(t) = ΣA·cos(ωt + φ)
    HarmonicTideSynthesis,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::DispersionRelation => EquationMetadata {
                name: "Linear Dispersion Relation",
                description: "Wavenumber for a given period and depth, solved by Newton-Raphson from the deep-water guess k0 = omega^2/g",
                formula: "omega^2 = g k tanh(k h), omega = 2 pi / T",
                reference: CodeReference::CoastalEngineeringManual { part: "II", chapter: 1 },
                variables: vec![
                    Variable::new("T", "Wave period", "s"),
                    Variable::new("h", "Still water depth", "m"),
                    Variable::new("k", "Wavenumber", "1/m"),
                    Variable::new("g", "Gravitational acceleration", "m/s^2"),
                ],
                assumptions: vec!["Small-amplitude (Airy) waves", "Horizontal bed", "No ambient current"],
                category: EquationCategory::Waves,
                source_module: "equations/waves.rs",
                source_function: "solve_wavenumber",
            },

            Equation::Wavelength => EquationMetadata {
                name: "Wavelength",
                description: "Wavelength from the dispersion root",
                formula: "L = 2 pi / k",
                reference: CodeReference::CoastalEngineeringManual { part: "II", chapter: 1 },
                variables: vec![
                    Variable::new("L", "Wavelength", "m"),
                    Variable::new("k", "Wavenumber", "1/m"),
                ],
                assumptions: vec!["Linear wave theory"],
                category: EquationCategory::Waves,
                source_module: "equations/waves.rs",
                source_function: "wavelength",
            },

            Equation::PhaseCelerity => EquationMetadata {
                name: "Phase Celerity",
                description: "Speed at which the wave form propagates",
                formula: "c = omega / k",
                reference: CodeReference::CoastalEngineeringManual { part: "II", chapter: 1 },
                variables: vec![
                    Variable::new("c", "Phase celerity", "m/s"),
                    Variable::new("omega", "Angular frequency", "rad/s"),
                    Variable::new("k", "Wavenumber", "1/m"),
                ],
                assumptions: vec!["Linear wave theory"],
                category: EquationCategory::Waves,
                source_module: "equations/waves.rs",
                source_function: "phase_celerity",
            },

            Equation::GroupCelerity => EquationMetadata {
                name: "Group Celerity",
                description: "Speed of wave energy propagation",
                formula: "c_g = n c, n = 0.5 (1 + 2kh / sinh(2kh))",
                reference: CodeReference::CoastalEngineeringManual { part: "II", chapter: 1 },
                variables: vec![
                    Variable::new("c_g", "Group celerity", "m/s"),
                    Variable::new("n", "Group-to-phase celerity ratio", "-"),
                    Variable::new("h", "Still water depth", "m"),
                ],
                assumptions: vec!["Evaluated exactly at every depth (no regime branching)"],
                category: EquationCategory::Waves,
                source_module: "equations/waves.rs",
                source_function: "group_celerity_ratio",
            },

            Equation::ShoalingCoefficient => EquationMetadata {
                name: "Shoaling Coefficient",
                description: "Wave height change under conservation of energy flux",
                formula: "K_s = sqrt(c_g0 / c_g), c_g0 = g T / (4 pi) unless supplied",
                reference: CodeReference::CoastalEngineeringManual { part: "II", chapter: 3 },
                variables: vec![
                    Variable::new("K_s", "Shoaling coefficient", "-"),
                    Variable::new("c_g0", "Deep-water group celerity", "m/s"),
                    Variable::new("c_g", "Local group celerity", "m/s"),
                ],
                assumptions: vec!["No refraction, diffraction or dissipation", "Shore-normal approach"],
                category: EquationCategory::Waves,
                source_module: "equations/waves.rs",
                source_function: "shoaling_coefficient",
            },

            Equation::MorisonInlineForce => EquationMetadata {
                name: "Morison Maximum Inline Force",
                description: "Drag and inertia maxima per unit pile length, summed as a screening envelope",
                formula: "F/L = 0.5 rho C_d D u^2 + rho C_m (pi D^2 / 4) a",
                reference: CodeReference::Morison1950,
                variables: vec![
                    Variable::new("D", "Pile diameter", "m"),
                    Variable::new("u", "Velocity amplitude", "m/s"),
                    Variable::new("a", "Acceleration amplitude", "m/s^2"),
                    Variable::new("C_d", "Drag coefficient", "-"),
                    Variable::new("C_m", "Inertia coefficient", "-"),
                    Variable::new("rho", "Water density", "kg/m^3"),
                ],
                assumptions: vec![
                    "Drag and inertia maxima combined although 90 degrees out of phase (conservative)",
                    "Slender pile (D/L < 0.2)",
                    "a is supplied as an amplitude magnitude",
                ],
                category: EquationCategory::Hydrodynamics,
                source_module: "equations/hydrodynamics.rs",
                source_function: "morison_drag_per_length",
            },

            Equation::WindDragForce => EquationMetadata {
                name: "Wind Drag on Vessel",
                description: "Steady wind force on the projected above-water area",
                formula: "F_w = 0.5 rho_a C_dw A_w U_w^2",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("A_w", "Projected wind area", "m^2"),
                    Variable::new("U_w", "Wind speed", "m/s"),
                    Variable::new("C_dw", "Wind drag coefficient", "-"),
                    Variable::new("rho_a", "Air density", "kg/m^3"),
                ],
                assumptions: vec!["Steady wind, no gust factor"],
                category: EquationCategory::Hydrodynamics,
                source_module: "equations/hydrodynamics.rs",
                source_function: "drag_force",
            },

            Equation::CurrentDragForce => EquationMetadata {
                name: "Current Drag on Vessel",
                description: "Steady current force on the projected underwater area",
                formula: "F_c = 0.5 rho_w C_dc A_c U_c^2",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("A_c", "Projected current area", "m^2"),
                    Variable::new("U_c", "Current speed", "m/s"),
                    Variable::new("C_dc", "Current drag coefficient", "-"),
                    Variable::new("rho_w", "Seawater density", "kg/m^3"),
                ],
                assumptions: vec!["Steady current, no under-keel clearance correction"],
                category: EquationCategory::Hydrodynamics,
                source_module: "equations/hydrodynamics.rs",
                source_function: "drag_force",
            },

            Equation::MooringDesignLoad => EquationMetadata {
                name: "Mooring Design Load",
                description: "Wind and current loads summed, then factored",
                formula: "F = (F_w + F_c) SF",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("F", "Factored mooring load", "N"),
                    Variable::new("SF", "Safety factor", "-"),
                ],
                assumptions: vec!["Wind and current collinear and acting independently"],
                category: EquationCategory::Hydrodynamics,
                source_module: "calculations/mooring.rs",
                source_function: "calculate",
            },

            Equation::BerthingEnergy => EquationMetadata {
                name: "Berthing Energy",
                description: "Kinetic energy delivered to the fender by a berthing vessel",
                formula: "E = 0.5 m v^2 C_e C_c C_s",
                reference: CodeReference::Pianc { working_group: 33, year: 2002 },
                variables: vec![
                    Variable::new("m", "Vessel mass (input in tonnes)", "kg"),
                    Variable::new("v", "Berthing speed (input in knots)", "m/s"),
                    Variable::new("C_e", "Eccentricity coefficient", "-"),
                    Variable::new("C_c", "Berth configuration coefficient", "-"),
                    Variable::new("C_s", "Softness coefficient", "-"),
                ],
                assumptions: vec!["Added mass folded into m or the coefficients", "1 knot = 0.514444 m/s"],
                category: EquationCategory::Berthing,
                source_module: "equations/structures.rs",
                source_function: "berthing_energy",
            },

            Equation::FenderReaction => EquationMetadata {
                name: "Fender Reaction",
                description: "Average reaction needed to absorb the berthing energy over the fender stroke",
                formula: "R = E / (eta delta)",
                reference: CodeReference::Pianc { working_group: 33, year: 2002 },
                variables: vec![
                    Variable::new("R", "Fender reaction", "kN"),
                    Variable::new("eta", "Fender efficiency", "-"),
                    Variable::new("delta", "Fender deflection", "m"),
                ],
                assumptions: vec!["Efficiency lumps the shape of the reaction-deflection curve"],
                category: EquationCategory::Berthing,
                source_module: "equations/structures.rs",
                source_function: "fender_reaction",
            },

            Equation::PileAxialCapacity => EquationMetadata {
                name: "Pile Axial Capacity",
                description: "Static shaft friction plus end bearing",
                formula: "Q = q_s (perimeter L) + q_b A_tip",
                reference: CodeReference::Fhwa { publication: "FHWA-NHI-16-009" },
                variables: vec![
                    Variable::new("Q", "Ultimate axial capacity", "kN"),
                    Variable::new("q_s", "Unit skin friction", "kPa"),
                    Variable::new("q_b", "Unit end bearing", "kPa"),
                    Variable::new("L", "Embedded shaft length", "m"),
                    Variable::new("A_tip", "Tip area", "m^2"),
                ],
                assumptions: vec!["Uniform unit resistances", "No interaction between shaft and tip"],
                category: EquationCategory::Geotechnical,
                source_module: "equations/structures.rs",
                source_function: "unit_resistance_capacity",
            },

            Equation::SlidingFactorOfSafety => EquationMetadata {
                name: "Sliding Factor of Safety",
                description: "Base friction resistance against horizontal thrust",
                formula: "FS = mu W / T",
                reference: CodeReference::UsaceEngineerManual { number: "1110-2-2502" },
                variables: vec![
                    Variable::new("mu", "Base friction coefficient", "-"),
                    Variable::new("W", "Stabilizing weight", "kN"),
                    Variable::new("T", "Horizontal thrust", "kN"),
                ],
                assumptions: vec!["No passive resistance or base cohesion", "Acceptance threshold left to the engineer"],
                category: EquationCategory::Geotechnical,
                source_module: "equations/structures.rs",
                source_function: "sliding_factor_of_safety",
            },

            Equation::CorrosionRemainingThickness => EquationMetadata {
                name: "Remaining Thickness",
                description: "Linear section loss, floored at full loss",
                formula: "t = max(0, t0 - r years)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("t0", "Initial thickness", "mm"),
                    Variable::new("r", "Corrosion rate", "mm/yr"),
                    Variable::new("years", "Service life", "yr"),
                ],
                assumptions: vec!["Uniform corrosion at a constant rate"],
                category: EquationCategory::Durability,
                source_module: "equations/structures.rs",
                source_function: "remaining_thickness",
            },

            Equation::PileFroudeNumber => EquationMetadata {
                name: "Pile Froude Number",
                description: "Flow speed normalized by pile diameter",
                formula: "Fr_D = U / sqrt(g D)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("U", "Depth-averaged current", "m/s"),
                    Variable::new("D", "Pile diameter", "m"),
                ],
                assumptions: vec!["Steady current"],
                category: EquationCategory::Scour,
                source_module: "equations/hydrodynamics.rs",
                source_function: "pile_froude_number",
            },

            Equation::LocalScourDepth => EquationMetadata {
                name: "Local Scour Depth",
                description: "Screening estimate of equilibrium scour at a cylindrical pile",
                formula: "y_s = K D Fr_D^m",
                reference: CodeReference::Screening,
                variables: vec![
                    Variable::new("y_s", "Scour depth", "m"),
                    Variable::new("K", "Scour coefficient (default 2.0)", "-"),
                    Variable::new("m", "Froude exponent (default 1.0)", "-"),
                ],
                assumptions: vec!["Single cylindrical pile", "Non-cohesive bed", "Not a substitute for HEC-18 analysis"],
                category: EquationCategory::Scour,
                source_module: "equations/hydrodynamics.rs",
                source_function: "local_scour_depth",
            },

            Equation::HarmonicTideSynthesis => EquationMetadata {
                name: "Harmonic Tide Synthesis",
                description: "Water level as a superposition of harmonic constituents",
                formula: "eta(t) = sum A_i cos(omega_i t + phi_i)",
                reference: CodeReference::Schureman1958,
                variables: vec![
                    Variable::new("A_i", "Constituent amplitude", "m"),
                    Variable::new("omega_i", "Constituent angular frequency", "rad/s"),
                    Variable::new("phi_i", "Constituent phase", "rad"),
                ],
                assumptions: vec!["No nodal corrections", "Elevation relative to mean water level"],
                category: EquationCategory::Tides,
                source_module: "equations/tides.rs",
                source_function: "harmonic_elevation",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories, in document order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![Waves, Hydrodynamics, Berthing, Geotechnical, Durability, Scour, Tides];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::DispersionRelation,
    Equation::Wavelength,
    Equation::PhaseCelerity,
    Equation::GroupCelerity,
    Equation::ShoalingCoefficient,
    Equation::MorisonInlineForce,
    Equation::WindDragForce,
    Equation::CurrentDragForce,
    Equation::MooringDesignLoad,
    Equation::BerthingEnergy,
    Equation::FenderReaction,
    Equation::PileAxialCapacity,
    Equation::SlidingFactorOfSafety,
    Equation::CorrosionRemainingThickness,
    Equation::PileFroudeNumber,
    Equation::LocalScourDepth,
    Equation::HarmonicTideSynthesis,
];

// ============================================================================
// Markdown Generation for EQUATIONS.md
// ============================================================================

/// Generate a complete EQUATIONS.md document from the registry.
///
/// # Example
///
/// ```rust
/// use waterfront_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Waterfront Equations Reference"));
/// assert!(markdown.contains("## Waves"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(r#"# Waterfront Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists every formula used by the waterfront screening models.
Results are screening-level estimates and require professional validation.

## Units

| Quantity | Unit |
|----------|------|
| Length, depth, diameter | m |
| Time, period | s |
| Hydrodynamic force | N, N/m |
| Structural capacity, weight, thrust | kN, kPa |
| Vessel mass / speed (inputs only) | tonnes / knots |
| Steel thickness | mm |

"#);

    let constants = PhysicalConstants::STANDARD;
    output.push_str("## Constants\n\n| Symbol | Value | Units |\n|--------|-------|-------|\n");
    output.push_str(&format!("| g | {} | m/s² |\n", constants.gravity_mps2));
    output.push_str(&format!("| ρ_w | {} | kg/m³ |\n", constants.seawater_density_kg_m3));
    output.push_str(&format!("| ρ_a | {} | kg/m³ |\n\n---\n\n", constants.air_density_kg_m3));

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 17);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(!meta.source_module.is_empty(), "Equation {:?} missing source_module", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} missing source_function", eq);
        }

        let dispersion = Equation::DispersionRelation.metadata();
        assert!(dispersion.formula.contains("tanh(k h)"));
    }

    #[test]
    fn test_every_category_populated() {
        for cat in Equation::all_categories() {
            assert!(!Equation::in_category(cat).is_empty(), "{:?} is empty", cat);
        }
    }

    #[test]
    fn test_code_reference_citation() {
        let pianc = CodeReference::Pianc { working_group: 33, year: 2002 };
        assert_eq!(pianc.citation(), "PIANC WG 33 (2002)");

        let cem = CodeReference::CoastalEngineeringManual { part: "II", chapter: 1 };
        assert_eq!(cem.citation(), "USACE Coastal Engineering Manual, Part II, Chapter 1");
        assert_eq!(cem.short_form(), "CEM");
    }

    #[test]
    fn test_categories_sorted() {
        let cats = Equation::all_categories();
        let orders: Vec<u8> = cats.iter().map(|c| c.sort_order()).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted);
        assert_eq!(cats[0], EquationCategory::Waves);
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("# Waterfront Equations Reference"));
        assert!(markdown.contains("Auto-generated from source code"));
        assert!(markdown.contains("| g | 9.80665 | m/s² |"));
        for cat in Equation::all_categories() {
            assert!(
                markdown.contains(&format!("## {}", cat.display_name())),
                "Missing {:?}",
                cat
            );
        }
        assert!(markdown.contains("### Morison Maximum Inline Force"));
        assert!(markdown.contains("`y_s = K D Fr_D^m`"));
        assert!(markdown.contains("PIANC WG 33 (2002)"));
        assert!(markdown.contains("equations/waves.rs"));
        assert!(markdown.contains("**Total Equations:** 17"));
        assert!(markdown.contains("**Categories:** 7"));
    }
}
