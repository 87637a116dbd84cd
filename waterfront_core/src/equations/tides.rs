//! # Harmonic Tide Synthesis
//!
//! η(t) = Σ Aᵢ·cos(ωᵢ·t + φᵢ)
//!
//! ## References
//!
//! - Schureman (1958), Manual of Harmonic Analysis and Prediction of Tides,
//!   US Coast and Geodetic Survey Special Publication 98

/// Elevation contribution of a single constituent at time `t`
#[inline]
pub fn constituent_elevation(amplitude_m: f64, omega_rad_s: f64, phase_rad: f64, t_s: f64) -> f64 {
    amplitude_m * (omega_rad_s * t_s + phase_rad).cos()
}

/// Sum of constituent contributions at time `t`. An empty set sums to zero.
pub fn harmonic_elevation<I>(constituents: I, t_s: f64) -> f64
where
    I: IntoIterator<Item = (f64, f64, f64)>,
{
    constituents
        .into_iter()
        .map(|(amp, omega, phase)| constituent_elevation(amp, omega, phase, t_s))
        .sum()
}
