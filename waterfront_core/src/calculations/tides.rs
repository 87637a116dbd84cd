//! # Tide Synthesis
//!
//! Eagerly materialized elevation series from superposed harmonic
//! constituents, sampled on a uniform grid.
//!
//! ## Example
//!
//! ```rust
//! use waterfront_core::calculations::tides::{tide_series, TideConstituent};
//!
//! let m2 = TideConstituent::from_period(1.0, 12.42 * 3600.0, 0.0).unwrap();
//! let series = tide_series(43_200.0, 600.0, &[m2]).unwrap();
//! assert_eq!(series.len(), 73);
//! ```

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::equations::tides::harmonic_elevation;
use crate::errors::{ensure_finite, ensure_positive, CalcError, CalcResult};

/// Slack added to the duration so a final point landing on it survives rounding
const ENDPOINT_TOLERANCE_S: f64 = 1e-9;

/// Largest series a single call will materialize
pub const MAX_TIDE_POINTS: usize = 10_000_000;

/// One harmonic constituent A·cos(ω·t + φ).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TideConstituent {
    /// Amplitude A (m)
    pub amplitude_m: f64,
    /// Angular frequency ω (rad/s)
    pub angular_frequency_rad_s: f64,
    /// Phase φ (rad)
    #[serde(default)]
    pub phase_rad: f64,
}

impl TideConstituent {
    pub fn new(amplitude_m: f64, angular_frequency_rad_s: f64, phase_rad: f64) -> Self {
        TideConstituent {
            amplitude_m,
            angular_frequency_rad_s,
            phase_rad,
        }
    }

    /// Build a constituent from its period, ω = 2π/T.
    pub fn from_period(amplitude_m: f64, period_s: f64, phase_rad: f64) -> CalcResult<Self> {
        ensure_positive("period_s", period_s)?;
        Ok(TideConstituent::new(amplitude_m, TAU / period_s, phase_rad))
    }

    pub fn validate(&self) -> CalcResult<()> {
        ensure_finite("amplitude_m", self.amplitude_m)?;
        ensure_finite("angular_frequency_rad_s", self.angular_frequency_rad_s)?;
        ensure_finite("phase_rad", self.phase_rad)?;
        Ok(())
    }

    fn terms(&self) -> (f64, f64, f64) {
        (self.amplitude_m, self.angular_frequency_rad_s, self.phase_rad)
    }
}

/// Input parameters for a tide series.
///
/// The window always starts at t = 0. Unknown keys in the JSON body are
/// ignored, so a stray `start_s` does not shift the series.
///
/// ## JSON Example
///
/// ```json
/// {
///   "duration_s": 43200.0,
///   "step_s": 600.0,
///   "constituents": [
///     { "amplitude_m": 1.0, "angular_frequency_rad_s": 0.0001405, "phase_rad": 0.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TideSeriesInput {
    /// Window length (s), > 0
    pub duration_s: f64,
    /// Sampling step (s), > 0
    pub step_s: f64,
    /// May be empty
    #[serde(default)]
    pub constituents: Vec<TideConstituent>,
}

impl TideSeriesInput {
    pub fn new(duration_s: f64, step_s: f64, constituents: Vec<TideConstituent>) -> Self {
        TideSeriesInput {
            duration_s,
            step_s,
            constituents,
        }
    }

    /// Number of samples the window produces, including both end points.
    pub fn point_count(&self) -> usize {
        ((self.duration_s + ENDPOINT_TOLERANCE_S) / self.step_s).floor() as usize + 1
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("duration_s", self.duration_s)?;
        ensure_positive("step_s", self.step_s)?;
        for constituent in &self.constituents {
            constituent.validate()?;
        }

        let points = (self.duration_s + ENDPOINT_TOLERANCE_S) / self.step_s;
        if points >= MAX_TIDE_POINTS as f64 {
            return Err(CalcError::invalid_input(
                "step_s",
                self.step_s.to_string(),
                format!("Series would exceed {} points; use a larger step", MAX_TIDE_POINTS),
            ));
        }
        Ok(())
    }
}

/// A discretized elevation time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TideSeries {
    /// Sample times (s), ascending
    pub timestamps_s: Vec<f64>,
    /// Elevations (m), same length as `timestamps_s`
    pub elevations_m: Vec<f64>,
}

impl TideSeries {
    pub fn len(&self) -> usize {
        self.timestamps_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps_s.is_empty()
    }

    pub fn max_elevation(&self) -> Option<f64> {
        self.elevations_m.iter().copied().reduce(f64::max)
    }

    pub fn min_elevation(&self) -> Option<f64> {
        self.elevations_m.iter().copied().reduce(f64::min)
    }

    /// (time, elevation) pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.timestamps_s.iter().copied().zip(self.elevations_m.iter().copied())
    }
}

/// Synthesize the series for a validated window.
///
/// Timestamps are `i·dt` from zero, computed from the index rather than by
/// accumulation so long series do not drift.
pub fn calculate(input: &TideSeriesInput) -> CalcResult<TideSeries> {
    input.validate()?;

    let n = input.point_count();
    let timestamps_s: Vec<f64> = (0..n).map(|i| i as f64 * input.step_s).collect();
    let elevations_m = timestamps_s
        .iter()
        .map(|&t| harmonic_elevation(input.constituents.iter().map(TideConstituent::terms), t))
        .collect();

    Ok(TideSeries {
        timestamps_s,
        elevations_m,
    })
}

/// Convenience wrapper over [`calculate`].
pub fn tide_series(duration_s: f64, step_s: f64, constituents: &[TideConstituent]) -> CalcResult<TideSeries> {
    calculate(&TideSeriesInput::new(duration_s, step_s, constituents.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_at_ten_minutes() {
        let c = TideConstituent::new(1.0, 1e-4, 0.0);
        let s = tide_series(3600.0, 600.0, &[c]).unwrap();
        assert_eq!(s.timestamps_s, vec![0.0, 600.0, 1200.0, 1800.0, 2400.0, 3000.0, 3600.0]);
        for (t, eta) in s.points() {
            assert!((eta - (1e-4 * t).cos()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_empty_constituents() {
        let s = tide_series(3600.0, 600.0, &[]).unwrap();
        assert_eq!(s.len(), 7);
        assert!(s.elevations_m.iter().all(|&e| e == 0.0));
    }

    #[test]
    fn test_non_multiple_duration() {
        // 0, 700, ..., 3500
        let s = tide_series(3600.0, 700.0, &[]).unwrap();
        assert_eq!(s.len(), 6);
        assert_eq!(*s.timestamps_s.last().unwrap(), 3500.0);
    }

    #[test]
    fn test_inexact_step_keeps_endpoint() {
        let s = tide_series(1.0, 0.1, &[]).unwrap();
        assert_eq!(s.len(), 11);
    }

    #[test]
    fn test_window_anchored_at_zero() {
        let c = TideConstituent::new(0.8, 2e-3, 0.3);
        for json in [
            r#"{"start_s": 100.0, "duration_s": 10.0, "step_s": 5.0}"#,
            r#"{"start_s": -5.0, "duration_s": 10.0, "step_s": 5.0}"#,
        ] {
            let mut input: TideSeriesInput = serde_json::from_str(json).unwrap();
            input.constituents.push(c);
            let s = calculate(&input).unwrap();
            assert_eq!(s.timestamps_s, vec![0.0, 5.0, 10.0]);
            assert!((s.elevations_m[0] - 0.8 * 0.3_f64.cos()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_from_period() {
        let c = TideConstituent::from_period(0.5, 3600.0, 0.0).unwrap();
        assert!((c.angular_frequency_rad_s - TAU / 3600.0).abs() < 1e-15);
        assert!(TideConstituent::from_period(0.5, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_extrema() {
        let c = TideConstituent::from_period(1.5, 3600.0, 0.0).unwrap();
        let s = tide_series(3600.0, 900.0, &[c]).unwrap();
        assert!((s.max_elevation().unwrap() - 1.5).abs() < 1e-12);
        assert!((s.min_elevation().unwrap() + 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_window() {
        assert!(tide_series(0.0, 600.0, &[]).is_err());
        assert!(tide_series(3600.0, 0.0, &[]).is_err());
        assert!(tide_series(-1.0, 600.0, &[]).is_err());
        let err = tide_series(1.0e9, 1.0, &[]).unwrap_err();
        assert_eq!(err.field(), Some("step_s"));
    }
}
