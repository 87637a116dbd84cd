//! # Unit Types
//!
//! Type-safe wrappers for the handful of non-SI units that appear at the
//! edges of the models. Conversions happen once, through `From`, so a value
//! in knots can never be squared as if it were m/s.
//!
//! ## Units
//!
//! Models work in SI base units internally:
//! - Speed: metres per second (m/s); berthing speed is supplied in knots
//! - Mass: kilograms (kg); vessel displacement is supplied in metric tonnes
//! - Force: newtons (N), kilonewtons (kN) for structural capacity
//! - Energy: joules (J)
//!
//! ## Example
//!
//! ```rust
//! use waterfront_core::units::{Knots, MetersPerSecond, Tonnes, Kilograms};
//!
//! let v: MetersPerSecond = Knots(1.0).into();
//! assert!((v.0 - 0.514444).abs() < 1e-9);
//!
//! let m: Kilograms = Tonnes(2.5).into();
//! assert_eq!(m.0, 2500.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Metres per second in one international knot (rounded as used in berthing practice)
pub const MPS_PER_KNOT: f64 = 0.514444;

// ============================================================================
// Speed Units
// ============================================================================

/// Speed in knots
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Knots(pub f64);

/// Speed in metres per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetersPerSecond(pub f64);

impl From<Knots> for MetersPerSecond {
    fn from(kn: Knots) -> Self {
        MetersPerSecond(kn.0 * MPS_PER_KNOT)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in metric tonnes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tonnes(pub f64);

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl From<Tonnes> for Kilograms {
    fn from(t: Tonnes) -> Self {
        Kilograms(t.0 * 1000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons (1 kN = 1000 N)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 / 1000.0)
    }
}

// ============================================================================
// Energy Units
// ============================================================================

/// Energy in joules
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Joules(pub f64);

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Knots);
impl_arithmetic!(MetersPerSecond);
impl_arithmetic!(Tonnes);
impl_arithmetic!(Kilograms);
impl_arithmetic!(Newtons);
impl_arithmetic!(Kilonewtons);
impl_arithmetic!(Joules);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knots_to_mps() {
        let v: MetersPerSecond = Knots(0.5).into();
        assert!((v.0 - 0.257222).abs() < 1e-9);
    }

    #[test]
    fn test_tonnes_to_kg() {
        let kg: Kilograms = Tonnes(50_000.0).into();
        assert_eq!(kg.0, 5.0e7);
    }

    #[test]
    fn test_newtons_to_kilonewtons() {
        let kn: Kilonewtons = Newtons(1500.0).into();
        assert_eq!(kn.0, 1.5);
    }

    #[test]
    fn test_arithmetic() {
        let a = Newtons(10.0);
        let b = Newtons(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 1.5).value(), 15.0);
        assert_eq!((a / 2.0).value(), 5.0);
    }

    #[test]
    fn test_serialization() {
        let v = Knots(0.15);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "0.15");
    }
}
