//! Momentum-theory propeller scaling.
//!
//! Thrust and shaft power of a propeller family scale as
//!
//! ```text
//! F = α · ρ · ω² · R⁴
//! P = β · ρ · ω³ · R⁵
//! ```
//!
//! The two dimensionless coefficients are calibrated once from a single
//! measured datasheet point and then extrapolated to every grid cell.

use serde::{Deserialize, Serialize};

use crate::constants::vehicle::ReferencePoint;

/// Calibrated thrust (α) and power (β) coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropellerCoefficients {
    pub thrust: f64,
    pub power: f64,
}

impl PropellerCoefficients {
    /// Solve the scaling laws for α and β at the reference point.
    ///
    /// The reference point and density must be non-zero, which
    /// [`SweepConfig::validate`](crate::config::SweepConfig::validate)
    /// guarantees.
    pub fn calibrate(reference: &ReferencePoint, rho_air: f64) -> Self {
        let omega = reference.omega;
        let r = reference.radius;
        Self {
            thrust: reference.thrust / (rho_air * omega.powi(2) * r.powi(4)),
            power: reference.power / (rho_air * omega.powi(3) * r.powi(5)),
        }
    }

    /// Thrust of one propeller (N).
    #[inline(always)]
    pub fn thrust(&self, rho_air: f64, omega: f64, radius: f64) -> f64 {
        self.thrust * rho_air * omega.powi(2) * radius.powi(4)
    }

    /// Shaft power of one propeller (W).
    #[inline(always)]
    pub fn power(&self, rho_air: f64, omega: f64, radius: f64) -> f64 {
        self.power * rho_air * omega.powi(3) * radius.powi(5)
    }
}
