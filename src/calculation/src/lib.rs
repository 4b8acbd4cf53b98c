//! Parametric sizing library for multirotor aircraft.
//!
//! This library sweeps a grid of propeller rotation speeds and diameters
//! and, for every design point:
//! - calibrates momentum-theory thrust and power coefficients from one
//!   datasheet point
//! - derives thrust, power, motor, battery and all-up mass
//! - estimates hover endurance and masks infeasible designs
//! - finds the bank angle that maximises cruise range
//!
//! # Undefined cells
//!
//! A cell with no feasible design is `None` in every [`Field`]. Nothing in
//! the numeric path returns an error; only [`SweepConfig::validate`] can
//! fail.

#![warn(clippy::doc_markdown)]
#![allow(clippy::inconsistent_struct_constructor)]

pub mod config;
pub mod constants;
pub mod cruise;
pub mod error;
pub mod field;
pub mod grid;
pub mod hover;
pub mod propeller;
pub mod sweep;

// Re-export key types and functions for easy use
pub use config::{AngleSweep, AxisRange, GridSpec, SweepConfig};
pub use constants::Constants;
pub use cruise::{CruiseField, CruiseOptimum};
pub use error::{ConfigError, ConfigResult};
pub use field::{Field, Mask};
pub use grid::DesignGrid;
pub use hover::{CroppedHover, HoverField};
pub use propeller::PropellerCoefficients;
pub use sweep::{run_study, run_sweep, BestDesign, Study, SweepResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
