//! Cruise range optimisation over the bank angle.
//!
//! In forward flight the rotor disc is tilted by the bank angle θ. The
//! vertical share of the thrust `F·cos θ` fixes the mass the vehicle can
//! carry, the horizontal share `F·sin θ` balances drag
//! `0.5·ρ·Cd·S·v²`. Tilting further buys speed at the cost of battery
//! mass, so range `t(θ)·v(θ)` has an interior optimum that is found by a
//! scan over a fixed, ordered angle sweep.
//!
//! Every grid cell is independent, so the scan runs in parallel over
//! cells; the result does not depend on scheduling.

use log::debug;
use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize};

use crate::config::SweepConfig;
use crate::constants::vehicle::VehicleParams;
use crate::constants::Constants;
use crate::field::{self, Field, Mask};
use crate::hover::{self, HoverField};

/// Scalars every cruise evaluation needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CruiseInputs {
    pub constants: Constants,
    pub vehicle: VehicleParams,
    /// 0.5·ρ·Cd·S (N·s²/m²)
    pub drag_factor: f64,
    pub energy_density: f64,
}

impl CruiseInputs {
    pub fn from_config(config: &SweepConfig) -> Self {
        Self {
            constants: config.constants,
            vehicle: config.vehicle,
            drag_factor: config.drag.drag_factor(config.constants.rho_air),
            energy_density: config.battery.energy_density,
        }
    }
}

/// Cruise state at one bank angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnglePoint {
    /// Steady cruise speed (m/s)
    pub speed: f64,
    /// Distance flown on one charge (m), `None` without battery mass
    pub range: Option<f64>,
}

/// Evaluate one bank angle `theta` (rad) for a cell.
///
/// `theta` must lie in [0, π/2) so the horizontal force is non-negative.
pub fn evaluate_angle(
    thrust: f64,
    power: f64,
    motor_mass: f64,
    theta: f64,
    inputs: &CruiseInputs,
) -> AnglePoint {
    let total_mass = inputs.constants.liftable_mass(thrust * theta.cos());
    let battery_mass = hover::battery_mass(total_mass, inputs.vehicle.fixed_mass(), motor_mass);

    let horizontal_force = thrust * theta.sin();
    let speed = (horizontal_force / inputs.drag_factor).sqrt();

    let range = battery_mass
        .and_then(|m_batt| hover::endurance(m_batt, inputs.energy_density, power))
        .map(|cruise_time| cruise_time * speed);

    AnglePoint { speed, range }
}

/// Index of the largest defined value; the first one wins on ties.
pub fn argmax_defined(values: &[Option<f64>]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, value) in values.iter().enumerate() {
        if let Some(v) = *value {
            match best {
                Some((_, best_v)) if v <= best_v => {}
                _ => best = Some((i, v)),
            }
        }
    }
    best.map(|(i, _)| i)
}

/// Best cruise configuration of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CruiseOptimum {
    /// Bank angle (rad)
    pub angle: f64,
    /// Cruise speed (m/s)
    pub speed: f64,
    /// Range (m)
    pub range: f64,
}

/// Scan `angles` and keep the one with the longest range.
///
/// `None` when no angle of the sweep yields a defined range.
pub fn optimize_cell(
    thrust: f64,
    power: f64,
    motor_mass: f64,
    angles: &[f64],
    inputs: &CruiseInputs,
) -> Option<CruiseOptimum> {
    let points: Vec<AnglePoint> = angles
        .iter()
        .map(|&theta| evaluate_angle(thrust, power, motor_mass, theta, inputs))
        .collect();
    let ranges: Vec<Option<f64>> = points.iter().map(|p| p.range).collect();

    let best = argmax_defined(&ranges)?;
    Some(CruiseOptimum {
        angle: angles[best],
        speed: points[best].speed,
        range: ranges[best]?,
    })
}

/// Optimal cruise fields of a grid, masked by hover feasibility.
#[derive(Debug, Clone, PartialEq)]
pub struct CruiseField {
    /// Optimal bank angle (rad)
    pub angle: Field,
    /// Speed at the optimal angle (m/s)
    pub speed: Field,
    /// Longest range (m)
    pub range: Field,
}

impl CruiseField {
    fn from_optima(optima: &Array2<Option<CruiseOptimum>>, mask: &Mask) -> Self {
        let angle = optima.map(|o| o.map(|o| o.angle));
        let speed = optima.map(|o| o.map(|o| o.speed));
        let range = optima.map(|o| o.map(|o| o.range));
        Self {
            angle: field::apply_mask(&angle, mask),
            speed: field::apply_mask(&speed, mask),
            range: field::apply_mask(&range, mask),
        }
    }
}

/// Run the bank-angle scan on every cell of `hover`.
pub fn optimize_range(hover: &HoverField, angles: &[f64], config: &SweepConfig) -> CruiseField {
    let inputs = CruiseInputs::from_config(config);

    let optima = Zip::from(&hover.thrust)
        .and(&hover.power)
        .and(&hover.motor_mass)
        .par_map_collect(|&f, &p, &m| optimize_cell(f, p, m, angles, &inputs));

    let unmasked = optima.iter().filter(|o| o.is_some()).count();
    let cruise = CruiseField::from_optima(&optima, &hover.feasible);
    debug!(
        "cruise: {} angles, {} cells with a range, {} after feasibility mask",
        angles.len(),
        unmasked,
        field::defined_count(&cruise.range)
    );
    cruise
}
