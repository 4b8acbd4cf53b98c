//! Hover sizing over the design grid.
//!
//! For every (rpm, diameter) cell the propeller scaling gives total
//! thrust and power. Thrust fixes the all-up mass the vehicle can hover
//! with; whatever is left after payload, frame and motors is battery.
//! The battery then bounds hover endurance by energy and by discharge
//! power.
//!
//! Cells fail in three ways, each recorded as an undefined value:
//! - no mass left for a battery (battery mass ≤ 0),
//! - the battery cannot deliver the required power,
//! - hover endurance at or below the required minimum.

use log::debug;
use ndarray::{Array2, Zip};

use crate::config::SweepConfig;
use crate::constants::vehicle::{BatteryParams, VehicleParams};
use crate::constants::Constants;
use crate::field::{self, Field, Mask};
use crate::grid::DesignGrid;
use crate::propeller::PropellerCoefficients;

/// Battery mass left after payload, frame (together `fixed_mass`) and motors.
///
/// `None` when the remainder is zero or negative: the airframe cannot
/// lift its own hardware.
#[inline(always)]
pub fn battery_mass(total_mass: f64, fixed_mass: f64, motor_mass: f64) -> Option<f64> {
    let remainder = total_mass - fixed_mass - motor_mass;
    (remainder > 0.0).then_some(remainder)
}

/// Time (s) a battery of `battery_mass` kg sustains a `power` W draw.
#[inline(always)]
pub fn endurance(battery_mass: f64, energy_density: f64, power: f64) -> Option<f64> {
    (power > 0.0).then(|| battery_mass * energy_density / power)
}

/// Scalars every hover cell needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverInputs {
    pub constants: Constants,
    pub vehicle: VehicleParams,
    pub battery: BatteryParams,
}

impl HoverInputs {
    pub fn from_config(config: &SweepConfig) -> Self {
        Self {
            constants: config.constants,
            vehicle: config.vehicle,
            battery: config.battery,
        }
    }
}

/// Hover quantities of one design point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverCell {
    pub motor_mass: f64,
    pub total_mass: f64,
    pub battery_mass: Option<f64>,
    /// Endurance after the power-adequacy check
    pub hover_endurance: Option<f64>,
}

/// Size one cell from its total thrust (N) and total power (W).
pub fn hover_cell(thrust: f64, power: f64, inputs: &HoverInputs) -> HoverCell {
    let motor_mass = inputs.vehicle.motor_mass(power);
    let total_mass = inputs.constants.liftable_mass(thrust);
    let battery_mass = battery_mass(total_mass, inputs.vehicle.fixed_mass(), motor_mass);

    // full draw of all motors against the discharge limit of the pack;
    // equality already counts as under-powered
    let hover_endurance = battery_mass
        .filter(|&m_batt| power < m_batt * inputs.battery.power_density)
        .and_then(|m_batt| endurance(m_batt, inputs.battery.energy_density, power));

    HoverCell {
        motor_mass,
        total_mass,
        battery_mass,
        hover_endurance,
    }
}

/// A cell is feasible when its hover endurance exists and exceeds the minimum.
#[inline(always)]
pub fn is_feasible(hover_endurance: Option<f64>, min_hover_time: f64) -> bool {
    hover_endurance.is_some_and(|t| t > min_hover_time)
}

/// Hover results restricted to feasible cells.
#[derive(Debug, Clone, PartialEq)]
pub struct CroppedHover {
    pub hover_endurance: Field,
    pub total_mass: Field,
    pub battery_mass: Field,
    /// Power of a single motor (W)
    pub motor_power: Field,
}

/// Hover derivation for a whole grid.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverField {
    /// Total thrust of all propellers (N)
    pub thrust: Array2<f64>,
    /// Total shaft power of all propellers (W)
    pub power: Array2<f64>,
    pub motor_mass: Array2<f64>,
    pub total_mass: Array2<f64>,
    pub battery_mass: Field,
    pub hover_endurance: Field,
    pub feasible: Mask,
    pub cropped: CroppedHover,
}

impl HoverField {
    pub fn feasible_count(&self) -> usize {
        self.feasible.iter().filter(|&&f| f).count()
    }
}

/// Derive every hover quantity on `grid`.
pub fn derive_hover(
    grid: &DesignGrid,
    config: &SweepConfig,
    coefficients: &PropellerCoefficients,
) -> HoverField {
    let rho = config.constants.rho_air;
    let n_props = f64::from(config.vehicle.n_props);
    let inputs = HoverInputs::from_config(config);

    let omega = grid.omega();
    let radius = grid.radius();
    let thrust = Zip::from(&omega)
        .and(&radius)
        .map_collect(|&w, &r| n_props * coefficients.thrust(rho, w, r));
    let power = Zip::from(&omega)
        .and(&radius)
        .map_collect(|&w, &r| n_props * coefficients.power(rho, w, r));

    let cells = Zip::from(&thrust)
        .and(&power)
        .map_collect(|&f, &p| hover_cell(f, p, &inputs));

    let motor_mass = cells.map(|c| c.motor_mass);
    let total_mass = cells.map(|c| c.total_mass);
    let battery_mass: Field = cells.map(|c| c.battery_mass);
    let hover_endurance: Field = cells.map(|c| c.hover_endurance);
    let feasible: Mask = hover_endurance.map(|&t| is_feasible(t, config.min_hover_time));

    let motor_power = power.mapv(|p| p / n_props);
    let cropped = CroppedHover {
        hover_endurance: field::apply_mask(&hover_endurance, &feasible),
        total_mass: field::mask_dense(&total_mass, &feasible),
        battery_mass: field::apply_mask(&battery_mass, &feasible),
        motor_power: field::mask_dense(&motor_power, &feasible),
    };

    let hover = HoverField {
        thrust,
        power,
        motor_mass,
        total_mass,
        battery_mass,
        hover_endurance,
        feasible,
        cropped,
    };
    debug!(
        "hover: {} cells, {} with battery, {} with endurance, {} feasible",
        grid.len(),
        field::defined_count(&hover.battery_mass),
        field::defined_count(&hover.hover_endurance),
        hover.feasible_count()
    );
    hover
}
