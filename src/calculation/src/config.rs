//! Sweep configuration: grid axes, bank-angle sweep and vehicle data.
//!
//! A [`SweepConfig`] is built once, validated once and then only
//! borrowed by the pipeline, so a sweep is a pure function of it.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::constants::vehicle::{BatteryParams, DragParams, ReferencePoint, VehicleParams};
use crate::constants::{deg_to_rad, Constants};
use crate::error::{ConfigError, ConfigResult};

/// Half-open arithmetic progression `[start, stop)` with spacing `step`.
///
/// The number of points is `ceil((stop - start) / step)`, so a stop value
/// slightly past the last wanted point (1.01 for 1.0) keeps that point
/// despite floating-point spacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl AxisRange {
    pub const fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    /// Number of points on the axis.
    pub fn len(&self) -> usize {
        if !(self.step > 0.0) || !(self.stop > self.start) {
            return 0;
        }
        ((self.stop - self.start) / self.step).ceil() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Last value on the axis.
    pub fn last(&self) -> Option<f64> {
        self.len()
            .checked_sub(1)
            .map(|n| self.start + n as f64 * self.step)
    }

    /// Axis values, `start + i * step`.
    pub fn values(&self) -> Array1<f64> {
        Array1::from_shape_fn(self.len(), |i| self.start + i as f64 * self.step)
    }

    fn validate(&self, axis: &'static str) -> ConfigResult<()> {
        if !(self.step > 0.0) || !self.step.is_finite() {
            return Err(ConfigError::NonPositiveStep { axis, step: self.step });
        }
        if self.is_empty() {
            return Err(ConfigError::EmptyAxis {
                axis,
                start: self.start,
                stop: self.stop,
                step: self.step,
            });
        }
        Ok(())
    }
}

/// Rotation-speed and diameter axes of one design grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub rpm: AxisRange,
    pub diameter: AxisRange, // m
}

impl GridSpec {
    /// Wide grid: 1000 to 10000 rpm, 0.2 to 1.0 m.
    pub fn exploratory() -> Self {
        Self {
            rpm: AxisRange::new(1000.0, 10001.0, 100.0),
            diameter: AxisRange::new(0.2, 1.01, 0.02),
        }
    }

    /// Narrow grid around large slow propellers: 1000 to 3000 rpm, 0.7 to 1.0 m.
    pub fn modified() -> Self {
        Self {
            rpm: AxisRange::new(1000.0, 3001.0, 100.0),
            diameter: AxisRange::new(0.7, 1.01, 0.02),
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.rpm.validate("rpm")?;
        self.diameter.validate("diameter")?;
        if !(self.rpm.start > 0.0) {
            return Err(ConfigError::NonPositive {
                name: "rpm.start",
                value: self.rpm.start,
            });
        }
        if !(self.diameter.start > 0.0) {
            return Err(ConfigError::NonPositive {
                name: "diameter.start",
                value: self.diameter.start,
            });
        }
        Ok(())
    }
}

/// Ordered bank-angle candidates, in degrees, `[start, stop)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleSweep {
    pub start_deg: f64,
    pub stop_deg: f64,
    pub step_deg: f64,
}

impl AngleSweep {
    /// 5° to 30° in 0.5° steps.
    pub fn cruise() -> Self {
        Self {
            start_deg: 5.0,
            stop_deg: 30.5,
            step_deg: 0.5,
        }
    }

    fn axis(&self) -> AxisRange {
        AxisRange::new(self.start_deg, self.stop_deg, self.step_deg)
    }

    pub fn degrees(&self) -> Array1<f64> {
        self.axis().values()
    }

    /// Sweep in radians, in ascending order.
    pub fn angles(&self) -> Vec<f64> {
        self.degrees().iter().map(|&d| deg_to_rad(d)).collect()
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let axis = self.axis();
        if !(axis.step > 0.0) || !axis.step.is_finite() {
            return Err(ConfigError::NonPositiveStep {
                axis: "bank_angle",
                step: axis.step,
            });
        }
        if axis.is_empty() {
            return Err(ConfigError::EmptyAngleSweep);
        }
        // the sweep is ascending, so the ends bound every entry
        let last = axis.last().unwrap_or(axis.start);
        for angle_deg in [axis.start, last] {
            if !(0.0..90.0).contains(&angle_deg) {
                return Err(ConfigError::AngleOutOfRange { angle_deg });
            }
        }
        Ok(())
    }
}

/// Complete, immutable input of a sizing study.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub constants: Constants,
    pub vehicle: VehicleParams,
    pub battery: BatteryParams,
    pub reference: ReferencePoint,
    pub drag: DragParams,
    /// Minimum hover endurance a design must exceed (s)
    pub min_hover_time: f64,
    pub exploratory_grid: GridSpec,
    pub modified_grid: GridSpec,
    pub bank_angles: AngleSweep,
}

impl SweepConfig {
    /// The octocopter study: LiPo battery, 30 min minimum hover.
    pub fn reference() -> Self {
        let constants = Constants::new();
        Self {
            constants,
            vehicle: VehicleParams::octocopter(),
            battery: BatteryParams::lipo(),
            reference: ReferencePoint::datasheet(&constants),
            drag: DragParams::payload_bay(),
            min_hover_time: 30.0 * 60.0,
            exploratory_grid: GridSpec::exploratory(),
            modified_grid: GridSpec::modified(),
            bank_angles: AngleSweep::cruise(),
        }
    }

    /// Check every precondition of the pipeline.
    ///
    /// After this succeeds no division in the sweep can hit a zero
    /// denominator coming from the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let positive = [
            ("g", self.constants.g),
            ("rho_air", self.constants.rho_air),
            ("reference.radius", self.reference.radius),
            ("reference.power", self.reference.power),
            ("reference.thrust", self.reference.thrust),
            ("reference.omega", self.reference.omega),
            ("motor_power_to_weight", self.vehicle.motor_power_to_weight),
            ("battery.energy_density", self.battery.energy_density),
            ("battery.power_density", self.battery.power_density),
            ("drag_coefficient", self.drag.drag_coefficient),
            ("payload_volume", self.drag.payload_volume),
        ];
        for (name, value) in positive {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.vehicle.n_props == 0 {
            return Err(ConfigError::NonPositive {
                name: "n_props",
                value: 0.0,
            });
        }
        if self.vehicle.frame_mass < 0.0 || self.vehicle.payload_mass < 0.0 {
            return Err(ConfigError::NonPositive {
                name: "fixed mass",
                value: self.vehicle.frame_mass.min(self.vehicle.payload_mass),
            });
        }
        if !(self.min_hover_time >= 0.0) || !self.min_hover_time.is_finite() {
            return Err(ConfigError::InvalidDuration {
                name: "min_hover_time",
                value: self.min_hover_time,
            });
        }
        self.exploratory_grid.validate()?;
        self.modified_grid.validate()?;
        self.bank_angles.validate()
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_axis_lengths_match_reference_grids() {
        let wide = GridSpec::exploratory();
        assert_eq!(wide.rpm.len(), 91);
        assert_eq!(wide.diameter.len(), 41);

        let narrow = GridSpec::modified();
        assert_eq!(narrow.rpm.len(), 21);
        assert_eq!(narrow.diameter.len(), 16);
    }

    #[test]
    fn test_axis_values() {
        let d = GridSpec::exploratory().diameter.values();
        assert_relative_eq!(d[0], 0.2);
        assert_relative_eq!(d[40], 1.0, epsilon = 1e-12);
        let rpm = GridSpec::modified().rpm.values();
        assert_eq!(rpm[20], 3000.0);
    }

    #[test]
    fn test_angle_sweep() {
        let sweep = AngleSweep::cruise();
        let deg = sweep.degrees();
        assert_eq!(deg.len(), 51);
        assert_eq!(deg[0], 5.0);
        assert_eq!(deg[50], 30.0);
        let rad = sweep.angles();
        assert_relative_eq!(rad[10], 10.0_f64.to_radians());
    }

    #[test]
    fn test_reference_config_is_valid() {
        assert_eq!(SweepConfig::reference().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_step() {
        let mut config = SweepConfig::reference();
        config.modified_grid.diameter.step = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveStep { axis: "diameter", .. })
        ));
    }

    #[test]
    fn test_rejects_empty_axis() {
        let mut config = SweepConfig::reference();
        config.exploratory_grid.rpm = AxisRange::new(2000.0, 1000.0, 100.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyAxis { axis: "rpm", .. })
        ));
    }

    #[test]
    fn test_rejects_vertical_bank_angle() {
        let mut config = SweepConfig::reference();
        config.bank_angles = AngleSweep {
            start_deg: 80.0,
            stop_deg: 95.0,
            step_deg: 5.0,
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::AngleOutOfRange { angle_deg: 90.0 })
        );
    }

    #[test]
    fn test_rejects_invalid_min_hover_time() {
        let mut config = SweepConfig::reference();
        config.min_hover_time = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDuration { name: "min_hover_time", .. })
        ));

        config.min_hover_time = -60.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidDuration {
                name: "min_hover_time",
                value: -60.0
            })
        );

        config.min_hover_time = 0.0;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_degenerate_reference_point() {
        let mut config = SweepConfig::reference();
        config.reference.omega = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "reference.omega",
                value: 0.0
            })
        );
    }
}
