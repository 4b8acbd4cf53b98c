//! Physical constants and vehicle parameters for the sizing sweep.
//!
//! Everything here is a fixed scalar chosen once at startup. The values
//! mirror the octocopter study the sweep was built for: a 10 kg payload
//! carried by eight propellers on a 4 kg frame, sized against a single
//! datasheet point of a 0.5 m propeller.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Convert a rotation speed in rpm to rad/s.
#[inline(always)]
pub fn rpm_to_rad_per_s(rpm: f64) -> f64 {
    rpm * 2.0 * PI / 60.0
}

/// Convert degrees to radians.
#[inline(always)]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Convert radians to degrees.
#[inline(always)]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Global physical constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constants {
    /// Gravitational acceleration (m/s²)
    pub g: f64,

    /// Air density (kg/m³)
    pub rho_air: f64,
}

impl Constants {
    /// Constants used by the reference sizing study.
    pub const fn new() -> Self {
        Self {
            g: 9.8,
            rho_air: 1.22,
        }
    }

    /// Weight in newtons of a mass given in kg.
    #[inline(always)]
    pub fn weight(&self, mass: f64) -> f64 {
        mass * self.g
    }

    /// Mass in kg that a vertical force (N) can hold up.
    #[inline(always)]
    pub fn liftable_mass(&self, force: f64) -> f64 {
        force / self.g
    }

    /// Ordered summary for console reporting.
    pub fn summary(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("g (m/s²)".to_string(), format!("{:.4}", self.g));
        map.insert("ρ_air (kg/m³)".to_string(), format!("{:.4}", self.rho_air));
        map
    }
}

impl Default for Constants {
    fn default() -> Self {
        Self::new()
    }
}

/// Airframe, battery and datasheet parameters.
pub mod vehicle {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Serialize};

    use super::{rpm_to_rad_per_s, Constants};

    /// Airframe and motor parameters.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct VehicleParams {
        pub n_props: u32,
        pub frame_mass: f64,            // kg, bare frame
        pub payload_mass: f64,          // kg
        pub motor_power_to_weight: f64, // W/kg, "cruise" rating of the motors
    }

    impl VehicleParams {
        pub fn octocopter() -> Self {
            Self {
                n_props: 8,
                frame_mass: 4.0,
                payload_mass: 10.0,
                motor_power_to_weight: 3000.0,
            }
        }

        /// Mass that is not battery and does not depend on motor sizing.
        #[inline(always)]
        pub fn fixed_mass(&self) -> f64 {
            self.payload_mass + self.frame_mass
        }

        /// Motor mass needed to deliver `power` watts.
        #[inline(always)]
        pub fn motor_mass(&self, power: f64) -> f64 {
            power / self.motor_power_to_weight
        }
    }

    impl Default for VehicleParams {
        fn default() -> Self {
            Self::octocopter()
        }
    }

    /// Battery chemistry ratios.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct BatteryParams {
        pub energy_density: f64, // J/kg
        pub power_density: f64,  // W/kg, max discharge power per kg
    }

    impl BatteryParams {
        /// Lithium-polymer pack: 450 kJ/kg, 5.7 kW/kg.
        pub fn lipo() -> Self {
            Self {
                energy_density: 450.0e3,
                power_density: 5.7e3,
            }
        }
    }

    impl Default for BatteryParams {
        fn default() -> Self {
            Self::lipo()
        }
    }

    /// One measured operating point of a reference propeller.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct ReferencePoint {
        pub radius: f64, // m
        pub power: f64,  // W
        pub thrust: f64, // N
        pub omega: f64,  // rad/s
    }

    impl ReferencePoint {
        /// Build from datasheet units: thrust in kgf and speed in rpm.
        pub fn from_datasheet(
            radius: f64,
            power: f64,
            thrust_kgf: f64,
            rpm: f64,
            constants: &Constants,
        ) -> Self {
            Self {
                radius,
                power,
                thrust: constants.weight(thrust_kgf),
                omega: rpm_to_rad_per_s(rpm),
            }
        }

        /// 0.5 m propeller: 2.2 kgf at 3559 rpm for 305 W.
        pub fn datasheet(constants: &Constants) -> Self {
            Self::from_datasheet(0.25, 305.0, 2.2, 3559.0, constants)
        }
    }

    /// Parasitic drag of the airframe in forward flight.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct DragParams {
        pub drag_coefficient: f64,
        pub payload_volume: f64, // m³, volume of the payload bay
    }

    impl DragParams {
        pub fn payload_bay() -> Self {
            Self {
                drag_coefficient: 1.2,
                payload_volume: 0.1,
            }
        }

        /// Frontal area producing drag, taken as volume^(2/3).
        #[inline(always)]
        pub fn effective_area(&self) -> f64 {
            self.payload_volume.powf(2.0 / 3.0)
        }

        /// Drag force per unit of squared airspeed: 0.5·ρ·Cd·S.
        #[inline(always)]
        pub fn drag_factor(&self, rho_air: f64) -> f64 {
            0.5 * rho_air * self.drag_coefficient * self.effective_area()
        }
    }

    impl Default for DragParams {
        fn default() -> Self {
            Self::payload_bay()
        }
    }

    /// Summary of all vehicle parameters for reporting.
    pub fn summary(
        vehicle: &VehicleParams,
        battery: &BatteryParams,
        drag: &DragParams,
    ) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("propellers".to_string(), format!("{}", vehicle.n_props));
        map.insert("frame mass (kg)".to_string(), format!("{:.2}", vehicle.frame_mass));
        map.insert("payload mass (kg)".to_string(), format!("{:.2}", vehicle.payload_mass));
        map.insert(
            "motor p/w (kW/kg)".to_string(),
            format!("{:.2}", vehicle.motor_power_to_weight / 1000.0),
        );
        map.insert(
            "battery e/w (kJ/kg)".to_string(),
            format!("{:.1}", battery.energy_density / 1000.0),
        );
        map.insert(
            "battery p/w (kW/kg)".to_string(),
            format!("{:.2}", battery.power_density / 1000.0),
        );
        map.insert("C_D".to_string(), format!("{:.2}", drag.drag_coefficient));
        map.insert("S_eff (m²)".to_string(), format!("{:.4}", drag.effective_area()));
        map
    }
}
