//! Rectangular design lattice over rotation speed and propeller diameter.
//!
//! Layout follows the usual meshgrid convention: the array shape is
//! `(n_diameter, n_rpm)`, so row `i` holds one diameter and column `j`
//! one rotation speed. Every derived field uses the same indexing.

use ndarray::{Array1, Array2};

use crate::config::GridSpec;
use crate::constants::rpm_to_rad_per_s;

/// Coordinate arrays of one design grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignGrid {
    rpm_axis: Array1<f64>,
    diameter_axis: Array1<f64>,
    rpm: Array2<f64>,
    diameter: Array2<f64>,
}

impl DesignGrid {
    /// Build the grid from explicit axis values.
    pub fn from_axes(rpm_axis: Array1<f64>, diameter_axis: Array1<f64>) -> Self {
        let shape = (diameter_axis.len(), rpm_axis.len());
        let rpm = Array2::from_shape_fn(shape, |(_, j)| rpm_axis[j]);
        let diameter = Array2::from_shape_fn(shape, |(i, _)| diameter_axis[i]);
        Self {
            rpm_axis,
            diameter_axis,
            rpm,
            diameter,
        }
    }

    pub fn from_spec(spec: &GridSpec) -> Self {
        Self::from_axes(spec.rpm.values(), spec.diameter.values())
    }

    /// Rotation speed per cell (rpm).
    pub fn rpm(&self) -> &Array2<f64> {
        &self.rpm
    }

    /// Propeller diameter per cell (m).
    pub fn diameter(&self) -> &Array2<f64> {
        &self.diameter
    }

    pub fn rpm_axis(&self) -> &Array1<f64> {
        &self.rpm_axis
    }

    pub fn diameter_axis(&self) -> &Array1<f64> {
        &self.diameter_axis
    }

    /// Angular speed per cell (rad/s).
    pub fn omega(&self) -> Array2<f64> {
        self.rpm.mapv(rpm_to_rad_per_s)
    }

    /// Propeller radius per cell (m).
    pub fn radius(&self) -> Array2<f64> {
        self.diameter.mapv(|d| d / 2.0)
    }

    /// `(n_diameter, n_rpm)`
    pub fn shape(&self) -> (usize, usize) {
        self.rpm.dim()
    }

    pub fn len(&self) -> usize {
        self.rpm.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rpm.is_empty()
    }
}
