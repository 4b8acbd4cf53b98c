//! The sizing pipeline: calibration, hover derivation, range optimisation.
//!
//! [`run_sweep`] is a pure function of the configuration and one
//! [`GridSpec`]. [`run_study`] validates the configuration once and runs the
//! same pipeline on the exploratory and the modified grid.

use log::{info, warn};

use crate::config::{GridSpec, SweepConfig};
use crate::cruise::{self, CruiseField};
use crate::error::ConfigResult;
use crate::field;
use crate::grid::DesignGrid;
use crate::hover::{self, HoverField};
use crate::propeller::PropellerCoefficients;

/// All results for one design grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub grid: DesignGrid,
    pub coefficients: PropellerCoefficients,
    pub hover: HoverField,
    pub cruise: CruiseField,
}

/// Longest-range design of a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestDesign {
    /// `(row, column)` = `(diameter index, rpm index)`
    pub index: (usize, usize),
    pub rpm: f64,
    pub diameter: f64,
    pub angle: f64,
    pub speed: f64,
    pub range: f64,
}

impl SweepResult {
    pub fn feasible_count(&self) -> usize {
        self.hover.feasible_count()
    }

    /// Cell with the longest optimal range, first in row-major order on ties.
    pub fn best_range(&self) -> Option<BestDesign> {
        let mut best: Option<BestDesign> = None;
        for ((i, j), range) in self.cruise.range.indexed_iter() {
            let (Some(range), Some(angle), Some(speed)) =
                (*range, self.cruise.angle[[i, j]], self.cruise.speed[[i, j]])
            else {
                continue;
            };
            if best.is_some_and(|b| range <= b.range) {
                continue;
            }
            best = Some(BestDesign {
                index: (i, j),
                rpm: self.grid.rpm()[[i, j]],
                diameter: self.grid.diameter()[[i, j]],
                angle,
                speed,
                range,
            });
        }
        best
    }
}

/// Run the full pipeline on one grid.
///
/// The configuration must already be validated.
pub fn run_sweep(config: &SweepConfig, spec: &GridSpec) -> SweepResult {
    let coefficients = PropellerCoefficients::calibrate(&config.reference, config.constants.rho_air);
    let grid = DesignGrid::from_spec(spec);
    let (rows, cols) = grid.shape();
    info!(
        "sweep {}x{} grid: {:.0}-{:.0} rpm, {:.2}-{:.2} m",
        rows,
        cols,
        spec.rpm.start,
        spec.rpm.last().unwrap_or(spec.rpm.start),
        spec.diameter.start,
        spec.diameter.last().unwrap_or(spec.diameter.start),
    );

    let hover = hover::derive_hover(&grid, config, &coefficients);
    let angles = config.bank_angles.angles();
    let cruise = cruise::optimize_range(&hover, &angles, config);

    if hover.feasible_count() == 0 {
        warn!("no feasible design on the {}x{} grid", rows, cols);
    }
    info!(
        "{} of {} cells feasible, {} with a cruise range",
        hover.feasible_count(),
        grid.len(),
        field::defined_count(&cruise.range)
    );

    SweepResult {
        grid,
        coefficients,
        hover,
        cruise,
    }
}

/// Results of both grid resolutions.
#[derive(Debug, Clone, PartialEq)]
pub struct Study {
    pub exploratory: SweepResult,
    pub modified: SweepResult,
}

/// Validate `config` and sweep both of its grids.
pub fn run_study(config: &SweepConfig) -> ConfigResult<Study> {
    config.validate()?;
    Ok(Study {
        exploratory: run_sweep(config, &config.exploratory_grid),
        modified: run_sweep(config, &config.modified_grid),
    })
}
