// src/figures.rs

//! Assembles the surface plots of a study in display units.
//!
//! Unit conversion happens here so that `render` only draws what it is
//! given.

use sizing_calc::constants::rad_to_deg;
use sizing_calc::field::{self, Field};
use sizing_calc::{DesignGrid, Study};

pub const RPM_LABEL: &str = "RPM";
pub const DIAMETER_LABEL: &str = "prop.diam., m";

/// One color-mapped surface.
pub struct Panel {
    pub z_label: &'static str,
    pub values: Field,
}

/// A set of panels sharing one grid, written to one image.
pub struct Figure<'a> {
    pub file_stem: &'static str,
    pub title: &'static str,
    pub grid: &'a DesignGrid,
    /// (rows, columns) of the panel layout
    pub layout: (usize, usize),
    pub panels: Vec<Panel>,
}

fn panel(z_label: &'static str, values: Field) -> Panel {
    Panel { z_label, values }
}

/// The four figures of a study: thrust/power, battery/hover, cropped
/// results on the exploratory grid, and the range optimum on the
/// modified grid.
pub fn study_figures(study: &Study, g: f64) -> Vec<Figure<'_>> {
    let wide = &study.exploratory;
    let narrow = &study.modified;
    let cropped = &wide.hover.cropped;

    let thrust_kgf = field::from_dense(&wide.hover.thrust.mapv(|f| f / g));
    let power_kw = field::from_dense(&wide.hover.power.mapv(|p| p / 1000.0));

    vec![
        Figure {
            file_stem: "thrust_power",
            title: "Total thrust and power",
            grid: &wide.grid,
            layout: (1, 2),
            panels: vec![
                panel("log10(total thrust, kg)", field::map_defined(&thrust_kgf, f64::log10)),
                panel("log10(total power, kW)", field::map_defined(&power_kw, f64::log10)),
            ],
        },
        Figure {
            file_stem: "battery_hover",
            title: "Battery mass and hover time",
            grid: &wide.grid,
            layout: (1, 2),
            panels: vec![
                panel("battery weight, kg", wide.hover.battery_mass.clone()),
                panel("hover time, min", field::map_defined(&wide.hover.hover_endurance, |t| t / 60.0)),
            ],
        },
        Figure {
            file_stem: "feasible_designs",
            title: "Designs meeting the hover requirement",
            grid: &wide.grid,
            layout: (2, 2),
            panels: vec![
                panel("hover time, min", field::map_defined(&cropped.hover_endurance, |t| t / 60.0)),
                panel("total weight, kg", cropped.total_mass.clone()),
                panel("single motor power, kW", field::map_defined(&cropped.motor_power, |p| p / 1000.0)),
                panel("battery weight, kg", cropped.battery_mass.clone()),
            ],
        },
        Figure {
            file_stem: "range_optimum",
            title: "Range-optimal cruise",
            grid: &narrow.grid,
            layout: (1, 3),
            panels: vec![
                panel("opt. bank angle, deg.", field::map_defined(&narrow.cruise.angle, rad_to_deg)),
                panel("opt. speed, km/h", field::map_defined(&narrow.cruise.speed, |v| v * 3.6)),
                panel("range, km", field::map_defined(&narrow.cruise.range, |r| r / 1000.0)),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sizing_calc::{run_study, SweepConfig};

    #[test]
    fn test_figures_cover_every_result() {
        let config = SweepConfig::reference();
        let study = run_study(&config).unwrap();
        let figures = study_figures(&study, config.constants.g);

        let panel_count: usize = figures.iter().map(|f| f.panels.len()).sum();
        assert_eq!(panel_count, 11);
        for figure in &figures {
            assert!(figure.panels.len() <= figure.layout.0 * figure.layout.1);
            for panel in &figure.panels {
                assert_eq!(panel.values.dim(), figure.grid.shape());
            }
        }
    }

    #[test]
    fn test_display_units() {
        let config = SweepConfig::reference();
        let study = run_study(&config).unwrap();
        let figures = study_figures(&study, config.constants.g);

        let thrust = &figures[0].panels[0].values;
        assert_relative_eq!(
            thrust[[0, 0]].unwrap(),
            (study.exploratory.hover.thrust[[0, 0]] / config.constants.g).log10(),
            epsilon = 1e-12
        );

        let range = &figures[3].panels[2].values;
        for (shown, raw) in range.iter().zip(study.modified.cruise.range.iter()) {
            assert_eq!(shown.is_some(), raw.is_some());
            if let (Some(shown), Some(raw)) = (shown, raw) {
                assert_relative_eq!(*shown, raw / 1000.0);
            }
        }
    }
}
