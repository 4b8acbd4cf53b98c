// src/render.rs

//! Draws figures as color-mapped surfaces over the (rpm, diameter) grid.
//!
//! Each panel is the surface seen from above: one filled rectangle per
//! defined grid cell, colored with viridis between the panel's minimum
//! and maximum. Undefined cells are not drawn and show up as gaps.

use std::error::Error;
use std::path::Path;

use log::warn;
use plotters::coord::Shift;
use plotters::prelude::*;

use sizing_calc::field;
use sizing_calc::DesignGrid;

use crate::figures::{Figure, Panel, DIAMETER_LABEL, RPM_LABEL};

const PANEL_WIDTH: u32 = 640;
const PANEL_HEIGHT: u32 = 520;
const FONT_SIZE_MAIN_TITLE: u32 = 26;
const FONT_SIZE_CHART_TITLE: u32 = 18;
const FONT_SIZE_AXIS_LABEL: u32 = 13;

/// Map a value to viridis between `min` and `max`.
fn map_value_to_color(value: f64, min: f64, max: f64) -> RGBColor {
    if !value.is_finite() || !min.is_finite() || !max.is_finite() {
        return RGBColor(0, 0, 0);
    }
    let span = (max - min).abs().max(1e-12);
    let t = ((value - min) / span).clamp(0.0, 1.0);
    let color = colorous::VIRIDIS.eval_continuous(t);
    RGBColor(color.r, color.g, color.b)
}

/// Spacing of an axis, 1.0 for a single-point axis.
fn bin_width(axis: &[f64]) -> f64 {
    if axis.len() > 1 {
        axis[1] - axis[0]
    } else {
        1.0
    }
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    grid: &DesignGrid,
    panel: &Panel,
) -> Result<(), Box<dyn Error>> {
    let rpm = grid.rpm_axis().to_vec();
    let diameter = grid.diameter_axis().to_vec();
    let (dx, dy) = (bin_width(&rpm), bin_width(&diameter));
    let x_range = (rpm[0] - dx / 2.0)..(rpm[rpm.len() - 1] + dx / 2.0);
    let y_range = (diameter[0] - dy / 2.0)..(diameter[diameter.len() - 1] + dy / 2.0);

    let value_range = field::defined_range(&panel.values);
    let caption = match value_range {
        Some((lo, hi)) => format!("{} [{:.2} .. {:.2}]", panel.z_label, lo, hi),
        None => {
            warn!("panel '{}' has no defined cells", panel.z_label);
            format!("{} (no feasible design)", panel.z_label)
        }
    };

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(RPM_LABEL)
        .y_desc(DIAMETER_LABEL)
        .x_labels(8)
        .y_labels(8)
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format!("{:.2}", y))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let Some((lo, hi)) = value_range else {
        return Ok(());
    };
    chart.draw_series(panel.values.indexed_iter().filter_map(|((i, j), value)| {
        let value = (*value)?;
        let color = map_value_to_color(value, lo, hi);
        Some(Rectangle::new(
            [
                (rpm[j] - dx / 2.0, diameter[i] - dy / 2.0),
                (rpm[j] + dx / 2.0, diameter[i] + dy / 2.0),
            ],
            color.filled(),
        ))
    }))?;

    Ok(())
}

/// Render `figure` into a PNG at `path`.
pub fn draw_figure(path: &Path, figure: &Figure) -> Result<(), Box<dyn Error>> {
    let (rows, cols) = figure.layout;
    let size = (PANEL_WIDTH * cols as u32, PANEL_HEIGHT * rows as u32);
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let titled = root.titled(figure.title, ("sans-serif", FONT_SIZE_MAIN_TITLE))?;

    for (area, panel) in titled.split_evenly((rows, cols)).iter().zip(&figure.panels) {
        draw_panel(area, figure.grid, panel)?;
    }

    root.present()?;
    Ok(())
}
