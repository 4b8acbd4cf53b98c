// src/report.rs

//! Tabular view of a sweep for the console.
//!
//! One row per grid cell, undefined cells become nulls.

use ndarray::Array2;
use polars::prelude::*;

use sizing_calc::constants::rad_to_deg;
use sizing_calc::field::Field;
use sizing_calc::SweepResult;

fn dense(values: &Array2<f64>, f: impl Fn(f64) -> f64) -> Vec<f64> {
    values.iter().map(|&v| f(v)).collect()
}

fn scaled(field: &Field, f: impl Fn(f64) -> f64) -> Vec<Option<f64>> {
    field.iter().map(|v| v.map(&f)).collect()
}

/// Flatten `sweep` into a DataFrame in display units.
pub fn design_table(sweep: &SweepResult, g: f64) -> PolarsResult<DataFrame> {
    let hover = &sweep.hover;
    let cruise = &sweep.cruise;

    DataFrame::new(vec![
        Series::new("rpm", dense(sweep.grid.rpm(), |n| n)),
        Series::new("diameter_m", dense(sweep.grid.diameter(), |d| d)),
        Series::new("thrust_kgf", dense(&hover.thrust, |f| f / g)),
        Series::new("power_kw", dense(&hover.power, |p| p / 1000.0)),
        Series::new("total_mass_kg", dense(&hover.total_mass, |m| m)),
        Series::new("battery_mass_kg", scaled(&hover.battery_mass, |m| m)),
        Series::new("hover_min", scaled(&hover.hover_endurance, |t| t / 60.0)),
        Series::new("feasible", hover.feasible.iter().copied().collect::<Vec<bool>>()),
        Series::new("bank_angle_deg", scaled(&cruise.angle, rad_to_deg)),
        Series::new("speed_kmh", scaled(&cruise.speed, |v| v * 3.6)),
        Series::new("range_km", scaled(&cruise.range, |r| r / 1000.0)),
    ])
}

/// The `n` feasible designs with the longest range, longest first.
pub fn best_designs(table: &DataFrame, n: usize) -> PolarsResult<DataFrame> {
    table
        .clone()
        .lazy()
        .filter(col("range_km").is_not_null())
        .sort(
            "range_km",
            SortOptions {
                descending: true,
                nulls_last: true,
                ..Default::default()
            },
        )
        .limit(n as IdxSize)
        .collect()
}
