//! Whole-pipeline properties on the reference octocopter study.

use approx::assert_relative_eq;

use sizing_calc::field;
use sizing_calc::{run_study, PropellerCoefficients, Study, SweepConfig, SweepResult};

fn study() -> Study {
    run_study(&SweepConfig::reference()).expect("reference configuration is valid")
}

fn both(study: &Study) -> [(&'static str, &SweepResult); 2] {
    [("exploratory", &study.exploratory), ("modified", &study.modified)]
}

#[test]
fn calibration_is_reproducible() {
    let config = SweepConfig::reference();
    let a = PropellerCoefficients::calibrate(&config.reference, config.constants.rho_air);
    let b = PropellerCoefficients::calibrate(&config.reference, config.constants.rho_air);
    assert_eq!(a, b);
    assert!(a.thrust > 0.0 && a.power > 0.0);

    let study = study();
    assert_eq!(study.exploratory.coefficients, a);
    assert_eq!(study.modified.coefficients, a);
}

#[test]
fn grids_have_reference_shapes() {
    let study = study();
    assert_eq!(study.exploratory.grid.shape(), (41, 91));
    assert_eq!(study.modified.grid.shape(), (16, 21));
}

#[test]
fn doubling_rpm_scales_thrust_by_four_and_power_by_eight() {
    let study = study();
    let sweep = &study.exploratory;
    // columns 0 and 10 are 1000 and 2000 rpm
    assert_eq!(sweep.grid.rpm_axis()[0], 1000.0);
    assert_eq!(sweep.grid.rpm_axis()[10], 2000.0);
    for row in 0..sweep.grid.shape().0 {
        let (f1, f2) = (sweep.hover.thrust[[row, 0]], sweep.hover.thrust[[row, 10]]);
        let (p1, p2) = (sweep.hover.power[[row, 0]], sweep.hover.power[[row, 10]]);
        assert_relative_eq!(f2, 4.0 * f1, max_relative = 1e-12);
        assert_relative_eq!(p2, 8.0 * p1, max_relative = 1e-12);
    }
}

#[test]
fn feasible_cells_have_battery_and_enough_hover_time() {
    let config = SweepConfig::reference();
    let study = study();
    for (name, sweep) in both(&study) {
        assert!(sweep.feasible_count() > 0, "{name} grid has feasible designs");
        for ((i, j), &feasible) in sweep.hover.feasible.indexed_iter() {
            let m_batt = sweep.hover.battery_mass[[i, j]];
            let t_hover = sweep.hover.hover_endurance[[i, j]];
            if feasible {
                assert!(m_batt.is_some_and(|m| m > 0.0), "{name} [{i}, {j}]");
                assert!(t_hover.is_some_and(|t| t > config.min_hover_time), "{name} [{i}, {j}]");
            } else {
                assert_eq!(sweep.hover.cropped.hover_endurance[[i, j]], None);
                assert_eq!(sweep.hover.cropped.total_mass[[i, j]], None);
                assert_eq!(sweep.hover.cropped.battery_mass[[i, j]], None);
                assert_eq!(sweep.hover.cropped.motor_power[[i, j]], None);
            }
        }
    }
}

#[test]
fn no_defined_cell_is_negative() {
    let study = study();
    for (_, sweep) in both(&study) {
        let cropped = &sweep.hover.cropped;
        for f in [
            &sweep.hover.battery_mass,
            &sweep.hover.hover_endurance,
            &cropped.hover_endurance,
            &cropped.total_mass,
            &cropped.battery_mass,
            &cropped.motor_power,
            &sweep.cruise.angle,
            &sweep.cruise.speed,
            &sweep.cruise.range,
        ] {
            assert!(f.iter().flatten().all(|&v| v >= 0.0));
        }
    }
}

#[test]
fn infeasible_cells_have_no_cruise_optimum() {
    let study = study();
    for (name, sweep) in both(&study) {
        for ((i, j), &feasible) in sweep.hover.feasible.indexed_iter() {
            if !feasible {
                assert_eq!(sweep.cruise.angle[[i, j]], None, "{name} [{i}, {j}]");
                assert_eq!(sweep.cruise.speed[[i, j]], None, "{name} [{i}, {j}]");
                assert_eq!(sweep.cruise.range[[i, j]], None, "{name} [{i}, {j}]");
            }
        }
    }
}

#[test]
fn optimal_angles_come_from_the_sweep() {
    let config = SweepConfig::reference();
    let angles = config.bank_angles.angles();
    let study = study();
    for angle in study.modified.cruise.angle.iter().flatten() {
        assert!(angles.iter().any(|a| a == angle));
    }
    let (lo, hi) = field::defined_range(&study.modified.cruise.angle).expect("some optimum exists");
    assert!(lo >= angles[0] && hi <= angles[angles.len() - 1]);
}

#[test]
fn rerunning_the_study_is_identical() {
    let a = study();
    let b = study();
    assert_eq!(a, b);
}

#[test]
fn modified_grid_best_design_is_plausible() {
    let study = study();
    let best = study.modified.best_range().expect("modified grid has a cruise range");
    assert!(best.range > 0.0);
    assert!(best.speed > 0.0);
    assert!(study.modified.hover.feasible[best.index]);
    assert!((1000.0..=3000.0).contains(&best.rpm));
    assert!((0.7..=1.0 + 1e-9).contains(&best.diameter));
}
