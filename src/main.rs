use std::fs;
use std::path::Path;

use log::info;

use sizing_calc::constants::vehicle;
use sizing_calc::{run_study, SweepConfig, SweepResult};

mod figures;
mod render;
mod report;

const OUTPUT_DIR: &str = "plots";
const BEST_DESIGN_ROWS: usize = 10;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();
}

fn print_sweep(name: &str, sweep: &SweepResult) {
    let (rows, cols) = sweep.grid.shape();
    println!(
        "{} grid: {} x {} cells, {} feasible",
        name,
        rows,
        cols,
        sweep.feasible_count()
    );
    match sweep.best_range() {
        Some(best) => println!(
            "  longest range {:.1} km at {:.0} rpm, {:.2} m, {:.1} deg, {:.1} km/h",
            best.range / 1000.0,
            best.rpm,
            best.diameter,
            best.angle.to_degrees(),
            best.speed * 3.6
        ),
        None => println!("  no design meets the hover requirement"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    println!("===================================================");
    println!("Multirotor Sizing Sweep");
    println!("===================================================");
    println!();

    let config = SweepConfig::reference();

    println!("Physical Constants:");
    for (k, v) in config.constants.summary() {
        println!("  {}: {}", k, v);
    }
    println!();

    println!("Vehicle:");
    for (k, v) in vehicle::summary(&config.vehicle, &config.battery, &config.drag) {
        println!("  {}: {}", k, v);
    }
    println!("  minimum hover time (min): {:.1}", config.min_hover_time / 60.0);
    println!();

    let study = run_study(&config)?;

    let coeffs = &study.exploratory.coefficients;
    println!("Propeller coefficients:");
    println!("  thrust α = {:.6}", coeffs.thrust);
    println!("  power  β = {:.6}", coeffs.power);
    println!();

    print_sweep("exploratory", &study.exploratory);
    print_sweep("modified", &study.modified);
    println!();

    let table = report::design_table(&study.modified, config.constants.g)?;
    let best = report::best_designs(&table, BEST_DESIGN_ROWS)?;
    println!("Best designs on the modified grid:");
    println!("{}", best);
    println!();

    let out = Path::new(OUTPUT_DIR);
    fs::create_dir_all(out)?;
    for figure in figures::study_figures(&study, config.constants.g) {
        let path = out.join(format!("{}.png", figure.file_stem));
        render::draw_figure(&path, &figure)?;
        info!("wrote {}", path.display());
    }

    Ok(())
}
