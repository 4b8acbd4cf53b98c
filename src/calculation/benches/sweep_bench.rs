//! Benchmarks for the sizing sweep.
//!
//! Covers the two grid-wide stages separately and the full study.
//!
//! Run with: `cargo bench -p sizing_calc`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use sizing_calc::cruise::{optimize_cell, optimize_range, CruiseInputs};
use sizing_calc::hover::derive_hover;
use sizing_calc::{run_study, DesignGrid, GridSpec, PropellerCoefficients, SweepConfig};

fn coefficients(config: &SweepConfig) -> PropellerCoefficients {
    PropellerCoefficients::calibrate(&config.reference, config.constants.rho_air)
}

/// Benchmark hover derivation on both grids
fn bench_hover(c: &mut Criterion) {
    let config = SweepConfig::reference();
    let coeffs = coefficients(&config);

    let mut group = c.benchmark_group("Hover");
    for (name, spec) in [("exploratory", GridSpec::exploratory()), ("modified", GridSpec::modified())] {
        let grid = DesignGrid::from_spec(&spec);
        group.throughput(Throughput::Elements(grid.len() as u64));
        group.bench_with_input(BenchmarkId::new("derive_hover", name), &grid, |bencher, grid| {
            bencher.iter(|| derive_hover(grid, &config, &coeffs));
        });
    }
    group.finish();
}

/// Benchmark the bank-angle scan, per cell and per grid
fn bench_cruise(c: &mut Criterion) {
    let config = SweepConfig::reference();
    let coeffs = coefficients(&config);
    let angles = config.bank_angles.angles();
    let inputs = CruiseInputs::from_config(&config);

    let mut group = c.benchmark_group("Cruise");
    group.throughput(Throughput::Elements(angles.len() as u64));
    group.bench_function("optimize_cell", |bencher| {
        // roughly 2000 rpm on a 1 m propeller
        bencher.iter(|| optimize_cell(872.0, 13_800.0, 4.6, &angles, &inputs));
    });

    for (name, spec) in [("exploratory", GridSpec::exploratory()), ("modified", GridSpec::modified())] {
        let grid = DesignGrid::from_spec(&spec);
        let hover = derive_hover(&grid, &config, &coeffs);
        group.throughput(Throughput::Elements((grid.len() * angles.len()) as u64));
        group.bench_with_input(BenchmarkId::new("optimize_range", name), &hover, |bencher, hover| {
            bencher.iter(|| optimize_range(hover, &angles, &config));
        });
    }
    group.finish();
}

/// Benchmark the end-to-end study
fn bench_study(c: &mut Criterion) {
    let config = SweepConfig::reference();
    let mut group = c.benchmark_group("Study");
    group.sample_size(20);
    group.bench_function("run_study", |bencher| {
        bencher.iter(|| run_study(&config));
    });
    group.finish();
}

criterion_group!(benches, bench_hover, bench_cruise, bench_study);

criterion_main!(benches);
