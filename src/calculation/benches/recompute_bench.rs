//! Benchmarks for the recompute path.
//!
//! A control event rebuilds every bundle from scratch, so the cost of one
//! pass grows linearly with the number of discs.
//!
//! Run with: `cargo bench`

use std::path::Path;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use disc_calc::{
    BundleBuilder, Control, DiscDirectory, DiscEngine, DiscId, Figure, LaunchParameters,
    TrajectoryProvider, UnitSystem, UpdateController,
};

const DISCS: [&str; 6] = [
    "putter_a",
    "midrange_b",
    "driver_c",
    "putter_a",
    "midrange_b",
    "driver_c",
];

fn builder() -> BundleBuilder {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../discs");
    BundleBuilder::new(TrajectoryProvider::new(
        Box::new(DiscDirectory::new(dir)),
        Box::new(DiscEngine::default()),
    ))
}

fn ids(n: usize) -> Vec<DiscId> {
    DISCS[..n].iter().map(|name| DiscId::new(*name)).collect()
}

/// Bundle building for 1 to 6 discs
fn bench_build(c: &mut Criterion) {
    let builder = builder();
    let launch = LaunchParameters::default();

    let mut group = c.benchmark_group("BundleBuilder");
    for n in [1, 3, 6] {
        let discs = ids(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("build", n), &discs, |bencher, discs| {
            bencher.iter(|| builder.build(discs, &launch));
        });
    }
    group.finish();
}

/// Full control event: build, convert, update every line
fn bench_control_event(c: &mut Criterion) {
    let mut controller = match UpdateController::new(
        ids(6),
        UnitSystem::Imperial,
        LaunchParameters::default(),
        builder(),
        Figure::new(),
    ) {
        Ok(controller) => controller,
        Err(err) => panic!("controller setup failed: {err}"),
    };

    let mut group = c.benchmark_group("UpdateController");
    let mut roll = 0.0;
    group.bench_function("on_control_changed_6", |bencher| {
        bencher.iter(|| {
            roll = if roll == 0.0 { -10.0 } else { 0.0 };
            controller.on_control_changed(Control::Roll, roll)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_control_event);
criterion_main!(benches);
