//! Criterion benchmarks for the branch kernels.
//!
//! Each benchmark times one kernel pass over 20000 elements. Comparing
//! `predictable` with `unpredictable` shows the misprediction cost;
//! comparing branchy with branchless shows what the select conversion
//! buys (or costs) in each case.

use criterion::{criterion_group, criterion_main, Criterion};
use forkmark_bench::{reference_buffers, shuffled_buffers};
use forkmark_core::{KernelKind, KernelStrategy};
use forkmark_driver::{Driver, DriverConfig};

fn bench_kernels(c: &mut Criterion) {
    for kind in KernelKind::ALL {
        for strategy in [KernelStrategy::Branchy, KernelStrategy::Branchless] {
            let mut buffers = reference_buffers();
            let name = format!("{}_{}_20k", kind.name(), strategy.name());
            c.bench_function(&name, |b| {
                b.iter(|| kind.run(&mut buffers, strategy));
            });
        }
    }
}

/// Benchmark: the predictable kernel on a shuffled condition buffer.
///
/// Same taken ratio as the ordered buffer, but without the alternating
/// pattern, so the branch becomes as hard to predict as `unpredictable`.
fn bench_predictable_shuffled(c: &mut Criterion) {
    let mut buffers = shuffled_buffers(42);

    c.bench_function("predictable_shuffled_20k", |b| {
        b.iter(|| KernelKind::Predictable.run(&mut buffers, KernelStrategy::Branchy));
    });
}

/// Benchmark: a driver run of 100 calls, setup excluded.
fn bench_driver_100(c: &mut Criterion) {
    for kind in KernelKind::ALL {
        let mut driver = Driver::new(DriverConfig {
            iterations: 100,
            ..DriverConfig::for_kind(kind)
        })
        .unwrap();

        c.bench_function(&format!("driver_{}_100", kind.name()), |b| {
            b.iter(|| driver.run());
        });
    }
}

criterion_group!(
    benches,
    bench_kernels,
    bench_predictable_shuffled,
    bench_driver_100
);
criterion_main!(benches);
