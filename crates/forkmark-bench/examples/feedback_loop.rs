//! Profile-guided strategy selection, end to end.
//!
//! Demonstrates: build buffers → profile the branch → pick branchy or
//! branchless → run both with the driver → compare timings.

use forkmark_bench::{reference_buffers, shuffled_buffers};
use forkmark_core::{KernelKind, KernelStrategy};
use forkmark_driver::{Driver, DriverConfig};
use forkmark_sim::{profile_kernel, recommend_strategy, FeedbackPolicy};

fn main() {
    println!("=== forkmark feedback loop ===\n");

    let policy = FeedbackPolicy::default();
    let buffers = reference_buffers();

    for kind in KernelKind::ALL {
        let profile = profile_kernel(kind, &buffers, 3);
        let recommended = recommend_strategy(&profile, &policy);
        println!(
            "{:>13}: taken={:.3}, mispredict={:.4} -> {}",
            kind.name(),
            profile.taken_ratio(),
            profile.mispredict_ratio(),
            recommended.name(),
        );

        for strategy in [KernelStrategy::Branchy, KernelStrategy::Branchless] {
            let mut driver = Driver::new(DriverConfig {
                iterations: 1000,
                strategy,
                ..DriverConfig::for_kind(kind)
            })
            .unwrap();
            let metrics = driver.run();
            let marker = if strategy == recommended { "*" } else { " " };
            println!(
                "  {marker} {:>10}: {:>8.0} ns/iteration",
                strategy.name(),
                metrics.per_iteration_ns
            );
        }
    }

    let shuffled = profile_kernel(KernelKind::Predictable, &shuffled_buffers(42), 3);
    println!(
        "\npredictable, shuffled: taken={:.3}, mispredict={:.4} -> {}",
        shuffled.taken_ratio(),
        shuffled.mispredict_ratio(),
        recommend_strategy(&shuffled, &policy).name(),
    );
    println!("Done.");
}
