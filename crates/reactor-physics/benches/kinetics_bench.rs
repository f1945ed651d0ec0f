// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor Core — Kinetics Benchmarks
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use criterion::{criterion_group, criterion_main, Criterion};
use reactor_physics::kinetics::{NeutronFluxModel, DEFAULT_STEP_TIME_S};
use std::hint::black_box;

/// Time 1000 ticks of the kinetics model under mild forcing. This is the
/// per-tick hot path of the trainer, which must fit a 200 ms tick period.
fn bench_kinetics_1000_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("kinetics_step");
    group.sample_size(50);

    group.bench_function("ticks_1000", |b| {
        b.iter(|| {
            let mut model = NeutronFluxModel::default();
            model.set_reactivity_input(5.0);
            model.set_absorber_rods(4.0);
            for _ in 0..1000 {
                model.step(DEFAULT_STEP_TIME_S);
            }
            black_box(model.flux());
        })
    });

    group.finish();
}

criterion_group!(benches, bench_kinetics_1000_ticks);
criterion_main!(benches);
