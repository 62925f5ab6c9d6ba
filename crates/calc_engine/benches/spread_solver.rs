//! Benchmarks for spread inference.
//!
//! Run with:
//!   cargo bench --package calc_engine --bench spread_solver

use calc_engine::solver::{MaxOffense, MinInvestment};
use calc_engine::{
    project, solve, GeneticParameters, Generation, NatureId, ObservationSource, ObservedStat, SolverContext,
    SpreadTracker, Stat, StatTable,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn garchomp() -> SolverContext {
    SolverContext::new(StatTable([108, 130, 95, 80, 85, 102]), 50, Generation::Gen9.constants()).unwrap()
}

fn revealed(ctx: &SolverContext, genetics: &GeneticParameters) -> Vec<ObservedStat> {
    let stats = project(&ctx.base_stats, ctx.level, genetics, ctx.constants.legacy);
    Stat::ALL
        .iter()
        .enumerate()
        .map(|(turn, &s)| ObservedStat::new(s, stats[s], ObservationSource::Turn(turn as u16 + 1)))
        .collect()
}

fn bench_first_observation(c: &mut Criterion) {
    let ctx = garchomp();
    let speed = ObservedStat::new(Stat::Spe, 169, ObservationSource::Turn(1));

    c.bench_function("solve_first_observation", |b| {
        b.iter(|| solve(black_box(&ctx), "p2a", black_box(&[speed])))
    });
}

fn bench_full_reveal(c: &mut Criterion) {
    let ctx = garchomp();
    let truth = GeneticParameters::modern(NatureId::Jolly, [31; 6], [0, 252, 4, 0, 0, 252]);
    let observations = revealed(&ctx, &truth);

    c.bench_function("solve_full_reveal", |b| {
        b.iter(|| solve(&ctx, "p2a", black_box(&observations)))
    });
}

fn bench_legacy_reveal(c: &mut Criterion) {
    let ctx = SolverContext::new(StatTable([106, 110, 90, 154, 90, 130]), 100, Generation::Gen1.constants()).unwrap();
    let observations = revealed(&ctx, &GeneticParameters::legacy_max());

    c.bench_function("solve_legacy_reveal", |b| {
        b.iter(|| solve(&ctx, "p2a", black_box(&observations)))
    });
}

fn bench_tracker_estimate(c: &mut Criterion) {
    let ctx = garchomp();
    let mut tracker = SpreadTracker::new("p2a", ctx);
    let _ = tracker.observe(ObservedStat::new(Stat::Spe, 169, ObservationSource::Turn(1)));
    let mut group = c.benchmark_group("tracker_estimate");

    group.bench_function("max_offense", |b| b.iter(|| tracker.estimate(black_box(&MaxOffense))));
    group.bench_function("min_investment", |b| b.iter(|| tracker.estimate(black_box(&MinInvestment))));

    group.finish();
}

criterion_group!(
    benches,
    bench_first_observation,
    bench_full_reveal,
    bench_legacy_reveal,
    bench_tracker_estimate,
);

criterion_main!(benches);
