use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hearts_sim::agents::{Lineup, StrategyKind};
use hearts_sim::hand::{Hand, Trick};
use hearts_sim::rules::legal_plays;
use hearts_sim::sim::{play_one, run_batch, BatchConfig};

fn bench_legal_plays(c: &mut Criterion) {
    let hand: Hand = "2c 9c Kc 3d Jd 4s Qs As 2h 5h 8h Th Ah".parse().unwrap();
    let follow: Trick = "7d".parse().unwrap();
    let void: Trick = "7c 8c".parse().unwrap();

    let mut g = c.benchmark_group("legal_plays");
    g.bench_with_input(BenchmarkId::new("lead", "unbroken"), &Trick::new(), |b, trick| {
        b.iter(|| legal_plays(black_box(&hand), black_box(trick), 4, false))
    });
    g.bench_with_input(BenchmarkId::new("follow", "diamonds"), &follow, |b, trick| {
        b.iter(|| legal_plays(black_box(&hand), black_box(trick), 4, false))
    });
    g.bench_with_input(BenchmarkId::new("follow", "clubs"), &void, |b, trick| {
        b.iter(|| legal_plays(black_box(&hand), black_box(trick), 0, false))
    });
    g.finish();
}

fn bench_single_game(c: &mut Criterion) {
    let mut g = c.benchmark_group("single_game");
    for kind in [StrategyKind::Naive, StrategyKind::Heuristic, StrategyKind::Random] {
        let lineup = Lineup::uniform(kind);
        g.bench_with_input(BenchmarkId::new("uniform", kind), &lineup, |b, lineup| {
            b.iter(|| play_one(black_box(lineup), black_box(42)))
        });
    }
    g.finish();
}

fn bench_batch(c: &mut Criterion) {
    let config = BatchConfig::new(Lineup::default()).with_games(200).with_seed(1);
    c.bench_function("batch_200_sequential", |b| b.iter(|| run_batch(black_box(&config))));
    let parallel = config.clone().with_parallel(true);
    c.bench_function("batch_200_parallel", |b| b.iter(|| run_batch(black_box(&parallel))));
}

criterion_group!(benches, bench_legal_plays, bench_single_game, bench_batch);
criterion_main!(benches);
