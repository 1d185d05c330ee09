use std::sync::Arc;

use criterion::{black_box, BenchmarkId, Criterion};
use lotto::{
    load_population_from_bytes, BatchMatcher, BuildStrategy, Counting, LotteryConfig, MatchEngine,
    Number, PickIndex,
};
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::SeedableRng;

const SMALL_PLAYER_COUNT: usize = 10_000;
const MEDIUM_PLAYER_COUNT: usize = 500_000;
const LARGE_PLAYER_COUNT: usize = 5_000_000;

fn load_players(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_players");
    group.sample_size(10);
    for player_count in [SMALL_PLAYER_COUNT, MEDIUM_PLAYER_COUNT, LARGE_PLAYER_COUNT] {
        let file = random_file(player_count);
        for (name, strategy) in [
            ("presized", BuildStrategy::Presized),
            ("grow", BuildStrategy::Grow),
        ] {
            group.bench_with_input(BenchmarkId::new(name, player_count), &file, |b, file| {
                b.iter(|| {
                    load_population_from_bytes(file, &LotteryConfig::DEFAULT, strategy, |_, _| {})
                });
            });
        }
    }
}

fn process_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_draw");
    for player_count in [SMALL_PLAYER_COUNT, MEDIUM_PLAYER_COUNT, LARGE_PLAYER_COUNT] {
        let file = random_file(player_count);
        let index = presized_index(&file);
        let mut rng = StdRng::seed_from_u64(1);
        let draw = random_picks(&mut rng);

        for (name, counting) in [("dense", Counting::Dense), ("sparse", Counting::Sparse)] {
            let mut engine = MatchEngine::with_counting(index.clone(), counting);
            engine.prepare();
            group.bench_with_input(BenchmarkId::new(name, player_count), &draw, |b, draw| {
                b.iter(|| {
                    black_box(engine.process(draw).unwrap());
                    engine.reset();
                });
            });
        }

        let batch = BatchMatcher::new(Arc::new(index));
        group.bench_with_input(
            BenchmarkId::new("partitioned", player_count),
            &draw,
            |b, draw| {
                b.iter(|| black_box(batch.process_partitioned(draw).unwrap()));
            },
        );
    }
}

fn process_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_batch");
    group.sample_size(10);
    let file = random_file(MEDIUM_PLAYER_COUNT);
    let index = presized_index(&file);
    let mut rng = StdRng::seed_from_u64(2);
    let draws: Vec<Vec<Number>> = (0..256).map(|_| random_picks(&mut rng)).collect();

    let mut engine = MatchEngine::new(index.clone());
    engine.prepare();
    group.bench_with_input(BenchmarkId::new("sequential", draws.len()), &draws, |b, draws| {
        b.iter(|| {
            for draw in draws {
                black_box(engine.process_and_reset(draw).unwrap());
            }
        });
    });

    let batch = BatchMatcher::new(Arc::new(index));
    group.bench_with_input(BenchmarkId::new("parallel", draws.len()), &draws, |b, draws| {
        b.iter(|| black_box(batch.process_batch(draws).unwrap()));
    });
}

fn presized_index(file: &[u8]) -> PickIndex {
    load_population_from_bytes(file, &LotteryConfig::DEFAULT, BuildStrategy::Presized, |_, _| {})
        .into_index()
}

fn random_picks(rng: &mut StdRng) -> Vec<Number> {
    sample(rng, 90, 5)
        .into_iter()
        .map(|i| i as Number + 1)
        .collect()
}

fn random_file(player_count: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(player_count as u64);
    let mut file = Vec::with_capacity(player_count * 15);
    for _ in 0..player_count {
        let line = random_picks(&mut rng)
            .iter()
            .map(|number| number.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        file.extend_from_slice(line.as_bytes());
        file.push(b'\n');
    }
    file
}

criterion::criterion_group!(benches, load_players, process_draw, process_batch);
