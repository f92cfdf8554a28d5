use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pairmatch_core::*;
use std::hint::black_box;

fn bench_layout_gen(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_gen");
    for size in [4, 8, 16] {
        let config = GameConfig::new(size, 100).expect("even board");
        group.bench_with_input(BenchmarkId::from_parameter(size), &config, |b, &config| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                black_box(RandomLayoutGenerator::new(seed).generate(config))
            });
        });
    }
    group.finish();
}

fn bench_full_game(c: &mut Criterion) {
    let config = GameConfig::default();
    let layout = RandomLayoutGenerator::new(42).generate(config);
    let pairs: Vec<(Coord2, Coord2)> = (1..=config.pair_count())
        .map(|card| {
            let mut found = iter_coords(config.size).filter(|&pos| layout[pos] == card);
            (found.next().unwrap(), found.next().unwrap())
        })
        .collect();

    c.bench_function("perfect_game", |b| {
        b.iter(|| {
            let mut game = Game::new(layout.clone(), config.max_moves).unwrap();
            for &(first, second) in &pairs {
                game.flip(first).unwrap();
                game.flip(second).unwrap();
                game.resolve().unwrap();
            }
            black_box(game.status())
        });
    });
}

criterion_group!(benches, bench_layout_gen, bench_full_game);
criterion_main!(benches);
