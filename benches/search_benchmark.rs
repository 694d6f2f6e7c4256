use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quarto::board::*;
use quarto::engine::config::{Depth, DepthPolicy};
use quarto::engine::{self, search};

fn criterion_benchmark(c: &mut Criterion) {
    let pos = GameState::from_compact("c827/50a4/..../.... b 1").unwrap();
    let depth = DepthPolicy::default().depth_for(&pos);
    c.bench_function("search default policy, 8 empty", |b| {
        b.iter(|| engine::best_move(black_box(depth), black_box(&pos)))
    });

    let endgame = GameState::from_compact("c827/50a4/be93/.... 1 0").unwrap();
    c.bench_function("alpha-beta to the end, 4 empty", |b| {
        b.iter(|| engine::best_move(Depth::Unbounded, black_box(&endgame)))
    });
    c.bench_function("minimax to the end, 4 empty", |b| {
        b.iter(|| search::brute_force_search(Depth::Unbounded, black_box(&endgame)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
