//! Checkers Engine Benchmarks
//!
//! Performance benchmarks for the hot engine paths using Criterion.

use checkers_engine::api::new_game;
use checkers_engine::evaluation::evaluate;
use checkers_engine::move_gen::legal_moves;
use checkers_engine::search::{Engine, SearchLimits};
use checkers_engine::types::Color;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_new_game(c: &mut Criterion) {
    c.bench_function("new_game", |b| b.iter(|| black_box(new_game())));
}

fn bench_move_generation_starting(c: &mut Criterion) {
    let position = new_game();

    c.bench_function("legal_moves_starting_position", |b| {
        b.iter(|| black_box(legal_moves(&position, Color::Black, true)))
    });
}

fn bench_move_generation_both_colors(c: &mut Criterion) {
    let position = new_game();

    c.bench_function("legal_moves_both_colors", |b| {
        b.iter(|| {
            let white = legal_moves(&position, Color::White, true);
            let black = legal_moves(&position, Color::Black, true);
            black_box((white.len(), black.len()))
        })
    });
}

fn bench_evaluate_starting(c: &mut Criterion) {
    let position = new_game();

    c.bench_function("evaluate_starting_position", |b| {
        b.iter(|| black_box(evaluate(&position)))
    });
}

fn bench_make_undo_cycle(c: &mut Criterion) {
    let position = new_game();
    let mv = legal_moves(&position, Color::Black, true)
        .into_iter()
        .next()
        .expect("opening move exists");

    c.bench_function("make_undo_cycle", |b| {
        b.iter(|| {
            let mut pos = position.clone();
            pos.make_move(&mv);
            pos.undo_move(&mv);
            black_box(pos.hash())
        })
    });
}

fn bench_search_depth_four(c: &mut Criterion) {
    c.bench_function("search_depth_4_starting", |b| {
        b.iter(|| {
            let mut position = new_game();
            let mut engine = Engine::with_table_capacity(1 << 16);
            black_box(engine.best_move(
                &mut position,
                Color::Black,
                true,
                SearchLimits::depth(4),
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_new_game,
    bench_move_generation_starting,
    bench_move_generation_both_colors,
    bench_evaluate_starting,
    bench_make_undo_cycle,
    bench_search_depth_four,
);
criterion_main!(benches);
