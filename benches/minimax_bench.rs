use criterion::{black_box, criterion_group, criterion_main, Criterion};
use negamax_engine::games::SubtractSquare;
use negamax_engine::strategy::{rough_outcome_strategy, IterativeMinimax, RecursiveMinimax};

fn bench_recursive_subtract_25(c: &mut Criterion) {
    let game = SubtractSquare::new(true, 25);
    let mut engine = RecursiveMinimax::default();
    c.bench_function("recursive minimax subtract 25", |b| {
        b.iter(|| black_box(engine.search(&game)))
    });
}

fn bench_iterative_subtract_25(c: &mut Criterion) {
    let game = SubtractSquare::new(true, 25);
    let mut engine = IterativeMinimax::default();
    c.bench_function("iterative minimax subtract 25", |b| {
        b.iter(|| black_box(engine.search(&game)))
    });
}

fn bench_rough_outcome_subtract_10000(c: &mut Criterion) {
    let game = SubtractSquare::new(true, 10_000);
    c.bench_function("rough outcome subtract 10000", |b| {
        b.iter(|| black_box(rough_outcome_strategy(&game)))
    });
}

criterion_group!(
    benches,
    bench_recursive_subtract_25,
    bench_iterative_subtract_25,
    bench_rough_outcome_subtract_10000
);
criterion_main!(benches);
