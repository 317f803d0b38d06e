use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use minado::{Board, GameConfig};

fn flood_fill(c: &mut Criterion) {
    let empty = Board::square(200, &[]).unwrap();
    c.bench_function("reveal_200x200_mine_free", |b| {
        b.iter_batched(
            || empty.clone(),
            |mut board| board.reveal((0, 0)).unwrap(),
            BatchSize::SmallInput,
        )
    });

    let sparse = Board::random(GameConfig::new((200, 200), 800), 7);
    c.bench_function("reveal_200x200_sparse_mines", |b| {
        b.iter_batched(
            || sparse.clone(),
            |mut board| board.reveal((100, 100)).unwrap(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, flood_fill);
criterion_main!(benches);
