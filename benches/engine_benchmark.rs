use criterion::{black_box, criterion_group, criterion_main, Criterion};
use minesweeper_engine::{CellKind, Game, GameConfig, Position};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn benchmark_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Generation");

    let test_configs = vec![
        (8, 8, 10),    // Beginner
        (16, 16, 40),  // Intermediate
        (30, 16, 99),  // Expert
        (64, 64, 800), // Dense probing
    ];

    for (width, height, mines) in test_configs {
        let config = GameConfig::new(width, height, mines);
        group.bench_function(format!("{}x{} {} mines", width, height, mines), |b| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| Game::new(black_box(&config), &mut rng).unwrap());
        });
    }

    group.finish();
}

fn benchmark_flood(c: &mut Criterion) {
    let mut group = c.benchmark_group("Flood fill");

    for size in [16u32, 128, 512] {
        // Mine-free boards clear in a single flood covering every cell.
        let config = GameConfig::new(size, size, 0);
        group.bench_function(format!("{}x{} open board", size, size), |b| {
            b.iter_with_setup(
                || Game::new(&config, &mut StdRng::seed_from_u64(0)).unwrap(),
                |mut game| black_box(game.reveal(Position::new(0, 0))),
            );
        });
    }

    let config = GameConfig::new(128, 128, 1600);
    let game = Game::new(&config, &mut StdRng::seed_from_u64(7)).unwrap();
    if let Some(start) = game
        .board()
        .cells()
        .find(|cell| cell.kind == CellKind::Empty)
        .map(|cell| cell.position)
    {
        group.bench_function("128x128 1600 mines first empty", |b| {
            b.iter_with_setup(|| game.clone(), |mut game| black_box(game.reveal(start)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_generation, benchmark_flood);
criterion_main!(benches);
