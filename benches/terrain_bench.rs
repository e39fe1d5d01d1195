use criterion::{criterion_group, criterion_main, Criterion};
use grid_util::point::Point;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;
use terrain_pathfinding::{PathFinder, DEFAULT_DIMENSION};

const SYMBOLS: [char; 6] = ['.', '.', '.', '-', '^', '*'];

fn random_map(n: usize, rng: &mut StdRng) -> String {
    (0..n * n)
        .map(|_| SYMBOLS[rng.gen_range(0..SYMBOLS.len())])
        .collect()
}

fn random_scenarios(finder: &PathFinder, count: usize, rng: &mut StdRng) -> Vec<(Point, Point)> {
    let passable = finder
        .grid()
        .cells()
        .filter(|c| c.is_passable())
        .map(|c| c.position)
        .collect::<Vec<_>>();
    (0..count)
        .map(|_| {
            (
                passable[rng.gen_range(0..passable.len())],
                passable[rng.gen_range(0..passable.len())],
            )
        })
        .collect()
}

fn terrain_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let n = DEFAULT_DIMENSION;
    let mut finder = PathFinder::new(&random_map(n, &mut rng), n, n).unwrap();
    let scenarios = random_scenarios(&finder, 20, &mut rng);

    c.bench_function(format!("random terrain {n}x{n}").as_str(), |b| {
        b.iter(|| {
            for (start, end) in &scenarios {
                black_box(finder.find_path(*start, *end).unwrap());
            }
        })
    });

    let mut open = PathFinder::new(&".".repeat(n * n), n, n).unwrap();
    let corner = Point::new(n as i32 - 1, n as i32 - 1);
    c.bench_function(format!("open plain {n}x{n}, corner to corner").as_str(), |b| {
        b.iter(|| black_box(open.find_path(Point::new(0, 0), corner).unwrap()))
    });
}

criterion_group!(benches, terrain_bench);
criterion_main!(benches);
