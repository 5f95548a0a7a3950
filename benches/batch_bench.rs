use criterion::{criterion_group, criterion_main, Criterion};
use grid_util::point::Point;
use navgrid::{NavCell, NavGrid, PathRequest, Pathfinder};
use rand::prelude::*;
use std::hint::black_box;

fn random_grid(n: usize, rng: &mut StdRng) -> NavGrid {
    let mut grid = NavGrid::new(n, n);
    for x in 0..n {
        for y in 0..n {
            let cell = if rng.gen_bool(0.2) {
                NavCell::blocked()
            } else {
                NavCell::new(rng.gen_range(0..10))
            };
            grid.set(x, y, cell).unwrap();
        }
    }
    grid
}

fn batch_bench(c: &mut Criterion) {
    const N: usize = 64;
    const N_REQUESTS: usize = 64;
    let mut rng = StdRng::seed_from_u64(0);
    let grid = random_grid(N, &mut rng);
    let mut requests = Vec::new();
    for _ in 0..N_REQUESTS {
        requests.push(PathRequest::new(
            Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32)),
            Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32)),
        ));
    }
    let pathfinder = Pathfinder::with_grid(&grid);

    c.bench_function(format!("{N}x{N}, batch of {N_REQUESTS}").as_str(), |b| {
        b.iter(|| black_box(pathfinder.find_paths(&requests)))
    });
}

fn single_bench(c: &mut Criterion) {
    const N: usize = 64;
    let mut rng = StdRng::seed_from_u64(0);
    let mut grid = random_grid(N, &mut rng);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    grid.set(0, 0, NavCell::new(0)).unwrap();
    grid.set(N - 1, N - 1, NavCell::new(0)).unwrap();
    let pathfinder = Pathfinder::with_grid(&grid);
    let requests = [PathRequest::new(start, end)];

    c.bench_function(format!("{N}x{N}, corner to corner").as_str(), |b| {
        b.iter(|| black_box(pathfinder.find_paths(&requests)))
    });
}

criterion_group!(benches, batch_bench, single_bench);
criterion_main!(benches);
