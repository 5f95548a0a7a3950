use navgrid::{path_cost, NavCell, NavGrid, PathRequest, Pathfinder, Point};
use rand::prelude::*;

// Two navigators on a 20x20 grid with roughly a fifth of the cells blocked;
// each one paths to the other's position in a single batch call.
fn main() {
    const N: usize = 20;
    let mut rng = StdRng::seed_from_u64(42);
    let mut grid = NavGrid::new(N, N);
    grid.fill(NavCell::new(1));
    for x in 0..N {
        for y in 0..N {
            if rng.gen_range(0..5) == 0 {
                grid.set(x, y, NavCell::blocked()).unwrap();
            }
        }
    }
    let first = Point::new(0, 0);
    let second = Point::new(15, 15);
    // Keep both navigator cells standable.
    grid.set(first.x as usize, first.y as usize, NavCell::new(1)).unwrap();
    grid.set(second.x as usize, second.y as usize, NavCell::new(1)).unwrap();
    println!("{}", grid);

    let requests = [
        PathRequest::new(first, second),
        PathRequest::new(second, first),
    ];
    let paths = Pathfinder::with_grid(&grid).find_paths(&requests);
    for (request, path) in requests.iter().zip(&paths) {
        if path.is_empty() {
            println!("{} -> {}: no path", request.start, request.goal);
        } else {
            println!(
                "{} -> {}: {} moves of total cost {}",
                request.start,
                request.goal,
                path.len(),
                path_cost(&grid, path)
            );
        }
    }
}
