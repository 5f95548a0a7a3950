use navgrid::{path_cost, NavCell, NavGrid, PathRequest, Pathfinder, Point};

// A 2x2 grid in which both routes from (1,1) to (0,0) take two moves but pay
// different weights:
// .+     <- entering (1,0) costs 500
// 1.     <- entering (0,1) costs 1
// The route through (0,1) wins on cost, not on length.
fn main() {
    let mut grid = NavGrid::new(2, 2);
    grid.set(0, 1, NavCell::new(1)).unwrap();
    grid.set(1, 0, NavCell::new(500)).unwrap();
    println!("{}", grid);
    let request = PathRequest::new(Point::new(1, 1), Point::new(0, 0));
    let paths = Pathfinder::with_grid(&grid).find_paths(&[request]);
    let path = &paths[0];
    println!("Path of cost {}:", path_cost(&grid, path));
    for p in path {
        println!("{:?}", p);
    }
}
