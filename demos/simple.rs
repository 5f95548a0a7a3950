use navgrid::{NavCell, NavGrid, PathRequest, Pathfinder, Point};

// In this example a path is found on a 5x5 grid with shape
// .....
// ..#..
// S.#.E
// ..#..
// .....
// where
// - # marks a blocked cell
// - S marks the start (0,2)
// - E marks the end (4,2)
fn main() {
    let mut grid = NavGrid::new(5, 5);
    for y in 1..4 {
        grid.set(2, y, NavCell::blocked()).unwrap();
    }
    println!("{}", grid);
    let start = Point::new(0, 2);
    let end = Point::new(4, 2);
    let paths = Pathfinder::with_grid(&grid).find_paths(&[PathRequest::new(start, end)]);
    if !paths[0].is_empty() {
        println!("A path has been found:");
        for p in &paths[0] {
            println!("{:?}", p);
        }
    }
}
