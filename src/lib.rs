//! # navgrid
//!
//! Batched pathfinding on weighted rectangular grids. Movement is
//! 4-connected, each step costs the weight of the cell being *entered*, and
//! cells at or above [BLOCKED_WEIGHT] can never be entered. Paths are found
//! with [uniform-cost search](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm);
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! are pre-computed per batch to avoid flood-filling behaviour if no path
//! exists.
//!
//! A [Pathfinder] borrows a [NavGrid] and solves a slice of [PathRequest]
//! values in one call, returning one path per request, index for index. A
//! returned path lists the cells entered after the start; an empty path
//! covers both "start equals goal" and "goal unreachable".
//!
//! ```
//! use navgrid::{NavCell, NavGrid, PathRequest, Pathfinder, Point};
//!
//! let mut grid = NavGrid::new(3, 3);
//! grid.set(1, 0, NavCell::blocked()).unwrap();
//! let pathfinder = Pathfinder::with_grid(&grid);
//! let paths = pathfinder.find_paths(&[PathRequest::new(Point::new(0, 0), Point::new(2, 0))]);
//! assert_eq!(paths[0].last(), Some(&Point::new(2, 0)));
//! assert!(!paths[0].contains(&Point::new(1, 0)));
//! ```
mod dijkstra;
mod nav_grid;
mod pathfinder;

pub use grid_util::point::Point;

pub use crate::nav_grid::{NavCell, NavGrid, OutOfBounds, BLOCKED_WEIGHT};
pub use crate::pathfinder::{path_cost, NavPath, PathRequest, Pathfinder};
