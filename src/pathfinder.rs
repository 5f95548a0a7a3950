//! Batch pathfinding over a [NavGrid]: [PathRequest] in, [NavPath] out.

use grid_util::point::Point;
use log::{info, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::dijkstra::dijkstra_search;
use crate::nav_grid::NavGrid;

/// Neighbour offsets in fixed order: `+x`, `-x`, `+y`, `-y`. Discovery order,
/// and with it tie-breaking between equal-cost paths, depends on this order
/// staying fixed.
const ORTHO_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A single pathfinding job: where to start and where to go, plus
/// caller-side hints carried along with the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathRequest {
    pub start: Point,
    pub goal: Point,
    /// Scheduling hint for the caller; the search does not read it.
    pub priority: u32,
    /// Reserved search-radius hint; the search does not read it.
    pub search_radius: u32,
}

impl PathRequest {
    /// Request with the default hints: priority 1, unrestricted radius.
    pub fn new(start: Point, goal: Point) -> PathRequest {
        PathRequest {
            start,
            goal,
            priority: 1,
            search_radius: 0,
        }
    }
}

/// The cells entered after the start, in move order, ending at the goal.
/// Empty when the request was trivial (start equals goal) or the goal is
/// unreachable.
pub type NavPath = Vec<Point>;

/// Total cost of following `path`: the sum of entered-cell weights. The
/// start cell is not part of a path and contributes nothing.
pub fn path_cost(grid: &NavGrid, path: &[Point]) -> u64 {
    path.iter()
        .filter_map(|p| grid.cell(*p))
        .map(|cell| cell.weight as u64)
        .sum()
}

/// Passable 4-neighbourhood of `node`, each neighbour paired with the cost of
/// entering it. Cells at or above the blocked weight are skipped here, so the
/// search never considers them at any cost.
fn passable_neighbors(grid: &NavGrid, node: &Point) -> SmallVec<[(Point, u64); 4]> {
    let mut succ = SmallVec::new();
    for (dx, dy) in ORTHO_OFFSETS {
        let next = Point::new(node.x + dx, node.y + dy);
        if let Some(cell) = grid.cell(next) {
            if !cell.is_blocked() {
                succ.push((next, cell.weight as u64));
            }
        }
    }
    succ
}

/// Connected components of the passable cells, rebuilt once per batch from a
/// [UnionFind]. Lets a batch reject unreachable requests without
/// flood-filling the grid per request.
struct Components {
    width: usize,
    sets: UnionFind<usize>,
}

impl Components {
    /// Unions every passable cell with its passable `+x` and `+y` neighbours;
    /// one forward sweep covers all 4-connections.
    fn generate(grid: &NavGrid) -> Components {
        let w = grid.width();
        let h = grid.height();
        info!("Generating connected components for a {}x{} grid", w, h);
        let mut sets = UnionFind::new(w * h);
        for x in 0..w {
            for y in 0..h {
                let point = Point::new(x as i32, y as i32);
                if !grid.passable(point) {
                    continue;
                }
                let forward = [
                    Point::new(point.x + 1, point.y),
                    Point::new(point.x, point.y + 1),
                ];
                for neighbor in forward.into_iter().filter(|p| grid.passable(*p)) {
                    sets.union(y * w + x, neighbor.y as usize * w + neighbor.x as usize);
                }
            }
        }
        Components { width: w, sets }
    }

    fn ix(&self, point: Point) -> usize {
        point.y as usize * self.width + point.x as usize
    }

    /// Checks if `start` can reach `goal` through passable cells. Both must
    /// be in bounds. A blocked start belongs to no component itself but can
    /// still be exited, so it is checked through its passable neighbours.
    fn reachable(&self, grid: &NavGrid, start: Point, goal: Point) -> bool {
        if !grid.passable(goal) {
            return false;
        }
        let goal_ix = self.ix(goal);
        if grid.passable(start) {
            self.sets.equiv(self.ix(start), goal_ix)
        } else {
            passable_neighbors(grid, &start)
                .iter()
                .any(|(p, _)| self.sets.equiv(self.ix(*p), goal_ix))
        }
    }
}

/// Batch pathfinder holding a read-only borrow of a [NavGrid].
///
/// Requests are solved independently with per-request search state, so the
/// results of a batch match solving each request in its own call. The grid
/// binding can be replaced or dropped at any time between calls; the grid
/// itself is never mutated.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pathfinder<'a> {
    grid: Option<&'a NavGrid>,
}

impl<'a> Pathfinder<'a> {
    /// Unbound pathfinder: [find_paths](Self::find_paths) degrades to empty
    /// paths until a grid is attached with [bind](Self::bind).
    pub fn new() -> Pathfinder<'a> {
        Pathfinder { grid: None }
    }
    /// Pathfinder bound to `grid` from the start.
    pub fn with_grid(grid: &'a NavGrid) -> Pathfinder<'a> {
        Pathfinder { grid: Some(grid) }
    }
    /// Attaches `grid`, replacing any prior binding.
    pub fn bind(&mut self, grid: &'a NavGrid) {
        self.grid = Some(grid);
    }
    /// Drops the grid binding.
    pub fn unbind(&mut self) {
        self.grid = None;
    }
    /// The currently bound grid, if any.
    pub fn grid(&self) -> Option<&'a NavGrid> {
        self.grid
    }

    /// Solves every request and returns one path per request, index for
    /// index. Paths list the cells entered after the start; an empty path
    /// means the request was trivial (start equals goal), an endpoint was
    /// invalid, or the goal is unreachable. Those outcomes are deliberately
    /// not distinguished, and a failed request never affects the others.
    ///
    /// Calling this on an unbound pathfinder yields an empty path for every
    /// request and logs a warning.
    pub fn find_paths(&self, requests: &[PathRequest]) -> Vec<NavPath> {
        let grid = match self.grid {
            Some(grid) => grid,
            None => {
                warn!("find_paths called without a bound grid, all paths are empty");
                return vec![Vec::new(); requests.len()];
            }
        };
        let components = Components::generate(grid);
        requests
            .iter()
            .map(|request| Self::solve(grid, &components, request))
            .collect()
    }

    /// Uniform-cost search for one request. Cumulative costs are [u64] sums
    /// of [u32] weights, so overflow would need more than 2^32 entered cells.
    fn solve(grid: &NavGrid, components: &Components, request: &PathRequest) -> NavPath {
        let start = request.start;
        let goal = request.goal;
        // The start's own weight is never charged, so a blocked start can
        // still be exited; a blocked goal can never be entered.
        if start == goal || !grid.in_bounds(start.x, start.y) || !grid.in_bounds(goal.x, goal.y) {
            return Vec::new();
        }
        if !components.reachable(grid, start, goal) {
            info!("{} is not reachable from {}", goal, start);
            return Vec::new();
        }
        let result = dijkstra_search(
            &start,
            |node| passable_neighbors(grid, node),
            |node| *node == goal,
        );
        match result {
            // The returned path excludes the start: it is the sequence of
            // moves, not the sequence of visited cells.
            Some((path, _cost)) => path.into_iter().skip(1).collect(),
            None => Vec::new(),
        }
    }
}
