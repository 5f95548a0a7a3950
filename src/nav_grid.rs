//! Weighted cell storage: [NavCell], the [BLOCKED_WEIGHT] sentinel and the
//! bounds-checked [NavGrid] container.

use core::fmt;

use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;
use thiserror::Error;

/// Weight at or above which a cell counts as impassable. Chosen several
/// orders of magnitude above ordinary weights so that no detour along
/// passable cells can ever cost more than stepping on a blocked one.
pub const BLOCKED_WEIGHT: u32 = 10_000;

/// A single grid cell: the cost charged when *entering* it, plus the distance
/// to the nearest blocked cell. The distance field is metadata maintained for
/// external consumers (heuristics, rendering) and is never read by the search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavCell {
    pub weight: u32,
    pub obstacle_distance: u32,
}

impl NavCell {
    /// Passable cell with the given entry cost.
    pub fn new(weight: u32) -> NavCell {
        NavCell {
            weight,
            obstacle_distance: 0,
        }
    }
    /// Impassable cell carrying [BLOCKED_WEIGHT].
    pub fn blocked() -> NavCell {
        NavCell {
            weight: BLOCKED_WEIGHT,
            obstacle_distance: 0,
        }
    }
    /// Checks if the cell can never be entered.
    pub fn is_blocked(&self) -> bool {
        self.weight >= BLOCKED_WEIGHT
    }
}

/// Error returned by [NavGrid::get] and [NavGrid::set] for coordinates outside
/// the grid. Out-of-range access is reported, never clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("coordinate ({x}, {y}) lies outside the {width}x{height} grid")]
pub struct OutOfBounds {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// A fixed-size rectangular grid of [NavCell] values built on [SimpleGrid].
///
/// Pure storage with bounds enforcement: the owner carves weights and
/// obstacles into it between searches, and a [Pathfinder](crate::Pathfinder)
/// borrows it read-only. Both dimensions are fixed at construction; a
/// zero-area grid is legal and trivially has no reachable cells.
#[derive(Clone, Debug, Default)]
pub struct NavGrid {
    cells: SimpleGrid<NavCell>,
}

impl NavGrid {
    /// Creates a `width` x `height` grid of default (open, zero-weight) cells.
    pub fn new(width: usize, height: usize) -> NavGrid {
        NavGrid {
            cells: SimpleGrid::new(width, height, NavCell::default()),
        }
    }
    /// Overwrites every cell with a copy of `cell`.
    pub fn fill(&mut self, cell: NavCell) {
        for x in 0..self.cells.width {
            for y in 0..self.cells.height {
                self.cells.set(x, y, cell);
            }
        }
    }
    /// Reads the cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<NavCell, OutOfBounds> {
        if self.cells.index_in_bounds(x, y) {
            Ok(self.cells.get(x, y))
        } else {
            Err(self.out_of_bounds(x, y))
        }
    }
    /// Replaces the cell at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, cell: NavCell) -> Result<(), OutOfBounds> {
        if self.cells.index_in_bounds(x, y) {
            self.cells.set(x, y, cell);
            Ok(())
        } else {
            Err(self.out_of_bounds(x, y))
        }
    }
    pub fn width(&self) -> usize {
        self.cells.width()
    }
    pub fn height(&self) -> usize {
        self.cells.height()
    }
    /// Checks if a signed coordinate pair falls inside the grid.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.cells.index_in_bounds(x as usize, y as usize)
    }
    /// Cell lookup for signed coordinates; [None] when out of bounds.
    pub fn cell(&self, pos: Point) -> Option<NavCell> {
        if self.in_bounds(pos.x, pos.y) {
            Some(self.cells.get(pos.x as usize, pos.y as usize))
        } else {
            None
        }
    }
    /// Checks if `pos` is in bounds and below [BLOCKED_WEIGHT].
    pub fn passable(&self, pos: Point) -> bool {
        self.cell(pos).map_or(false, |cell| !cell.is_blocked())
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> OutOfBounds {
        OutOfBounds {
            x,
            y,
            width: self.cells.width,
            height: self.cells.height,
        }
    }
}

impl fmt::Display for NavGrid {
    /// Renders one text row per grid row, `y = 0` on top: `#` for blocked
    /// cells, `.` for open zero-weight cells, the digit itself for weights
    /// 1 through 9 and `+` for anything heavier.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.cells.height {
            for x in 0..self.cells.width {
                let cell = self.cells.get(x, y);
                let glyph = if cell.is_blocked() {
                    '#'
                } else {
                    match cell.weight {
                        0 => '.',
                        w @ 1..=9 => (b'0' + w as u8) as char,
                        _ => '+',
                    }
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
