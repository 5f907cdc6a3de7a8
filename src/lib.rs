//! # maze_traversal
//!
//! Animated comparison of
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) and
//! [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search) on a fixed,
//! uniform-cost grid. Both searches share the same 4-connected neighbour order and only
//! differ in their frontier, which makes their exploration order directly comparable.
//!
//! The crate is split into a [Maze] (the immutable occupancy grid), the
//! [solver] module producing exploration traces and paths, a [Session] that replays both
//! traces one tick at a time, and a [render] module that turns a session into drawing calls
//! on any [render::Canvas].
//!
//! ```
//! use maze_traversal::{Cell, Maze, Session};
//!
//! let maze = Maze::from_rows(&[vec![0u8, 0, 0]], Cell::new(0, 0), Cell::new(0, 2)).unwrap();
//! let (session, mut state) = Session::new(maze);
//! while !state.is_done() {
//!     state = session.advance(state);
//! }
//! assert_eq!(
//!     session.final_bfs_path(&state).unwrap(),
//!     &[Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]
//! );
//! ```
pub mod config;
pub mod error;
pub mod maze;
pub mod render;
pub mod sequencer;
pub mod solver;
mod traversal;

use core::fmt;
use itertools::Itertools;
use smallvec::{smallvec, SmallVec};

pub use crate::config::RenderConfig;
pub use crate::error::MazeError;
pub use crate::maze::Maze;
pub use crate::sequencer::{AnimationState, Phase, Session};
pub use crate::solver::{bfs::BfsSolver, dfs::DfsSolver, Algorithm, GridSolver};
pub use crate::traversal::Frontier;

/// A position on the grid, addressed by row and column. Signed so that neighbours of border
/// cells can be represented before they are bounds-checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// The 4-connected neighbourhood in search order: down, up, right, left.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Cell; 4]> {
        smallvec![
            Cell::new(self.row + 1, self.col),
            Cell::new(self.row - 1, self.col),
            Cell::new(self.row, self.col + 1),
            Cell::new(self.row, self.col - 1),
        ]
    }

    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// True if the two cells share an edge.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Cell {
        Cell::new(row, col)
    }
}

/// Checks that consecutive cells of a path are 4-adjacent and that no cell is repeated.
pub fn is_connected_path(path: &[Cell]) -> bool {
    path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b)) && path.iter().all_unique()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbourhood_order_is_fixed() {
        let c = Cell::new(2, 3);
        assert_eq!(
            c.neumann_neighborhood().as_slice(),
            &[
                Cell::new(3, 3),
                Cell::new(1, 3),
                Cell::new(2, 4),
                Cell::new(2, 2)
            ]
        );
    }

    #[test]
    fn connected_path_detection() {
        let straight: Vec<Cell> = vec![(0, 0).into(), (0, 1).into(), (1, 1).into()];
        assert!(is_connected_path(&straight));
        let jump: Vec<Cell> = vec![(0, 0).into(), (1, 1).into()];
        assert!(!is_connected_path(&jump));
        let repeat: Vec<Cell> = vec![(0, 0).into(), (0, 1).into(), (0, 0).into()];
        assert!(!is_connected_path(&repeat));
        assert!(is_connected_path(&[]));
    }
}
