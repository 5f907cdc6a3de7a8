use core::fmt;
use log::{debug, warn};

use crate::traversal::{explore, Frontier, Mode};
use crate::{Cell, Maze};

pub mod bfs;
pub mod dfs;

use bfs::BfsSolver;
use dfs::DfsSolver;

/// An uninformed search over the open cells of a [Maze]. Implementors only pick the
/// [Frontier]: everything else, including the neighbour order, is shared.
pub trait GridSolver {
    type Frontier: Frontier;

    fn name(&self) -> &'static str;

    /// Every cell in the order it is taken off the frontier, ending with the maze end if it was
    /// reached.
    fn step_trace(&self, maze: &Maze) -> Vec<Cell> {
        explore::<Self::Frontier>(maze, Mode::Trace).trace
    }

    /// Computes a path from the maze start to its end, start first. Returns [None] if the end
    /// cannot be reached.
    fn solve(&self, maze: &Maze) -> Option<Vec<Cell>> {
        let exploration = explore::<Self::Frontier>(maze, Mode::Solve);
        if !exploration.reached {
            warn!(
                "{}: {} is not reachable from {}",
                self.name(),
                maze.end(),
                maze.start()
            );
            return None;
        }
        let path = exploration.path(&maze.end());
        if let Some(path) = &path {
            debug!("{} found a path of {} cells", self.name(), path.len());
        }
        path
    }

    /// Like [solve](Self::solve), but an unreachable end yields the degenerate path holding only
    /// the end cell instead of [None].
    fn solve_legacy(&self, maze: &Maze) -> Vec<Cell> {
        self.solve(maze).unwrap_or_else(|| vec![maze.end()])
    }

    /// Number of unit moves along a path.
    fn get_path_cost(&self, path: &[Cell]) -> i32 {
        path.windows(2)
            .map(|w| w[0].manhattan_distance(&w[1]))
            .sum()
    }
}

/// The two searches that are animated side by side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Bfs, Algorithm::Dfs];

    pub fn step_trace(self, maze: &Maze) -> Vec<Cell> {
        match self {
            Algorithm::Bfs => BfsSolver.step_trace(maze),
            Algorithm::Dfs => DfsSolver.step_trace(maze),
        }
    }

    pub fn solve(self, maze: &Maze) -> Option<Vec<Cell>> {
        match self {
            Algorithm::Bfs => BfsSolver.solve(maze),
            Algorithm::Dfs => DfsSolver.solve(maze),
        }
    }

    pub fn solve_legacy(self, maze: &Maze) -> Vec<Cell> {
        match self {
            Algorithm::Bfs => BfsSolver.solve_legacy(maze),
            Algorithm::Dfs => DfsSolver.solve_legacy(maze),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "{}", BfsSolver.name()),
            Algorithm::Dfs => write!(f, "{}", DfsSolver.name()),
        }
    }
}
