//! The search loop shared by every [GridSolver](crate::GridSolver). The solvers only choose the
//! [Frontier]; neighbour generation, visiting and termination are identical for all of them.
use fxhash::FxBuildHasher;
use grid_util::grid::{BoolGrid, ValueGrid};
use indexmap::IndexMap;
use log::debug;
use std::collections::VecDeque;

use crate::{Cell, Maze};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// The set of discovered but not yet expanded cells. The order in which [pop](Frontier::pop)
/// hands cells back determines the traversal.
pub trait Frontier: Default {
    fn push(&mut self, cell: Cell);
    fn pop(&mut self) -> Option<Cell>;
    fn is_empty(&self) -> bool;
}

/// First in, first out.
impl Frontier for VecDeque<Cell> {
    fn push(&mut self, cell: Cell) {
        self.push_back(cell);
    }
    fn pop(&mut self) -> Option<Cell> {
        self.pop_front()
    }
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

/// Last in, first out.
impl Frontier for Vec<Cell> {
    fn push(&mut self, cell: Cell) {
        Vec::push(self, cell);
    }
    fn pop(&mut self) -> Option<Cell> {
        Vec::pop(self)
    }
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

/// What a run of [explore] records besides the visited set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Every dequeued cell, in order.
    Trace,
    /// The predecessor of every discovered cell.
    Solve,
}

pub(crate) struct Exploration {
    pub trace: Vec<Cell>,
    /// Discovered cells mapped to the index of the cell they were reached from. The start maps to
    /// [None].
    parents: FxIndexMap<Cell, Option<usize>>,
    pub reached: bool,
}

impl Exploration {
    /// Follows the predecessor links back from `end`. [None] if `end` was never discovered.
    pub fn path(&self, end: &Cell) -> Option<Vec<Cell>> {
        let end_ix = self.parents.get_index_of(end)?;
        Some(reverse_path(&self.parents, end_ix))
    }
}

fn reverse_path(parents: &FxIndexMap<Cell, Option<usize>>, start: usize) -> Vec<Cell> {
    let mut path: Vec<Cell> = std::iter::successors(parents.get_index(start), |&(_, parent)| {
        parent.and_then(|ix| parents.get_index(ix))
    })
    .map(|(cell, _)| *cell)
    .collect();
    path.reverse();
    path
}

/// Runs a search from the maze start until the end is dequeued or the frontier runs dry.
pub(crate) fn explore<F: Frontier>(maze: &Maze, mode: Mode) -> Exploration {
    let (start, end) = (maze.start(), maze.end());
    let mut frontier = F::default();
    let mut visited = BoolGrid::new(maze.cols(), maze.rows(), false);
    let mut trace = Vec::new();
    let mut parents: FxIndexMap<Cell, Option<usize>> = FxIndexMap::default();

    frontier.push(start);
    visited.set(start.col, start.row, true);
    if mode == Mode::Solve {
        parents.insert(start, None);
    }
    let mut reached = false;
    while let Some(cell) = frontier.pop() {
        if mode == Mode::Trace {
            trace.push(cell);
        }
        if cell == end {
            reached = true;
            break;
        }
        let parent_ix = parents.get_index_of(&cell);
        for neighbour in cell.neumann_neighborhood() {
            if maze.is_open(&neighbour) && !visited.get(neighbour.col, neighbour.row) {
                visited.set(neighbour.col, neighbour.row, true);
                frontier.push(neighbour);
                if mode == Mode::Solve {
                    parents.insert(neighbour, parent_ix);
                }
            }
        }
    }
    debug!(
        "Search from {} ({:?}) finished after {} cells, end reached: {}",
        start,
        mode,
        trace.len().max(parents.len()),
        reached
    );
    Exploration {
        trace,
        parents,
        reached,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_2x2() -> Maze {
        Maze::from_rows(&[[0u8, 0], [0, 0]], Cell::new(0, 0), Cell::new(1, 1)).unwrap()
    }

    #[test]
    fn fifo_and_lifo_frontiers() {
        let mut queue: VecDeque<Cell> = VecDeque::new();
        let mut stack: Vec<Cell> = Vec::new();
        for c in [Cell::new(0, 0), Cell::new(0, 1)] {
            Frontier::push(&mut queue, c);
            Frontier::push(&mut stack, c);
        }
        assert_eq!(Frontier::pop(&mut queue), Some(Cell::new(0, 0)));
        assert_eq!(Frontier::pop(&mut stack), Some(Cell::new(0, 1)));
        assert!(!Frontier::is_empty(&queue));
    }

    #[test]
    fn trace_mode_records_no_parents() {
        let exploration = explore::<VecDeque<Cell>>(&open_2x2(), Mode::Trace);
        assert!(exploration.reached);
        assert_eq!(exploration.trace.len(), 4);
        assert_eq!(exploration.path(&Cell::new(1, 1)), None);
    }

    #[test]
    fn solve_mode_records_no_trace() {
        let exploration = explore::<VecDeque<Cell>>(&open_2x2(), Mode::Solve);
        assert!(exploration.reached);
        assert!(exploration.trace.is_empty());
        assert_eq!(
            exploration.path(&Cell::new(1, 1)).unwrap(),
            vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)]
        );
    }

    /// The start has an explicit `None` parent, so a path to it is just the start.
    #[test]
    fn path_to_start_is_single_cell() {
        let exploration = explore::<Vec<Cell>>(&open_2x2(), Mode::Solve);
        assert_eq!(exploration.path(&Cell::new(0, 0)).unwrap(), vec![Cell::new(0, 0)]);
    }
}
