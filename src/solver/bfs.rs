use std::collections::VecDeque;

use crate::{solver::GridSolver, Cell};

/// Breadth-first search. Cells are expanded in discovery order, so the first path found to the
/// end uses the fewest moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    type Frontier = VecDeque<Cell>;

    fn name(&self) -> &'static str {
        "BFS"
    }
}
