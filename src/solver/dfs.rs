use crate::{solver::GridSolver, Cell};

/// Depth-first search. Always expands the most recently discovered cell; found paths are valid
/// but not necessarily shortest.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    type Frontier = Vec<Cell>;

    fn name(&self) -> &'static str {
        "DFS"
    }
}
