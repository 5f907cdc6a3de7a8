use thiserror::Error;

use crate::Cell;

/// Errors raised while building a [Maze](crate::Maze). Traversal itself never fails: an
/// unreachable end is reported as an absent path rather than an error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("grid has no rows or no columns")]
    EmptyGrid,

    /// A row length differs from the first row.
    #[error("row {row} has {found} columns, expected {expected}")]
    InvalidGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{cell} lies outside the {rows}x{cols} grid")]
    OutOfBoundsCell { cell: Cell, rows: usize, cols: usize },

    #[error("endpoint {cell} is blocked")]
    BlockedEndpoint { cell: Cell },

    /// Cell values other than 0 (open) and 1 (blocked), or unparseable layout characters.
    #[error("invalid cell value {value:?} at line {line}, column {column}")]
    InvalidCell {
        line: usize,
        column: usize,
        value: String,
    },
}
