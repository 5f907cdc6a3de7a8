use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use log::debug;
use petgraph::unionfind::UnionFind;

use crate::{Cell, MazeError};

/// The 20x20 maze the animation runs on by default. `1` is a wall, `0` is open.
pub const CLASSIC_LAYOUT: [[u8; 20]; 20] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1],
    [1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1],
    [1, 0, 1, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 0, 1],
    [1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1],
    [1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 0, 1],
    [1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 1],
    [1, 0, 1, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 1, 1, 1],
    [1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 1, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 1],
    [1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 0, 0, 1, 0, 1, 0, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 0, 1, 0, 1, 1, 0, 1],
    [1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 1],
    [1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0],
];
pub const CLASSIC_START: Cell = Cell::new(1, 1);
pub const CLASSIC_END: Cell = Cell::new(19, 19);

/// An immutable occupancy grid with a fixed start and end. Blocked cells are stored as [true]
/// in the underlying [BoolGrid] (indexed with x = column, y = row). Connected components are
/// computed once at construction so reachability can be answered without searching.
#[derive(Clone, Debug)]
pub struct Maze {
    grid: BoolGrid,
    rows: usize,
    cols: usize,
    start: Cell,
    end: Cell,
    components: UnionFind<usize>,
}

impl Maze {
    /// Builds a maze from a rectangular matrix of `0` (open) and `1` (blocked) values.
    /// Both endpoints must lie inside the grid and be open.
    pub fn from_rows<R: AsRef<[u8]>>(
        rows: &[R],
        start: Cell,
        end: Cell,
    ) -> Result<Maze, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if height == 0 || width == 0 {
            return Err(MazeError::EmptyGrid);
        }
        let mut grid = BoolGrid::new(width, height, false);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MazeError::InvalidGrid {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                let blocked = match value {
                    0 => false,
                    1 => true,
                    other => {
                        return Err(MazeError::InvalidCell {
                            line: y + 1,
                            column: x + 1,
                            value: other.to_string(),
                        })
                    }
                };
                grid.set(x as i32, y as i32, blocked);
            }
        }
        let mut maze = Maze {
            grid,
            rows: height,
            cols: width,
            start,
            end,
            components: UnionFind::new(width * height),
        };
        for cell in [start, end] {
            if !maze.in_bounds(&cell) {
                return Err(MazeError::OutOfBoundsCell {
                    cell,
                    rows: height,
                    cols: width,
                });
            }
            if !maze.is_open(&cell) {
                return Err(MazeError::BlockedEndpoint { cell });
            }
        }
        maze.generate_components();
        Ok(maze)
    }

    /// Parses a text layout (see [parse_layout]) and builds a maze from it.
    pub fn parse(layout: &str, start: Cell, end: Cell) -> Result<Maze, MazeError> {
        Maze::from_rows(&parse_layout(layout)?, start, end)
    }

    /// The maze from [CLASSIC_LAYOUT], from the top-left corridor to the bottom-right exit.
    pub fn classic() -> Maze {
        Maze::from_rows(&CLASSIC_LAYOUT, CLASSIC_START, CLASSIC_END)
            .unwrap_or_else(|e| unreachable!("classic layout is valid: {e}"))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn start(&self) -> Cell {
        self.start
    }
    pub fn end(&self) -> Cell {
        self.end
    }

    pub fn in_bounds(&self, cell: &Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }

    /// Whether the cell can be entered. Out-of-bounds cells are never open.
    pub fn is_open(&self, cell: &Cell) -> bool {
        self.in_bounds(cell) && !self.grid.get(cell.col, cell.row)
    }

    /// Number of open cells in the whole grid.
    pub fn open_count(&self) -> usize {
        self.cells().filter(|c| self.is_open(c)).count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |row| (0..cols).map(move |col| Cell::new(row, col)))
    }

    fn get_ix(&self, cell: &Cell) -> usize {
        cell.row as usize * self.cols + cell.col as usize
    }

    /// Retrieves the component id an open cell belongs to.
    pub fn get_component(&self, cell: &Cell) -> Option<usize> {
        self.is_open(cell)
            .then(|| self.components.find(self.get_ix(cell)))
    }

    /// Checks if start and end are on the same 4-connected component.
    pub fn reachable(&self) -> bool {
        self.components
            .equiv(self.get_ix(&self.start), self.get_ix(&self.end))
    }

    /// Number of open cells on the same component as the start.
    pub fn reachable_count(&self) -> usize {
        let start_component = self.get_component(&self.start);
        self.cells()
            .filter(|c| self.get_component(c) == start_component)
            .count()
    }

    /// Links every open cell to its open right and lower neighbours.
    fn generate_components(&mut self) {
        debug!("Generating connected components for {}x{} maze", self.rows, self.cols);
        let mut components = UnionFind::new(self.rows * self.cols);
        for cell in self.cells().filter(|c| self.is_open(c)) {
            let parent_ix = self.get_ix(&cell);
            [Cell::new(cell.row + 1, cell.col), Cell::new(cell.row, cell.col + 1)]
                .iter()
                .filter(|n| self.is_open(n))
                .for_each(|n| {
                    components.union(parent_ix, self.get_ix(n));
                });
        }
        self.components = components;
    }
}

/// Parses a layout with one row per non-empty line. Rows consist of `0` (open) and `1`
/// (blocked) digits, optionally separated by commas or whitespace.
pub fn parse_layout(layout: &str) -> Result<Vec<Vec<u8>>, MazeError> {
    let mut rows = Vec::new();
    for (line_ix, line) in layout.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for (col_ix, ch) in line.chars().enumerate() {
            match ch {
                '0' => row.push(0),
                '1' => row.push(1),
                ',' => {}
                c if c.is_whitespace() => {}
                c => {
                    return Err(MazeError::InvalidCell {
                        line: line_ix + 1,
                        column: col_ix + 1,
                        value: c.to_string(),
                    })
                }
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows as i32 {
            let line = (0..self.cols as i32)
                .map(|col| {
                    let cell = Cell::new(row, col);
                    if cell == self.start {
                        'S'
                    } else if cell == self.end {
                        'E'
                    } else if self.is_open(&cell) {
                        '.'
                    } else {
                        '#'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
