use core::fmt;

use crate::config::{RenderConfig, Rgba};
use crate::render::Canvas;
use crate::Algorithm;

const UNKNOWN: char = '?';
const SHARED_PATH: char = '*';

/// A [Canvas] with one character per grid cell. Pixel coordinates are mapped back to cells with
/// the configured cell size and colours are looked up in a fixed palette:
/// `#` wall, `.` open, `b`/`d` BFS/DFS highlight, `B`/`D` BFS/DFS path and `*` where both
/// paths pass.
#[derive(Clone, Debug)]
pub struct TextCanvas {
    cell_size: f32,
    cols: usize,
    cells: Vec<char>,
    palette: Vec<(Rgba, char)>,
}

impl TextCanvas {
    pub fn new(config: &RenderConfig) -> TextCanvas {
        TextCanvas {
            cell_size: config.cell_size.max(1) as f32,
            cols: 0,
            cells: Vec::new(),
            palette: vec![
                (config.wall, '#'),
                (config.open, '.'),
                (config.highlight_color(Algorithm::Bfs), 'b'),
                (config.highlight_color(Algorithm::Dfs), 'd'),
                (config.path_color(Algorithm::Bfs), 'B'),
                (config.path_color(Algorithm::Dfs), 'D'),
            ],
        }
    }

    pub fn rows(&self) -> usize {
        if self.cols == 0 {
            0
        } else {
            self.cells.len() / self.cols
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn char_at(&self, row: usize, col: usize) -> Option<char> {
        if col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).copied()
    }

    fn lookup(&self, color: Rgba) -> char {
        self.palette
            .iter()
            .find(|(c, _)| *c == color)
            .map_or(UNKNOWN, |(_, ch)| *ch)
    }

    fn index(&self, x: f32, y: f32) -> Option<usize> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / self.cell_size) as usize;
        let row = (y / self.cell_size) as usize;
        (col < self.cols && row < self.rows()).then(|| row * self.cols + col)
    }
}

impl Canvas for TextCanvas {
    fn resize(&mut self, width: u32, height: u32) {
        self.cols = (width as f32 / self.cell_size) as usize;
        let rows = (height as f32 / self.cell_size) as usize;
        self.cells = vec![' '; self.cols * rows];
    }

    fn fill_rect(&mut self, x: f32, y: f32, _w: f32, _h: f32, fill: Rgba, _stroke: Option<Rgba>) {
        let ch = self.lookup(fill);
        if let Some(ix) = self.index(x, y) {
            self.cells[ix] = ch;
        }
    }

    fn polyline(&mut self, points: &[(f32, f32)], color: Rgba, _weight: f32) {
        let ch = self.lookup(color);
        for &(x, y) in points {
            if let Some(ix) = self.index(x, y) {
                self.cells[ix] = match self.cells[ix] {
                    'B' | 'D' | SHARED_PATH if self.cells[ix] != ch => SHARED_PATH,
                    _ => ch,
                };
            }
        }
    }
}

impl fmt::Display for TextCanvas {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}
