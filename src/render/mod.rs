//! Turns a [Session] into drawing calls. Actual drawing is left to a [Canvas] implementation;
//! [TextCanvas] is a terminal one.
mod text;

pub use text::TextCanvas;

use crate::config::{RenderConfig, Rgba};
use crate::{Algorithm, AnimationState, Cell, Maze, Phase, Session};

/// The drawing primitives a frame is made of. Coordinates are in pixels with the origin in the
/// top-left corner.
pub trait Canvas {
    fn resize(&mut self, width: u32, height: u32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, fill: Rgba, stroke: Option<Rgba>);
    fn polyline(&mut self, points: &[(f32, f32)], color: Rgba, weight: f32);
}

#[derive(Clone, Debug, Default)]
pub struct Renderer {
    pub config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Renderer {
        Renderer { config }
    }

    /// Canvas size in pixels needed to show the whole maze.
    pub fn canvas_size(&self, maze: &Maze) -> (u32, u32) {
        (
            maze.cols() as u32 * self.config.cell_size,
            maze.rows() as u32 * self.config.cell_size,
        )
    }

    pub fn setup<C: Canvas>(&self, canvas: &mut C, maze: &Maze) {
        let (width, height) = self.canvas_size(maze);
        canvas.resize(width, height);
    }

    /// Draws one frame: the grid, then the cells visited in the latest tick while exploring, or
    /// the final paths once done.
    pub fn draw<C: Canvas>(&self, canvas: &mut C, session: &Session, state: &AnimationState) {
        self.draw_grid(canvas, session.maze());
        match state.phase() {
            Phase::Exploring => {
                let current = [
                    (Algorithm::Bfs, session.current_bfs_cell(state)),
                    (Algorithm::Dfs, session.current_dfs_cell(state)),
                ];
                for (algorithm, cell) in current {
                    if let Some(cell) = cell {
                        let (x, y, w, h) = self.cell_rect(&cell);
                        canvas.fill_rect(x, y, w, h, self.config.highlight_color(algorithm), None);
                    }
                }
            }
            Phase::Done => {
                let paths = [
                    (Algorithm::Bfs, session.final_bfs_path(state)),
                    (Algorithm::Dfs, session.final_dfs_path(state)),
                ];
                for (algorithm, path) in paths {
                    if let Some(path) = path {
                        self.draw_path(canvas, path, self.config.path_color(algorithm));
                    }
                }
            }
        }
    }

    fn draw_grid<C: Canvas>(&self, canvas: &mut C, maze: &Maze) {
        for cell in maze.cells() {
            let fill = if maze.is_open(&cell) {
                self.config.open
            } else {
                self.config.wall
            };
            let (x, y, w, h) = self.cell_rect(&cell);
            canvas.fill_rect(x, y, w, h, fill, Some(self.config.grid_line));
        }
    }

    /// A line through the centres of the path cells.
    pub fn draw_path<C: Canvas>(&self, canvas: &mut C, path: &[Cell], color: Rgba) {
        let points = path
            .iter()
            .map(|cell| self.cell_center(cell))
            .collect::<Vec<_>>();
        canvas.polyline(&points, color, self.config.stroke_weight);
    }

    fn cell_rect(&self, cell: &Cell) -> (f32, f32, f32, f32) {
        let size = self.config.cell_size as f32;
        (cell.col as f32 * size, cell.row as f32 * size, size, size)
    }

    fn cell_center(&self, cell: &Cell) -> (f32, f32) {
        let size = self.config.cell_size as f32;
        (
            cell.col as f32 * size + size / 2.0,
            cell.row as f32 * size + size / 2.0,
        )
    }
}
