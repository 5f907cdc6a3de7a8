use crate::Algorithm;

/// An RGBA colour, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Rgba {
        Rgba { r, g, b, a }
    }
    pub const fn opaque(r: u8, g: u8, b: u8) -> Rgba {
        Rgba::new(r, g, b, 255)
    }
    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba { a, ..self }
    }
}

pub const CELL_SIZE: u32 = 35;
pub const FRAME_RATE: u32 = 10;
pub const STROKE_WEIGHT: f32 = 4.0;
const HIGHLIGHT_ALPHA: u8 = 120;
const PATH_ALPHA: u8 = 220;

/// Visual settings of the animation.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Side length of one grid cell in pixels.
    pub cell_size: u32,
    /// Ticks per second the driver should aim for.
    pub frame_rate: u32,
    /// Line width of the final paths in pixels.
    pub stroke_weight: f32,
    pub wall: Rgba,
    pub open: Rgba,
    pub grid_line: Rgba,
    pub bfs: Rgba,
    pub dfs: Rgba,
}

impl Default for RenderConfig {
    fn default() -> RenderConfig {
        RenderConfig {
            cell_size: CELL_SIZE,
            frame_rate: FRAME_RATE,
            stroke_weight: STROKE_WEIGHT,
            wall: Rgba::opaque(0, 0, 0),
            open: Rgba::opaque(255, 255, 255),
            grid_line: Rgba::opaque(200, 200, 200),
            bfs: Rgba::opaque(0, 0, 255),
            dfs: Rgba::opaque(255, 0, 0),
        }
    }
}

impl RenderConfig {
    pub fn color(&self, algorithm: Algorithm) -> Rgba {
        match algorithm {
            Algorithm::Bfs => self.bfs,
            Algorithm::Dfs => self.dfs,
        }
    }

    /// Translucent fill for the cell an algorithm visits in the current tick.
    pub fn highlight_color(&self, algorithm: Algorithm) -> Rgba {
        self.color(algorithm).with_alpha(HIGHLIGHT_ALPHA)
    }

    pub fn path_color(&self, algorithm: Algorithm) -> Rgba {
        self.color(algorithm).with_alpha(PATH_ALPHA)
    }

    /// Milliseconds between ticks at the configured frame rate.
    pub fn frame_interval_ms(&self) -> u64 {
        1000 / u64::from(self.frame_rate.max(1))
    }
}
