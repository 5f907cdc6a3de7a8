//! Replays the BFS and DFS exploration traces side by side, one cell per tick, and solves both
//! searches once the replay is over.
use log::info;

use crate::{BfsSolver, Cell, DfsSolver, GridSolver, Maze};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// At least one trace still has cells to replay.
    Exploring,
    /// Both traces were replayed and the final paths computed. Terminal.
    Done,
}

/// The mutable part of an animation. It is threaded through [Session::advance] by value, one
/// tick at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationState {
    phase: Phase,
    ticks: usize,
    bfs_cursor: usize,
    dfs_cursor: usize,
    bfs_path: Option<Vec<Cell>>,
    dfs_path: Option<Vec<Cell>>,
}

impl AnimationState {
    fn new() -> AnimationState {
        AnimationState {
            phase: Phase::Exploring,
            ticks: 0,
            bfs_cursor: 0,
            dfs_cursor: 0,
            bfs_path: None,
            dfs_path: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }
    /// Ticks that changed the state. Ticks after [Phase::Done] are not counted.
    pub fn ticks(&self) -> usize {
        self.ticks
    }
    /// Number of BFS trace cells replayed so far.
    pub fn bfs_cursor(&self) -> usize {
        self.bfs_cursor
    }
    /// Number of DFS trace cells replayed so far.
    pub fn dfs_cursor(&self) -> usize {
        self.dfs_cursor
    }
}

/// Owns a maze together with the exploration traces of both searches. A session never changes
/// after creation; all progress lives in the [AnimationState] it hands out. Starting over means
/// creating a new session.
#[derive(Clone, Debug)]
pub struct Session {
    maze: Maze,
    bfs_trace: Vec<Cell>,
    dfs_trace: Vec<Cell>,
}

impl Session {
    pub fn new(maze: Maze) -> (Session, AnimationState) {
        let bfs_trace = BfsSolver.step_trace(&maze);
        let dfs_trace = DfsSolver.step_trace(&maze);
        info!(
            "New session from {} to {}: {} BFS steps, {} DFS steps",
            maze.start(),
            maze.end(),
            bfs_trace.len(),
            dfs_trace.len()
        );
        let session = Session {
            maze,
            bfs_trace,
            dfs_trace,
        };
        (session, AnimationState::new())
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }
    pub fn bfs_trace(&self) -> &[Cell] {
        &self.bfs_trace
    }
    pub fn dfs_trace(&self) -> &[Cell] {
        &self.dfs_trace
    }

    /// Moves every unfinished cursor one cell forward. The tick that finishes the last trace
    /// solves both searches and switches to [Phase::Done]; from then on this is a no-op.
    pub fn advance(&self, mut state: AnimationState) -> AnimationState {
        if state.is_done() {
            return state;
        }
        state.ticks += 1;
        if state.bfs_cursor < self.bfs_trace.len() {
            state.bfs_cursor += 1;
        }
        if state.dfs_cursor < self.dfs_trace.len() {
            state.dfs_cursor += 1;
        }
        if state.bfs_cursor == self.bfs_trace.len() && state.dfs_cursor == self.dfs_trace.len() {
            info!(
                "Exploration replayed after {} ticks, solving final paths",
                state.ticks
            );
            state.bfs_path = BfsSolver.solve(&self.maze);
            state.dfs_path = DfsSolver.solve(&self.maze);
            state.phase = Phase::Done;
        }
        state
    }

    /// The cell BFS visited in the latest tick. [None] before the first tick, once the BFS trace
    /// is exhausted, and after [Phase::Done].
    pub fn current_bfs_cell(&self, state: &AnimationState) -> Option<Cell> {
        current_cell(&self.bfs_trace, state.bfs_cursor, state)
    }

    /// The cell DFS visited in the latest tick. See [current_bfs_cell](Self::current_bfs_cell).
    pub fn current_dfs_cell(&self, state: &AnimationState) -> Option<Cell> {
        current_cell(&self.dfs_trace, state.dfs_cursor, state)
    }

    /// The BFS cells replayed so far.
    pub fn explored_bfs(&self, state: &AnimationState) -> &[Cell] {
        &self.bfs_trace[..state.bfs_cursor.min(self.bfs_trace.len())]
    }

    /// The DFS cells replayed so far.
    pub fn explored_dfs(&self, state: &AnimationState) -> &[Cell] {
        &self.dfs_trace[..state.dfs_cursor.min(self.dfs_trace.len())]
    }

    /// The BFS path, once [Phase::Done] is reached and only if the end is reachable.
    pub fn final_bfs_path<'s>(&self, state: &'s AnimationState) -> Option<&'s [Cell]> {
        state.bfs_path.as_deref()
    }

    /// The DFS path, once [Phase::Done] is reached and only if the end is reachable.
    pub fn final_dfs_path<'s>(&self, state: &'s AnimationState) -> Option<&'s [Cell]> {
        state.dfs_path.as_deref()
    }
}

/// A cursor equal to the tick count moved during the latest tick.
fn current_cell(trace: &[Cell], cursor: usize, state: &AnimationState) -> Option<Cell> {
    match state.phase {
        Phase::Exploring if cursor > 0 && cursor == state.ticks => trace.get(cursor - 1).copied(),
        _ => None,
    }
}
