//! Fuzzes both searches over many random grids: a path is found exactly when start and end share
//! a connected component, found paths are connected, and BFS never loses to DFS on length.
use itertools::Itertools;
use maze_traversal::{is_connected_path, BfsSolver, Cell, DfsSolver, GridSolver, Maze, Session};
use rand::prelude::*;

fn random_maze(rows: usize, cols: usize, rng: &mut StdRng) -> Maze {
    let start = Cell::new(0, 0);
    let end = Cell::new(rows as i32 - 1, cols as i32 - 1);
    let mut layout = vec![vec![0u8; cols]; rows];
    for (r, row) in layout.iter_mut().enumerate() {
        for (c, value) in row.iter_mut().enumerate() {
            let cell = Cell::new(r as i32, c as i32);
            if cell != start && cell != end && rng.gen_bool(0.35) {
                *value = 1;
            }
        }
    }
    Maze::from_rows(&layout, start, end).unwrap()
}

fn visualize_maze(maze: &Maze) {
    println!("{}", maze);
}

#[test]
fn fuzz_reachability() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let maze = random_maze(N, N, &mut rng);
        let reachable = maze.reachable();
        for path in [BfsSolver.solve(&maze), DfsSolver.solve(&maze)] {
            // Show the maze if reachability and search disagree
            if path.is_some() != reachable {
                visualize_maze(&maze);
            }
            assert_eq!(path.is_some(), reachable);
            if let Some(path) = path {
                assert_eq!(path.first(), Some(&maze.start()));
                assert_eq!(path.last(), Some(&maze.end()));
                assert!(is_connected_path(&path));
            }
        }
    }
}

#[test]
fn fuzz_traces() {
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let rows = rng.gen_range(1..10);
        let cols = rng.gen_range(1..10);
        let maze = random_maze(rows, cols, &mut rng);
        for trace in [BfsSolver.step_trace(&maze), DfsSolver.step_trace(&maze)] {
            assert!(trace.iter().all_unique());
            assert!(trace.iter().all(|c| maze.is_open(c)));
            assert_eq!(trace.first(), Some(&maze.start()));
            if maze.reachable() {
                assert_eq!(trace.last(), Some(&maze.end()));
                assert_eq!(trace.iter().filter(|&&c| c == maze.end()).count(), 1);
            } else {
                assert!(!trace.contains(&maze.end()));
                assert_eq!(trace.len(), maze.reachable_count());
            }
        }
    }
}

#[test]
fn fuzz_bfs_never_longer_than_dfs() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..N_GRIDS {
        let maze = random_maze(N, N, &mut rng);
        if let (Some(bfs), Some(dfs)) = (BfsSolver.solve(&maze), DfsSolver.solve(&maze)) {
            if bfs.len() > dfs.len() {
                visualize_maze(&maze);
                println!("BFS path: {bfs:?}\nDFS path: {dfs:?}");
            }
            assert!(bfs.len() <= dfs.len());
            // Every BFS path is as short as a path on a 4-grid can be
            let moves = BfsSolver.get_path_cost(&bfs);
            assert!(moves >= maze.start().manhattan_distance(&maze.end()));
        }
    }
}

#[test]
fn fuzz_solve_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let maze = random_maze(7, 7, &mut rng);
        assert_eq!(BfsSolver.solve(&maze), BfsSolver.solve(&maze));
        assert_eq!(DfsSolver.solve(&maze), DfsSolver.solve(&maze));
        assert_eq!(DfsSolver.step_trace(&maze), DfsSolver.step_trace(&maze));
    }
}

/// Cursors never move backwards or past their trace, and the session finishes exactly once,
/// on the tick that exhausts the longer trace.
#[test]
fn fuzz_animation() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..300 {
        let maze = random_maze(6, 6, &mut rng);
        let (session, mut state) = Session::new(maze);
        let (bfs_len, dfs_len) = (session.bfs_trace().len(), session.dfs_trace().len());
        let mut transitions = 0;
        for _ in 0..(bfs_len.max(dfs_len) + 5) {
            let (bfs_before, dfs_before, was_done) =
                (state.bfs_cursor(), state.dfs_cursor(), state.is_done());
            state = session.advance(state);
            assert!(state.bfs_cursor() >= bfs_before && state.bfs_cursor() <= bfs_len);
            assert!(state.dfs_cursor() >= dfs_before && state.dfs_cursor() <= dfs_len);
            if state.is_done() && !was_done {
                transitions += 1;
                assert_eq!(state.bfs_cursor(), bfs_len);
                assert_eq!(state.dfs_cursor(), dfs_len);
                assert_eq!(state.ticks(), bfs_len.max(dfs_len));
            }
        }
        assert_eq!(transitions, 1);
        assert_eq!(
            session.final_bfs_path(&state).is_some(),
            session.maze().reachable()
        );
    }
}
