use maze_traversal::render::{Renderer, TextCanvas};
use maze_traversal::{Maze, RenderConfig, Session};
use std::thread;
use std::time::Duration;

// Animates BFS (b) and DFS (d) on the classic 20x20 maze in the terminal, then shows both
// final paths: B for BFS, D for DFS and * where they overlap.

fn main() {
    let renderer = Renderer::new(RenderConfig::default());
    let maze = Maze::classic();
    let mut canvas = TextCanvas::new(&renderer.config);
    renderer.setup(&mut canvas, &maze);
    let (session, mut state) = Session::new(maze);
    let interval = Duration::from_millis(renderer.config.frame_interval_ms());
    loop {
        state = session.advance(state);
        renderer.draw(&mut canvas, &session, &state);
        // Clear the terminal and move the cursor home
        print!("\x1b[2J\x1b[H{}", canvas);
        println!(
            "tick {:>3}  BFS {:>3}/{}  DFS {:>3}/{}",
            state.ticks(),
            state.bfs_cursor(),
            session.bfs_trace().len(),
            state.dfs_cursor(),
            session.dfs_trace().len()
        );
        if state.is_done() {
            break;
        }
        thread::sleep(interval);
    }
    for (name, path) in [
        ("BFS", session.final_bfs_path(&state)),
        ("DFS", session.final_dfs_path(&state)),
    ] {
        match path {
            Some(path) => println!("{name} path: {} cells", path.len()),
            None => println!("{name}: no path"),
        }
    }
}
