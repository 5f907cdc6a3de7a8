use criterion::{criterion_group, criterion_main, Criterion};
use maze_traversal::{BfsSolver, Cell, DfsSolver, GridSolver, Maze, Session};
use maze_traversal_maps::get_maze_set;
use std::hint::black_box;

fn scenario_mazes(name: &str) -> Vec<Maze> {
    let (rows, scenarios) = get_maze_set(name).expect("Could not load maze set");
    scenarios
        .iter()
        .map(|s| Maze::from_rows(&rows, Cell::from(s.start), Cell::from(s.end)).unwrap())
        .collect()
}

fn bench_solver<S: GridSolver>(c: &mut Criterion, solver: S) {
    let name = "classic/maze20";
    let mazes = scenario_mazes(name);
    c.bench_function(format!("{name}, {} trace", solver.name()).as_str(), |b| {
        b.iter(|| {
            for maze in &mazes {
                black_box(solver.step_trace(maze));
            }
        })
    });
    c.bench_function(format!("{name}, {} solve", solver.name()).as_str(), |b| {
        b.iter(|| {
            for maze in &mazes {
                black_box(solver.solve(maze));
            }
        })
    });
}

fn classic_bench_bfs(c: &mut Criterion) {
    bench_solver(c, BfsSolver);
}

fn classic_bench_dfs(c: &mut Criterion) {
    bench_solver(c, DfsSolver);
}

fn classic_bench_animation(c: &mut Criterion) {
    c.bench_function("classic/maze20, full animation", |b| {
        b.iter(|| {
            let (session, mut state) = Session::new(Maze::classic());
            while !state.is_done() {
                state = session.advance(state);
            }
            black_box(state)
        })
    });
}

criterion_group!(
    benches,
    classic_bench_bfs,
    classic_bench_dfs,
    classic_bench_animation
);
criterion_main!(benches);
