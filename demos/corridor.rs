use maze_traversal::{Algorithm, Cell, Maze};

// In this example both searches run on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |E  |
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// BFS goes straight down, DFS takes the long way around the wall.

fn main() {
    let maze = match Maze::parse("000\n010\n000", Cell::new(0, 0), Cell::new(2, 0)) {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    println!("{}", maze);
    for algorithm in Algorithm::ALL {
        println!("{algorithm} trace: {:?}", algorithm.step_trace(&maze));
        match algorithm.solve(&maze) {
            Some(path) => {
                println!("{algorithm} path:");
                for cell in path {
                    println!("{}", cell);
                }
            }
            None => println!("{algorithm} found no path"),
        }
    }
}
