//! Perfect maze generation and a race of four path searches through it.
//!
//! - [`grid`]: cells, walls and neighbor queries
//! - [`algorithms`]: maze generators, carving a spanning tree into a grid
//! - [`pathfinding`]: BFS, DFS, Dijkstra and A* over the open edges
//! - [`harness`]: timed comparison of all four on copies of one maze

pub mod algorithms;
pub mod array;
pub mod config;
pub mod dims;
pub mod grid;
pub mod harness;
pub mod pathfinding;

pub use algorithms::{generate_maze, random_endpoints};
pub use config::{AlgorithmChoice, MazeSize};
pub use dims::Dims;
pub use grid::{Grid, GridError};
pub use harness::{compare, SearchResult};
pub use pathfinding::{run, Algorithm, SearchOutcome};

/// Creates a fully walled grid, see [`Grid::new`].
pub fn new_grid(rows: usize, cols: usize) -> Result<Grid, GridError> {
    Grid::new(rows, cols)
}
