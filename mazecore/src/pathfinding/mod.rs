//! Path search over the open edges of a [`Grid`].
//!
//! Every search writes its bookkeeping (`visited`, `distance`, `predecessor`) into the cells
//! of the grid it is given, so [`run`] resets the grid first and each comparison run works
//! on its own clone.

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
pub mod heuristic;
mod path;
mod queue;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    dims::Dims,
    grid::{Grid, GridError},
};

pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use dijkstra::Dijkstra;
pub use path::reconstruct_path;

pub trait PathFinder: fmt::Debug + Sync + Send {
    fn name(&self) -> &'static str;

    /// Searches from `start` to `goal`, both must be inside the grid.
    ///
    /// Returns whether the goal was reached. On success the predecessors lead from
    /// `goal` back to `start`.
    fn search(&self, grid: &mut Grid, start: Dims, goal: Dims) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// Order in which the comparison runs them.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::Bfs,
        Algorithm::Dfs,
    ];

    pub fn finder(self) -> &'static dyn PathFinder {
        match self {
            Algorithm::Bfs => &BreadthFirst,
            Algorithm::Dfs => &DepthFirst,
            Algorithm::Dijkstra => &Dijkstra,
            Algorithm::AStar => &AStar,
        }
    }

    pub fn label(self) -> &'static str {
        self.finder().name()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(format!("unknown algorithm '{s}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub found: bool,
    pub path: Vec<Dims>,
}

/// Resets the search state of `grid` and runs `algorithm` on it.
pub fn run(
    algorithm: Algorithm,
    grid: &mut Grid,
    start: Dims,
    goal: Dims,
) -> Result<SearchOutcome, GridError> {
    grid.check_bounds(start)?;
    grid.check_bounds(goal)?;

    grid.reset_search_state();
    let found = algorithm.finder().search(grid, start, goal);
    let path = if found {
        reconstruct_path(grid, goal)
    } else {
        Vec::new()
    };

    Ok(SearchOutcome { found, path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{generate_maze, generate_maze_with, GeneratorKind};

    fn maze(rows: usize, cols: usize, seed: u64) -> Grid {
        let mut grid = Grid::new(rows, cols).unwrap();
        generate_maze(&mut grid, Some(seed));
        grid
    }

    fn assert_valid_path(grid: &Grid, start: Dims, goal: Dims, path: &[Dims]) {
        let mut prev = start;
        for &pos in path {
            assert!(
                grid.neighbors_reachable(prev).contains(&pos),
                "{prev:?} -> {pos:?} is not an open edge"
            );
            prev = pos;
        }
        assert_eq!(prev, goal);
    }

    fn all_positions(grid: &Grid) -> Vec<Dims> {
        Dims::iter_fill(Dims::ZERO, grid.size()).collect()
    }

    #[test]
    fn shortest_path_algorithms_agree() {
        let mut grid = maze(6, 7, 11);
        let positions = all_positions(&grid);

        for &start in &positions {
            for &goal in &positions {
                let bfs = run(Algorithm::Bfs, &mut grid, start, goal).unwrap();
                let dijkstra = run(Algorithm::Dijkstra, &mut grid, start, goal).unwrap();
                let astar = run(Algorithm::AStar, &mut grid, start, goal).unwrap();
                let dfs = run(Algorithm::Dfs, &mut grid, start, goal).unwrap();

                for outcome in [&bfs, &dijkstra, &astar, &dfs] {
                    assert!(outcome.found);
                    assert_valid_path(&grid, start, goal, &outcome.path);
                }
                assert_eq!(bfs.path.len(), dijkstra.path.len());
                assert_eq!(bfs.path.len(), astar.path.len());
                assert!(dfs.path.len() >= bfs.path.len());
            }
        }
    }

    #[test]
    fn tree_paths_are_unique() {
        // In a perfect maze every algorithm must find the very same path.
        let mut grid = Grid::new(9, 9).unwrap();
        generate_maze_with(GeneratorKind::Kruskals, &mut grid, Some(5));
        let (start, goal) = (Dims(0, 4), Dims(8, 2));

        let expected = run(Algorithm::Bfs, &mut grid, start, goal).unwrap();
        for algorithm in Algorithm::ALL {
            assert_eq!(run(algorithm, &mut grid, start, goal).unwrap(), expected);
        }
    }

    #[test]
    fn shortest_on_grid_with_cycles() {
        // fully open 3x3, only the shortest searches must find a 4 step path corner to corner
        let mut grid = Grid::new(3, 3).unwrap();
        for pos in all_positions(&grid) {
            for next in grid.neighbors_geometric(pos) {
                grid.open_edge(pos, next);
            }
        }
        let (start, goal) = (Dims(0, 0), Dims(2, 2));

        for algorithm in [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::AStar] {
            let outcome = run(algorithm, &mut grid, start, goal).unwrap();
            assert!(outcome.found);
            assert_eq!(outcome.path.len(), 4, "{algorithm}");
            assert_valid_path(&grid, start, goal, &outcome.path);
        }

        let dfs = run(Algorithm::Dfs, &mut grid, start, goal).unwrap();
        assert!(dfs.found);
        assert!(dfs.path.len() >= 4);
        assert_valid_path(&grid, start, goal, &dfs.path);
    }

    #[test]
    fn reset_then_rerun_matches_fresh_clone() {
        let source = maze(10, 10, 77);
        let (start, goal) = (Dims(0, 3), Dims(9, 6));

        for algorithm in Algorithm::ALL {
            let mut reused = source.clone();
            let first = run(algorithm, &mut reused, start, goal).unwrap();
            let again = run(algorithm, &mut reused, start, goal).unwrap();

            let mut fresh = source.clone();
            let fresh = run(algorithm, &mut fresh, start, goal).unwrap();

            assert_eq!(first, again);
            assert_eq!(first, fresh);
        }
    }

    #[test]
    fn searching_clone_leaves_source_untouched() {
        let source = maze(5, 5, 2);
        let mut copy = source.clone();
        run(Algorithm::Bfs, &mut copy, Dims(0, 0), Dims(4, 4)).unwrap();

        assert!(copy.cells().any(|c| c.visited));
        assert!(source
            .cells()
            .all(|c| !c.visited && c.predecessor.is_none() && c.distance == crate::grid::UNREACHABLE));
    }

    #[test]
    fn heuristic_is_admissible() {
        let mut grid = maze(12, 12, 8);
        let goal = Dims(11, 5);
        // BFS from the goal gives the true maze distance of every cell
        assert!(!BreadthFirst.search(&mut grid, goal, Dims(-1, -1)));

        for cell in grid.cells() {
            assert!(heuristic::euclidean(cell.get_coord(), goal) <= cell.distance as f64);
            assert!(heuristic::manhattan(cell.get_coord(), goal) <= cell.distance);
        }
    }

    #[test]
    fn single_cell_start_is_goal() {
        let mut grid = maze(1, 1, 0);
        for algorithm in Algorithm::ALL {
            let outcome = run(algorithm, &mut grid, Dims::ZERO, Dims::ZERO).unwrap();
            assert!(outcome.found);
            assert!(outcome.path.is_empty());
        }
    }

    #[test]
    fn two_by_two_paths() {
        for seed in 0..10 {
            let mut grid = maze(2, 2, seed);
            assert_eq!(grid.open_edge_count(), 3);

            let positions = all_positions(&grid);
            for &start in &positions {
                for &goal in positions.iter().filter(|&&g| g != start) {
                    let outcome = run(Algorithm::Bfs, &mut grid, start, goal).unwrap();
                    assert!(outcome.found);
                    assert!((1..=3).contains(&outcome.path.len()));
                }
            }
        }
    }

    #[test]
    fn walled_off_grid_finds_nothing() {
        let mut grid = Grid::new(3, 3).unwrap();
        for algorithm in Algorithm::ALL {
            let outcome = run(algorithm, &mut grid, Dims(0, 0), Dims(2, 1)).unwrap();
            assert!(!outcome.found, "{algorithm}");
            assert!(outcome.path.is_empty());
        }
    }

    #[test]
    fn out_of_bounds_endpoints() {
        let mut grid = maze(3, 3, 1);
        assert_eq!(
            run(Algorithm::Bfs, &mut grid, Dims(3, 0), Dims(0, 0)),
            Err(GridError::OutOfBounds(Dims(3, 0)))
        );
        assert_eq!(
            run(Algorithm::AStar, &mut grid, Dims(0, 0), Dims(0, -1)),
            Err(GridError::OutOfBounds(Dims(0, -1)))
        );
    }

    #[test]
    fn parse_and_label() {
        assert_eq!("A*".parse(), Ok(Algorithm::AStar));
        assert_eq!("astar".parse(), Ok(Algorithm::AStar));
        assert_eq!("BFS".parse(), Ok(Algorithm::Bfs));
        assert!("greedy".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::Dijkstra.to_string(), "Dijkstra");
        assert_eq!(Algorithm::AStar.label(), "A*");
    }
}
