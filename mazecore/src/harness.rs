use std::time::{Duration, Instant};

use crate::{
    dims::Dims,
    grid::{Grid, GridError},
    pathfinding::{reconstruct_path, Algorithm},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    /// `Duration::MAX` when the goal wasn't found, so failed runs rank last.
    pub elapsed: Duration,
    pub path: Vec<Dims>,
    pub found: bool,
}

impl SearchResult {
    pub fn label(&self) -> &'static str {
        self.algorithm.label()
    }
}

/// Runs a single algorithm on a fresh clone of `grid` and measures it.
pub fn time_search(
    algorithm: Algorithm,
    grid: &Grid,
    start: Dims,
    goal: Dims,
) -> Result<SearchResult, GridError> {
    grid.check_bounds(start)?;
    grid.check_bounds(goal)?;
    Ok(timed_run(algorithm, grid, start, goal))
}

/// Endpoints must already be checked against `grid`.
fn timed_run(algorithm: Algorithm, grid: &Grid, start: Dims, goal: Dims) -> SearchResult {
    let mut grid = grid.clone();
    grid.reset_search_state();

    let now = Instant::now();
    let found = algorithm.finder().search(&mut grid, start, goal);
    let elapsed = now.elapsed();

    if found {
        SearchResult {
            algorithm,
            elapsed,
            path: reconstruct_path(&grid, goal),
            found,
        }
    } else {
        SearchResult {
            algorithm,
            elapsed: Duration::MAX,
            path: Vec::new(),
            found,
        }
    }
}

/// Runs every algorithm on its own copy of `grid`, one after another, fastest first.
pub fn compare(grid: &Grid, start: Dims, goal: Dims) -> Result<Vec<SearchResult>, GridError> {
    grid.check_bounds(start)?;
    grid.check_bounds(goal)?;

    let results = Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let result = timed_run(algorithm, grid, start, goal);
            log::debug!(
                "{} finished in {:?}, found: {}, path length {}",
                result.label(),
                result.elapsed,
                result.found,
                result.path.len()
            );
            result
        })
        .collect();

    let ranked = rank(results);
    if let Some(fastest) = ranked.first() {
        log::info!("Fastest algorithm: {}", fastest.label());
    }
    Ok(ranked)
}

/// Sorts by elapsed time, equal times keep their order.
pub fn rank(mut results: Vec<SearchResult>) -> Vec<SearchResult> {
    results.sort_by_key(|result| result.elapsed);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::generate_maze;

    fn result(algorithm: Algorithm, micros: u64) -> SearchResult {
        SearchResult {
            algorithm,
            elapsed: Duration::from_micros(micros),
            path: Vec::new(),
            found: true,
        }
    }

    #[test]
    fn rank_is_ascending() {
        let ranked = rank(vec![
            result(Algorithm::Dijkstra, 40),
            result(Algorithm::AStar, 10),
            result(Algorithm::Bfs, 30),
            result(Algorithm::Dfs, 20),
        ]);
        let order: Vec<_> = ranked.iter().map(|r| r.algorithm).collect();
        assert_eq!(
            order,
            vec![Algorithm::AStar, Algorithm::Dfs, Algorithm::Bfs, Algorithm::Dijkstra]
        );
        assert!(ranked.windows(2).all(|w| w[0].elapsed < w[1].elapsed));
    }

    #[test]
    fn rank_ties_keep_input_order() {
        let ranked = rank(vec![
            result(Algorithm::Dijkstra, 5),
            result(Algorithm::AStar, 2),
            result(Algorithm::Bfs, 5),
            result(Algorithm::Dfs, 2),
        ]);
        let order: Vec<_> = ranked.iter().map(|r| r.algorithm).collect();
        assert_eq!(
            order,
            vec![Algorithm::AStar, Algorithm::Dfs, Algorithm::Dijkstra, Algorithm::Bfs]
        );
    }

    #[test]
    fn compare_runs_all_algorithms() {
        let mut grid = Grid::new(15, 15).unwrap();
        generate_maze(&mut grid, Some(21));
        let (start, goal) = (Dims::from_row_col(3, 0), Dims::from_row_col(11, 14));

        let results = compare(&grid, start, goal).unwrap();
        assert_eq!(results.len(), 4);
        for algorithm in Algorithm::ALL {
            assert!(results.iter().any(|r| r.algorithm == algorithm));
        }
        assert!(results.iter().all(|r| r.found && r.elapsed < Duration::MAX));
        assert!(results.windows(2).all(|w| w[0].elapsed <= w[1].elapsed));

        // perfect maze, so all of them walk the same path
        let path = &results[0].path;
        assert_eq!(path.last(), Some(&goal));
        assert!(results.iter().all(|r| &r.path == path));

        // the source grid is never searched itself
        assert!(grid.cells().all(|c| !c.visited && c.predecessor.is_none()));
    }

    #[test]
    fn compare_on_disconnected_grid() {
        let grid = Grid::new(3, 3).unwrap();
        let results = compare(&grid, Dims(0, 0), Dims(2, 2)).unwrap();

        assert_eq!(results.len(), 4);
        for (result, algorithm) in results.iter().zip(Algorithm::ALL) {
            assert_eq!(result.algorithm, algorithm);
            assert!(!result.found);
            assert!(result.path.is_empty());
            assert_eq!(result.elapsed, Duration::MAX);
        }
    }

    #[test]
    fn time_search_single_algorithm() {
        let mut grid = Grid::new(8, 8).unwrap();
        generate_maze(&mut grid, Some(3));
        let goal = Dims::from_row_col(7, 7);

        let result = time_search(Algorithm::AStar, &grid, Dims::ZERO, goal).unwrap();
        assert!(result.found);
        assert_eq!(result.path.last(), Some(&goal));
        assert!(grid.cells().all(|c| !c.visited));
    }

    #[test]
    fn time_search_rejects_out_of_bounds() {
        let grid = Grid::new(2, 2).unwrap();
        assert_eq!(
            time_search(Algorithm::Bfs, &grid, Dims(5, 5), Dims(0, 0)),
            Err(GridError::OutOfBounds(Dims(5, 5)))
        );
        assert_eq!(
            time_search(Algorithm::Dfs, &grid, Dims(0, 0), Dims(-1, 0)),
            Err(GridError::OutOfBounds(Dims(-1, 0)))
        );
    }

    #[test]
    fn compare_rejects_out_of_bounds() {
        let grid = Grid::new(2, 2).unwrap();
        assert_eq!(
            compare(&grid, Dims(0, 0), Dims(0, 2)),
            Err(GridError::OutOfBounds(Dims(0, 2)))
        );
    }
}
