use super::{heuristic::euclidean, queue::MinQueue, PathFinder};
use crate::{dims::Dims, grid::Grid};

/// A* with the euclidean heuristic.
///
/// The euclidean distance is at most the manhattan one, which is at most the length of
/// any path through the maze, so the found path is a shortest one.
#[derive(Debug)]
pub struct AStar;

impl PathFinder for AStar {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn search(&self, grid: &mut Grid, start: Dims, goal: Dims) -> bool {
        let mut open = MinQueue::new();
        let estimate = euclidean(start, goal);
        grid[start].distance = 0;
        grid[start].estimated_total_cost = estimate;
        open.push(estimate, start);

        while let Some((_, current)) = open.pop() {
            if current == goal {
                return true;
            }

            let tentative = grid[current].distance + 1;
            for next in grid.neighbors_reachable(current) {
                let cell = &mut grid[next];
                if tentative < cell.distance {
                    cell.distance = tentative;
                    cell.estimated_total_cost = tentative as f64 + euclidean(next, goal);
                    cell.predecessor = Some(current);
                    open.push(cell.estimated_total_cost, next);
                }
            }
        }

        false
    }
}
