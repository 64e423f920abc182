use super::{queue::MinQueue, PathFinder};
use crate::{dims::Dims, grid::Grid};

/// Dijkstra's algorithm over unit edges.
///
/// There is no settled set: a cell is pushed again every time its distance strictly improves,
/// stale entries are simply expanded again.
#[derive(Debug)]
pub struct Dijkstra;

impl PathFinder for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn search(&self, grid: &mut Grid, start: Dims, goal: Dims) -> bool {
        let mut queue = MinQueue::new();
        grid[start].distance = 0;
        queue.push(0.0, start);

        while let Some((_, current)) = queue.pop() {
            if current == goal {
                return true;
            }

            let tentative = grid[current].distance + 1;
            for next in grid.neighbors_reachable(current) {
                let cell = &mut grid[next];
                if tentative < cell.distance {
                    cell.distance = tentative;
                    cell.predecessor = Some(current);
                    queue.push(tentative as f64, next);
                }
            }
        }

        false
    }
}
