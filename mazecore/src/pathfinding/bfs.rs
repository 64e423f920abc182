use std::collections::VecDeque;

use super::PathFinder;
use crate::{dims::Dims, grid::Grid};

/// Breadth-first search, shortest path in steps.
#[derive(Debug)]
pub struct BreadthFirst;

impl PathFinder for BreadthFirst {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn search(&self, grid: &mut Grid, start: Dims, goal: Dims) -> bool {
        let mut queue = VecDeque::new();
        grid[start].distance = 0;
        grid[start].visited = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if current == goal {
                return true;
            }

            let distance = grid[current].distance + 1;
            for next in grid.neighbors_reachable(current) {
                let cell = &mut grid[next];
                if cell.visited {
                    continue;
                }

                cell.visited = true;
                cell.distance = distance;
                cell.predecessor = Some(current);
                queue.push_back(next);
            }
        }

        false
    }
}
