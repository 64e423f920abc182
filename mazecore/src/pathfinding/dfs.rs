use super::PathFinder;
use crate::{dims::Dims, grid::Grid};

/// Depth-first search. Finds some path, not necessarily the shortest one.
#[derive(Debug)]
pub struct DepthFirst;

impl PathFinder for DepthFirst {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn search(&self, grid: &mut Grid, start: Dims, goal: Dims) -> bool {
        let mut stack = vec![start];
        grid[start].distance = 0;
        grid[start].visited = true;

        while let Some(current) = stack.pop() {
            if current == goal {
                return true;
            }

            let distance = grid[current].distance + 1;
            for next in grid.neighbors_reachable(current) {
                let cell = &mut grid[next];
                if cell.visited {
                    continue;
                }

                // marked on push, so every cell enters the stack at most once
                cell.visited = true;
                cell.distance = distance;
                cell.predecessor = Some(current);
                stack.push(next);
            }
        }

        false
    }
}
