use rand::seq::SliceRandom as _;
use smallvec::SmallVec;

use super::{MazeGenerator, Random};
use crate::{dims::Dims, grid::Grid};

/// Randomized iterative backtracker, carving from the top-left cell.
#[derive(Debug)]
pub struct RandomBacktracker;

impl MazeGenerator for RandomBacktracker {
    fn generate(&self, grid: &mut Grid, rng: &mut Random) {
        let mut stack = Vec::with_capacity(grid.cell_count());
        let mut carved = 0usize;

        let mut current = Dims::ZERO;
        grid[current].visited = true;

        loop {
            let unvisited_neighbors = grid
                .neighbors_geometric(current)
                .into_iter()
                .filter(|&pos| !grid[pos].visited)
                .collect::<SmallVec<[_; 4]>>();

            if let Some(&next) = unvisited_neighbors.choose(rng) {
                stack.push(current);
                grid.open_edge(current, next);
                grid[next].visited = true;
                current = next;
                carved += 1;
            } else if let Some(prev) = stack.pop() {
                current = prev;
            } else {
                break;
            }
        }

        grid.reset_search_state();
        log::trace!("Backtracker carved {} passages", carved);
    }
}
