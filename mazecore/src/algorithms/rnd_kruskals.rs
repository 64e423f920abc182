use hashbrown::HashSet;
use rand::seq::SliceRandom as _;

use super::{MazeGenerator, Random};
use crate::{
    array::Array2D,
    dims::Dims,
    grid::{CellWall, Grid},
};

use CellWall::*;

/// Randomized Kruskal's: shuffled walls, joined whenever they separate two sets.
#[derive(Debug)]
pub struct RndKruskals;

impl MazeGenerator for RndKruskals {
    fn generate(&self, grid: &mut Grid, rng: &mut Random) {
        let size = grid.size();

        let mut walls: Vec<(Dims, CellWall)> = Vec::new();
        let mut sets: Vec<HashSet<Dims>> = Vec::with_capacity(grid.cell_count());
        let mut set_of = Array2D::new(0usize, size.0 as usize, size.1 as usize);
        for pos in Dims::iter_fill(Dims::ZERO, size) {
            if grid.is_in_bounds(pos + Right.to_coord()) {
                walls.push((pos, Right));
            }

            if grid.is_in_bounds(pos + Bottom.to_coord()) {
                walls.push((pos, Bottom));
            }

            set_of[pos] = sets.len();
            sets.push(Some(pos).into_iter().collect());
        }

        walls.shuffle(rng);
        while let Some((from, wall)) = walls.pop() {
            let to = from + wall.to_coord();

            let (from_set, to_set) = (set_of[from], set_of[to]);
            if from_set == to_set {
                continue;
            }

            grid.open_edge(from, to);

            // merge the smaller set into the bigger one
            let (keep, merged) = if sets[from_set].len() >= sets[to_set].len() {
                (from_set, to_set)
            } else {
                (to_set, from_set)
            };
            let moved = std::mem::take(&mut sets[merged]);
            for &pos in moved.iter() {
                set_of[pos] = keep;
            }
            sets[keep].extend(moved);
        }
    }
}
