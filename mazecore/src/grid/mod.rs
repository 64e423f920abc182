pub mod cell;
pub use cell::{Cell, CellWall, Walls, UNREACHABLE};

use std::ops;

use smallvec::SmallVec;
use thiserror::Error;

use crate::{array::Array2D, dims::Dims};

pub type Neighbors = SmallVec<[Dims; 4]>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid size {rows}x{cols}, both dimensions must be positive")]
    InvalidSize { rows: usize, cols: usize },
    #[error("position {0} is outside of the grid")]
    OutOfBounds(Dims),
}

/// Fixed size rectangular grid of [`Cell`]s, row-major.
#[derive(Debug)]
pub struct Grid {
    cells: Array2D<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 || rows > i32::MAX as usize || cols > i32::MAX as usize {
            return Err(GridError::InvalidSize { rows, cols });
        }

        let mut cells = Array2D::new(Cell::new(Dims::ZERO), cols, rows);
        for pos in Dims::iter_fill(Dims::ZERO, cells.size()) {
            cells[pos] = Cell::new(pos);
        }

        Ok(Grid { cells })
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn rows(&self) -> usize {
        self.size().1 as usize
    }

    pub fn cols(&self) -> usize {
        self.size().0 as usize
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    pub fn is_valid_neighbor(&self, cell: Dims, off: Dims) -> bool {
        off.abs_sum() == 1 && self.is_in_bounds(cell) && self.is_in_bounds(cell + off)
    }

    /// Returns the wall of `cell` facing `cell2`, `None` if they are not adjacent.
    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        match (cell2.0 - cell.0, cell2.1 - cell.1) {
            (1, 0) => Some(CellWall::Right),
            (-1, 0) => Some(CellWall::Left),
            (0, 1) => Some(CellWall::Bottom),
            (0, -1) => Some(CellWall::Top),
            _ => None,
        }
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn get_cell_mut(&mut self, pos: Dims) -> Option<&mut Cell> {
        self.cells.get_mut(pos)
    }

    pub fn cell(&self, pos: Dims) -> Result<&Cell, GridError> {
        self.get_cell(pos).ok_or(GridError::OutOfBounds(pos))
    }

    pub fn cell_mut(&mut self, pos: Dims) -> Result<&mut Cell, GridError> {
        self.get_cell_mut(pos).ok_or(GridError::OutOfBounds(pos))
    }

    pub fn check_bounds(&self, pos: Dims) -> Result<(), GridError> {
        self.cell(pos).map(|_| ())
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// In-bound orthogonal neighbors, walls are ignored.
    pub fn neighbors_geometric(&self, cell: Dims) -> Neighbors {
        CellWall::get_in_order()
            .into_iter()
            .map(|wall| wall.to_coord())
            .filter(|&off| self.is_valid_neighbor(cell, off))
            .map(|off| cell + off)
            .collect()
    }

    /// Orthogonal neighbors with no wall in between.
    pub fn neighbors_reachable(&self, cell: Dims) -> Neighbors {
        let Some(current) = self.get_cell(cell) else {
            return Neighbors::new();
        };

        CellWall::get_in_order()
            .into_iter()
            .filter(|&wall| !current.get_wall(wall))
            .map(|wall| cell + wall.to_coord())
            .filter(|&pos| self.is_in_bounds(pos))
            .collect()
    }

    /// Removes the wall shared by two adjacent cells.
    ///
    /// # Panics
    /// If the cells are not adjacent or either is out of bounds.
    pub fn open_edge(&mut self, a: Dims, b: Dims) {
        assert!(
            self.is_in_bounds(a) && self.is_in_bounds(b),
            "cannot open edge between {a:?} and {b:?}, out of bounds"
        );
        let Some(wall) = Self::which_wall_between(a, b) else {
            panic!("cannot open edge between non-adjacent cells {a:?} and {b:?}");
        };

        self.cells[a].remove_wall(wall);
        self.cells[b].remove_wall(wall.reverse_wall());
    }

    /// Number of open edges, each shared wall counted once.
    pub fn open_edge_count(&self) -> usize {
        self.cells
            .iter_pos()
            .map(|pos| {
                [CellWall::Right, CellWall::Bottom]
                    .into_iter()
                    .filter(|&wall| {
                        self.is_in_bounds(pos + wall.to_coord()) && !self.cells[pos].get_wall(wall)
                    })
                    .count()
            })
            .sum()
    }

    /// Every cell is reachable from (0, 0) through open edges.
    pub fn is_connected(&self) -> bool {
        let mut seen = Array2D::new(false, self.cols(), self.rows());
        let mut stack = vec![Dims::ZERO];
        seen[Dims::ZERO] = true;
        let mut count = 1;

        while let Some(pos) = stack.pop() {
            for next in self.neighbors_reachable(pos) {
                if !seen[next] {
                    seen[next] = true;
                    count += 1;
                    stack.push(next);
                }
            }
        }

        count == self.cell_count()
    }

    pub fn reset_search_state(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset_search_state);
    }
}

impl ops::Index<Dims> for Grid {
    type Output = Cell;

    fn index(&self, index: Dims) -> &Self::Output {
        &self.cells[index]
    }
}

impl ops::IndexMut<Dims> for Grid {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        &mut self.cells[index]
    }
}

impl Clone for Grid {
    /// Copies the walls, search state of the clone starts fresh.
    fn clone(&self) -> Self {
        let mut cells = self.cells.clone();
        cells.iter_mut().for_each(Cell::reset_search_state);
        Grid { cells }
    }
}
