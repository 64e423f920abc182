use crate::dims::Dims;

/// Distance of a cell not yet reached by a search.
pub const UNREACHABLE: u32 = u32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellWall {
    Top,
    Right,
    Bottom,
    Left,
}

impl CellWall {
    pub fn to_coord(self) -> Dims {
        match self {
            Self::Top => Dims(0, -1),
            Self::Right => Dims(1, 0),
            Self::Bottom => Dims(0, 1),
            Self::Left => Dims(-1, 0),
        }
    }

    pub fn reverse_wall(self) -> CellWall {
        use CellWall::*;

        match self {
            Top => Bottom,
            Right => Left,
            Bottom => Top,
            Left => Right,
        }
    }

    /// Order in which neighbors are enumerated.
    pub fn get_in_order() -> [CellWall; 4] {
        use CellWall::*;
        [Top, Bottom, Left, Right]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Walls {
    pub const CLOSED: Walls = Walls {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };

    pub fn get(&self, wall: CellWall) -> bool {
        match wall {
            CellWall::Top => self.top,
            CellWall::Right => self.right,
            CellWall::Bottom => self.bottom,
            CellWall::Left => self.left,
        }
    }

    fn get_mut(&mut self, wall: CellWall) -> &mut bool {
        match wall {
            CellWall::Top => &mut self.top,
            CellWall::Right => &mut self.right,
            CellWall::Bottom => &mut self.bottom,
            CellWall::Left => &mut self.left,
        }
    }

    pub fn count(&self) -> usize {
        [self.top, self.right, self.bottom, self.left]
            .into_iter()
            .filter(|&w| w)
            .count()
    }
}

impl Default for Walls {
    fn default() -> Self {
        Self::CLOSED
    }
}

/// Single cell of the [`Grid`](super::Grid).
///
/// Besides its walls, a cell carries the bookkeeping of the last search run over the grid.
/// The predecessor is stored as a coordinate, so cells never reference each other.
#[derive(Debug, Clone)]
pub struct Cell {
    coord: Dims,
    walls: Walls,
    pub visited: bool,
    pub distance: u32,
    pub predecessor: Option<Dims>,
    /// Used only by A*.
    pub estimated_total_cost: f64,
}

impl Cell {
    pub fn new(coord: Dims) -> Cell {
        Cell {
            coord,
            walls: Walls::CLOSED,
            visited: false,
            distance: UNREACHABLE,
            predecessor: None,
            estimated_total_cost: 0.0,
        }
    }

    pub(crate) fn remove_wall(&mut self, wall: CellWall) {
        *self.walls.get_mut(wall) = false;
    }

    pub fn get_wall(&self, wall: CellWall) -> bool {
        self.walls.get(wall)
    }

    pub fn walls(&self) -> Walls {
        self.walls
    }

    /// All four walls are still standing.
    pub fn is_untouched(&self) -> bool {
        self.walls.count() == 4
    }

    pub fn get_coord(&self) -> Dims {
        self.coord
    }

    pub fn row(&self) -> i32 {
        self.coord.row()
    }

    pub fn col(&self) -> i32 {
        self.coord.col()
    }

    pub fn reset_search_state(&mut self) {
        self.visited = false;
        self.distance = UNREACHABLE;
        self.predecessor = None;
        self.estimated_total_cost = 0.0;
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_closed() {
        let cell = Cell::new(Dims(1, 2));
        assert!(cell.is_untouched());
        assert_eq!(cell.distance, UNREACHABLE);
        assert_eq!(cell.predecessor, None);
        assert!(!cell.visited);
    }

    #[test]
    fn walls_reverse() {
        for wall in CellWall::get_in_order() {
            assert_eq!(wall.reverse_wall().reverse_wall(), wall);
            assert_eq!(wall.to_coord(), -wall.reverse_wall().to_coord());
        }
    }
}
