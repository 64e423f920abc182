use crate::{dims::Dims, grid::Grid};

/// Follows predecessors back from `goal`.
///
/// The returned path excludes the start cell and ends with `goal`. It's empty when `goal`
/// has no predecessor, which is the case when it wasn't reached or is the start itself.
pub fn reconstruct_path(grid: &Grid, goal: Dims) -> Vec<Dims> {
    let mut path = Vec::new();
    let mut current = goal;

    while let Some(prev) = grid.get_cell(current).and_then(|cell| cell.predecessor) {
        path.push(current);
        if path.len() > grid.cell_count() {
            log::warn!("Predecessor chain from {} loops, dropping the path", goal);
            return Vec::new();
        }
        current = prev;
    }

    path.reverse();
    path
}
