use std::{io, time::Duration};

use mazecore::{
    array::Array2D,
    grid::{CellWall, Grid},
    Dims, SearchResult,
};

/// Marks of the path cells, looked up while drawing.
struct PathCells(Array2D<bool>);

impl PathCells {
    fn new(size: Dims, path: &[Dims]) -> Self {
        let mut marks = Array2D::new(false, size.0 as usize, size.1 as usize);
        for &pos in path {
            if let Some(mark) = marks.get_mut(pos) {
                *mark = true;
            }
        }
        Self(marks)
    }

    fn contains(&self, pos: Dims) -> bool {
        self.0.get(pos).copied().unwrap_or(false)
    }
}

pub fn micros(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1e6
}

/// ASCII view of the maze, `S` and `G` mark the endpoints and `*` the path.
pub fn draw_maze(grid: &Grid, start: Dims, goal: Dims, path: &[Dims]) -> String {
    let path = PathCells::new(grid.size(), path);
    let mut out = String::new();

    out.push('+');
    out.push_str(&"---+".repeat(grid.cols()));
    out.push('\n');

    for row in 0..grid.rows() as i32 {
        let mut middle = String::from("|");
        let mut bottom = String::from("+");

        for col in 0..grid.cols() as i32 {
            let pos = Dims::from_row_col(row, col);
            let cell = &grid[pos];

            let mark = if pos == start {
                'S'
            } else if pos == goal {
                'G'
            } else if path.contains(pos) {
                '*'
            } else {
                ' '
            };
            middle.push(' ');
            middle.push(mark);
            middle.push(' ');
            middle.push(if cell.get_wall(CellWall::Right) { '|' } else { ' ' });

            bottom.push_str(if cell.get_wall(CellWall::Bottom) {
                "---"
            } else {
                "   "
            });
            bottom.push('+');
        }

        out.push_str(&middle);
        out.push('\n');
        out.push_str(&bottom);
        out.push('\n');
    }

    out
}

pub fn write_single(out: &mut impl io::Write, result: &SearchResult) -> io::Result<()> {
    if !result.found {
        return writeln!(out, "No path found for {}", result.label());
    }

    writeln!(out, "Algorithm: {}", result.label())?;
    writeln!(out, "Path length: {}", result.path.len())?;
    writeln!(out, "Time: {:.2} us", micros(result.elapsed))
}

pub fn write_comparison(out: &mut impl io::Write, results: &[SearchResult]) -> io::Result<()> {
    writeln!(out, "Comparison results:")?;
    for (rank, result) in results.iter().enumerate() {
        if result.found {
            writeln!(
                out,
                "{}. {} - Time: {:.2} us (path length {})",
                rank + 1,
                result.label(),
                micros(result.elapsed),
                result.path.len()
            )?;
        } else {
            writeln!(out, "{}. {} - no path found", rank + 1, result.label())?;
        }
    }
    Ok(())
}
