use crate::dims::Dims;

/// Straight-line distance between two grid coordinates.
#[inline]
pub fn euclidean(a: Dims, b: Dims) -> f64 {
    let (dx, dy) = ((a.0 - b.0) as f64, (a.1 - b.1) as f64);
    (dx * dx + dy * dy).sqrt()
}

/// Grid-step (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Dims, b: Dims) -> u32 {
    (a - b).abs_sum() as u32
}
