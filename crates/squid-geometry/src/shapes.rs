//! Occupancy-mask helpers: the default sample and rim checks.

use squid_grid::{GridError, Mask};

/// Returns `true` if `(x, y)` lies on the outermost ring of a
/// `width × height` grid.
pub fn is_rim(x: usize, y: usize, width: usize, height: usize) -> bool {
    x == 0 || y == 0 || x + 1 == width || y + 1 == height
}

/// The first occupied rim cell of `occupancy` in row-major order.
pub fn first_rim_cell(occupancy: &Mask) -> Option<(usize, usize)> {
    let (width, height) = occupancy.shape();
    occupancy
        .iter_true()
        .find(|&(x, y)| is_rim(x, y, width, height))
}

/// A square sample filling every cell except the rim.
///
/// Grids narrower or shorter than 3 cells have no interior, so the result
/// is all vacuum.
pub fn inset_square(width: usize, height: usize) -> Result<Mask, GridError> {
    Mask::from_fn(width, height, |x, y| !is_rim(x, y, width, height))
}
