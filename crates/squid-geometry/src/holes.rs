//! Connected-component labeling of interior vacuum into holes.

use crate::direction::neighbours;
use squid_grid::{Grid, Mask};
use std::collections::VecDeque;

/// Holes of an interior-vacuum mask.
///
/// Each hole is one 4-connected component of the mask. Holes are numbered
/// in the order a row-major scan (`y` outer, `x` inner) first meets them,
/// so the numbering is stable for a given mask.
///
/// The label grid answers per-cell membership. Each hole also keeps its own
/// cell list, so storage grows with the number of interior cells rather than
/// with the number of holes times the grid size. Full-size masks are built
/// on request by [`mask`](Self::mask).
#[derive(Clone, Debug, PartialEq)]
pub struct Holes {
    labels: Grid<Option<usize>>,
    cells: Vec<Vec<(usize, usize)>>,
}

impl Holes {
    /// Label the components of `interior`.
    pub fn label(interior: &Mask) -> Self {
        let (width, height) = interior.shape();
        let mut labels: Grid<Option<usize>> = interior.map(|_| None);
        let mut cells = Vec::new();
        let mut queue = VecDeque::new();

        for (x, y) in interior.iter_true() {
            if labels[(x, y)].is_some() {
                continue;
            }
            let index = cells.len();
            let mut hole = Vec::new();

            labels[(x, y)] = Some(index);
            queue.push_back((x, y));
            while let Some(cell) = queue.pop_front() {
                hole.push(cell);
                for n in neighbours(cell.0, cell.1, width, height) {
                    if interior[n] && labels[n].is_none() {
                        labels[n] = Some(index);
                        queue.push_back(n);
                    }
                }
            }

            // BFS order is not row-major once a hole bends.
            hole.sort_unstable_by_key(|&(x, y)| (y, x));
            tracing::trace!(index, size = hole.len(), seed_x = x, seed_y = y, "hole labeled");
            cells.push(hole);
        }

        Self { labels, cells }
    }

    /// Per-cell hole index grid.
    pub fn labels(&self) -> &Grid<Option<usize>> {
        &self.labels
    }

    /// Cells of hole `index` in row-major order, or `None` if there is no
    /// such hole.
    pub fn cells(&self, index: usize) -> Option<&[(usize, usize)]> {
        self.cells.get(index).map(Vec::as_slice)
    }

    /// Iterate over every hole's cells, in index order.
    pub fn iter(&self) -> impl Iterator<Item = &[(usize, usize)]> + '_ {
        self.cells.iter().map(Vec::as_slice)
    }

    /// A full-size mask of hole `index`, or `None` if there is no such hole.
    pub fn mask(&self, index: usize) -> Option<Mask> {
        let cells = self.cells.get(index)?;
        let mut mask = self.labels.map(|_| false);
        for &cell in cells {
            mask[cell] = true;
        }
        Some(mask)
    }

    /// Number of holes.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if there are no holes.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
