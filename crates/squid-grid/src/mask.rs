//! Boolean grids and their logical operators.

use crate::error::GridError;
use crate::grid::Grid;
use std::ops::Not;

/// A boolean grid, one byte per cell.
///
/// Because each cell is a plain `bool`, [`Grid::get_mut`] and `IndexMut`
/// hand out ordinary `&mut bool` references for single-cell writes.
pub type Mask = Grid<bool>;

impl Grid<bool> {
    /// Cell-wise logical OR.
    pub fn try_or(&self, other: &Self) -> Result<Self, GridError> {
        self.try_zip_with(other, |&a, &b| a || b)
    }

    /// Cell-wise logical AND.
    pub fn try_and(&self, other: &Self) -> Result<Self, GridError> {
        self.try_zip_with(other, |&a, &b| a && b)
    }

    /// Number of `true` cells.
    pub fn count_true(&self) -> usize {
        self.iter().filter(|&&v| v).count()
    }

    /// Returns `true` if at least one cell is set.
    pub fn any(&self) -> bool {
        self.iter().any(|&v| v)
    }

    /// Coordinates of the `true` cells in row-major order.
    pub fn iter_true(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter_map(|(x, y, &v)| if v { Some((x, y)) } else { None })
    }
}

impl Not for &Grid<bool> {
    type Output = Grid<bool>;

    fn not(self) -> Grid<bool> {
        self.map(|&v| !v)
    }
}

impl Not for Grid<bool> {
    type Output = Grid<bool>;

    fn not(mut self) -> Grid<bool> {
        for v in self.as_mut_slice() {
            *v = !*v;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cells_are_false() {
        let mask = Mask::new(10, 10).unwrap();
        assert!(!*mask.get(0, 0).unwrap());
        assert!(!mask.any());
    }

    #[test]
    fn single_cell_write() {
        let mut mask = Mask::new(10, 10).unwrap();
        mask[(0, 0)] = true;
        assert!(mask[(0, 0)]);
        assert_eq!(mask.count_true(), 1);
    }

    #[test]
    fn not_operator() {
        let mut mask = Mask::filled(10, 10, true).unwrap();
        mask[(0, 0)] = false;
        let inverted = !&mask;
        assert!(inverted[(0, 0)]);
        assert!(!inverted[(1, 1)]);
        assert_eq!(!inverted, mask);
    }

    #[test]
    fn or_operator() {
        let mut a = Mask::filled(10, 10, true).unwrap();
        a[(0, 0)] = false;
        a[(1, 1)] = false;
        let mut b = Mask::new(10, 10).unwrap();
        b[(1, 1)] = true;

        let result = a.try_or(&b).unwrap();
        assert!(!result[(0, 0)]);
        assert!(result[(1, 1)]);
        assert!(result[(2, 2)]);
    }

    #[test]
    fn and_operator() {
        let a = Mask::from_rows(vec![vec![true, true, false]]).unwrap();
        let b = Mask::from_rows(vec![vec![true, false, false]]).unwrap();
        assert_eq!(a.try_and(&b).unwrap().as_slice(), &[true, false, false]);
    }

    #[test]
    fn logical_ops_reject_mismatched_shapes() {
        let a = Mask::new(10, 10).unwrap();
        let b = Mask::new(10, 9).unwrap();
        assert_eq!(
            a.try_or(&b),
            Err(GridError::DimensionMismatch {
                left: (10, 10),
                right: (10, 9)
            })
        );
        assert!(a.try_and(&b).is_err());
    }

    #[test]
    fn iter_true_is_row_major() {
        let mut mask = Mask::new(3, 3).unwrap();
        mask[(2, 0)] = true;
        mask[(0, 2)] = true;
        mask[(1, 1)] = true;
        let cells: Vec<_> = mask.iter_true().collect();
        assert_eq!(cells, vec![(2, 0), (1, 1), (0, 2)]);
    }
}
