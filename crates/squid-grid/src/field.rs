//! Named numeric grid instantiations.

use crate::error::GridError;
use crate::grid::Grid;
use num_complex::Complex64;

/// A complex-valued grid (order parameter, link variables, phasors).
pub type Field = Grid<Complex64>;

/// A real-valued grid.
pub type RealField = Grid<f64>;

impl Grid<f64> {
    /// Largest `|self - other|` over all cells.
    ///
    /// Returns `0.0` for empty grids.
    pub fn max_abs_diff(&self, other: &Self) -> Result<f64, GridError> {
        self.check_same_shape(other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max))
    }
}

impl Grid<Complex64> {
    /// Largest complex modulus `|self - other|` over all cells.
    pub fn max_norm_diff(&self, other: &Self) -> Result<f64, GridError> {
        self.check_same_shape(other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| (a - b).norm())
            .fold(0.0, f64::max))
    }

    /// Cell-wise complex modulus.
    pub fn norm(&self) -> RealField {
        self.map(|v| v.norm())
    }

    /// Cell-wise complex conjugate.
    pub fn conj(&self) -> Self {
        self.map(|v| v.conj())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complex_field_defaults_to_zero() {
        let field = Field::new(10, 20).unwrap();
        assert_eq!(field[(0, 0)], Complex64::new(0.0, 0.0));
        assert_eq!(field.shape(), (10, 20));
    }

    #[test]
    fn max_abs_diff_picks_largest() {
        let a = RealField::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = RealField::from_rows(vec![vec![1.5, 2.0], vec![0.0, 4.0]]).unwrap();
        assert_eq!(a.max_abs_diff(&b).unwrap(), 3.0);
        assert!(a.max_abs_diff(&RealField::new(1, 1).unwrap()).is_err());
    }

    #[test]
    fn norm_and_conj() {
        let field = Field::filled(2, 2, Complex64::new(3.0, 4.0)).unwrap();
        assert_eq!(field.norm()[(1, 1)], 5.0);
        assert_eq!(field.conj()[(0, 1)], Complex64::new(3.0, -4.0));
        assert_eq!(field.max_norm_diff(&field.conj()).unwrap(), 8.0);
    }
}
