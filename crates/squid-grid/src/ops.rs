//! Element-wise arithmetic on numeric grids.
//!
//! Grid-with-grid operations can fail on a shape mismatch, so they are
//! methods returning `Result` ([`Grid::try_add`], [`Grid::try_sub`],
//! [`Grid::try_mul`]). Grid-with-scalar operations cannot fail and are
//! provided through the `std::ops` operators, both by reference (allocating a
//! new grid) and by value (reusing the buffer).

use crate::error::GridError;
use crate::grid::Grid;
use std::ops::{Add, Mul, Sub};

impl<T: Clone + Add<Output = T>> Grid<T> {
    /// Cell-wise `self + other`.
    pub fn try_add(&self, other: &Self) -> Result<Self, GridError> {
        self.try_zip_with(other, |a, b| a.clone() + b.clone())
    }
}

impl<T: Clone + Sub<Output = T>> Grid<T> {
    /// Cell-wise `self - other`.
    pub fn try_sub(&self, other: &Self) -> Result<Self, GridError> {
        self.try_zip_with(other, |a, b| a.clone() - b.clone())
    }
}

impl<T: Clone + Mul<Output = T>> Grid<T> {
    /// Cell-wise (Hadamard) product `self * other`.
    pub fn try_mul(&self, other: &Self) -> Result<Self, GridError> {
        self.try_zip_with(other, |a, b| a.clone() * b.clone())
    }
}

macro_rules! scalar_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Clone + $trait<Output = T>> $trait<T> for &Grid<T> {
            type Output = Grid<T>;

            fn $method(self, rhs: T) -> Grid<T> {
                self.map(|v| v.clone() $op rhs.clone())
            }
        }

        impl<T: Clone + $trait<Output = T>> $trait<T> for Grid<T> {
            type Output = Grid<T>;

            fn $method(mut self, rhs: T) -> Grid<T> {
                for v in self.as_mut_slice() {
                    *v = v.clone() $op rhs.clone();
                }
                self
            }
        }
    };
}

scalar_op!(Add, add, +);
scalar_op!(Sub, sub, -);
scalar_op!(Mul, mul, *);
