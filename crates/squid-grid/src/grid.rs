//! The dense 2D [`Grid`] container.

use crate::error::GridError;
use std::ops::{Index, IndexMut};

/// A dense `width × height` grid of values addressed by `(x, y)`.
///
/// Cells are stored in a single row-major buffer (`index = y * width + x`).
/// Every cell always holds a value; [`Grid::new`] initializes them to
/// `T::default()` (`0`, `0.0`, `false`, ...).
///
/// Clones are deep. The [`Default`] grid is the empty `0 × 0` grid, which is
/// also what [`Grid::take`] leaves behind.
///
/// # Examples
///
/// ```
/// use squid_grid::{Grid, GridError};
///
/// let mut grid: Grid<f64> = Grid::new(10, 20).unwrap();
/// assert_eq!(grid.shape(), (10, 20));
/// assert_eq!(*grid.get(0, 0).unwrap(), 0.0);
///
/// grid.set(3, 4, 1.5).unwrap();
/// assert_eq!(grid[(3, 4)], 1.5);
///
/// assert!(matches!(grid.get(10, 0), Err(GridError::OutOfRange { .. })));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        }
    }
}

impl<T: Clone + Default> Grid<T> {
    /// Create a grid with every cell set to `T::default()`.
    ///
    /// Returns `Err(GridError::InvalidDimensions)` if either dimension is 0,
    /// and `Err(GridError::TooLarge)` if `width * height` cells cannot be
    /// allocated.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Self::filled(width, height, T::default())
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Result<Self, GridError> {
        let len = check_dimensions::<T>(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![value; len],
        })
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Apply `f` to every cell, producing a grid of the same shape.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(&mut f).collect(),
        }
    }
}

impl<T> Grid<T> {
    /// Create a grid whose cell `(x, y)` is `f(x, y)`.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Result<Self, GridError> {
        let len = check_dimensions::<T>(width, height)?;
        let mut cells = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from rows, where `rows[y][x]` becomes cell `(x, y)`.
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        check_dimensions::<T>(width, height)?;
        if rows.iter().any(|row| row.len() != width) {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` only for the empty `0 × 0` grid.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `(x, y)` addresses a cell of this grid.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if !self.contains(x, y) {
            return Err(GridError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    /// Shared reference to the cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<&T, GridError> {
        let i = self.offset(x, y)?;
        Ok(&self.cells[i])
    }

    /// Exclusive reference to the cell at `(x, y)`.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Result<&mut T, GridError> {
        let i = self.offset(x, y)?;
        Ok(&mut self.cells[i])
    }

    /// Overwrite the cell at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<(), GridError> {
        *self.get_mut(x, y)? = value;
        Ok(())
    }

    /// The row-major cell buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// The row-major cell buffer, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Iterate over cell values in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Iterate over `(x, y, &value)` in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (i % width, i / width, v))
    }

    /// Move the contents out, leaving `self` as the empty `0 × 0` grid.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Fail with [`GridError::DimensionMismatch`] unless both grids have the
    /// same shape.
    pub fn check_same_shape<U>(&self, other: &Grid<U>) -> Result<(), GridError> {
        if self.shape() != other.shape() {
            return Err(GridError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    /// Combine two same-shaped grids cell by cell.
    pub fn try_zip_with<U, V>(
        &self,
        other: &Grid<U>,
        mut f: impl FnMut(&T, &U) -> V,
    ) -> Result<Grid<V>, GridError> {
        self.check_same_shape(other)?;
        Ok(Grid {
            width: self.width,
            height: self.height,
            cells: self
                .cells
                .iter()
                .zip(other.cells.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
        })
    }
}

/// Panics if `(x, y)` is out of range, like slice indexing.
impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        assert!(
            self.contains(x, y),
            "grid index ({x}, {y}) out of range for {}x{} grid",
            self.width,
            self.height
        );
        &self.cells[y * self.width + x]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        assert!(
            self.contains(x, y),
            "grid index ({x}, {y}) out of range for {}x{} grid",
            self.width,
            self.height
        );
        &mut self.cells[y * self.width + x]
    }
}

/// Validate a requested shape and return its cell count.
fn check_dimensions<T>(width: usize, height: usize) -> Result<usize, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimensions { width, height });
    }
    let len = width
        .checked_mul(height)
        .ok_or(GridError::TooLarge { width, height })?;
    // Vec cannot hold more than isize::MAX bytes.
    let bytes = len.checked_mul(std::mem::size_of::<T>().max(1));
    match bytes {
        Some(b) if b <= isize::MAX as usize => Ok(len),
        _ => Err(GridError::TooLarge { width, height }),
    }
}
