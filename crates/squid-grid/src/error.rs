//! Error types for grid construction, access, and element-wise operations.

use std::error::Error;
use std::fmt;

/// Errors arising from grid construction, cell access, or combining grids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with a zero width or height, or
    /// from ragged rows.
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// The requested cell count does not fit in one allocation.
    TooLarge {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// A coordinate lies outside the grid.
    OutOfRange {
        /// Requested x coordinate.
        x: usize,
        /// Requested y coordinate.
        y: usize,
        /// Width of the grid that was accessed.
        width: usize,
        /// Height of the grid that was accessed.
        height: usize,
    },
    /// Two grids of different shapes were combined element-wise.
    DimensionMismatch {
        /// `(width, height)` of the left operand.
        left: (usize, usize),
        /// `(width, height)` of the right operand.
        right: (usize, usize),
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {width}x{height}: both must be >= 1")
            }
            Self::TooLarge { width, height } => {
                write!(f, "grid dimensions {width}x{height} exceed addressable memory")
            }
            Self::OutOfRange {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "coordinate ({x}, {y}) out of range: [0, {width}) x [0, {height})"
                )
            }
            Self::DimensionMismatch { left, right } => {
                write!(
                    f,
                    "dimension mismatch: {}x{} vs {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
        }
    }
}

impl Error for GridError {}
