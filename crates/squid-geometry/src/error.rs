//! Error types for geometry classification.

use squid_grid::GridError;
use std::error::Error;
use std::fmt;

/// Errors from constructing or updating a [`Geometry`](crate::Geometry).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// The occupancy mask does not have the geometry's shape.
    ShapeMismatch {
        /// `(width, height)` of the geometry.
        expected: (usize, usize),
        /// `(width, height)` of the rejected mask.
        actual: (usize, usize),
    },
    /// Material was placed on the outer rim of the grid.
    RimOccupied {
        /// x coordinate of the first occupied rim cell (row-major).
        x: usize,
        /// y coordinate of the first occupied rim cell (row-major).
        y: usize,
    },
    /// An underlying grid operation failed (bad dimensions, or a query
    /// outside the grid).
    Grid(GridError),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, actual } => write!(
                f,
                "occupancy shape {}x{} does not match geometry shape {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            Self::RimOccupied { x, y } => {
                write!(f, "superconductor touches the outer rim at ({x}, {y})")
            }
            Self::Grid(e) => write!(f, "grid error: {e}"),
        }
    }
}

impl Error for GeometryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for GeometryError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
