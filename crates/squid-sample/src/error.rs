//! Error types for sample construction.

use squid_geometry::GeometryError;
use squid_grid::GridError;
use std::error::Error;
use std::fmt;

/// Errors from building a [`Superconductor`](crate::Superconductor) or a
/// [`Sample`](crate::Sample).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SampleError {
    /// The lattice needs at least one bond per axis (`width, height >= 2`).
    TooSmall {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// Geometry and lattice state disagree on the grid shape.
    ShapeMismatch {
        /// `(width, height)` of the geometry.
        geometry: (usize, usize),
        /// `(width, height)` of the lattice state.
        state: (usize, usize),
    },
    /// Building a field failed.
    Grid(GridError),
    /// Building the geometry failed.
    Geometry(GeometryError),
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { width, height } => {
                write!(f, "lattice {width}x{height} too small: both sides must be >= 2")
            }
            Self::ShapeMismatch { geometry, state } => write!(
                f,
                "geometry is {}x{} but lattice state is {}x{}",
                geometry.0, geometry.1, state.0, state.1
            ),
            Self::Grid(e) => write!(f, "grid error: {e}"),
            Self::Geometry(e) => write!(f, "geometry error: {e}"),
        }
    }
}

impl Error for SampleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Geometry(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SampleError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<GeometryError> for SampleError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}
