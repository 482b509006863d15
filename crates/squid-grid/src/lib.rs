//! Dense 2D grids for squid simulations.
//!
//! This is the leaf crate with zero internal dependencies. It provides a
//! single generic container, [`Grid`], and its named instantiations:
//!
//! - [`Mask`]: `Grid<bool>`, with logical NOT / OR / AND
//! - [`RealField`]: `Grid<f64>`
//! - [`Field`]: `Grid<Complex64>`, for complex lattice quantities
//!
//! Numeric grids support element-wise `+`, `-`, `*`. Combining two grids
//! checks their shapes and fails with [`GridError::DimensionMismatch`];
//! combining a grid with a scalar always succeeds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod grid;
pub mod mask;
mod ops;

pub use error::GridError;
pub use field::{Field, RealField};
pub use grid::Grid;
pub use mask::Mask;
pub use num_complex::Complex64;
