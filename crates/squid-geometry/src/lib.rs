//! Geometry classification for superconducting samples.
//!
//! A [`Geometry`] takes an occupancy [`Mask`](squid_grid::Mask) (true where
//! there is superconductor) and partitions the grid into:
//!
//! - **Boundaries**: material cells with vacuum on a given side, one mask
//!   per [`Direction`]
//! - **Exterior vacuum**: vacuum reachable from the outer rim, under the
//!   configured [`ExteriorRule`]
//! - **Interior vacuum**: all remaining vacuum, split into numbered holes
//!
//! The outer rim must stay vacuum; [`Geometry::set_geometry`] rejects masks
//! that violate this and leaves the previous classification in place.
//!
//! Field solvers query the result per cell ([`Geometry::on_boundary`],
//! [`Geometry::on_exterior_vacuum`], [`Geometry::in_hole`], ...). Every
//! query is a single lookup.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod config;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod holes;
pub mod shapes;
pub mod vacuum;

pub use boundary::Boundaries;
pub use config::{ExteriorRule, GeometryConfig};
pub use direction::Direction;
pub use error::GeometryError;
pub use geometry::{CellKind, Geometry};
pub use holes::Holes;
