//! Squid: discretized superconducting samples for SQUID simulations.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! squid sub-crates. For most users, adding `squid` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use squid::prelude::*;
//!
//! // A 7x7 grid holding a ring of superconductor around one vacuum cell.
//! let mut occupancy = Mask::new(7, 7).unwrap();
//! for i in 2..=4 {
//!     occupancy[(i, 2)] = true;
//!     occupancy[(i, 4)] = true;
//!     occupancy[(2, i)] = true;
//!     occupancy[(4, i)] = true;
//! }
//!
//! let mut geometry = Geometry::new(7, 7).unwrap();
//! geometry.set_geometry(&occupancy).unwrap();
//!
//! assert!(geometry.on_interior_vacuum(3, 3).unwrap());
//! assert_eq!(geometry.in_hole(3, 3).unwrap(), Some(0));
//! assert!(geometry.on_exterior_vacuum(1, 1).unwrap());
//! assert!(geometry.on_boundary(Direction::North, 3, 2).unwrap());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `squid-grid` | `Grid<T>`, `Mask`, `Field`, `RealField`, element-wise ops |
//! | [`geometry`] | `squid-geometry` | Boundary, exterior/interior vacuum, and hole classification |
//! | [`sample`] | `squid-sample` | Superconductor lattice state and `Sample` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Dense 2D grids (`squid-grid`).
///
/// [`grid::Grid`] is the single generic container; [`grid::Mask`],
/// [`grid::RealField`], and [`grid::Field`] are its named instantiations.
pub use squid_grid as grid;

/// Geometry classification (`squid-geometry`).
///
/// [`geometry::Geometry`] owns the occupancy mask and every grid derived
/// from it; [`geometry::ExteriorRule`] selects how exterior vacuum is found.
pub use squid_geometry as geometry;

/// Superconductor lattice state (`squid-sample`).
pub use squid_sample as sample;

/// Common imports for typical squid usage.
///
/// ```rust
/// use squid::prelude::*;
/// ```
pub mod prelude {
    // Grids
    pub use squid_grid::{Complex64, Field, Grid, Mask, RealField};

    // Geometry
    pub use squid_geometry::{CellKind, Direction, ExteriorRule, Geometry, GeometryConfig};

    // Sample
    pub use squid_sample::{Sample, Superconductor};

    // Errors
    pub use squid_geometry::GeometryError;
    pub use squid_grid::GridError;
    pub use squid_sample::SampleError;
}
