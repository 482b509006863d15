//! Superconductor lattice state for squid simulations.
//!
//! [`Superconductor`] holds the complex lattice variables a field solver
//! evolves (order parameter, link variables, flux-cell phasor), each on its
//! own staggered grid. [`Sample`] pairs that state with the
//! [`Geometry`](squid_geometry::Geometry) that says where the material is.
//!
//! No time stepping lives here; this crate only owns and shapes the data.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod sample;
pub mod superconductor;

pub use error::SampleError;
pub use sample::Sample;
pub use superconductor::Superconductor;
