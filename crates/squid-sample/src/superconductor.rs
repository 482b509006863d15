//! Complex lattice state on a staggered grid.

use crate::error::SampleError;
use squid_grid::Field;

/// Lattice variables of a superconductor on a `width × height` grid.
///
/// The four fields live on different parts of the lattice and so have
/// different shapes:
///
/// | Field | Lives on | Shape |
/// |-------|----------|-------|
/// | order parameter ψ | sites | `width × height` |
/// | link variable U_x | horizontal bonds | `(width − 1) × height` |
/// | link variable U_y | vertical bonds | `width × (height − 1)` |
/// | flux-cell phasor | plaquettes | `(width − 1) × (height − 1)` |
///
/// All fields start at zero. Clones are deep.
#[derive(Clone, Debug, PartialEq)]
pub struct Superconductor {
    order_parameter: Field,
    link_x: Field,
    link_y: Field,
    flux_cell_phasor: Field,
}

impl Superconductor {
    /// Allocate zeroed lattice state.
    ///
    /// Returns `Err(SampleError::TooSmall)` unless both sides are >= 2.
    pub fn new(width: usize, height: usize) -> Result<Self, SampleError> {
        if width < 2 || height < 2 {
            return Err(SampleError::TooSmall { width, height });
        }
        Ok(Self {
            order_parameter: Field::new(width, height)?,
            link_x: Field::new(width - 1, height)?,
            link_y: Field::new(width, height - 1)?,
            flux_cell_phasor: Field::new(width - 1, height - 1)?,
        })
    }

    /// Number of lattice sites along x.
    pub fn width(&self) -> usize {
        self.order_parameter.width()
    }

    /// Number of lattice sites along y.
    pub fn height(&self) -> usize {
        self.order_parameter.height()
    }

    /// `(width, height)` of the site lattice.
    pub fn shape(&self) -> (usize, usize) {
        self.order_parameter.shape()
    }

    /// Order parameter ψ, one value per site.
    pub fn order_parameter(&self) -> &Field {
        &self.order_parameter
    }

    /// Order parameter ψ, mutably.
    pub fn order_parameter_mut(&mut self) -> &mut Field {
        &mut self.order_parameter
    }

    /// Link variable along x, one value per horizontal bond.
    pub fn link_variable_x(&self) -> &Field {
        &self.link_x
    }

    /// Link variable along x, mutably.
    pub fn link_variable_x_mut(&mut self) -> &mut Field {
        &mut self.link_x
    }

    /// Link variable along y, one value per vertical bond.
    pub fn link_variable_y(&self) -> &Field {
        &self.link_y
    }

    /// Link variable along y, mutably.
    pub fn link_variable_y_mut(&mut self) -> &mut Field {
        &mut self.link_y
    }

    /// Flux-cell phasor, one value per plaquette.
    pub fn flux_cell_phasor(&self) -> &Field {
        &self.flux_cell_phasor
    }

    /// Flux-cell phasor, mutably.
    pub fn flux_cell_phasor_mut(&mut self) -> &mut Field {
        &mut self.flux_cell_phasor
    }
}
