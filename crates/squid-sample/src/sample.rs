//! A [`Sample`]: one owner for a geometry and its lattice state.

use crate::error::SampleError;
use crate::superconductor::Superconductor;
use squid_geometry::Geometry;
use squid_grid::Mask;

/// A superconducting sample: where the material is, and the lattice state
/// living on it. Both always share one grid shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    geometry: Geometry,
    state: Superconductor,
}

impl Sample {
    /// The default square sample with zeroed lattice state.
    pub fn new(width: usize, height: usize) -> Result<Self, SampleError> {
        let state = Superconductor::new(width, height)?;
        let geometry = Geometry::new(width, height)?;
        Ok(Self { geometry, state })
    }

    /// Pair an existing geometry with existing lattice state.
    pub fn from_parts(geometry: Geometry, state: Superconductor) -> Result<Self, SampleError> {
        let geometry_shape = (geometry.width(), geometry.height());
        if geometry_shape != state.shape() {
            return Err(SampleError::ShapeMismatch {
                geometry: geometry_shape,
                state: state.shape(),
            });
        }
        Ok(Self { geometry, state })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.geometry.width()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.geometry.height()
    }

    /// The geometry classification.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Replace the occupancy mask. See [`Geometry::set_geometry`].
    pub fn set_occupancy(&mut self, occupancy: &Mask) -> Result<(), SampleError> {
        self.geometry.set_geometry(occupancy)?;
        tracing::debug!(
            holes = self.geometry.hole_count(),
            "sample occupancy replaced"
        );
        Ok(())
    }

    /// The lattice state.
    pub fn state(&self) -> &Superconductor {
        &self.state
    }

    /// The lattice state, mutably.
    pub fn state_mut(&mut self) -> &mut Superconductor {
        &mut self.state
    }

    /// Split into geometry and lattice state.
    pub fn into_parts(self) -> (Geometry, Superconductor) {
        (self.geometry, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use squid_geometry::GeometryError;
    use squid_grid::Complex64;
    use squid_test_utils::fixtures::ring;

    #[test]
    fn default_sample_shapes_agree() {
        let s = Sample::new(10, 8).unwrap();
        assert_eq!((s.width(), s.height()), (10, 8));
        assert_eq!(s.state().shape(), (10, 8));
        assert!(s.geometry().in_superconductor(1, 1).unwrap());
    }

    #[test]
    fn from_parts_checks_shape() {
        let geometry = Geometry::new(5, 5).unwrap();
        let state = Superconductor::new(5, 6).unwrap();
        assert_eq!(
            Sample::from_parts(geometry.clone(), state),
            Err(SampleError::ShapeMismatch {
                geometry: (5, 5),
                state: (5, 6)
            })
        );
        let ok = Sample::from_parts(geometry, Superconductor::new(5, 5).unwrap()).unwrap();
        let (g, st) = ok.into_parts();
        assert_eq!(g.width(), st.width());
    }

    #[test]
    fn set_occupancy_forwards_errors() {
        let mut s = Sample::new(5, 5).unwrap();
        s.set_occupancy(&ring()).unwrap();
        assert_eq!(s.geometry().in_hole(2, 2).unwrap(), Some(0));

        let mut bad = ring();
        bad[(0, 0)] = true;
        assert_eq!(
            s.set_occupancy(&bad),
            Err(SampleError::Geometry(GeometryError::RimOccupied { x: 0, y: 0 }))
        );
        assert_eq!(s.geometry().occupancy(), &ring());
    }

    #[test]
    fn state_edits_survive_occupancy_change() {
        let mut s = Sample::new(5, 5).unwrap();
        let psi = Complex64::new(0.5, -0.5);
        s.state_mut().order_parameter_mut().set(2, 2, psi).unwrap();
        s.set_occupancy(&ring()).unwrap();
        assert_eq!(s.state().order_parameter()[(2, 2)], psi);
        assert_eq!(s.state().order_parameter()[(1, 1)], Complex64::new(0.0, 0.0));
    }

    #[test]
    fn too_small_for_lattice() {
        assert!(matches!(
            Sample::new(1, 10),
            Err(SampleError::TooSmall { .. })
        ));
    }
}
