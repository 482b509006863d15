//! The [`Geometry`] classifier: occupancy plus every grid derived from it.

use crate::boundary::Boundaries;
use crate::config::{ExteriorRule, GeometryConfig};
use crate::direction::Direction;
use crate::error::GeometryError;
use crate::holes::Holes;
use crate::shapes::{first_rim_cell, inset_square};
use crate::vacuum::{exterior_vacuum, interior_vacuum};
use squid_grid::Mask;

/// What occupies a single cell. The three kinds partition the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Superconducting material.
    Superconductor,
    /// Vacuum reachable from the outer rim.
    ExteriorVacuum,
    /// Vacuum enclosed by material.
    InteriorVacuum,
}

/// Everything derived from one occupancy mask. Built in full before it is
/// installed, so a [`Geometry`] never exposes a half-classified state.
#[derive(Clone, Debug, PartialEq)]
struct Classification {
    boundaries: Boundaries,
    exterior: Mask,
    interior: Mask,
    holes: Holes,
}

impl Classification {
    fn compute(occupancy: &Mask, rule: ExteriorRule) -> Result<Self, GeometryError> {
        let boundaries = Boundaries::compute(occupancy);
        let exterior = exterior_vacuum(occupancy, rule);
        let interior = interior_vacuum(occupancy, &exterior)?;
        let holes = Holes::label(&interior);
        Ok(Self {
            boundaries,
            exterior,
            interior,
            holes,
        })
    }
}

/// A discretized superconducting sample on a rectangular grid.
///
/// Owns the occupancy mask (true where there is superconductor) and the grids
/// derived from it: four directional boundary masks, exterior and interior
/// vacuum, and the hole decomposition of the interior vacuum. The derived
/// grids are recomputed wholesale by [`set_geometry`](Self::set_geometry);
/// per-cell queries are plain lookups.
///
/// The outer rim must always be vacuum, so every piece of material is
/// surrounded on all four sides by in-bounds cells.
///
/// # Examples
///
/// ```
/// use squid_geometry::{Direction, Geometry};
///
/// let geometry = Geometry::new(10, 10).unwrap();
/// assert!(geometry.in_superconductor(1, 1).unwrap());
/// assert!(!geometry.in_superconductor(0, 0).unwrap());
/// assert!(geometry.on_boundary(Direction::West, 1, 1).unwrap());
/// assert!(geometry.on_exterior_vacuum(0, 0).unwrap());
/// assert_eq!(geometry.in_hole(0, 0).unwrap(), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    occupancy: Mask,
    rule: ExteriorRule,
    classes: Classification,
}

impl Geometry {
    /// A `width × height` geometry holding the default square sample, inset
    /// one cell from the rim.
    pub fn new(width: usize, height: usize) -> Result<Self, GeometryError> {
        Self::with_config(GeometryConfig::new(width, height))
    }

    /// Build the default square sample with an explicit configuration.
    pub fn with_config(config: GeometryConfig) -> Result<Self, GeometryError> {
        config.validate()?;
        let occupancy = inset_square(config.width, config.height)?;
        Self::build(occupancy, config.exterior)
    }

    /// Build a geometry directly from an occupancy mask.
    ///
    /// Fails with [`GeometryError::RimOccupied`] if material touches the rim.
    pub fn from_occupancy(occupancy: Mask, rule: ExteriorRule) -> Result<Self, GeometryError> {
        if occupancy.is_empty() {
            return Err(squid_grid::GridError::InvalidDimensions {
                width: occupancy.width(),
                height: occupancy.height(),
            }
            .into());
        }
        check_rim(&occupancy)?;
        Self::build(occupancy, rule)
    }

    fn build(occupancy: Mask, rule: ExteriorRule) -> Result<Self, GeometryError> {
        let classes = Classification::compute(&occupancy, rule)?;
        let geometry = Self {
            occupancy,
            rule,
            classes,
        };
        geometry.log_classification();
        Ok(geometry)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.occupancy.width()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.occupancy.height()
    }

    /// The exterior rule used for classification.
    pub fn exterior_rule(&self) -> ExteriorRule {
        self.rule
    }

    /// Replace the occupancy mask and reclassify every derived grid.
    ///
    /// On error nothing changes: the mask is checked for shape and rim
    /// emptiness and the new classification is built before anything is
    /// replaced.
    pub fn set_geometry(&mut self, occupancy: &Mask) -> Result<(), GeometryError> {
        if occupancy.shape() != self.occupancy.shape() {
            tracing::warn!(
                expected_width = self.width(),
                expected_height = self.height(),
                width = occupancy.width(),
                height = occupancy.height(),
                "rejected occupancy with wrong shape"
            );
            return Err(GeometryError::ShapeMismatch {
                expected: self.occupancy.shape(),
                actual: occupancy.shape(),
            });
        }
        check_rim(occupancy)?;

        let classes = Classification::compute(occupancy, self.rule)?;
        self.occupancy = occupancy.clone();
        self.classes = classes;
        self.log_classification();
        Ok(())
    }

    /// Switch the exterior rule and reclassify the current occupancy.
    pub fn set_exterior_rule(&mut self, rule: ExteriorRule) -> Result<(), GeometryError> {
        if rule == self.rule {
            return Ok(());
        }
        self.classes = Classification::compute(&self.occupancy, rule)?;
        self.rule = rule;
        self.log_classification();
        Ok(())
    }

    fn log_classification(&self) {
        tracing::debug!(
            width = self.width(),
            height = self.height(),
            rule = ?self.rule,
            superconducting = self.occupancy.count_true(),
            exterior = self.classes.exterior.count_true(),
            interior = self.classes.interior.count_true(),
            holes = self.classes.holes.len(),
            "geometry classified"
        );
    }

    // ── Per-cell queries ──────────────────────────────────────────

    /// Is `(x, y)` superconducting material?
    pub fn in_superconductor(&self, x: usize, y: usize) -> Result<bool, GeometryError> {
        Ok(*self.occupancy.get(x, y)?)
    }

    /// Is `(x, y)` material whose neighbour in `direction` is vacuum?
    pub fn on_boundary(
        &self,
        direction: Direction,
        x: usize,
        y: usize,
    ) -> Result<bool, GeometryError> {
        Ok(*self.classes.boundaries.get(direction).get(x, y)?)
    }

    /// Material with vacuum to the north (`+y`).
    pub fn on_northern_boundary(&self, x: usize, y: usize) -> Result<bool, GeometryError> {
        self.on_boundary(Direction::North, x, y)
    }

    /// Material with vacuum to the south (`-y`).
    pub fn on_southern_boundary(&self, x: usize, y: usize) -> Result<bool, GeometryError> {
        self.on_boundary(Direction::South, x, y)
    }

    /// Material with vacuum to the east (`+x`).
    pub fn on_eastern_boundary(&self, x: usize, y: usize) -> Result<bool, GeometryError> {
        self.on_boundary(Direction::East, x, y)
    }

    /// Material with vacuum to the west (`-x`).
    pub fn on_western_boundary(&self, x: usize, y: usize) -> Result<bool, GeometryError> {
        self.on_boundary(Direction::West, x, y)
    }

    /// Is `(x, y)` vacuum reachable from the rim?
    pub fn on_exterior_vacuum(&self, x: usize, y: usize) -> Result<bool, GeometryError> {
        Ok(*self.classes.exterior.get(x, y)?)
    }

    /// Is `(x, y)` enclosed vacuum?
    pub fn on_interior_vacuum(&self, x: usize, y: usize) -> Result<bool, GeometryError> {
        Ok(*self.classes.interior.get(x, y)?)
    }

    /// Index of the hole containing `(x, y)`, or `None` if the cell is not
    /// interior vacuum.
    pub fn in_hole(&self, x: usize, y: usize) -> Result<Option<usize>, GeometryError> {
        Ok(*self.classes.holes.labels().get(x, y)?)
    }

    /// Classify a single cell.
    pub fn cell_kind(&self, x: usize, y: usize) -> Result<CellKind, GeometryError> {
        if self.in_superconductor(x, y)? {
            Ok(CellKind::Superconductor)
        } else if self.on_exterior_vacuum(x, y)? {
            Ok(CellKind::ExteriorVacuum)
        } else {
            Ok(CellKind::InteriorVacuum)
        }
    }

    // ── Derived grids ─────────────────────────────────────────────

    /// The occupancy mask.
    pub fn occupancy(&self) -> &Mask {
        &self.occupancy
    }

    /// The boundary mask for `direction`.
    pub fn boundary(&self, direction: Direction) -> &Mask {
        self.classes.boundaries.get(direction)
    }

    /// All four boundary masks.
    pub fn boundaries(&self) -> &Boundaries {
        &self.classes.boundaries
    }

    /// Exterior vacuum mask.
    pub fn exterior_vacuum(&self) -> &Mask {
        &self.classes.exterior
    }

    /// Interior vacuum mask.
    pub fn interior_vacuum(&self) -> &Mask {
        &self.classes.interior
    }

    /// The hole decomposition of the interior vacuum.
    pub fn holes(&self) -> &Holes {
        &self.classes.holes
    }

    /// A full-size mask of hole `index`, or `None` if there is no such hole.
    pub fn hole_mask(&self, index: usize) -> Option<Mask> {
        self.classes.holes.mask(index)
    }

    /// Number of holes.
    pub fn hole_count(&self) -> usize {
        self.classes.holes.len()
    }
}

fn check_rim(occupancy: &Mask) -> Result<(), GeometryError> {
    if let Some((x, y)) = first_rim_cell(occupancy) {
        tracing::warn!(x, y, "rejected occupancy touching the rim");
        return Err(GeometryError::RimOccupied { x, y });
    }
    Ok(())
}
