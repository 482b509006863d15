//! Geometry configuration and validation.

use crate::error::GeometryError;
use squid_grid::GridError;

// ── ExteriorRule ───────────────────────────────────────────────────

/// How vacuum cells are judged to be reachable from the outer rim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExteriorRule {
    /// A vacuum cell is exterior iff a straight row or column ray from the
    /// rim reaches it without crossing material. Concave openings such as
    /// the inside of a "U" are exterior, but a pocket reachable only along
    /// a bent path is reported as interior.
    #[default]
    RaySweep,
    /// A vacuum cell is exterior iff it is 4-connected to the rim through
    /// vacuum. Strict topological reachability: differs from
    /// [`RaySweep`](ExteriorRule::RaySweep) exactly on bent-path pockets.
    FloodFill,
}

// ── GeometryConfig ─────────────────────────────────────────────────

/// Construction parameters for a [`Geometry`](crate::Geometry).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeometryConfig {
    /// Number of columns. Must be >= 1.
    pub width: usize,
    /// Number of rows. Must be >= 1.
    pub height: usize,
    /// Exterior-vacuum rule. Default: [`ExteriorRule::RaySweep`].
    pub exterior: ExteriorRule,
}

impl GeometryConfig {
    /// A `width × height` configuration with the default exterior rule.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            exterior: ExteriorRule::default(),
        }
    }

    /// Replace the exterior rule.
    pub fn with_exterior(mut self, exterior: ExteriorRule) -> Self {
        self.exterior = exterior;
        self
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::InvalidDimensions {
                width: self.width,
                height: self.height,
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rule_is_ray_sweep() {
        assert_eq!(GeometryConfig::new(4, 4).exterior, ExteriorRule::RaySweep);
        assert_eq!(
            GeometryConfig::new(4, 4)
                .with_exterior(ExteriorRule::FloodFill)
                .exterior,
            ExteriorRule::FloodFill
        );
    }

    #[test]
    fn validate_rejects_zero_dimensions() {
        assert!(GeometryConfig::new(1, 1).validate().is_ok());
        assert_eq!(
            GeometryConfig::new(0, 5).validate(),
            Err(GeometryError::Grid(GridError::InvalidDimensions {
                width: 0,
                height: 5
            }))
        );
        assert!(GeometryConfig::new(5, 0).validate().is_err());
    }
}
