//! Benchmark profiles for the squid crates.
//!
//! - [`reference_profile`]: 100x100 perforated sample (10K cells)
//! - [`stress_profile`]: 316x316 perforated sample (~100K cells)
//! - [`perforated_square`]: the generator behind both

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use squid_geometry::shapes::is_rim;
use squid_grid::{GridError, Mask};

/// A square sample inset from the rim and punched with single-cell holes on
/// a regular `pitch`-spaced lattice.
///
/// Every hole is enclosed, so a classification yields one hole per lattice
/// point. Pitch values below 2 produce a solid sample.
pub fn perforated_square(side: usize, pitch: usize) -> Result<Mask, GridError> {
    Mask::from_fn(side, side, |x, y| {
        if is_rim(x, y, side, side) {
            return false;
        }
        // Keep a solid band next to the rim so every hole stays enclosed.
        let inner = x >= 2 && y >= 2 && x + 2 < side && y + 2 < side;
        let punched = pitch >= 2 && inner && x % pitch == 0 && y % pitch == 0;
        !punched
    })
}

/// Reference benchmark profile: 100x100 grid, holes every 4 cells.
pub fn reference_profile() -> Result<Mask, GridError> {
    perforated_square(100, 4)
}

/// Stress benchmark profile: 316x316 grid, holes every 4 cells.
pub fn stress_profile() -> Result<Mask, GridError> {
    perforated_square(316, 4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use squid_geometry::{ExteriorRule, Geometry};

    #[test]
    fn reference_profile_hole_count() {
        let mask = reference_profile().unwrap();
        let g = Geometry::from_occupancy(mask, ExteriorRule::RaySweep).unwrap();
        // Multiples of 4 in [2, 97]: 4, 8, ..., 96.
        assert_eq!(g.hole_count(), 24 * 24);
    }

    #[test]
    fn stress_profile_holes_store_one_cell_each() {
        let mask = stress_profile().unwrap();
        let g = Geometry::from_occupancy(mask, ExteriorRule::RaySweep).unwrap();
        // Multiples of 4 in [2, 313]: 4, 8, ..., 312.
        assert_eq!(g.hole_count(), 78 * 78);
        let stored: usize = g.holes().iter().map(<[_]>::len).sum();
        assert_eq!(stored, g.interior_vacuum().count_true());
        assert_eq!(stored, 78 * 78);
    }

    #[test]
    fn solid_when_pitch_too_small() {
        let mask = perforated_square(10, 1).unwrap();
        assert_eq!(mask.count_true(), 64);
    }
}
