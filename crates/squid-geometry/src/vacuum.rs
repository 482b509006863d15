//! Exterior / interior vacuum classification.

use crate::config::ExteriorRule;
use crate::direction::neighbours;
use crate::shapes::is_rim;
use squid_grid::{GridError, Mask};
use std::collections::VecDeque;

/// Exterior vacuum of `occupancy` under `rule`.
pub fn exterior_vacuum(occupancy: &Mask, rule: ExteriorRule) -> Mask {
    match rule {
        ExteriorRule::RaySweep => ray_sweep(occupancy),
        ExteriorRule::FloodFill => flood_fill(occupancy),
    }
}

/// Vacuum that is neither material nor exterior: `!(exterior | occupancy)`.
pub fn interior_vacuum(occupancy: &Mask, exterior: &Mask) -> Result<Mask, GridError> {
    Ok(!exterior.try_or(occupancy)?)
}

/// Four straight traces per row and column, each marking cells until the
/// first material cell.
fn ray_sweep(occupancy: &Mask) -> Mask {
    let (width, height) = occupancy.shape();
    let mut exterior = occupancy.map(|_| false);

    for y in 0..height {
        trace(&mut exterior, occupancy, (0..width).map(|x| (x, y)));
        trace(&mut exterior, occupancy, (0..width).rev().map(|x| (x, y)));
    }
    for x in 0..width {
        trace(&mut exterior, occupancy, (0..height).map(|y| (x, y)));
        trace(&mut exterior, occupancy, (0..height).rev().map(|y| (x, y)));
    }

    exterior
}

fn trace(exterior: &mut Mask, occupancy: &Mask, ray: impl Iterator<Item = (usize, usize)>) {
    for cell in ray {
        if occupancy[cell] {
            break;
        }
        exterior[cell] = true;
    }
}

/// BFS through vacuum seeded from every vacuum rim cell.
fn flood_fill(occupancy: &Mask) -> Mask {
    let (width, height) = occupancy.shape();
    let mut exterior = occupancy.map(|_| false);
    let mut queue = VecDeque::new();

    for (x, y, &occupied) in occupancy.iter_cells() {
        if !occupied && is_rim(x, y, width, height) {
            exterior[(x, y)] = true;
            queue.push_back((x, y));
        }
    }

    while let Some((x, y)) = queue.pop_front() {
        for n in neighbours(x, y, width, height) {
            if !occupancy[n] && !exterior[n] {
                exterior[n] = true;
                queue.push_back(n);
            }
        }
    }

    exterior
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::inset_square;
    use squid_test_utils::mask_from_art as mask;

    #[test]
    fn square_rim_is_exterior() {
        let occ = inset_square(10, 10).unwrap();
        for rule in [ExteriorRule::RaySweep, ExteriorRule::FloodFill] {
            let ext = exterior_vacuum(&occ, rule);
            assert_eq!(ext.count_true(), 36);
            assert!(ext[(0, 0)]);
            assert!(!ext[(1, 1)]);
            let int = interior_vacuum(&occ, &ext).unwrap();
            assert!(!int.any());
        }
    }

    #[test]
    fn u_opening_is_exterior() {
        let occ = mask(&[
            ".......", //
            ".#...#.",
            ".#...#.",
            ".#####.",
            ".......",
        ]);
        let ext = exterior_vacuum(&occ, ExteriorRule::RaySweep);
        for x in 2..=4 {
            assert!(ext[(x, 1)]);
            assert!(ext[(x, 2)]);
        }
        assert!(!interior_vacuum(&occ, &ext).unwrap().any());
    }

    #[test]
    fn ring_center_is_interior() {
        let occ = mask(&[
            ".....", //
            ".###.",
            ".#.#.",
            ".###.",
            ".....",
        ]);
        for rule in [ExteriorRule::RaySweep, ExteriorRule::FloodFill] {
            let ext = exterior_vacuum(&occ, rule);
            assert!(!ext[(2, 2)]);
            let int = interior_vacuum(&occ, &ext).unwrap();
            assert_eq!(int.iter_true().collect::<Vec<_>>(), vec![(2, 2)]);
        }
    }

    #[test]
    fn bent_pocket_differs_between_rules() {
        let occ = mask(&[
            "......", //
            ".##.#.",
            ".#..#.",
            ".####.",
            "......",
        ]);
        let swept = exterior_vacuum(&occ, ExteriorRule::RaySweep);
        assert!(swept[(3, 2)]);
        assert!(!swept[(2, 2)]);
        assert!(interior_vacuum(&occ, &swept).unwrap()[(2, 2)]);

        let flooded = exterior_vacuum(&occ, ExteriorRule::FloodFill);
        assert!(flooded[(2, 2)]);
        assert!(!interior_vacuum(&occ, &flooded).unwrap().any());
    }

    #[test]
    fn empty_sample_is_all_exterior() {
        let occ = Mask::new(4, 3).unwrap();
        assert_eq!(exterior_vacuum(&occ, ExteriorRule::RaySweep).count_true(), 12);
        assert_eq!(exterior_vacuum(&occ, ExteriorRule::FloodFill).count_true(), 12);
    }
}
