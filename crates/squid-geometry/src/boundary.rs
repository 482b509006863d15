//! Directional boundary flags on the material side of a material/vacuum edge.

use crate::direction::Direction;
use squid_grid::Mask;

/// The four directional boundary masks of an occupancy grid.
///
/// `get(d)` is true at occupied cells whose neighbour in direction `d` is
/// vacuum. A fully surrounded material cell carries no flags; a material
/// corner carries two.
#[derive(Clone, Debug, PartialEq)]
pub struct Boundaries {
    masks: [Mask; 4],
}

impl Boundaries {
    /// Compute boundary flags for `occupancy`.
    ///
    /// Only interior cells are visited: the rim is required to be vacuum, so
    /// every material cell has all four neighbours in bounds.
    pub fn compute(occupancy: &Mask) -> Self {
        let (width, height) = occupancy.shape();
        let blank = occupancy.map(|_| false);
        let mut masks = [blank.clone(), blank.clone(), blank.clone(), blank];

        for y in 1..height.saturating_sub(1) {
            for x in 1..width.saturating_sub(1) {
                if !occupancy[(x, y)] {
                    continue;
                }
                for d in Direction::ALL {
                    let facing_vacuum = match d.step(x, y, width, height) {
                        Some(n) => !occupancy[n],
                        None => true,
                    };
                    if facing_vacuum {
                        masks[d.index()][(x, y)] = true;
                    }
                }
            }
        }

        Self { masks }
    }

    /// The boundary mask for `direction`.
    pub fn get(&self, direction: Direction) -> &Mask {
        &self.masks[direction.index()]
    }

    /// Union of all four directions: material cells touching vacuum.
    pub fn any_direction(&self) -> Mask {
        let [north, south, east, west] = &self.masks;
        let mut out = north.clone();
        for mask in [south, east, west] {
            for (o, &v) in out.as_mut_slice().iter_mut().zip(mask.iter()) {
                *o |= v;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::inset_square;

    #[test]
    fn square_corners_have_two_flags() {
        let b = Boundaries::compute(&inset_square(10, 10).unwrap());

        assert!(b.get(Direction::West)[(1, 1)]);
        assert!(b.get(Direction::South)[(1, 1)]);
        assert!(!b.get(Direction::North)[(1, 1)]);
        assert!(!b.get(Direction::East)[(1, 1)]);

        assert!(b.get(Direction::North)[(8, 8)]);
        assert!(b.get(Direction::East)[(8, 8)]);
        assert!(!b.get(Direction::South)[(8, 8)]);
        assert!(!b.get(Direction::West)[(8, 8)]);
    }

    #[test]
    fn bulk_cells_have_no_flags() {
        let b = Boundaries::compute(&inset_square(10, 10).unwrap());
        for d in Direction::ALL {
            assert!(!b.get(d)[(4, 4)]);
        }
        // Each side of the 8x8 square has 8 flagged cells.
        for d in Direction::ALL {
            assert_eq!(b.get(d).count_true(), 8);
        }
        assert_eq!(b.any_direction().count_true(), 28);
    }

    #[test]
    fn flags_live_on_material_side() {
        let b = Boundaries::compute(&inset_square(5, 5).unwrap());
        for d in Direction::ALL {
            assert!(!b.get(d)[(0, 0)]);
            assert!(!b.get(d)[(0, 2)]);
        }
    }

    #[test]
    fn single_cell_has_all_four() {
        let b = Boundaries::compute(&inset_square(3, 3).unwrap());
        for d in Direction::ALL {
            assert!(b.get(d)[(1, 1)]);
        }
    }
}
