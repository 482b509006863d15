//! Reusable occupancy fixtures.
//!
//! Every fixture keeps the outer rim empty.
//!
//! - [`u_shape`]: concave sample whose opening faces the rim.
//! - [`ring`]: closed loop around a single vacuum cell.
//! - [`two_rings`]: two separate single-cell holes.
//! - [`nested_rings`]: an annular hole around an island that encloses a
//!   second hole.
//! - [`bent_pocket`]: vacuum reachable from the rim only along a bent path.
//! - [`scattered`]: deterministic pseudo-random sample of any size.

use crate::mask_from_art;
use squid_grid::Mask;

/// 7x5: a "U" opening towards `y = 0`. The opening `(2..=4, 1..=2)` is
/// exterior vacuum.
pub fn u_shape() -> Mask {
    mask_from_art(&[
        ".......", //
        ".#...#.",
        ".#...#.",
        ".#####.",
        ".......",
    ])
}

/// 5x5: a ring whose single enclosed cell `(2, 2)` is interior vacuum.
pub fn ring() -> Mask {
    mask_from_art(&[
        ".....", //
        ".###.",
        ".#.#.",
        ".###.",
        ".....",
    ])
}

/// 9x5: two rings; holes at `(2, 2)` (index 0) and `(6, 2)` (index 1).
pub fn two_rings() -> Mask {
    mask_from_art(&[
        ".........", //
        ".###.###.",
        ".#.#.#.#.",
        ".###.###.",
        ".........",
    ])
}

/// 9x9: an outer ring enclosing a 16-cell annular hole (index 0) around a
/// small ring whose centre `(4, 4)` is a second hole (index 1).
pub fn nested_rings() -> Mask {
    mask_from_art(&[
        ".........", //
        ".#######.",
        ".#.....#.",
        ".#.###.#.",
        ".#.#.#.#.",
        ".#.###.#.",
        ".#.....#.",
        ".#######.",
        ".........",
    ])
}

/// 6x5: `(2, 2)` is blocked in all four straight directions but joins the
/// rim through `(3, 2)` and the column above it.
pub fn bent_pocket() -> Mask {
    mask_from_art(&[
        "......", //
        ".##.#.",
        ".#..#.",
        ".####.",
        "......",
    ])
}

/// A `width x height` sample with roughly `density_percent` of its interior
/// cells set, chosen by a fixed multiplicative hash of `(x, y, seed)`.
pub fn scattered(width: usize, height: usize, seed: u64, density_percent: u64) -> Mask {
    Mask::from_fn(width, height, |x, y| {
        if x == 0 || y == 0 || x + 1 == width || y + 1 == height {
            return false;
        }
        let h = (x as u64)
            .wrapping_mul(6364136223846793007)
            .wrapping_add((y as u64).wrapping_mul(1442695040888963407))
            .wrapping_add(seed.wrapping_mul(2862933555777941757));
        (h >> 33) % 100 < density_percent
    })
    .expect("scattered fixture needs non-zero dimensions")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rim_clear(mask: &Mask) -> bool {
        let (w, h) = mask.shape();
        mask.iter_true()
            .all(|(x, y)| x > 0 && y > 0 && x + 1 < w && y + 1 < h)
    }

    #[test]
    fn fixtures_keep_rim_clear() {
        for m in [u_shape(), ring(), two_rings(), nested_rings(), bent_pocket()] {
            assert!(rim_clear(&m));
        }
        assert!(rim_clear(&scattered(20, 15, 7, 60)));
    }

    #[test]
    fn scattered_is_deterministic() {
        assert_eq!(scattered(16, 16, 3, 50), scattered(16, 16, 3, 50));
        assert!(!scattered(16, 16, 3, 0).any());
        assert_eq!(scattered(16, 16, 3, 100).count_true(), 14 * 14);
    }
}
