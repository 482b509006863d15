//! Axis-aligned lattice directions.

use smallvec::SmallVec;

/// One of the four axis-aligned directions on the lattice.
///
/// North is `+y`, south is `-y`, east is `+x`, west is `-x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `+y`.
    North,
    /// `-y`.
    South,
    /// `+x`.
    East,
    /// `-x`.
    West,
}

impl Direction {
    /// All four directions, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// `(dx, dy)` of a single step in this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (0, 1),
            Self::South => (0, -1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Position of this direction in [`Direction::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
        }
    }

    /// The neighbour of `(x, y)` in this direction, or `None` if it would
    /// leave a `width × height` grid.
    pub fn step(self, x: usize, y: usize, width: usize, height: usize) -> Option<(usize, usize)> {
        let (dx, dy) = self.offset();
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < width && ny < height).then_some((nx, ny))
    }
}

/// In-bounds 4-connected neighbours of `(x, y)`.
pub(crate) fn neighbours(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> SmallVec<[(usize, usize); 4]> {
    Direction::ALL
        .iter()
        .filter_map(|d| d.step(x, y, width, height))
        .collect()
}
