//! Cardinal directions and integer grid coordinates
//!
//! Up increases `y`, Right increases `x`. Every enumeration of neighbours in
//! the crate follows [`Direction::ALL`], which fixes selection tie-breaks.

use std::fmt;

/// One of the four grid-adjacent directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards `y + 1`
    Up,
    /// Towards `x + 1`
    Right,
    /// Towards `y - 1`
    Down,
    /// Towards `x - 1`
    Left,
}

impl Direction {
    /// All directions in enumeration order
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Position of this direction within [`Direction::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }

    /// The direction pointing back
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Unit offset as `(dx, dy)`
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Self::Up => (0, 1),
            Self::Right => (1, 0),
            Self::Down => (0, -1),
            Self::Left => (-1, 0),
        }
    }

    /// Single-letter label used by the catalog text format
    pub const fn letter(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Right => 'R',
            Self::Down => 'D',
            Self::Left => 'L',
        }
    }
}

/// Integer cell coordinate, `0 <= x < width`, `0 <= y < height`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column
    pub x: usize,
    /// Row, counted upwards
    pub y: usize,
}

impl Coord {
    /// Create a coordinate
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Step one cell in `direction`, returning `None` when leaving `width x height`
    pub fn step(self, direction: Direction, width: usize, height: usize) -> Option<Self> {
        let (dx, dy) = direction.offset();
        let x = self.x.checked_add_signed(dx as isize)?;
        let y = self.y.checked_add_signed(dy as isize)?;
        (x < width && y < height).then_some(Self { x, y })
    }

    /// In-bounds neighbours paired with the direction leading to them
    pub fn neighbors(
        self,
        width: usize,
        height: usize,
    ) -> impl Iterator<Item = (Direction, Self)> {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(dir, width, height).map(|c| (dir, c)))
    }

    /// Manhattan distance to another coordinate
    pub const fn manhattan(self, other: Self) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
