//! Grid coordinates, moves and cell states.

use std::fmt;

/// A cell coordinate, `(row, col)`, with `(0, 0)` at the top-left.
///
/// Positions order lexicographically by row then column. A* relies on this
/// as its final tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan (L1) distance to `other`.
    pub fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One axis-aligned step.
///
/// The declaration order (east, south, west, north) is the order in which
/// neighbours are enumerated, and the gene encoding used by the GA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    East,
    South,
    West,
    North,
}

impl Move {
    /// All moves in neighbour-enumeration order.
    pub const ALL: [Move; 4] = [Move::East, Move::South, Move::West, Move::North];

    /// Decodes a gene value. Only the low two bits are significant.
    pub fn from_gene(gene: u8) -> Self {
        Self::ALL[(gene & 0b11) as usize]
    }

    /// Encodes this move as a gene in `0..4`.
    pub fn gene(self) -> u8 {
        self as u8
    }

    /// `(d_row, d_col)` for this move.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Move::East => (0, 1),
            Move::South => (1, 0),
            Move::West => (0, -1),
            Move::North => (-1, 0),
        }
    }

    /// Applies the move on an `size`×`size` grid.
    ///
    /// Returns `None` if the step would leave the grid.
    pub fn apply(self, from: Position, size: usize) -> Option<Position> {
        let (dr, dc) = self.delta();
        let row = from.row.checked_add_signed(dr)?;
        let col = from.col.checked_add_signed(dc)?;
        (row < size && col < size).then_some(Position { row, col })
    }
}

/// The rendered state of a cell.
///
/// The grid itself only stores [`Free`](Cell::Free) and [`Wall`](Cell::Wall);
/// exits and the start are overlaid when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Free,
    Wall,
    RealExit,
    DecoyExit,
    Start,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Free => '/',
            Cell::Wall => '#',
            Cell::RealExit => '&',
            Cell::DecoyExit => '?',
            Cell::Start => '0',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '/' => Some(Cell::Free),
            '#' => Some(Cell::Wall),
            '&' => Some(Cell::RealExit),
            '?' => Some(Cell::DecoyExit),
            '0' => Some(Cell::Start),
            _ => None,
        }
    }
}
