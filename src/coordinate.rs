//! Grid coordinates: letter row (`A`-`J`) plus column number (`1`-`10`).
//!
//! A `Coordinate` is always on the board. Text that names a cell off the
//! grid, or is not a coordinate at all, is rejected when parsed, so every
//! board operation taking a `Coordinate` is infallible with respect to bounds.

use core::fmt;
use core::str::FromStr;
use rand::Rng;

use crate::common::BoardError;
use crate::config::{BOARD_SIZE, ROW_LABELS};
use crate::vessel::Orientation;

/// Zero-based (row, col) address into the grid.
///
/// Serialized as its canonical text (`"C4"`), and deserialized through
/// [`Coordinate::parse`], so off-grid input is rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "String", into = "String"))]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Build from zero-based indices.
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::InvalidCoordinate);
        }
        Ok(Coordinate {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Parse the textual form, e.g. `"C4"` or `"j10"`.
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let mut chars = text.chars();
        let letter = chars
            .next()
            .ok_or(BoardError::InvalidCoordinate)?
            .to_ascii_uppercase();
        let row = ROW_LABELS
            .iter()
            .position(|&l| l == letter)
            .ok_or(BoardError::InvalidCoordinate)?;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BoardError::InvalidCoordinate);
        }
        let number: usize = digits.parse().map_err(|_| BoardError::InvalidCoordinate)?;
        if number == 0 {
            return Err(BoardError::InvalidCoordinate);
        }
        Coordinate::new(row, number - 1)
    }

    /// A cell drawn uniformly from the whole grid.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Coordinate {
            row: rng.random_range(0..BOARD_SIZE as u8),
            col: rng.random_range(0..BOARD_SIZE as u8),
        }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// The cell `steps` cells away along `orientation`, or `None` past the edge.
    pub fn offset(&self, orientation: Orientation, steps: usize) -> Option<Self> {
        let (row, col) = match orientation {
            Orientation::Horizontal => (self.row(), self.col().checked_add(steps)?),
            Orientation::Vertical => (self.row().checked_add(steps)?, self.col()),
        };
        Coordinate::new(row, col).ok()
    }

    /// Every cell on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|row| {
            (0..BOARD_SIZE).map(move |col| Coordinate {
                row: row as u8,
                col: col as u8,
            })
        })
    }
}

impl FromStr for Coordinate {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::parse(s)
    }
}

#[cfg(feature = "std")]
impl TryFrom<String> for Coordinate {
    type Error = BoardError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Coordinate::parse(&text)
    }
}

#[cfg(feature = "std")]
impl From<Coordinate> for String {
    fn from(c: Coordinate) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ROW_LABELS[self.row()], self.col() + 1)
    }
}
