//! Square types and cell notation conversion.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::{NotationFault, SquareError};

/// Number of ranks and files on the board.
pub const BOARD_SIZE: usize = 8;

/// Returns true if `(row, col)` lies on the board.
#[inline]
#[must_use]
pub const fn in_bounds(row: isize, col: isize) -> bool {
    row >= 0 && row < BOARD_SIZE as isize && col >= 0 && col < BOARD_SIZE as isize
}

/// Parse cell notation such as `"D5"` or `"d5"` into a square.
pub fn parse_cell(text: &str) -> Result<Square, SquareError> {
    let invalid = |fault| SquareError::InvalidNotation {
        notation: text.to_string(),
        fault,
    };

    let chars: Vec<char> = text.chars().collect();
    if chars.len() != 2 {
        return Err(invalid(NotationFault::BadLength { len: chars.len() }));
    }

    let file_char = chars[0].to_ascii_uppercase();
    let col = match file_char {
        'A'..='H' => file_char as isize - 'A' as isize,
        _ => return Err(invalid(NotationFault::BadColumn { found: file_char })),
    };

    let row = match chars[1] {
        '1'..='8' => chars[1] as isize - '1' as isize,
        other => return Err(invalid(NotationFault::BadRow { found: other })),
    };

    Square::try_from((row, col))
}

/// Format a raw `(row, col)` pair as uppercase cell notation.
pub fn format_cell(row: isize, col: isize) -> Result<String, SquareError> {
    Square::try_from((row, col)).map(|sq| sq.to_string())
}

/// A square on the board, as (row, col) with row 0 = rank 1 and col 0 = file A.
///
/// Always in bounds: the only ways to build one check the range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(isize, isize)", into = "(isize, isize)"))]
pub struct Square(usize, usize);

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Get the row (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Get the column (0-7, where 0 = file A)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Uppercase file letter, `'A'..='H'`
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        (b'A' + self.1 as u8) as char
    }

    /// Rank digit, `'1'..='8'`
    #[inline]
    #[must_use]
    pub const fn rank_char(self) -> char {
        (b'1' + self.0 as u8) as char
    }

    /// Translate by `(dr, dc)`, or `None` if that leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.0 as isize + dr;
        let col = self.1 as isize + dc;
        if in_bounds(row, col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares, A1, A2, ..., H8
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|col| (0..BOARD_SIZE).map(move |row| Square(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // File first, so sorted squares read the same as sorted notation
        (self.1, self.0).cmp(&(other.1, other.0))
    }
}

impl TryFrom<(isize, isize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (isize, isize)) -> Result<Self, Self::Error> {
        if !in_bounds(row, col) {
            return Err(SquareError::OutOfBounds { row, col });
        }
        Ok(Square(row as usize, col as usize))
    }
}

impl From<Square> for (isize, isize) {
    fn from(sq: Square) -> Self {
        (sq.0 as isize, sq.1 as isize)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cell(s)
    }
}
