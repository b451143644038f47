//! Error types for cell notation and piece construction.

use std::fmt;

/// Why a cell string failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotationFault {
    /// Cell must be exactly two characters
    BadLength { len: usize },
    /// File letter outside A-H (reported uppercased)
    BadColumn { found: char },
    /// Rank character is not a digit in 1-8
    BadRow { found: char },
}

/// Error type for square parsing and formatting failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Malformed cell text
    InvalidNotation {
        notation: String,
        fault: NotationFault,
    },
    /// Row or column outside 0-7
    OutOfBounds { row: isize, col: isize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation, fault } => match fault {
                NotationFault::BadLength { .. } => write!(
                    f,
                    "Invalid cell string format: {notation}. Expected a 2-character string (e.g., 'A1')."
                ),
                NotationFault::BadColumn { found } => {
                    write!(f, "Invalid column '{found}' in cell '{notation}'. Must be A-H.")
                }
                NotationFault::BadRow { found } => {
                    write!(f, "Invalid row '{found}' in cell '{notation}'. Must be 1-8.")
                }
            },
            SquareError::OutOfBounds { row, col } => {
                write!(f, "Coordinates ({row}, {col}) are out of board bounds.")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for piece type resolution and piece construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceError {
    /// Starting cell could not be parsed
    InvalidPosition { input: String, source: SquareError },
    /// Piece type name not in the supported set
    UnknownPieceType {
        name: String,
        supported: &'static [&'static str],
    },
}

impl fmt::Display for PieceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceError::InvalidPosition { input, source } => {
                write!(f, "Invalid starting position '{input}': {source}")
            }
            PieceError::UnknownPieceType { name, supported } => write!(
                f,
                "Unknown chess piece type: '{name}'. Supported types are {}.",
                supported.join(", ")
            ),
        }
    }
}

impl std::error::Error for PieceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PieceError::InvalidPosition { source, .. } => Some(source),
            PieceError::UnknownPieceType { .. } => None,
        }
    }
}
