//! Piece kinds and placed pieces.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::{parse_cell, Square};
use crate::board::error::PieceError;

/// Signature shared by the per-kind constructors.
pub type PieceConstructor = fn(&str) -> Result<Piece, PieceError>;

/// The piece types this crate generates moves for.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    King,
    Queen,
}

impl PieceKind {
    /// All supported kinds
    pub const ALL: [PieceKind; 3] = [PieceKind::Pawn, PieceKind::King, PieceKind::Queen];

    /// Display names of the supported kinds, in `ALL` order
    pub const NAMES: [&'static str; 3] = ["Pawn", "King", "Queen"];

    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
        }
    }

    /// Constructor for a piece of this kind.
    #[must_use]
    pub const fn constructor(self) -> PieceConstructor {
        match self {
            PieceKind::Pawn => Piece::pawn,
            PieceKind::King => Piece::king,
            PieceKind::Queen => Piece::queen,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceKind {
    type Err = PieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PieceError::UnknownPieceType {
                name: s.to_string(),
                supported: &PieceKind::NAMES,
            })
    }
}

/// A single piece standing on an otherwise empty board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn(Square),
    King(Square),
    Queen(Square),
}

impl Piece {
    /// Place a piece of `kind` on an already validated square.
    #[must_use]
    pub const fn on(kind: PieceKind, square: Square) -> Self {
        match kind {
            PieceKind::Pawn => Piece::Pawn(square),
            PieceKind::King => Piece::King(square),
            PieceKind::Queen => Piece::Queen(square),
        }
    }

    pub fn pawn(start: &str) -> Result<Self, PieceError> {
        Self::from_cell(PieceKind::Pawn, start)
    }

    pub fn king(start: &str) -> Result<Self, PieceError> {
        Self::from_cell(PieceKind::King, start)
    }

    pub fn queen(start: &str) -> Result<Self, PieceError> {
        Self::from_cell(PieceKind::Queen, start)
    }

    fn from_cell(kind: PieceKind, start: &str) -> Result<Self, PieceError> {
        let square = parse_cell(start).map_err(|source| PieceError::InvalidPosition {
            input: start.to_string(),
            source,
        })?;
        Ok(Self::on(kind, square))
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        match self {
            Piece::Pawn(_) => PieceKind::Pawn,
            Piece::King(_) => PieceKind::King,
            Piece::Queen(_) => PieceKind::Queen,
        }
    }

    #[inline]
    #[must_use]
    pub const fn square(self) -> Square {
        match self {
            Piece::Pawn(sq) | Piece::King(sq) | Piece::Queen(sq) => sq,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind(), self.square())
    }
}
