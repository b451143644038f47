//! Core board types.
//!
//! - `Square` and the cell notation helpers
//! - `PieceKind` and `Piece`

mod piece;
mod square;

pub use piece::{Piece, PieceConstructor, PieceKind};
pub use square::{format_cell, in_bounds, parse_cell, Square, BOARD_SIZE};
