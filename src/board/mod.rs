//! Board geometry and single-piece move generation.
//!
//! A piece stands alone on an empty 8x8 board; its destinations depend only
//! on its kind and its square.
//!
//! # Example
//! ```
//! use chess_moves::board::{construct_piece, resolve_piece_type};
//!
//! let kind = resolve_piece_type("king").unwrap();
//! let king = construct_piece(kind, "A1").unwrap();
//! let mut moves = king.possible_moves();
//! moves.sort();
//! assert_eq!(moves, ["A2", "B1", "B2"]);
//! ```

mod error;
mod factory;
mod movegen;
pub mod prelude;
mod types;

#[cfg(test)]
mod tests;

pub use error::{NotationFault, PieceError, SquareError};
pub use factory::{construct_piece, resolve_piece_type};
pub use types::{
    format_cell, in_bounds, parse_cell, Piece, PieceConstructor, PieceKind, Square, BOARD_SIZE,
};
