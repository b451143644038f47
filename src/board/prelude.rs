//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_moves::board::prelude::*;
//!
//! let queen = construct_piece(PieceKind::Queen, "E4").unwrap();
//! assert_eq!(queen.possible_moves().len(), 27);
//! ```

pub use super::{
    construct_piece, format_cell, parse_cell, resolve_piece_type, Piece, PieceError, PieceKind,
    Square, SquareError,
};
