pub mod board;
pub mod cli;

pub use board::{
    construct_piece, format_cell, in_bounds, parse_cell, resolve_piece_type, Piece, PieceError,
    PieceKind, Square, SquareError,
};
