//! Resolving piece type names and placing pieces.

use log::debug;

use super::error::PieceError;
use super::types::{Piece, PieceKind};

/// Look up a piece kind by name, ignoring ASCII case.
///
/// The error keeps the name exactly as given along with the supported names.
pub fn resolve_piece_type(name: &str) -> Result<PieceKind, PieceError> {
    let kind = name.parse::<PieceKind>()?;
    debug!("resolved piece type '{name}' to {kind}");
    Ok(kind)
}

/// Build a piece of `kind` standing on `start_cell`.
pub fn construct_piece(kind: PieceKind, start_cell: &str) -> Result<Piece, PieceError> {
    let piece = (kind.constructor())(start_cell)?;
    debug!("constructed {piece}");
    Ok(piece)
}
