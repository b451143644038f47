//! Move generation for a lone piece on an empty board.
//!
//! Pawns step one square toward rank 8. Kings and queens share the same
//! ray caster over all eight directions and differ only in how far a ray
//! may run: one square for the king, the full board for the queen.

mod kings;
mod pawns;
mod rays;
mod sliders;

use log::debug;

use super::Piece;
use super::Square;

pub(crate) use rays::{cast_rays, ALL_DIRECTIONS};

impl Piece {
    /// Destination squares in generation order (direction-major, step-minor).
    ///
    /// Not sorted; callers that need a stable presentation sort the result.
    #[must_use]
    pub fn destinations(&self) -> Vec<Square> {
        let targets = match *self {
            Piece::Pawn(from) => pawns::pawn_targets(from),
            Piece::King(from) => kings::king_targets(from),
            Piece::Queen(from) => sliders::queen_targets(from),
        };
        debug!("{self}: {} destinations", targets.len());
        targets
    }

    /// Destination cells in uppercase notation, in generation order.
    #[must_use]
    pub fn possible_moves(&self) -> Vec<String> {
        self.destinations().iter().map(Square::to_string).collect()
    }
}
