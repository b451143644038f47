use super::super::Square;

/// A pawn steps one square toward rank 8; on rank 8 it has nowhere to go.
pub(crate) fn pawn_targets(from: Square) -> Vec<Square> {
    from.offset(1, 0).into_iter().collect()
}
