use super::{cast_rays, ALL_DIRECTIONS};
use super::super::{Square, BOARD_SIZE};

/// Longest possible slide on an empty board
pub(crate) const MAX_SLIDE: usize = BOARD_SIZE - 1;

pub(crate) fn queen_targets(from: Square) -> Vec<Square> {
    cast_rays(from, &ALL_DIRECTIONS, MAX_SLIDE)
}
