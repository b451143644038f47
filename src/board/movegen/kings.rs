use super::{cast_rays, ALL_DIRECTIONS};
use super::super::Square;

pub(crate) fn king_targets(from: Square) -> Vec<Square> {
    cast_rays(from, &ALL_DIRECTIONS, 1)
}
