use log::trace;

use super::super::Square;

/// The eight unit directions as `(dr, dc)`, ordered by row delta then column delta.
pub(crate) const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Walk outward from `from` along each direction, up to `max_steps` squares.
///
/// A ray ends at the first step that leaves the board; later steps in that
/// direction are never tried. Output is direction-major, step-minor.
pub(crate) fn cast_rays(
    from: Square,
    directions: &[(isize, isize)],
    max_steps: usize,
) -> Vec<Square> {
    let mut targets = Vec::with_capacity(directions.len() * max_steps);

    for &(dr, dc) in directions {
        let before = targets.len();
        for step in 1..=max_steps as isize {
            match from.offset(dr * step, dc * step) {
                Some(to) => targets.push(to),
                None => break,
            }
        }
        trace!("ray ({dr}, {dc}) from {from}: {} squares", targets.len() - before);
    }

    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        text.parse().unwrap()
    }

    #[test]
    fn test_single_direction_stops_at_edge() {
        let targets = cast_rays(sq("F1"), &[(0, 1)], 7);
        assert_eq!(targets, vec![sq("G1"), sq("H1")]);
    }

    #[test]
    fn test_max_steps_limits_ray() {
        let targets = cast_rays(sq("A1"), &[(1, 0)], 3);
        assert_eq!(targets, vec![sq("A2"), sq("A3"), sq("A4")]);
    }

    #[test]
    fn test_zero_steps_is_empty() {
        assert!(cast_rays(sq("D4"), &ALL_DIRECTIONS, 0).is_empty());
    }

    #[test]
    fn test_order_is_direction_major() {
        let targets = cast_rays(sq("D4"), &[(1, 0), (0, 1)], 2);
        assert_eq!(targets, vec![sq("D5"), sq("D6"), sq("E4"), sq("F4")]);
    }

    #[test]
    fn test_blocked_direction_yields_nothing() {
        assert!(cast_rays(sq("H8"), &[(1, 1), (0, 1), (1, 0)], 7).is_empty());
    }
}
