use strum::VariantArray;

use crate::location::Location;

/// One unit step on the square grid. Paths may only ever move in these four
/// directions; diagonal motion does not exist at this layer.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub(crate) enum Step {
    Up,
    Down,
    Left,
    Right,
}

impl Step {
    /// Attempt the step from `location` in the direction specified by `self`
    /// and return the resultant [`Location`].
    ///
    /// Steps off the top or left edge wrap to huge coordinates, which fail
    /// every subsequent bounds check; callers filter through the grid.
    pub(crate) fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((1, 0)),
        }
    }

    /// All locations one step away from `location`, in "theory"; some may lie
    /// outside any particular board.
    pub(crate) fn neighbors_of(location: Location) -> impl Iterator<Item = Location> {
        Self::VARIANTS.iter().map(move |dir| dir.attempt_from(location))
    }

    /// Determine the direction from `a` to `b` by calling
    /// [`attempt_from`](Self::attempt_from) until one works.
    ///
    /// Returns [`None`] unless the two locations are 4-adjacent, which makes
    /// this double as the adjacency test `|Δrow| + |Δcol| = 1`.
    pub(crate) fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orthogonal_neighbors_are_adjacent() {
        for neighbor in Step::neighbors_of(Location(2, 2)) {
            assert!(Step::direction_to(Location(2, 2), neighbor).is_some());
        }
    }

    #[test]
    fn diagonals_and_jumps_are_not_adjacent() {
        assert_eq!(Step::direction_to(Location(1, 1), Location(2, 2)), None);
        assert_eq!(Step::direction_to(Location(1, 1), Location(1, 3)), None);
        assert_eq!(Step::direction_to(Location(1, 1), Location(1, 1)), None);
    }

    #[test]
    fn steps_off_the_edge_leave_bounds() {
        let stepped = Step::Up.attempt_from(Location(0, 0));
        assert!(stepped.as_index().0 > 4);
    }
}
