use ndarray::Ix;

pub(crate) type Coord = usize;

/// A location `(x, y)` on a board, in the axis convention of external puzzle
/// descriptions. The top left corner is `Location(0, 0)`.
///
/// The engine's grid is stored row-major, so every grid access goes through
/// [`as_index`](Self::as_index), which swaps to `(row, col)`. That swap is the
/// single point where the external `(x, y)` convention is translated.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}
