/// Dense handle for one puzzle color, indexing the session's color table.
///
/// Color identity is the index; the name string and display glyph from the
/// puzzle description are looked up through [`Session`](crate::Session).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ColorId(pub(crate) usize);

/// One grid position.
///
/// `Dot` cells are fixed at load and never change kind or color; `Path` cells
/// appear and disappear only through the drawing rules.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Cell {
    /// An unoccupied cell.
    #[default]
    Empty,
    /// A fixed flow endpoint.
    Dot {
        /// The color whose pair this endpoint belongs to.
        color: ColorId,
    },
    /// A cell covered by a player-drawn line.
    Path {
        /// The color of the line covering this cell.
        color: ColorId,
    },
}

impl Cell {
    /// The color occupying this cell, if any.
    pub fn color(&self) -> Option<ColorId> {
        match self {
            Self::Empty => None,
            Self::Dot { color } | Self::Path { color } => Some(*color),
        }
    }

    /// Whether a line of `color` may never enter this cell: it is a dot or
    /// path cell of some other color. Completion state of the other color is
    /// irrelevant; foreign cells are always impassable.
    pub(crate) fn blocks(&self, color: ColorId) -> bool {
        match self.color() {
            Some(occupant) => occupant != color,
            None => false,
        }
    }

    /// Whether this cell carries `color`, i.e. is a dot or path cell of that
    /// exact color. This is the traversability test for connectivity search.
    pub(crate) fn carries(&self, color: ColorId) -> bool {
        self.color() == Some(color)
    }
}
