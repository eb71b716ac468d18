use crate::cell::{Cell, ColorId};
use crate::grid::Grid;
use crate::location::Location;
use crate::step::Step;

/// The ordered list of cells visited during one continuous draw gesture.
///
/// The first entry is always the dot the gesture started on; consecutive
/// entries are 4-adjacent and no entry repeats. It exists only while the
/// gesture is live; the grid's path cells are the persisted record.
#[derive(Clone, Debug)]
pub(crate) struct ActivePath {
    color: ColorId,
    cells: Vec<Location>,
}

impl ActivePath {
    pub(crate) fn begin(color: ColorId, origin: Location) -> Self {
        Self { color, cells: vec![origin] }
    }

    pub(crate) fn color(&self) -> ColorId {
        self.color
    }

    /// The dot this gesture started on.
    pub(crate) fn origin(&self) -> Location {
        self.cells[0]
    }

    /// The most recently visited cell.
    pub(crate) fn tip(&self) -> Location {
        self.cells[self.cells.len() - 1]
    }

    /// The cell visited just before the tip, if the path has one.
    pub(crate) fn second_to_last(&self) -> Option<Location> {
        self.cells.len().checked_sub(2).and_then(|at| self.cells.get(at)).copied()
    }

    pub(crate) fn contains(&self, location: Location) -> bool {
        self.cells.contains(&location)
    }

    pub(crate) fn extend_to(&mut self, location: Location) {
        self.cells.push(location);
    }

    /// Drop the tip and return it. The origin dot is never retracted.
    pub(crate) fn retract(&mut self) -> Option<Location> {
        if self.cells.len() >= 2 {
            self.cells.pop()
        } else {
            None
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }
}

/// What one `move` event does to an in-progress path.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum MoveAction {
    /// The target is the far dot of the drawn color: the gesture ends and the
    /// board is checked for completion. The dot itself stays a dot.
    Close,
    /// The target belongs to another color; the move is swallowed and the
    /// gesture stays live.
    Blocked,
    /// The target is the cell before the tip; the tip is retracted.
    Backtrack,
    /// The target is a legal new tip.
    Extend,
    /// Anything else: non-adjacent target, revisited cell, the origin dot
    /// with nothing to retract. The event changes nothing.
    Ignore,
}

/// Classify one `move` event against the current grid and path. The four
/// meaningful cases are checked in a fixed order; everything that falls
/// through is [`MoveAction::Ignore`].
pub(crate) fn classify_move(grid: &Grid, path: &ActivePath, target: Location) -> MoveAction {
    let Some(cell) = grid.cell(target) else {
        return MoveAction::Ignore;
    };

    if let Cell::Dot { color } = cell {
        if color == path.color() && target != path.origin() {
            return MoveAction::Close;
        }
    }

    if cell.blocks(path.color()) {
        return MoveAction::Blocked;
    }

    if path.second_to_last() == Some(target) {
        return MoveAction::Backtrack;
    }

    let traversable = matches!(cell, Cell::Empty)
        || matches!(cell, Cell::Path { color } if color == path.color());
    if traversable
        && Step::direction_to(path.tip(), target).is_some()
        && !path.contains(target)
    {
        return MoveAction::Extend;
    }

    MoveAction::Ignore
}
