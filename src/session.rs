use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::{debug, trace};
use unordered_pair::UnorderedPair;

use crate::cell::{Cell, ColorId};
use crate::connect;
use crate::editor::{classify_move, ActivePath, MoveAction};
use crate::grid::Grid;
use crate::location::Location;
use crate::puzzle::{InvalidPuzzle, Puzzle};

/// One puzzle objective: a color and its two fixed dot locations.
pub(crate) struct ColorPair {
    pub(crate) color: ColorId,
    pub(crate) endpoints: UnorderedPair<Location>,
}

/// What happens to other colors' drawn lines when a new draw gesture begins.
///
/// Legacy variants of the game disagreed on this; the keep-connected rule is
/// the canonical behavior.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PurgePolicy {
    /// Purge only colors whose two dots are not currently connected; finished
    /// lines survive. The started color's own line is always purged.
    #[default]
    KeepConnected,
    /// Purge every other color's line unconditionally.
    PurgeAll,
}

/// A live puzzle: the grid, the color pairs to satisfy, and the draw gesture
/// in flight, if any.
///
/// The session is driven by discrete cell events, one at a time: a host
/// resolves pointer or touch coordinates to `(row, col)` and calls
/// [`pointer_down`](Self::pointer_down), [`pointer_enter`](Self::pointer_enter)
/// and [`pointer_up`](Self::pointer_up). Illegal moves are silent no-ops by
/// design; the only fallible operation is [`load`](Self::load).
pub struct Session {
    grid: Grid,
    initial: Grid,
    pairs: Vec<ColorPair>,
    color_names: Vec<String>,
    color_displays: Vec<char>,
    active: Option<ActivePath>,
    solved: bool,
    policy: PurgePolicy,
}

impl Session {
    /// Build a session from a validated puzzle description using the default
    /// [`PurgePolicy`].
    pub fn load(puzzle: &Puzzle) -> Result<Self, InvalidPuzzle> {
        Self::load_with_policy(puzzle, PurgePolicy::default())
    }

    /// Build a session from a puzzle description.
    ///
    /// Fails with [`InvalidPuzzle`] if the description is contradictory; no
    /// partial session is produced. The description's `(x, y)` endpoint
    /// coordinates are translated to the grid's `(row, col)` indexing here
    /// and nowhere else.
    pub fn load_with_policy(puzzle: &Puzzle, policy: PurgePolicy) -> Result<Self, InvalidPuzzle> {
        puzzle.validate()?;

        let mut grid = Grid::empty(puzzle.size);
        let mut pairs = Vec::with_capacity(puzzle.colors.len());
        let mut color_names = Vec::with_capacity(puzzle.colors.len());
        let mut color_displays: Vec<char> = Vec::with_capacity(puzzle.colors.len());

        for (index, spec) in puzzle.colors.iter().enumerate() {
            let color = ColorId(index);
            let (start, end) = spec.endpoints();

            grid.set(start, Cell::Dot { color });
            grid.set(end, Cell::Dot { color });
            pairs.push(ColorPair { color, endpoints: UnorderedPair(start, end) });

            // display glyphs are cosmetic; prefer the color name's initial,
            // fall back to the alphabet on collision
            let initial = spec.color.chars().next().filter(char::is_ascii_alphabetic);
            let fallback = (b'a' + (index % 26) as u8) as char;
            let glyph = initial.map(|c| c.to_ascii_lowercase()).unwrap_or(fallback);
            color_displays.push(if color_displays.contains(&glyph) { fallback } else { glyph });
            color_names.push(spec.color.clone());
        }

        debug!(
            "loaded {}x{} puzzle with colors [{}]",
            puzzle.size,
            puzzle.size,
            color_names.iter().join(", ")
        );

        Ok(Self {
            initial: grid.clone(),
            grid,
            pairs,
            color_names,
            color_displays,
            active: None,
            solved: false,
            policy,
        })
    }

    /// Begin a draw gesture at `(row, col)`.
    ///
    /// Only a dot cell accepts a gesture; anywhere else this is a no-op.
    /// Before the gesture starts, other colors' lines are purged according to
    /// the session's [`PurgePolicy`], and the started color's previous line
    /// is always purged, so redrawing a color discards its old solution. Any
    /// gesture already in flight is implicitly cancelled.
    pub fn pointer_down(&mut self, row: usize, col: usize) -> &mut Self {
        let target = Location::from((row, col));
        let Some(Cell::Dot { color }) = self.grid.cell(target) else {
            trace!("pointer down at ({row}, {col}) ignored: not a dot");
            return self;
        };

        self.purge_for_restart(color);
        // a redraw invalidates any earlier completion
        self.solved = false;
        self.active = Some(ActivePath::begin(color, target));
        debug!("drawing {} from ({row}, {col})", self.color_names[color.0]);

        self
    }

    /// Feed one cell-entry event to the gesture in flight.
    ///
    /// A no-op unless a gesture is live. The four meaningful cases, in order:
    /// reaching the far dot of the drawn color closes the gesture and
    /// re-evaluates the win condition; a foreign dot or path swallows the
    /// event without cancelling the gesture; re-entering the cell before the
    /// tip retracts the tip; an adjacent, unvisited empty cell extends the
    /// line. Everything else changes nothing.
    pub fn pointer_enter(&mut self, row: usize, col: usize) -> &mut Self {
        let Some(mut path) = self.active.take() else {
            return self;
        };
        let target = Location::from((row, col));

        match classify_move(&self.grid, &path, target) {
            MoveAction::Close => {
                debug!(
                    "{} closed at ({row}, {col}) after {} cells",
                    self.color_names[path.color().0],
                    path.len()
                );
                self.evaluate_completion();
            }
            MoveAction::Blocked => {
                trace!("move to ({row}, {col}) blocked");
                self.active = Some(path);
            }
            MoveAction::Backtrack => {
                if let Some(tip) = path.retract() {
                    self.grid.set(tip, Cell::Empty);
                }
                self.active = Some(path);
            }
            MoveAction::Extend => {
                self.grid.set(target, Cell::Path { color: path.color() });
                path.extend_to(target);
                self.active = Some(path);
            }
            MoveAction::Ignore => {
                self.active = Some(path);
            }
        }

        self
    }

    /// Feed every cell on the straight segment from the gesture's tip to
    /// `(row, col)` through [`pointer_enter`](Self::pointer_enter), in order.
    ///
    /// Hosts sampling a fast-moving pointer can miss intermediate cells; this
    /// interpolates the gap with Bresenham's line. Each interpolated cell is
    /// validated individually, so cells the move rules reject (including the
    /// diagonal steps a skewed segment produces) are ignored as usual.
    pub fn pointer_enter_line(&mut self, row: usize, col: usize) -> &mut Self {
        let Some(path) = self.active.as_ref() else {
            return self;
        };

        let (tip_row, tip_col) = path.tip().as_index();
        let (mut r, mut c) = (tip_row as isize, tip_col as isize);
        let (goal_r, goal_c) = (row as isize, col as isize);
        let dr = (goal_r - r).abs();
        let dc = (goal_c - c).abs();
        let step_r = if r < goal_r { 1 } else { -1 };
        let step_c = if c < goal_c { 1 } else { -1 };
        let mut err = dc - dr;

        while r != goal_r || c != goal_c {
            let doubled = 2 * err;
            if doubled > -dr {
                err -= dr;
                c += step_c;
            }
            if doubled < dc {
                err += dc;
                r += step_r;
            }

            if r < 0 || c < 0 {
                break;
            }
            self.pointer_enter(r as usize, c as usize);
            if self.active.is_none() {
                // the segment reached the far dot mid-sweep
                break;
            }
        }

        self
    }

    /// End the draw gesture without reaching the far dot.
    ///
    /// The in-progress path is discarded but the grid keeps the cells drawn
    /// so far; a partial line persists until its color is redrawn or purged.
    pub fn pointer_up(&mut self) -> &mut Self {
        if let Some(path) = self.active.take() {
            trace!(
                "released {} with {} cells drawn",
                self.color_names[path.color().0],
                path.len()
            );
        }

        self
    }

    /// Whether the puzzle is solved: every pair connected and the grid full.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Whether `color`'s two dots are currently connected by its own cells.
    /// Unknown color names are reported unconnected.
    pub fn pair_connected(&self, color: &str) -> bool {
        match self.color_id(color) {
            Some(id) => self
                .pairs
                .iter()
                .find(|pair| pair.color == id)
                .is_some_and(|pair| connect::pair_connected(&self.grid, pair)),
            None => false,
        }
    }

    /// The fraction of cells occupied by any dot or path, in `[0, 1]`.
    pub fn fill_ratio(&self) -> f64 {
        let total = self.grid.size() * self.grid.size();
        self.grid.filled_cells() as f64 / total as f64
    }

    /// Restore the grid as loaded, dropping all drawn lines, the gesture in
    /// flight and any completion state.
    pub fn reset(&mut self) -> &mut Self {
        debug!("session reset to initial grid");
        self.grid = self.initial.clone();
        self.active = None;
        self.solved = false;

        self
    }

    /// The board state, for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The side length of the board.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// The cell at `(row, col)`, or [`None`] outside the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.cell(Location::from((row, col)))
    }

    /// Resolve a color name from the puzzle description to its handle.
    pub fn color_id(&self, color: &str) -> Option<ColorId> {
        self.color_names.iter().position(|name| name == color).map(ColorId)
    }

    /// The name of `color` as given in the puzzle description.
    pub fn color_name(&self, color: ColorId) -> Option<&str> {
        self.color_names.get(color.0).map(String::as_str)
    }

    /// The color currently being drawn, if a gesture is live.
    pub fn drawing_color(&self) -> Option<ColorId> {
        self.active.as_ref().map(ActivePath::color)
    }

    fn purge_for_restart(&mut self, starting: ColorId) {
        let doomed = self
            .pairs
            .iter()
            .filter(|pair| pair.color != starting)
            .filter(|pair| match self.policy {
                PurgePolicy::PurgeAll => true,
                PurgePolicy::KeepConnected => !connect::pair_connected(&self.grid, pair),
            })
            .map(|pair| pair.color)
            .collect_vec();

        for color in doomed {
            trace!("purging stale line of {}", self.color_names[color.0]);
            self.grid.purge_color(color);
        }

        // the started color is always redrawn from scratch
        self.grid.purge_color(starting);
    }

    fn evaluate_completion(&mut self) {
        if self.solved {
            return;
        }

        if connect::board_solved(&self.grid, &self.pairs) {
            debug!("puzzle solved");
            self.solved = true;
        }
    }
}

impl Display for Session {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.grid.render(|cell| match cell {
                Cell::Dot { color } => self
                    .color_displays
                    .get(color.0)
                    .map(|c| c.to_ascii_uppercase())
                    .unwrap_or('?'),
                Cell::Path { color } =>
                    self.color_displays.get(color.0).copied().unwrap_or('?'),
                Cell::Empty => '.',
            })
        )
    }
}
