use ndarray::{Array2, AssignElem};

use crate::cell::{Cell, ColorId};
use crate::location::Location;

/// The mutable board: a square matrix of [`Cell`]s with side length fixed at
/// load. There is exactly one `Grid` per live puzzle session; all mutation
/// goes through the session's event methods.
#[derive(Clone)]
pub struct Grid {
    size: usize,
    cells: Array2<Cell>,
}

impl Grid {
    pub(crate) fn empty(size: usize) -> Self {
        Self {
            size,
            cells: Array2::from_shape_simple_fn((size, size), Cell::default),
        }
    }

    /// The side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The cell at `location`, or [`None`] if it lies outside the board.
    pub fn cell(&self, location: Location) -> Option<Cell> {
        self.cells.get(location.as_index()).copied()
    }

    pub(crate) fn set(&mut self, location: Location, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(location.as_index()) {
            slot.assign_elem(cell);
        }
    }

    /// Revert every path cell of `color` to empty. Dots are untouched.
    pub(crate) fn purge_color(&mut self, color: ColorId) {
        self.cells.map_inplace(|cell| match cell {
            Cell::Path { color: occupant } => {
                if *occupant == color {
                    cell.assign_elem(Cell::Empty);
                }
            }
            _ => {}
        })
    }

    /// Key for visited sets: the row-major rank of `location`.
    pub(crate) fn packed_index(&self, location: Location) -> usize {
        let (row, col) = location.as_index();
        row * self.size + col
    }

    /// The number of cells occupied by a dot or path of any color.
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|cell| !matches!(cell, Cell::Empty)).count()
    }

    /// Whether no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !matches!(cell, Cell::Empty))
    }

    /// Dump the board as one character per cell, one row per line.
    pub(crate) fn render(&self, glyph: impl Fn(&Cell) -> char) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));

        for row in self.cells.rows() {
            for cell in row {
                out.push(glyph(cell));
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purge_reverts_paths_and_keeps_dots() {
        let mut grid = Grid::empty(3);
        grid.set(Location(0, 0), Cell::Dot { color: ColorId(0) });
        grid.set(Location(1, 0), Cell::Path { color: ColorId(0) });
        grid.set(Location(2, 0), Cell::Path { color: ColorId(1) });

        grid.purge_color(ColorId(0));

        assert_eq!(grid.cell(Location(0, 0)), Some(Cell::Dot { color: ColorId(0) }));
        assert_eq!(grid.cell(Location(1, 0)), Some(Cell::Empty));
        assert_eq!(grid.cell(Location(2, 0)), Some(Cell::Path { color: ColorId(1) }));
    }

    #[test]
    fn out_of_bounds_reads_and_writes_are_inert() {
        let mut grid = Grid::empty(2);
        grid.set(Location(5, 0), Cell::Path { color: ColorId(0) });

        assert_eq!(grid.cell(Location(5, 0)), None);
        assert_eq!(grid.filled_cells(), 0);
    }

    #[test]
    fn packed_index_is_row_major() {
        let grid = Grid::empty(4);
        // Location is (x, y); index rank is row * size + col.
        assert_eq!(grid.packed_index(Location(3, 0)), 3);
        assert_eq!(grid.packed_index(Location(0, 1)), 4);
        assert_eq!(grid.packed_index(Location(3, 3)), 15);
    }
}
