use std::collections::VecDeque;

use unordered_pair::UnorderedPair;

use crate::grid::Grid;
use crate::session::ColorPair;
use crate::step::Step;

/// Whether `pair`'s two dots lie in the same connected component of cells
/// carrying that color, under 4-adjacency.
///
/// Breadth-first search from one endpoint; the visited set is a flat bitmap
/// keyed by the packed row-major cell rank. Read-only over the grid, and
/// every cell is enqueued at most once.
pub(crate) fn pair_connected(grid: &Grid, pair: &ColorPair) -> bool {
    let UnorderedPair(start, goal) = pair.endpoints;

    let mut visited = vec![false; grid.size() * grid.size()];
    let mut frontier = VecDeque::new();
    visited[grid.packed_index(start)] = true;
    frontier.push_back(start);

    while let Some(location) = frontier.pop_front() {
        if location == goal {
            return true;
        }

        for neighbor in Step::neighbors_of(location) {
            let Some(cell) = grid.cell(neighbor) else {
                continue;
            };
            let rank = grid.packed_index(neighbor);
            if !visited[rank] && cell.carries(pair.color) {
                visited[rank] = true;
                frontier.push_back(neighbor);
            }
        }
    }

    false
}

/// The win condition: every pair connected and no empty cell left. Both legs
/// are necessary; a board can be fully connected through minimal paths and
/// still unfinished, or fully covered with one pair severed.
pub(crate) fn board_solved(grid: &Grid, pairs: &[ColorPair]) -> bool {
    pairs.iter().all(|pair| pair_connected(grid, pair)) && grid.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Cell, ColorId};
    use crate::location::Location;

    const RED: ColorId = ColorId(0);
    const BLUE: ColorId = ColorId(1);

    fn red_pair(a: Location, b: Location) -> ColorPair {
        ColorPair { color: RED, endpoints: UnorderedPair(a, b) }
    }

    #[test]
    fn a_drawn_chain_connects() {
        let mut grid = Grid::empty(3);
        grid.set(Location(0, 0), Cell::Dot { color: RED });
        grid.set(Location(2, 2), Cell::Dot { color: RED });
        for location in [Location(1, 0), Location(1, 1), Location(1, 2), Location(2, 2)] {
            if grid.cell(location) == Some(Cell::Empty) {
                grid.set(location, Cell::Path { color: RED });
            }
        }

        assert!(pair_connected(&grid, &red_pair(Location(0, 0), Location(2, 2))));
    }

    #[test]
    fn a_gap_disconnects() {
        let mut grid = Grid::empty(3);
        grid.set(Location(0, 0), Cell::Dot { color: RED });
        grid.set(Location(2, 0), Cell::Dot { color: RED });
        // nothing drawn between them

        assert!(!pair_connected(&grid, &red_pair(Location(0, 0), Location(2, 0))));
    }

    #[test]
    fn adjacent_dots_connect_with_nothing_drawn() {
        let mut grid = Grid::empty(3);
        grid.set(Location(0, 0), Cell::Dot { color: RED });
        grid.set(Location(1, 0), Cell::Dot { color: RED });

        assert!(pair_connected(&grid, &red_pair(Location(0, 0), Location(1, 0))));
    }

    #[test]
    fn foreign_cells_do_not_carry_the_search() {
        let mut grid = Grid::empty(3);
        grid.set(Location(0, 0), Cell::Dot { color: RED });
        grid.set(Location(2, 0), Cell::Dot { color: RED });
        // a blue bridge between the red dots must not count
        grid.set(Location(1, 0), Cell::Path { color: BLUE });

        assert!(!pair_connected(&grid, &red_pair(Location(0, 0), Location(2, 0))));

        // and a blue dot must not either
        grid.set(Location(1, 0), Cell::Dot { color: BLUE });
        assert!(!pair_connected(&grid, &red_pair(Location(0, 0), Location(2, 0))));
    }

    #[test]
    fn connectivity_alone_does_not_solve() {
        let mut grid = Grid::empty(2);
        grid.set(Location(0, 0), Cell::Dot { color: RED });
        grid.set(Location(1, 0), Cell::Dot { color: RED });
        let pairs = [red_pair(Location(0, 0), Location(1, 0))];

        assert!(!board_solved(&grid, &pairs));

        grid.set(Location(0, 1), Cell::Path { color: RED });
        grid.set(Location(1, 1), Cell::Path { color: RED });
        assert!(board_solved(&grid, &pairs));
    }

    #[test]
    fn coverage_alone_does_not_solve() {
        let mut grid = Grid::empty(2);
        grid.set(Location(0, 0), Cell::Dot { color: RED });
        grid.set(Location(1, 1), Cell::Dot { color: RED });
        // full coverage, but the blue cells sever the red pair
        grid.set(Location(1, 0), Cell::Path { color: BLUE });
        grid.set(Location(0, 1), Cell::Path { color: BLUE });
        let pairs = [red_pair(Location(0, 0), Location(1, 1))];

        assert!(grid.is_full());
        assert!(!board_solved(&grid, &pairs));
    }
}
