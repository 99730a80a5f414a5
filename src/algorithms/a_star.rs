use crate::algorithms::dijkstra::run_uniform_cost;
use crate::algorithms::{find_destination, find_start, PathFinder};
use crate::error::SearchError;
use crate::grid::{Grid, Position};
use crate::result::SearchResult;

/// A* search: the uniform-cost loop with extraction ordered by
/// `distance + heuristic`.
///
/// The heuristic is the straight-line (Euclidean) distance to the
/// destination. Movement is axis-aligned with unit cost, so the Euclidean
/// estimate never overestimates the true remaining cost and is consistent;
/// the returned path is therefore still shortest. The destination is looked
/// up before the start, so a grid without one fails with
/// `MissingDestination` even when the start is also missing.
#[derive(Default)]
pub struct AStar;

impl AStar {
    pub fn new() -> Self {
        AStar
    }
}

fn euclidean(from: Position, to: Position) -> f64 {
    let dr = from.row as f64 - to.row as f64;
    let dc = from.col as f64 - to.col as f64;
    dr.hypot(dc)
}

impl PathFinder for AStar {
    fn find_path(&mut self, grid: &mut Grid) -> Result<SearchResult, SearchError> {
        let destination = find_destination(grid)?;
        let start = find_start(grid)?;

        // The destination is fixed for the whole run; precompute every
        // cell's estimate once instead of taking square roots per relaxation.
        let cols = grid.cols();
        let estimates: Vec<f64> = (0..grid.rows() * cols)
            .map(|idx| euclidean(Position::new(idx / cols, idx % cols), destination))
            .collect();

        run_uniform_cost(grid, start, |pos| estimates[pos.row * cols + pos.col])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn missing_destination_is_checked_before_missing_start() {
        let mut grid = Grid::new(3, 3);
        let err = AStar::new().find_path(&mut grid).unwrap_err();
        assert_eq!(err, SearchError::MissingDestination);

        grid.set_state(pos(2, 2), CellState::Destination);
        let err = AStar::new().find_path(&mut grid).unwrap_err();
        assert_eq!(err, SearchError::MissingStart);
    }

    #[test]
    fn euclidean_estimate_is_zero_at_the_destination() {
        assert_eq!(euclidean(pos(3, 4), pos(3, 4)), 0.0);
        assert_eq!(euclidean(pos(0, 0), pos(3, 4)), 5.0);
    }

    #[test]
    fn path_is_as_short_as_uniform_cost_search() {
        let mut grid = Grid::new(5, 5);
        grid.set_state(pos(0, 0), CellState::Start);
        grid.set_state(pos(4, 4), CellState::Destination);
        grid.set_state(pos(1, 1), CellState::Wall);
        grid.set_state(pos(2, 1), CellState::Wall);
        grid.set_state(pos(3, 3), CellState::Wall);

        let result = AStar::new().find_path(&mut grid).unwrap();

        assert!(result.solved);
        assert_eq!(result.path.len(), 8);
        assert_eq!(result.path.last(), Some(&pos(4, 4)));
    }

    #[test]
    fn heuristic_prunes_the_wrong_direction() {
        // On an open corridor the goal-directed search should not wander
        // into the far side of the grid.
        let mut grid = Grid::new(3, 9);
        grid.set_state(pos(1, 7), CellState::Start);
        grid.set_state(pos(1, 8), CellState::Destination);

        let result = AStar::new().find_path(&mut grid).unwrap();

        assert!(result.solved);
        assert_eq!(result.path, vec![pos(1, 8)]);
        assert!(result.visited.len() <= 2);
    }

    #[test]
    fn unreachable_destination_reports_unsolved() {
        let mut grid = Grid::new(3, 3);
        grid.set_state(pos(0, 0), CellState::Start);
        grid.set_state(pos(1, 1), CellState::Destination);
        grid.set_state(pos(0, 1), CellState::Wall);
        grid.set_state(pos(1, 0), CellState::Wall);
        grid.set_state(pos(1, 2), CellState::Wall);
        grid.set_state(pos(2, 1), CellState::Wall);

        let result = AStar::new().find_path(&mut grid).unwrap();

        assert!(!result.solved);
        assert!(result.path.is_empty());
        assert_eq!(grid.find(CellState::Visited), None);
    }
}
