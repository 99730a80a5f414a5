use crate::algorithms::{find_start, PathFinder};
use crate::error::SearchError;
use crate::grid::{CellState, Grid, Position};
use crate::result::SearchResult;

/// Depth-first search with backtracking.
///
/// Uses an explicit stack of (cell, neighbor-cursor) frames instead of
/// recursion, so the maximum grid size is not limited by the call stack.
/// Neighbors are explored in wiring order (right, up, left, down); a branch
/// ends when it reaches an already-visited cell or loops back to the start.
/// The first route that reaches the destination wins, so the path is
/// depth-first order, not necessarily shortest.
#[derive(Default)]
pub struct DepthFirst;

struct Frame {
    pos: Position,
    cursor: usize,
}

impl DepthFirst {
    pub fn new() -> Self {
        DepthFirst
    }
}

impl PathFinder for DepthFirst {
    fn find_path(&mut self, grid: &mut Grid) -> Result<SearchResult, SearchError> {
        let start = find_start(grid)?;

        let mut visited: Vec<Position> = Vec::new();
        let mut frames = vec![Frame {
            pos: start,
            cursor: 0,
        }];

        let found = loop {
            let Some(frame) = frames.last_mut() else {
                // Every branch exhausted without reaching the destination.
                break None;
            };

            let neighbors = grid.neighbors(frame.pos);
            if frame.cursor >= neighbors.len() {
                frames.pop();
                continue;
            }

            let next = neighbors[frame.cursor];
            frame.cursor += 1;

            match grid.state(next) {
                CellState::Destination => {
                    // The live frame chain below the start is exactly the
                    // route taken; cap it with the destination.
                    let mut path: Vec<Position> = frames[1..].iter().map(|f| f.pos).collect();
                    path.push(next);
                    break Some(path);
                }
                CellState::Unvisited => {
                    grid.set_state(next, CellState::Visited);
                    visited.push(next);
                    frames.push(Frame {
                        pos: next,
                        cursor: 0,
                    });
                }
                // Visited cells and the start terminate the branch; walls
                // never appear in a neighbor list.
                _ => {}
            }
        };

        grid.reset_visited(start);

        Ok(match found {
            Some(path) => SearchResult::solved(visited, path),
            None => SearchResult::unsolved(visited),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn missing_start_fails_fast() {
        let mut grid = Grid::new(3, 3);
        grid.set_state(pos(2, 2), CellState::Destination);
        let err = DepthFirst::new().find_path(&mut grid).unwrap_err();
        assert_eq!(err, SearchError::MissingStart);
    }

    #[test]
    fn explores_in_wiring_order_on_open_grid() {
        let mut grid = Grid::new(3, 3);
        grid.set_state(pos(0, 0), CellState::Start);
        grid.set_state(pos(2, 2), CellState::Destination);

        let result = DepthFirst::new().find_path(&mut grid).unwrap();

        assert!(result.solved);
        // Right-first expansion hugs the top edge, then snakes back through
        // the middle row before dropping to the bottom.
        assert_eq!(
            result.visited,
            vec![
                pos(0, 1),
                pos(0, 2),
                pos(1, 2),
                pos(1, 1),
                pos(1, 0),
                pos(2, 0),
                pos(2, 1),
            ]
        );
        assert_eq!(
            result.path,
            vec![
                pos(0, 1),
                pos(0, 2),
                pos(1, 2),
                pos(1, 1),
                pos(1, 0),
                pos(2, 0),
                pos(2, 1),
                pos(2, 2),
            ]
        );
    }

    #[test]
    fn destination_adjacent_to_start_yields_single_step_path() {
        let mut grid = Grid::new(2, 2);
        grid.set_state(pos(0, 0), CellState::Start);
        grid.set_state(pos(0, 1), CellState::Destination);

        let result = DepthFirst::new().find_path(&mut grid).unwrap();

        assert!(result.solved);
        assert_eq!(result.path, vec![pos(0, 1)]);
        assert!(result.visited.is_empty());
    }

    #[test]
    fn unreachable_destination_reports_unsolved_with_partial_visits() {
        let mut grid = Grid::new(3, 3);
        grid.set_state(pos(0, 0), CellState::Start);
        grid.set_state(pos(2, 2), CellState::Destination);
        // Wall off the bottom-right corner.
        grid.set_state(pos(1, 2), CellState::Wall);
        grid.set_state(pos(2, 1), CellState::Wall);

        let result = DepthFirst::new().find_path(&mut grid).unwrap();

        assert!(!result.solved);
        assert!(result.path.is_empty());
        assert!(!result.visited.is_empty());
        // The grid is reset regardless of the failure.
        assert_eq!(grid.state(pos(0, 1)), CellState::Unvisited);
        assert_eq!(grid.state(pos(0, 0)), CellState::Start);
    }
}
