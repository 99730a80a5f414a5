use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::algorithms::{find_start, PathFinder};
use crate::error::SearchError;
use crate::grid::{CellState, Grid, Position};
use crate::result::SearchResult;

/// Tentative distance for cells the search has not reached yet.
const UNREACHED: u32 = u32::MAX;

/// Heap entry for the to-visit set. `priority` is the tentative distance,
/// plus the heuristic estimate when A* drives the loop. `BinaryHeap` is a
/// max-heap, so `Ord` is implemented in reverse; equal priorities break
/// toward the lowest (row, col), which keeps extraction order fully
/// deterministic. Distances are finite and the heuristic never produces
/// NaN, so `total_cmp` gives a total order.
#[derive(Clone, Copy)]
struct QueueEntry {
    priority: f64,
    distance: u32,
    pos: Position,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.pos == other.pos
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

/// Uniform-cost search. With every edge costing 1 this extracts cells in
/// non-decreasing distance from the start and yields a shortest path.
///
/// Distances and parent pointers live in flat arrays indexed by cell;
/// superseded heap entries are dropped lazily on extraction rather than
/// removed eagerly.
#[derive(Default)]
pub struct Dijkstra;

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra
    }
}

impl PathFinder for Dijkstra {
    fn find_path(&mut self, grid: &mut Grid) -> Result<SearchResult, SearchError> {
        let start = find_start(grid)?;
        run_uniform_cost(grid, start, |_| 0.0)
    }
}

/// Core loop shared with A*: Dijkstra is the `heuristic = 0` special case.
/// `heuristic` biases extraction order only; distances and relaxation are
/// untouched by it, so an admissible estimate preserves optimality.
pub(super) fn run_uniform_cost<H>(
    grid: &mut Grid,
    start: Position,
    heuristic: H,
) -> Result<SearchResult, SearchError>
where
    H: Fn(Position) -> f64,
{
    let total = grid.rows() * grid.cols();
    let mut dist = vec![UNREACHED; total];
    let mut parent: Vec<Option<Position>> = vec![None; total];

    dist[grid.index(start)] = 0;
    let mut open: BinaryHeap<QueueEntry> = BinaryHeap::new();
    open.push(QueueEntry {
        priority: heuristic(start),
        distance: 0,
        pos: start,
    });

    let mut visited: Vec<Position> = Vec::new();
    let mut end = None;

    while let Some(entry) = open.pop() {
        let pos = entry.pos;
        if entry.distance > dist[grid.index(pos)] {
            // Stale entry superseded by a later relaxation.
            continue;
        }

        match grid.state(pos) {
            CellState::Destination => {
                end = Some(pos);
                break;
            }
            CellState::Visited => continue,
            CellState::Unvisited => {
                grid.set_state(pos, CellState::Visited);
                visited.push(pos);
            }
            // The start cell: expanded like any other but never recorded.
            _ => {}
        }

        for n in grid.neighbors(pos) {
            let ni = grid.index(n);
            let nd = entry.distance + 1;
            if nd < dist[ni] {
                dist[ni] = nd;
                parent[ni] = Some(pos);
                open.push(QueueEntry {
                    priority: f64::from(nd) + heuristic(n),
                    distance: nd,
                    pos: n,
                });
            }
        }
    }

    grid.reset_visited(start);

    let Some(end) = end else {
        return Ok(SearchResult::unsolved(visited));
    };

    let mut path = Vec::new();
    let mut current = end;
    while let Some(prev) = parent[grid.index(current)] {
        path.push(current);
        current = prev;
    }
    path.reverse();

    Ok(SearchResult::solved(visited, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn missing_start_fails_fast() {
        let mut grid = Grid::new(2, 2);
        grid.set_state(pos(1, 1), CellState::Destination);
        let err = Dijkstra::new().find_path(&mut grid).unwrap_err();
        assert_eq!(err, SearchError::MissingStart);
    }

    #[test]
    fn tie_break_prefers_lowest_row_then_column() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry {
            priority: 3.0,
            distance: 3,
            pos: pos(2, 0),
        });
        heap.push(QueueEntry {
            priority: 3.0,
            distance: 3,
            pos: pos(1, 4),
        });
        heap.push(QueueEntry {
            priority: 2.0,
            distance: 2,
            pos: pos(4, 4),
        });

        assert_eq!(heap.pop().map(|e| e.pos), Some(pos(4, 4)));
        assert_eq!(heap.pop().map(|e| e.pos), Some(pos(1, 4)));
        assert_eq!(heap.pop().map(|e| e.pos), Some(pos(2, 0)));
    }

    #[test]
    fn shortest_path_on_open_grid() {
        let mut grid = Grid::new(4, 4);
        grid.set_state(pos(0, 0), CellState::Start);
        grid.set_state(pos(3, 3), CellState::Destination);

        let result = Dijkstra::new().find_path(&mut grid).unwrap();

        assert!(result.solved);
        assert_eq!(result.path.len(), 6);
        assert_eq!(result.path.last(), Some(&pos(3, 3)));
        // First step is adjacent to the start.
        let first = result.path[0];
        assert_eq!(first.row + first.col, 1);
    }

    #[test]
    fn walls_force_the_longer_route() {
        let mut grid = Grid::new(3, 3);
        grid.set_state(pos(1, 0), CellState::Start);
        grid.set_state(pos(1, 2), CellState::Destination);
        grid.set_state(pos(1, 1), CellState::Wall);

        let result = Dijkstra::new().find_path(&mut grid).unwrap();

        assert!(result.solved);
        assert_eq!(result.path.len(), 4);
        assert!(!result.path.contains(&pos(1, 1)));
    }

    #[test]
    fn unreachable_destination_reports_unsolved() {
        let mut grid = Grid::new(3, 3);
        grid.set_state(pos(0, 0), CellState::Start);
        grid.set_state(pos(2, 2), CellState::Destination);
        grid.set_state(pos(1, 2), CellState::Wall);
        grid.set_state(pos(2, 1), CellState::Wall);

        let result = Dijkstra::new().find_path(&mut grid).unwrap();

        assert!(!result.solved);
        assert!(result.path.is_empty());
        assert_eq!(grid.find(CellState::Visited), None);
    }
}
