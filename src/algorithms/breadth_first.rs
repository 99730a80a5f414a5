use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::algorithms::{find_start, PathFinder};
use crate::error::SearchError;
use crate::grid::{CellState, Grid, Position};
use crate::result::SearchResult;

/// Breadth-first search over unit-cost edges.
///
/// Cells are dequeued in non-decreasing distance from the start, so the
/// reconstructed path is shortest in edge count. Parent pointers are keyed
/// by flat cell index and first-writer-wins, so every cell's recorded parent
/// is its earliest discoverer.
#[derive(Default)]
pub struct BreadthFirst;

impl BreadthFirst {
    pub fn new() -> Self {
        BreadthFirst
    }
}

impl PathFinder for BreadthFirst {
    fn find_path(&mut self, grid: &mut Grid) -> Result<SearchResult, SearchError> {
        let start = find_start(grid)?;

        let mut visited: Vec<Position> = Vec::new();
        let mut frontier: VecDeque<Position> = VecDeque::new();
        let mut parents: FxHashMap<usize, Position> = FxHashMap::default();

        for n in grid.neighbors(start) {
            parents.insert(grid.index(n), start);
            frontier.push_back(n);
        }

        let mut end = None;
        while let Some(current) = frontier.pop_front() {
            match grid.state(current) {
                CellState::Destination => {
                    end = Some(current);
                    break;
                }
                CellState::Unvisited => {
                    grid.set_state(current, CellState::Visited);
                    visited.push(current);
                    for n in grid.neighbors(current) {
                        let state = grid.state(n);
                        if state == CellState::Visited || state == CellState::Start {
                            continue;
                        }
                        parents.entry(grid.index(n)).or_insert(current);
                        frontier.push_back(n);
                    }
                }
                // A duplicate enqueue that was reached first via another
                // route; nothing left to do for it.
                _ => {}
            }
        }

        grid.reset_visited(start);

        let Some(end) = end else {
            return Ok(SearchResult::unsolved(visited));
        };

        // Walk the parent pointers back to the start, then flip.
        let mut path = vec![end];
        let mut current = end;
        while let Some(&prev) = parents.get(&grid.index(current)) {
            if prev == start {
                break;
            }
            path.push(prev);
            current = prev;
        }
        path.reverse();

        Ok(SearchResult::solved(visited, path))
    }
}
