pub mod a_star;
pub mod breadth_first;
pub mod depth_first;
pub mod dijkstra;

use std::str::FromStr;

use crate::error::SearchError;
use crate::grid::{CellState, Grid, Position};
use crate::result::SearchResult;

pub use a_star::AStar;
pub use breadth_first::BreadthFirst;
pub use depth_first::DepthFirst;
pub use dijkstra::Dijkstra;

/// Contract shared by all search strategies.
///
/// A strategy borrows the grid for the duration of one call, re-scans it for
/// the start (and destination where needed), marks cells `Visited` while it
/// works, and restores the grid with [`Grid::reset_visited`] before
/// returning, whether or not a route was found. An unreachable destination
/// is an ordinary outcome (`solved = false`), not an error.
pub trait PathFinder {
    fn find_path(&mut self, grid: &mut Grid) -> Result<SearchResult, SearchError>;
}

/// The closed set of supported strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dfs,
    Bfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dfs => "DFS",
            Algorithm::Bfs => "BFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "Astar",
        }
    }

    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DFS" => Ok(Algorithm::Dfs),
            "BFS" => Ok(Algorithm::Bfs),
            "Dijkstra" => Ok(Algorithm::Dijkstra),
            "Astar" => Ok(Algorithm::AStar),
            other => Err(SearchError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Runs the given strategy against the grid.
pub fn solve(grid: &mut Grid, algorithm: Algorithm) -> Result<SearchResult, SearchError> {
    let mut finder: Box<dyn PathFinder> = match algorithm {
        Algorithm::Dfs => Box::new(DepthFirst::new()),
        Algorithm::Bfs => Box::new(BreadthFirst::new()),
        Algorithm::Dijkstra => Box::new(Dijkstra::new()),
        Algorithm::AStar => Box::new(AStar::new()),
    };
    finder.find_path(grid)
}

/// Resolves `name` and dispatches. The grid is not touched when the name is
/// unknown.
pub fn solve_named(grid: &mut Grid, name: &str) -> Result<SearchResult, SearchError> {
    let algorithm = name.parse::<Algorithm>()?;
    solve(grid, algorithm)
}

pub(crate) fn find_start(grid: &Grid) -> Result<Position, SearchError> {
    grid.find(CellState::Start).ok_or(SearchError::MissingStart)
}

pub(crate) fn find_destination(grid: &Grid) -> Result<Position, SearchError> {
    grid.find(CellState::Destination)
        .ok_or(SearchError::MissingDestination)
}
