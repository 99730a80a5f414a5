//! Grid pathfinding with a replayable search trace.
//!
//! A [`Grid`] is a fixed-size board of cells with 4-directional adjacency
//! and live wall filtering. A caller marks one `Start`, one `Destination`
//! and any number of `Wall` cells, then dispatches one of four strategies
//! (depth-first, breadth-first, Dijkstra, A*) by name or by [`Algorithm`]
//! tag. Every strategy returns the same [`SearchResult`]: the discovery
//! order of every examined cell, the reconstructed route, and a success
//! flag — enough for a consumer to replay the search step by step after the
//! grid has been restored to its pre-search appearance.

pub mod algorithms;
pub mod config;
pub mod error;
pub mod grid;
pub mod result;

pub use algorithms::{solve, solve_named, Algorithm, PathFinder};
pub use error::SearchError;
pub use grid::{CellState, Grid, Position};
pub use result::SearchResult;
