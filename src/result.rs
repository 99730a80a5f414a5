use crate::grid::Position;

/// The artifact produced by one search run.
///
/// `visited` is the discovery order: every cell the strategy examined, in
/// the order it first examined them, excluding walls and the start cell.
/// `path` runs from the first cell after the start through the destination
/// inclusive, and is empty when the destination was unreachable.
///
/// The sequences snapshot cell identity, not state: by the time a result is
/// returned the grid has already been reset, so replaying a result against
/// the grid is the consumer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub visited: Vec<Position>,
    pub path: Vec<Position>,
    pub solved: bool,
}

impl SearchResult {
    /// A failed search: whatever was examined before the frontier ran dry,
    /// and no path.
    pub fn unsolved(visited: Vec<Position>) -> Self {
        SearchResult {
            visited,
            path: Vec::new(),
            solved: false,
        }
    }

    pub fn solved(visited: Vec<Position>, path: Vec<Position>) -> Self {
        SearchResult {
            visited,
            path,
            solved: true,
        }
    }

    /// Path length in edges. The path excludes the start cell, so this is
    /// simply its element count.
    pub fn path_len(&self) -> usize {
        self.path.len()
    }
}
