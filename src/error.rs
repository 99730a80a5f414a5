//! Typed search errors.
//!
//! These represent precondition violations only, surfaced before any grid
//! mutation takes place. An unreachable destination is an ordinary search
//! outcome and is reported through `SearchResult::solved`, never through
//! this type.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// No cell is in state `Start` when a search begins.
    MissingStart,
    /// No cell is in state `Destination`. Only A* requires this up front,
    /// and it checks it before `MissingStart`.
    MissingDestination,
    /// The dispatcher was given an algorithm name it does not know.
    UnknownAlgorithm(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => write!(f, "no cell is marked as the start"),
            Self::MissingDestination => write!(f, "no cell is marked as the destination"),
            Self::UnknownAlgorithm(name) => write!(f, "unknown algorithm: {name}"),
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_name() {
        let err = SearchError::UnknownAlgorithm("Quantum".to_string());
        assert_eq!(err.to_string(), "unknown algorithm: Quantum");
    }
}
