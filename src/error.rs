//! Error types for building states and running the solver.

use std::fmt;

/// A configuration that is not one blank plus a permutation of 1..=15.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The input did not hold exactly 16 cells.
    WrongCellCount(usize),
    /// A cell held a value outside 0..=15.
    ValueOutOfRange(u32),
    /// A value appeared more than once.
    DuplicateValue(u8),
    /// A token could not be read as an integer.
    Parse(String),
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongCellCount(n) => write!(f, "expected 16 cells, found {n}"),
            Self::ValueOutOfRange(v) => write!(f, "cell value {v} is outside 0..=15"),
            Self::DuplicateValue(v) => write!(f, "value {v} appears more than once"),
            Self::Parse(token) => write!(f, "cannot read {token:?} as a cell value"),
        }
    }
}

impl std::error::Error for StateError {}

/// Blank lookup found zero or several blanks in a state that was already
/// validated. Only a bug in move generation can produce this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvariantViolation {
    pub blanks: usize,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "state holds {} blank cells, expected exactly 1", self.blanks)
    }
}

impl std::error::Error for InvariantViolation {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    InvalidState(StateError),
    /// No sequence of slides reaches the goal.
    Unsolvable,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState(e) => write!(f, "invalid state: {e}"),
            Self::Unsolvable => f.write_str("no sequence of moves reaches the goal"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidState(e) => Some(e),
            Self::Unsolvable => None,
        }
    }
}

impl From<StateError> for SolveError {
    fn from(e: StateError) -> Self {
        Self::InvalidState(e)
    }
}

/// A heuristic name that matches none of the evaluators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHeuristic(pub String);

impl fmt::Display for UnknownHeuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown heuristic {:?} (expected misplaced, manhattan or linear)",
            self.0
        )
    }
}

impl std::error::Error for UnknownHeuristic {}
