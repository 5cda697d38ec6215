//! Optimal solver for the 4x4 sliding-tile puzzle.
//!
//! A [`State`] is one configuration; [`solve`] runs A* from an initial state
//! to a goal state, guided by one of the evaluators in [`heuristic`].

pub mod error;
pub mod heuristic;
pub mod search;
pub mod state;

pub use error::{InvariantViolation, SolveError, StateError, UnknownHeuristic};
pub use heuristic::{linear_conflict, manhattan_distance, misplaced_tiles, Heuristic};
pub use search::{breadth_first, solve, solve_cells, Solution};
pub use state::{is_solvable, parse_state, scramble, State, Successors};
