//! A* over the implicit graph of puzzle states, plus a breadth-first
//! reference search.

use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, HashMap},
};

use pathfinding::directed::bfs::bfs;

use crate::{
    error::SolveError,
    state::{is_solvable, State},
};

/// A shortest path together with how much work it took to find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Initial state first, goal last.
    pub path: Vec<State>,
    /// States expanded before the goal was dequeued.
    pub visited: usize,
    /// Successors generated across all expansions.
    pub generated: usize,
}

impl Solution {
    pub fn moves(&self) -> usize {
        self.path.len() - 1
    }
}

// (estimated total, estimate, insertion order): among equal totals prefer
// the state closer to the goal, then the one pushed first
type FrontierKey = (u32, u32, u64);

struct FrontierEntry {
    key: Reverse<FrontierKey>,
    cost: u32,
    state: State,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority queue of states; a state may sit in it several times.
struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    pushed: u64,
}

impl Frontier {
    fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    fn push(&mut self, cost: u32, estimate: u32, state: State) {
        self.heap.push(FrontierEntry {
            key: Reverse((cost + estimate, estimate, self.pushed)),
            cost,
            state,
        });
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }
}

/// Finds a shortest sequence of slides from `initial` to `goal`.
///
/// `heuristic` must never overestimate the remaining number of moves, or
/// the returned path may not be minimal. Configurations of the wrong parity
/// are rejected as [`SolveError::Unsolvable`] before any search happens.
pub fn solve<H>(initial: &State, goal: &State, mut heuristic: H) -> Result<Solution, SolveError>
where
    H: FnMut(&State, &State) -> u32,
{
    if !is_solvable(initial, goal) {
        return Err(SolveError::Unsolvable);
    }

    let mut cost_so_far: HashMap<State, u32> = HashMap::new();
    let mut predecessor: HashMap<State, Option<State>> = HashMap::new();
    let mut frontier = Frontier::new();

    cost_so_far.insert(*initial, 0);
    predecessor.insert(*initial, None);
    frontier.push(0, heuristic(initial, goal), *initial);

    let mut visited = 0;
    let mut generated = 0;

    while let Some(FrontierEntry { cost, state, .. }) = frontier.pop() {
        // a cheaper route to this state was found after the entry was pushed
        if cost_so_far.get(&state).map_or(true, |&known| cost > known) {
            continue;
        }

        if state == *goal {
            return Ok(Solution {
                path: reconstruct(&predecessor, state),
                visited,
                generated,
            });
        }

        visited += 1;
        let next_cost = cost + 1;
        for next in state.successors() {
            generated += 1;

            let improves = cost_so_far
                .get(&next)
                .map_or(true, |&known| next_cost < known);
            if improves {
                cost_so_far.insert(next, next_cost);
                predecessor.insert(next, Some(state));
                frontier.push(next_cost, heuristic(&next, goal), next);
            }
        }
    }

    Err(SolveError::Unsolvable)
}

/// [`solve`] for raw row-major cells, validating both configurations first.
pub fn solve_cells<H>(initial: &[u8], goal: &[u8], heuristic: H) -> Result<Solution, SolveError>
where
    H: FnMut(&State, &State) -> u32,
{
    let initial = State::try_from(initial)?;
    let goal = State::try_from(goal)?;
    solve(&initial, &goal, heuristic)
}

fn reconstruct(predecessor: &HashMap<State, Option<State>>, goal: State) -> Vec<State> {
    let mut path = vec![goal];
    let mut cursor = goal;
    while let Some(&Some(previous)) = predecessor.get(&cursor) {
        path.push(previous);
        cursor = previous;
    }

    path.reverse();
    path
}

/// Uninformed shortest path; `None` when the goal is unreachable.
///
/// Only practical for states a handful of moves from the goal.
pub fn breadth_first(initial: &State, goal: &State) -> Option<Vec<State>> {
    if !is_solvable(initial, goal) {
        return None;
    }

    bfs(initial, |s| s.successors(), |s| s == goal)
}
