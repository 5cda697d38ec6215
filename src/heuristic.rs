//! Admissible, consistent estimates of the number of moves left.
//!
//! Every evaluator is a pure function of `(state, goal)` and returns 0 when
//! the two are equal, so any of them can be handed to [`crate::solve`].

use std::{fmt::Display, str::FromStr};

use itertools::Itertools;

use crate::{
    error::UnknownHeuristic,
    state::{State, BLANK, CELLS, SIDE},
};

/// Number of tiles (not counting the blank) that sit on the wrong cell.
pub fn misplaced_tiles(state: &State, goal: &State) -> u32 {
    state
        .cells()
        .iter()
        .zip_eq(goal.cells())
        .filter(|(s, g)| **s != BLANK && s != g)
        .count() as u32
}

/// Sum over all tiles of the taxicab distance to their goal cell.
pub fn manhattan_distance(state: &State, goal: &State) -> u32 {
    let target = goal.positions();
    state
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, c)| **c != BLANK)
        .map(|(ix, c)| taxicab(ix, target[*c as usize]))
        .sum()
}

/// Manhattan distance plus two moves for every tile that must leave its
/// goal row or column to let the others in that line pass.
pub fn linear_conflict(state: &State, goal: &State) -> u32 {
    let target = goal.positions();
    let mut conflicts = 0;

    for line in 0..SIDE {
        // tiles already in their goal row, by current column
        let row: Vec<usize> = (0..SIDE)
            .map(|col| state[(line, col)])
            .filter(|c| *c != BLANK && target[*c as usize] / SIDE == line)
            .map(|c| target[c as usize] % SIDE)
            .collect();
        conflicts += row.len() - longest_increasing(&row);

        let column: Vec<usize> = (0..SIDE)
            .map(|r| state[(r, line)])
            .filter(|c| *c != BLANK && target[*c as usize] % SIDE == line)
            .map(|c| target[c as usize] / SIDE)
            .collect();
        conflicts += column.len() - longest_increasing(&column);
    }

    manhattan_distance(state, goal) + 2 * conflicts as u32
}

fn taxicab(a: usize, b: usize) -> u32 {
    ((a / SIDE).abs_diff(b / SIDE) + (a % SIDE).abs_diff(b % SIDE)) as u32
}

// lines hold at most SIDE entries, so quadratic is fine
fn longest_increasing(xs: &[usize]) -> usize {
    let mut best = [1usize; CELLS];
    for i in 0..xs.len() {
        for j in 0..i {
            if xs[j] < xs[i] {
                best[i] = best[i].max(best[j] + 1);
            }
        }
    }

    best[..xs.len()].iter().copied().max().unwrap_or(0)
}

/// Selects one of the evaluators by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    MisplacedTiles,
    Manhattan,
    LinearConflict,
}

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [
        Heuristic::MisplacedTiles,
        Heuristic::Manhattan,
        Heuristic::LinearConflict,
    ];

    pub fn evaluate(self, state: &State, goal: &State) -> u32 {
        match self {
            Heuristic::MisplacedTiles => misplaced_tiles(state, goal),
            Heuristic::Manhattan => manhattan_distance(state, goal),
            Heuristic::LinearConflict => linear_conflict(state, goal),
        }
    }
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Heuristic::MisplacedTiles => "misplaced tiles",
            Heuristic::Manhattan => "Manhattan distance",
            Heuristic::LinearConflict => "linear conflict",
        })
    }
}

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "misplaced" | "misplaced-tiles" => Ok(Heuristic::MisplacedTiles),
            "manhattan" => Ok(Heuristic::Manhattan),
            "linear" | "linear-conflict" => Ok(Heuristic::LinearConflict),
            _ => Err(UnknownHeuristic(s.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{breadth_first, parse_state, scramble};

    #[test]
    fn zero_exactly_at_goal() {
        let goal = State::goal();
        for h in Heuristic::ALL {
            assert_eq!(h.evaluate(&goal, &goal), 0);
        }

        let one_move = parse_state("1 0 2 3 4 5 6 7 8 9 10 11 12 13 14 15").unwrap();
        for h in Heuristic::ALL {
            assert!(h.evaluate(&one_move, &goal) > 0);
        }
    }

    #[test]
    fn known_values() {
        let goal = State::goal();
        let s = parse_state("9 1 5 3 4 6 2 7 8 12 15 0 14 13 11 10").unwrap();
        // 9, 5, 6, 2, 12, 15, 14, 11, 10 are out of place
        assert_eq!(misplaced_tiles(&s, &goal), 9);
        // 9:3 5:2 6:1 2:1 12:2 15:2 14:2 11:2 10:2
        assert_eq!(manhattan_distance(&s, &goal), 17);

        // 2 and 1 swapped within their goal row
        let swapped = parse_state("0 2 1 3 4 5 6 7 8 9 10 11 12 13 14 15").unwrap();
        assert_eq!(manhattan_distance(&swapped, &goal), 2);
        assert_eq!(linear_conflict(&swapped, &goal), 4);
    }

    #[test]
    fn estimates_are_ordered_and_admissible() {
        let goal = State::goal();
        let mut rng = StdRng::seed_from_u64(5);
        for moves in 0..=10 {
            let s = scramble(&goal, moves, &mut rng);
            let distance = breadth_first(&s, &goal).unwrap().len() as u32 - 1;

            let misplaced = misplaced_tiles(&s, &goal);
            let manhattan = manhattan_distance(&s, &goal);
            let linear = linear_conflict(&s, &goal);
            assert!(misplaced <= manhattan);
            assert!(manhattan <= linear);
            assert!(linear <= distance, "{linear} > {distance} for\n{s}");
        }
    }

    #[test]
    fn estimates_change_by_at_most_one_per_move() {
        let goal = State::goal();
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..100 {
            let s = scramble(&goal, 40, &mut rng);
            for next in s.successors() {
                for h in Heuristic::ALL {
                    let (a, b) = (h.evaluate(&s, &goal), h.evaluate(&next, &goal));
                    assert!(a.abs_diff(b) <= 1, "{h}: {a} -> {b}");
                }
            }
        }
    }

    #[test]
    fn accepts_any_goal() {
        let mut rng = StdRng::seed_from_u64(23);
        let goal = scramble(&State::goal(), 60, &mut rng);
        let s = scramble(&goal, 8, &mut rng);
        let distance = breadth_first(&s, &goal).unwrap().len() as u32 - 1;
        for h in Heuristic::ALL {
            assert_eq!(h.evaluate(&goal, &goal), 0);
            assert!(h.evaluate(&s, &goal) <= distance);
        }
    }

    #[test]
    fn parses_names() {
        assert_eq!("manhattan".parse::<Heuristic>(), Ok(Heuristic::Manhattan));
        assert_eq!("Misplaced".parse::<Heuristic>(), Ok(Heuristic::MisplacedTiles));
        assert_eq!("linear-conflict".parse::<Heuristic>(), Ok(Heuristic::LinearConflict));
        assert_eq!(
            "euclid".parse::<Heuristic>(),
            Err(UnknownHeuristic("euclid".to_string()))
        );
    }
}
