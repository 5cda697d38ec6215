use std::{
    fmt::{Display, Write},
    ops::Index,
};

use rand::{seq::SliceRandom, Rng};
use smallvec::SmallVec;

use crate::error::{InvariantViolation, StateError};

pub const SIDE: usize = 4;
pub const CELLS: usize = SIDE * SIDE;
pub const BLANK: u8 = 0;

/// At most four slides are possible from any position.
pub type Successors = SmallVec<[State; 4]>;

/// One configuration of the 4x4 puzzle, stored row-major.
///
/// Construction validates that the cells hold each of 0..=15 exactly once,
/// so every `State` in circulation is well-formed.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct State {
    cells: [u8; CELLS],
}

impl State {
    pub fn new(cells: [u8; CELLS]) -> Result<State, StateError> {
        let mut seen = [false; CELLS];
        for &c in &cells {
            let slot = seen
                .get_mut(c as usize)
                .ok_or(StateError::ValueOutOfRange(c as u32))?;
            if *slot {
                return Err(StateError::DuplicateValue(c));
            }
            *slot = true;
        }

        Ok(State { cells })
    }

    pub fn from_rows(rows: [[u8; SIDE]; SIDE]) -> Result<State, StateError> {
        let mut cells = [0; CELLS];
        for (ix, c) in rows.iter().flatten().enumerate() {
            cells[ix] = *c;
        }

        State::new(cells)
    }

    /// The canonical goal: 0..=15 row-major, blank in the top-left corner.
    pub fn goal() -> State {
        let mut cells = [0; CELLS];
        for (ix, c) in cells.iter_mut().enumerate() {
            *c = ix as u8;
        }

        State { cells }
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    pub fn locate_blank(&self) -> Result<(usize, usize), InvariantViolation> {
        let mut found = None;
        let mut blanks = 0;
        for (ix, &c) in self.cells.iter().enumerate() {
            if c == BLANK {
                blanks += 1;
                found = Some(ix);
            }
        }

        match found {
            Some(ix) if blanks == 1 => Ok((ix / SIDE, ix % SIDE)),
            _ => Err(InvariantViolation { blanks }),
        }
    }

    /// Maps each value to the index of the cell holding it.
    pub fn positions(&self) -> [usize; CELLS] {
        let mut result = [0; CELLS];
        for (ix, &c) in self.cells.iter().enumerate() {
            result[c as usize] = ix;
        }

        result
    }

    /// Every state reachable by sliding one tile into the blank.
    pub fn successors(&self) -> Successors {
        let (row, col) = match self.locate_blank() {
            Ok(pos) => pos,
            Err(e) => panic!("move generation produced a malformed state: {e}"),
        };
        let blank = row * SIDE + col;

        let mut out = Successors::new();
        if row > 0 {
            out.push(self.swap(blank, blank - SIDE));
        }
        if row < SIDE - 1 {
            out.push(self.swap(blank, blank + SIDE));
        }
        if col > 0 {
            out.push(self.swap(blank, blank - 1));
        }
        if col < SIDE - 1 {
            out.push(self.swap(blank, blank + 1));
        }

        out
    }

    fn swap(&self, a: usize, b: usize) -> State {
        let mut cells = self.cells;
        cells.swap(a, b);
        State { cells }
    }
}

impl TryFrom<&[u8]> for State {
    type Error = StateError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let cells: [u8; CELLS] = value
            .try_into()
            .map_err(|_| StateError::WrongCellCount(value.len()))?;
        State::new(cells)
    }
}

impl Index<(usize, usize)> for State {
    type Output = u8;
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.cells[index.0 * SIDE + index.1]
    }
}

const LETTERS: &[u8; CELLS] = b" ABCDEFGHIJKLMNO";

// tiles print as letters so every cell is one character wide
impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for line in self.cells.chunks(SIDE) {
            if !first {
                f.write_char('\n')?;
            } else {
                first = false;
            }

            for (ix, c) in line.iter().enumerate() {
                if ix > 0 {
                    f.write_char(' ')?;
                }
                f.write_char(LETTERS[*c as usize] as char)?;
            }
        }

        Ok(())
    }
}

/// Reads 16 whitespace-separated integers, row-major.
pub fn parse_state(s: &str) -> Result<State, StateError> {
    let cells = s
        .split_whitespace()
        .map(|token| {
            let value: u32 = token
                .parse()
                .map_err(|_| StateError::Parse(token.to_string()))?;
            u8::try_from(value)
                .ok()
                .filter(|v| (*v as usize) < CELLS)
                .ok_or(StateError::ValueOutOfRange(value))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    State::try_from(cells.as_slice())
}

/// Whether `goal` can be reached from `state` at all.
///
/// Every slide is one transposition and moves the blank one step, so the
/// permutation parity relative to the goal must match the parity of the
/// blank's taxicab distance to its goal cell.
pub fn is_solvable(state: &State, goal: &State) -> bool {
    let target = goal.positions();

    let mut seen = [false; CELLS];
    let mut cycles = 0;
    for start in 0..CELLS {
        if seen[start] {
            continue;
        }

        cycles += 1;
        let mut ix = start;
        while !seen[ix] {
            seen[ix] = true;
            ix = target[state.cells[ix] as usize];
        }
    }

    let blank = state.positions()[BLANK as usize];
    let goal_blank = target[BLANK as usize];
    let blank_distance =
        (blank / SIDE).abs_diff(goal_blank / SIDE) + (blank % SIDE).abs_diff(goal_blank % SIDE);

    (CELLS - cycles) % 2 == blank_distance % 2
}

/// Random walk of `moves` slides from `from`, never undoing the previous
/// slide straight away.
pub fn scramble<R: Rng + ?Sized>(from: &State, moves: usize, rng: &mut R) -> State {
    let mut previous = None;
    let mut current = *from;

    for _ in 0..moves {
        let options: Successors = current
            .successors()
            .into_iter()
            .filter(|s| Some(*s) != previous)
            .collect();

        match options.choose(rng) {
            Some(&next) => {
                previous = Some(current);
                current = next;
            }
            None => break,
        }
    }

    current
}
