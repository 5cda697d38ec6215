use std::{env, fs, time::Instant};

use anyhow::{Context, Result};
use slider15::{parse_state, solve, Heuristic, State};

// Usage: slider15 [misplaced|manhattan|linear] [PUZZLE_FILE]
//
// A puzzle file holds 16 whitespace-separated numbers, row-major,
// with 0 for the blank. The goal is always 0..15 row-major.
const DEMO: &str = "
 9  1  5  3
 4  6  2  7
 8 12 15  0
14 13 11 10
";

fn main() -> Result<()> {
    let mut args = env::args().skip(1);

    let heuristics = match args.next() {
        Some(name) => vec![name.parse::<Heuristic>()?],
        None => vec![Heuristic::Manhattan, Heuristic::LinearConflict],
    };

    let puzzle = match args.next() {
        Some(path) => {
            let text =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
            parse_state(&text).with_context(|| format!("parsing {}", path))?
        }
        None => parse_state(DEMO).context("parsing built-in puzzle")?,
    };
    let goal = State::goal();

    println!("----");
    println!("Source:");
    println!("{}", puzzle);
    println!("----");

    for heuristic in heuristics {
        println!(
            "Initial {} estimate: {}",
            heuristic,
            heuristic.evaluate(&puzzle, &goal)
        );
        println!("Solving with {} heuristic:", heuristic);

        let start = Instant::now();
        let solution = solve(&puzzle, &goal, |s, g| heuristic.evaluate(s, g))
            .with_context(|| format!("solving with {}", heuristic))?;
        let elapsed = start.elapsed();

        println!("Found a solution in {} moves:", solution.moves());
        println!(
            "Visited {} board positions (generated {} total).",
            solution.visited, solution.generated
        );
        println!("Time taken: {:.4} seconds", elapsed.as_secs_f64());
        println!("----");

        for step in &solution.path {
            println!("{}", step);
            println!();
        }
    }

    Ok(())
}
