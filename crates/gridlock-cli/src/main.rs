//! Command-line puzzle solver.
//!
//! Reads an 81-character puzzle string (digits for givens, `.` for empty
//! cells, row-major order) and prints the solved grid.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin gridlock -- "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3.."
//! ```
//!
//! Solve with the additional main/anti-diagonal constraints:
//!
//! ```sh
//! cargo run --bin gridlock -- --diagonal "2.............62....1....7...6..8..."
//! ```
//!
//! Print every single-value assignment as it happens:
//!
//! ```sh
//! cargo run --bin gridlock -- --trace "..3.2.6..9..3.5..1..18.64....81.29.."
//! ```

use std::process::ExitCode;

use clap::Parser;
use gridlock_core::{CandidateGrid, Variant};
use gridlock_solver::{NullTrace, RecordedTrace, SolveError, solve_with_trace};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// 81-character puzzle string: digits 1-9 for givens, `.` for empty
    /// cells, rows top to bottom.
    #[arg(value_name = "PUZZLE")]
    puzzle: String,

    /// Require distinct digits on both main diagonals as well.
    #[arg(long)]
    diagonal: bool,

    /// Print every single-value assignment in the order it was made.
    #[arg(long)]
    trace: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), SolveError> {
    let variant = if args.diagonal {
        Variant::Diagonal
    } else {
        Variant::Classic
    };
    log::debug!("solving as {variant:?}");

    let solution = if args.trace {
        let mut trace = RecordedTrace::new();
        let solution = solve_with_trace(&args.puzzle, variant, &mut trace);
        for event in trace.events() {
            println!("{}={}", event.cell(), event.digit());
        }
        solution?
    } else {
        solve_with_trace(&args.puzzle, variant, &mut NullTrace)?
    };

    let grid = CandidateGrid::from_givens(&solution)?;
    println!("{}", grid.display());
    println!("{solution}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_args_parse() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_run_solves_classic_puzzle() {
        let args = Args {
            puzzle:
                "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3.."
                    .to_owned(),
            diagonal: false,
            trace: false,
        };
        assert!(run(&args).is_ok());
    }

    #[test]
    fn test_run_reports_no_solution() {
        let args = Args {
            puzzle: "55".to_owned() + &".".repeat(79),
            diagonal: false,
            trace: false,
        };
        assert_eq!(run(&args), Err(SolveError::NoSolution));
    }
}
