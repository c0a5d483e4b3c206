//! CLI for the day-2 range digit classifier.
//!
//! Reads comma-separated `<start>-<end>` ranges, tests every integer in
//! every range against the two digit-pattern predicates and prints the
//! matching sums.

use clap::Parser;
use puzzle_solvers_rs::{evaluate, parse_ranges};

/// Sum the integers in the given ranges that match the digit-pattern
/// predicates.
#[derive(Parser)]
#[command(name = "day2")]
struct Cli {
    /// Range file, one or more comma-separated <start>-<end> per line
    #[arg(default_value = "input.txt")]
    input: String,
}

fn main() {
    let cli = Cli::parse();

    let ranges = match parse_ranges(&cli.input) {
        Ok(ranges) => ranges,
        Err(e) => {
            println!("Error reading file: {e}");
            return;
        }
    };

    let totals = evaluate(&ranges);

    println!("Sum of all invalid IDs (Part 1): {}", totals.sum1);
    println!("Sum of all invalid IDs (Part 2): {}", totals.sum2);
}
