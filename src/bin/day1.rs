//! CLI for the day-1 dial rotation puzzle.
//!
//! Reads `<L|R><steps>` instructions, simulates the dial from position
//! 50 and prints a per-rotation trace plus the final password counts.

use clap::Parser;
use puzzle_solvers_rs::{START_POSITION, parse_rotations, simulate};

/// Simulate dial rotations and count the landings on position 0.
#[derive(Parser)]
#[command(name = "day1")]
struct Cli {
    /// Instruction file, one <L|R><steps> per line
    #[arg(default_value = "input.txt")]
    input: String,
}

fn main() {
    let cli = Cli::parse();

    let rotations = match parse_rotations(&cli.input) {
        Ok(rotations) => rotations,
        Err(e) => {
            println!("Failed to parse file: {e}");
            return;
        }
    };

    let report = simulate(START_POSITION, &rotations);

    println!("Starting dial position: {}", report.start);

    let mut landings = 0u64;
    for trace in &report.traces {
        println!(
            "Step {}: {} -> {} to {}",
            trace.step, trace.rotation, trace.from, trace.to
        );
        if trace.landed_on_zero {
            landings += 1;
            println!("  -> Landed on 0! Password increment: {landings}");
        }
    }

    println!("Final dial position: {}", report.final_position);
    println!("Password: {}", report.password);
    println!("Password part 2: {}", report.password2);
}
