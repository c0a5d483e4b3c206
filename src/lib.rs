//! # puzzle-solvers-rs
//!
//! Two independent line-oriented puzzle solvers, each a three-stage
//! batch pipeline: read a small text file, parse each line into a typed
//! record, fold the records into running totals.
//!
//! - [`dial`] simulates a circular dial (positions `0..100`, starting
//!   at 50) rotated by `<L|R><steps>` instructions, counting rotations
//!   that land on 0 and every unit-step pass through 0.
//! - [`ranges`] parses comma-separated `<start>-<end>` integer ranges
//!   and sums the integers whose decimal digits form two equal halves
//!   or a repeated proper substring.
//!
//! Both solvers share only their error tiers: a fatal
//! [`SolverError`] for I/O failures and a recoverable [`ParseError`]
//! for single lines or tokens, which callers report and skip.
//!
//! ## Example
//!
//! ```
//! use puzzle_solvers_rs::{Direction, Rotation, START_POSITION, simulate};
//!
//! let rotations = vec![
//!     Rotation { direction: Direction::Right, steps: 50 },
//!     Rotation { direction: Direction::Left, steps: 25 },
//! ];
//!
//! let report = simulate(START_POSITION, &rotations);
//! assert_eq!(report.password, 1); // R50 lands exactly on 0
//! assert_eq!(report.final_position, 75);
//! ```

pub mod dial;
pub mod error;
pub mod ranges;

pub use dial::{
    DIAL_SIZE, DialReport, Direction, Rotation, RotationTrace, START_POSITION, parse_rotation,
    parse_rotations, simulate,
};
pub use error::{ParseError, SolverError};
pub use ranges::{
    Range, RangeTotals, consists_of_repeated_sequences, evaluate, mirrored_halves, parse_range,
    parse_ranges,
};
