//! Error types for the puzzle solvers.
//!
//! Errors come in two tiers. A [`SolverError`] is fatal: the run aborts
//! and no summary is produced. A [`ParseError`] covers a single line or
//! range token; the caller reports it and continues with the rest of
//! the input.

use thiserror::Error;

/// Fatal error: the input file could not be read.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Recoverable per-unit parse failure.
///
/// Each variant carries the offending text so diagnostics can name it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Instruction line shorter than direction + one digit.
    #[error("line too short: {0}")]
    LineTooShort(String),

    /// First character is neither `L` nor `R`.
    #[error("invalid direction: {0}")]
    InvalidDirection(char),

    /// Step count is not a non-negative integer.
    #[error("invalid steps: {0}")]
    InvalidSteps(String),

    /// Range token is not of the form `<integer>-<integer>`.
    #[error("invalid range format: {0}")]
    InvalidRangeFormat(String),

    /// Start of a range failed to parse as an integer.
    #[error("invalid start of range: {0}")]
    InvalidRangeStart(String),

    /// End of a range failed to parse as an integer.
    #[error("invalid end of range: {0}")]
    InvalidRangeEnd(String),
}
