//! Day-2 range digit classifier.
//!
//! Input lines hold comma-separated inclusive integer ranges such as
//! `10-50,1000-1050`. Every integer in every range is tested against
//! two digit-pattern predicates:
//!
//! - [`mirrored_halves`]: the decimal string has an even digit count
//!   and its two halves are numerically equal (`1212` -> `12` = `12`).
//! - [`consists_of_repeated_sequences`]: the decimal string is tiled by
//!   a proper repeating substring, repeated at least twice (`111`,
//!   `4545`, but not `123` and never a single digit).
//!
//! Matching integers are summed per predicate. Overlapping ranges are
//! not deduplicated: a value present in two ranges is counted once per
//! range.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ParseError, SolverError};

/// One inclusive integer range.
///
/// `start > end` is allowed and simply covers no integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: i64,
    pub end: i64,
}

/// Sums of matching integers across all ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeTotals {
    /// Sum of integers whose decimal halves are numerically equal.
    pub sum1: i64,
    /// Sum of integers tiled by a proper repeating substring.
    pub sum2: i64,
}

/// Parse a single `<integer>-<integer>` token.
pub fn parse_range(text: &str) -> Result<Range, ParseError> {
    let parts: Vec<&str> = text.split('-').collect();
    if parts.len() != 2 {
        return Err(ParseError::InvalidRangeFormat(text.to_string()));
    }

    let start: i64 = parts[0]
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidRangeStart(parts[0].to_string()))?;
    let end: i64 = parts[1]
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidRangeEnd(parts[1].to_string()))?;

    Ok(Range { start, end })
}

/// Read a range file into an ordered collection of ranges.
///
/// Each non-empty line is split on `,`; tokens that fail
/// [`parse_range`] are reported to stdout and skipped individually, so
/// well-formed ranges on the same line are still collected. I/O
/// failures are fatal.
pub fn parse_ranges(path: impl AsRef<Path>) -> Result<Vec<Range>, SolverError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut ranges = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        for token in line.split(',') {
            match parse_range(token) {
                Ok(range) => ranges.push(range),
                Err(e) => println!("Error parsing range '{token}': {e}"),
            }
        }
    }

    Ok(ranges)
}

/// Does the decimal string split into two numerically equal halves?
///
/// Odd-length strings never qualify. The halves are compared as parsed
/// integers, not as text. A half that fails to parse (possible only for
/// non-digit input such as a sign character) is reported and treated as
/// a non-match.
pub fn mirrored_halves(digits: &str) -> bool {
    let len = digits.len();
    if len % 2 != 0 {
        return false;
    }

    let (first, second) = digits.split_at(len / 2);

    let first: i64 = match first.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            println!("Error parsing first half of {digits}: {e}");
            return false;
        }
    };
    let second: i64 = match second.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            println!("Error parsing second half of {digits}: {e}");
            return false;
        }
    };

    first == second
}

/// Is the string tiled by a proper repeating substring?
///
/// Tries every substring length from 1 to half the total length that
/// divides it evenly, and accepts the first one whose repetition
/// reproduces the whole string. The bound of half the length guarantees
/// at least two repetitions; a length-1 string never qualifies.
pub fn consists_of_repeated_sequences(digits: &str) -> bool {
    let len = digits.len();
    if len == 1 {
        return false;
    }

    for seq_len in 1..=len / 2 {
        if len % seq_len != 0 {
            continue;
        }

        let sequence = &digits.as_bytes()[..seq_len];
        if digits
            .as_bytes()
            .chunks(seq_len)
            .all(|chunk| chunk == sequence)
        {
            return true;
        }
    }

    false
}

/// Test every integer in every range against both predicates and sum
/// the matches.
///
/// Runs in O(total range width x digit count); there is no closed-form
/// shortcut here, inputs are expected to be modest.
pub fn evaluate(ranges: &[Range]) -> RangeTotals {
    let mut totals = RangeTotals::default();

    for range in ranges {
        for i in range.start..=range.end {
            let digits = i.to_string();

            if mirrored_halves(&digits) {
                totals.sum1 += i;
            }
            if consists_of_repeated_sequences(&digits) {
                totals.sum2 += i;
            }
        }
    }

    totals
}
