//! Day-1 dial rotation simulator.
//!
//! A circular dial with positions `0..100` starts at 50 and is rotated
//! left or right by a sequence of parsed instructions. Two counters are
//! kept: `password` counts rotations whose final position is exactly 0,
//! and `password2` counts every unit-step visit to 0 during the
//! traversal of each rotation, final landing included.
//!
//! The simulator returns a [`RotationTrace`] per applied rotation so
//! that binaries own all printing.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ParseError, SolverError};

/// Number of positions on the dial.
pub const DIAL_SIZE: i64 = 100;

/// Position the dial starts at.
pub const START_POSITION: i64 = 50;

/// Which way a rotation turns the dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward lower positions, wrapping 0 -> 99.
    Left,
    /// Toward higher positions, wrapping 99 -> 0.
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "L"),
            Direction::Right => write!(f, "R"),
        }
    }
}

/// One parsed instruction line, e.g. `R100` or `L5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    pub direction: Direction,
    pub steps: u32,
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction, self.steps)
    }
}

/// Record of one applied rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationTrace {
    /// 1-based position in the instruction sequence.
    pub step: usize,
    pub rotation: Rotation,
    /// Dial position before the rotation.
    pub from: i64,
    /// Dial position after the rotation, normalized into `[0, 100)`.
    pub to: i64,
    /// Unit-step visits to 0 during this rotation.
    pub zero_crossings: u64,
    /// Whether the final position is exactly 0.
    pub landed_on_zero: bool,
}

/// Full result of simulating an instruction sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialReport {
    /// Position the simulation started from.
    pub start: i64,
    /// Position after the last rotation.
    pub final_position: i64,
    /// Count of rotations that landed exactly on 0.
    pub password: u64,
    /// Total unit-step visits to 0 across all rotations.
    pub password2: u64,
    /// One trace per applied rotation, in order.
    pub traces: Vec<RotationTrace>,
}

/// Parse a single instruction line.
///
/// The first character is the direction (`L` or `R`), the remainder is
/// a non-negative step count.
pub fn parse_rotation(line: &str) -> Result<Rotation, ParseError> {
    let mut chars = line.chars();
    let Some(first) = chars.next() else {
        return Err(ParseError::LineTooShort(line.to_string()));
    };
    let rest = chars.as_str();
    if rest.is_empty() {
        return Err(ParseError::LineTooShort(line.to_string()));
    }

    let direction = match first {
        'L' => Direction::Left,
        'R' => Direction::Right,
        other => return Err(ParseError::InvalidDirection(other)),
    };

    let steps: u32 = rest
        .parse()
        .map_err(|_| ParseError::InvalidSteps(rest.to_string()))?;

    Ok(Rotation { direction, steps })
}

/// Read an instruction file into a rotation sequence.
///
/// Blank lines are skipped silently; lines that fail [`parse_rotation`]
/// are reported to stdout and skipped. I/O failures are fatal.
pub fn parse_rotations(path: impl AsRef<Path>) -> Result<Vec<Rotation>, SolverError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut rotations = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_rotation(line) {
            Ok(rotation) => rotations.push(rotation),
            Err(e) => println!("Error parsing line '{line}': {e}"),
        }
    }

    Ok(rotations)
}

/// Apply each rotation in order, starting from `start`.
///
/// The zero-crossing count comes from a literal unit walk: a single
/// rotation can pass 0 several times when it wraps more than once, and
/// the walk is the only count that captures every visit. The final
/// position is computed independently from the net displacement.
pub fn simulate(start: i64, rotations: &[Rotation]) -> DialReport {
    let mut dial = start;
    let mut password = 0u64;
    let mut password2 = 0u64;
    let mut traces = Vec::with_capacity(rotations.len());

    for (i, rotation) in rotations.iter().copied().enumerate() {
        let from = dial;

        let (_, zero_crossings) = unit_walk(dial, rotation);

        let displacement = match rotation.direction {
            Direction::Left => -i64::from(rotation.steps),
            Direction::Right => i64::from(rotation.steps),
        };
        dial = (dial + displacement).rem_euclid(DIAL_SIZE);

        let landed_on_zero = dial == 0;
        if landed_on_zero {
            password += 1;
        }
        password2 += zero_crossings;

        traces.push(RotationTrace {
            step: i + 1,
            rotation,
            from,
            to: dial,
            zero_crossings,
            landed_on_zero,
        });
    }

    DialReport {
        start,
        final_position: dial,
        password,
        password2,
        traces,
    }
}

/// Walk one rotation a unit step at a time.
///
/// Returns the position after the walk and the number of steps that
/// landed on 0 along the way, final step included.
fn unit_walk(start: i64, rotation: Rotation) -> (i64, u64) {
    let mut pos = start;
    let mut crossings = 0u64;

    for _ in 0..rotation.steps {
        pos = match rotation.direction {
            Direction::Left => {
                if pos == 0 {
                    DIAL_SIZE - 1
                } else {
                    pos - 1
                }
            }
            Direction::Right => {
                if pos == DIAL_SIZE - 1 {
                    0
                } else {
                    pos + 1
                }
            }
        };
        if pos == 0 {
            crossings += 1;
        }
    }

    (pos, crossings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rot(direction: Direction, steps: u32) -> Rotation {
        Rotation { direction, steps }
    }

    #[test]
    fn parse_right_rotation() {
        assert_eq!(parse_rotation("R100"), Ok(rot(Direction::Right, 100)));
    }

    #[test]
    fn parse_left_rotation() {
        assert_eq!(parse_rotation("L5"), Ok(rot(Direction::Left, 5)));
    }

    #[test]
    fn parse_rejects_invalid_direction() {
        assert_eq!(
            parse_rotation("X10"),
            Err(ParseError::InvalidDirection('X'))
        );
    }

    #[test]
    fn parse_rejects_short_line() {
        assert_eq!(
            parse_rotation("R"),
            Err(ParseError::LineTooShort("R".to_string()))
        );
        assert_eq!(
            parse_rotation(""),
            Err(ParseError::LineTooShort(String::new()))
        );
    }

    #[test]
    fn parse_rejects_bad_steps() {
        assert_eq!(
            parse_rotation("Rxx"),
            Err(ParseError::InvalidSteps("xx".to_string()))
        );
        // Negative step counts are not representable.
        assert_eq!(
            parse_rotation("L-5"),
            Err(ParseError::InvalidSteps("-5".to_string()))
        );
    }

    #[test]
    fn rotation_displays_like_input() {
        assert_eq!(rot(Direction::Right, 100).to_string(), "R100");
        assert_eq!(rot(Direction::Left, 5).to_string(), "L5");
    }

    #[test]
    fn full_wrap_crosses_zero_once_without_landing() {
        let report = simulate(START_POSITION, &[rot(Direction::Right, 100)]);
        assert_eq!(report.final_position, 50);
        assert_eq!(report.password, 0);
        assert_eq!(report.password2, 1);
        assert!(!report.traces[0].landed_on_zero);
    }

    #[test]
    fn exact_landing_counts_both_ways() {
        let report = simulate(START_POSITION, &[rot(Direction::Right, 50)]);
        assert_eq!(report.final_position, 0);
        assert_eq!(report.password, 1);
        assert_eq!(report.password2, 1);
        assert!(report.traces[0].landed_on_zero);
    }

    #[test]
    fn left_rotation_wraps_below_zero() {
        let report = simulate(START_POSITION, &[rot(Direction::Left, 60)]);
        assert_eq!(report.final_position, 90);
        assert_eq!(report.password, 0);
        // Passes 0 once at step 50, then continues down to 90.
        assert_eq!(report.password2, 1);
    }

    #[test]
    fn multiple_wraps_count_every_visit() {
        let report = simulate(START_POSITION, &[rot(Direction::Right, 250)]);
        // Visits 0 at steps 50, 150 and 250; the last one also lands.
        assert_eq!(report.final_position, 0);
        assert_eq!(report.password, 1);
        assert_eq!(report.password2, 3);
    }

    #[test]
    fn zero_step_rotation_is_a_no_op() {
        let report = simulate(START_POSITION, &[rot(Direction::Left, 0)]);
        assert_eq!(report.final_position, 50);
        assert_eq!(report.password, 0);
        assert_eq!(report.password2, 0);
        assert_eq!(report.traces[0].from, report.traces[0].to);
    }

    #[test]
    fn traces_are_sequential_and_chained() {
        let rotations = [rot(Direction::Right, 30), rot(Direction::Left, 10)];
        let report = simulate(START_POSITION, &rotations);
        assert_eq!(report.traces.len(), 2);
        assert_eq!(report.traces[0].step, 1);
        assert_eq!(report.traces[1].step, 2);
        assert_eq!(report.traces[0].to, report.traces[1].from);
        assert_eq!(report.final_position, 70);
    }

    #[test]
    fn unit_walk_agrees_with_net_displacement() {
        for steps in [0, 1, 49, 50, 99, 100, 101, 250, 1000] {
            for direction in [Direction::Left, Direction::Right] {
                let rotation = rot(direction, steps);
                let (walked, _) = unit_walk(START_POSITION, rotation);
                let report = simulate(START_POSITION, &[rotation]);
                assert_eq!(
                    walked, report.final_position,
                    "walk and net displacement disagree for {rotation}"
                );
            }
        }
    }
}
