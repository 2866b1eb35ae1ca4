#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Locating puzzle inputs and executing day solutions.
//!
//! Inputs live alongside their day, `<root>/day05/input.txt`, with the root
//! directory supplied by the caller (the CLI defaults it to `days`). A
//! missing input file is an expected, recoverable condition: days are
//! published one at a time and inputs are added as they unlock, so the
//! runner reports [`RunError::MissingInput`] rather than aborting.

use crate::days::DayImpls;
use crate::solution::Solution;
use crate::util::ParseError;
use itertools::Itertools;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use walkdir::WalkDir;

/// The first puzzle day.
pub const FIRST_DAY: u8 = 1;

/// The last puzzle day of the 2025 event.
pub const LAST_DAY: u8 = 12;

/// A per-day failure. Every variant is recoverable: an `all` run reports it
/// and moves on to the next day.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The day's `input.txt` does not exist yet.
    #[error("input file for day {day} not found: {path}")]
    MissingInput {
        /// The day whose input is missing.
        day: u8,
        /// The path that was probed.
        path: PathBuf,
    },

    /// No solution module is registered under this day number.
    #[error("no solution registered for day {0}")]
    MissingDay(u8),

    /// The day's input exists but its solution could not parse it.
    #[error("day {day} failed to parse its input")]
    Parse {
        /// The day whose parse failed.
        day: u8,
        /// The underlying parse failure.
        #[source]
        source: ParseError,
    },

    /// An I/O failure other than a missing input file.
    #[error("failed to read {path}")]
    Io {
        /// The path being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// The timed answer to one puzzle part.
#[derive(Debug, Clone)]
pub struct PartReport {
    /// The answer, or `None` while the part is unimplemented.
    pub answer: Option<String>,
    /// Time spent computing the part.
    pub elapsed: Duration,
}

/// The outcome of running one day's solution over its input.
#[derive(Debug, Clone)]
pub struct DayReport {
    /// The day number.
    pub day: u8,
    /// Time spent parsing the input.
    pub parse_time: Duration,
    /// Part one's answer and timing.
    pub part_one: PartReport,
    /// Part two's answer and timing.
    pub part_two: PartReport,
}

impl DayReport {
    /// Total time across parsing and both parts.
    #[must_use]
    pub fn total_time(&self) -> Duration {
        self.parse_time + self.part_one.elapsed + self.part_two.elapsed
    }
}

/// Parses `input` with `solution` and runs both parts, timing each phase.
///
/// # Errors
///
/// Returns [`RunError::Parse`] if the solution rejects the input.
pub fn run_solution<S: Solution>(day: u8, solution: &S, input: &str) -> Result<DayReport, RunError> {
    let start = Instant::now();
    let parsed = solution
        .parse(input)
        .map_err(|source| RunError::Parse { day, source })?;
    let parse_time = start.elapsed();

    let start = Instant::now();
    let answer_one = solution.part_one(&parsed);
    let part_one = PartReport {
        answer: answer_one,
        elapsed: start.elapsed(),
    };

    let start = Instant::now();
    let answer_two = solution.part_two(&parsed);
    let part_two = PartReport {
        answer: answer_two,
        elapsed: start.elapsed(),
    };

    Ok(DayReport {
        day,
        parse_time,
        part_one,
        part_two,
    })
}

/// The conventional input location for a day: `<root>/day{NN}/input.txt`.
#[must_use]
pub fn input_path(root: &Path, day: u8) -> PathBuf {
    root.join(format!("day{day:02}")).join("input.txt")
}

/// Reads a day's input file from its conventional location.
///
/// # Errors
///
/// Returns [`RunError::MissingInput`] if the file does not exist and
/// [`RunError::Io`] for any other read failure.
pub fn read_input(root: &Path, day: u8) -> Result<String, RunError> {
    let path = input_path(root, day);
    std::fs::read_to_string(&path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            RunError::MissingInput { day, path }
        } else {
            RunError::Io { path, source }
        }
    })
}

/// Runs a day against the given input text, without touching the filesystem.
///
/// # Errors
///
/// Returns [`RunError::MissingDay`] for unregistered day numbers, or the
/// day's parse failure.
pub fn run_day_with_input(day: u8, input: &str) -> Result<DayReport, RunError> {
    let solution = DayImpls::from_number(day).ok_or(RunError::MissingDay(day))?;
    solution.run(input)
}

/// Looks up a day's solution, reads its input from `root` and runs it.
///
/// # Errors
///
/// Any [`RunError`]: missing module, missing input, read failure or parse
/// failure.
pub fn run_day(root: &Path, day: u8) -> Result<DayReport, RunError> {
    // Registry lookup first, so a missing module is reported even when the
    // input file is also absent.
    let solution = DayImpls::from_number(day).ok_or(RunError::MissingDay(day))?;
    let input = read_input(root, day)?;
    solution.run(&input)
}

/// Scans `root` for `dayNN` directories that contain an `input.txt`,
/// returning the day numbers sorted ascending.
#[must_use]
pub fn discover_inputs(root: &Path) -> Vec<u8> {
    WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_dir())
        .filter_map(|entry| day_number(entry.file_name().to_str()?))
        .filter(|&day| input_path(root, day).is_file())
        .sorted_unstable()
        .collect_vec()
}

/// Extracts the day number from a `dayNN` directory name.
fn day_number(name: &str) -> Option<u8> {
    name.strip_prefix("day")?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util;
    use std::fs;
    use tempfile::tempdir;

    /// Minimal real solution, so the timing/reporting path is exercised
    /// with implemented parts as well as with the day scaffolds.
    struct SumOfNumbers;

    impl Solution for SumOfNumbers {
        type Parsed = Vec<i64>;

        fn parse(&self, input: &str) -> Result<Self::Parsed, ParseError> {
            util::read_numbers(input)
        }

        fn part_one(&self, data: &Self::Parsed) -> Option<String> {
            Some(data.iter().sum::<i64>().to_string())
        }

        fn part_two(&self, _data: &Self::Parsed) -> Option<String> {
            None
        }
    }

    #[test]
    fn input_path_is_zero_padded() {
        let path = input_path(Path::new("days"), 3);
        assert_eq!(path, Path::new("days").join("day03").join("input.txt"));

        let path = input_path(Path::new("days"), 12);
        assert_eq!(path, Path::new("days").join("day12").join("input.txt"));
    }

    #[test]
    fn run_solution_answers_and_times_both_parts() {
        let report = run_solution(1, &SumOfNumbers, "1\n2\n3\n").unwrap();
        assert_eq!(report.day, 1);
        assert_eq!(report.part_one.answer.as_deref(), Some("6"));
        assert_eq!(report.part_two.answer, None);
        assert!(report.total_time() >= report.parse_time);
    }

    #[test]
    fn run_solution_wraps_parse_failures() {
        let err = run_solution(4, &SumOfNumbers, "1\nnope\n").unwrap_err();
        assert!(matches!(err, RunError::Parse { day: 4, .. }));
    }

    #[test]
    fn read_input_missing_file_is_recoverable() {
        let dir = tempdir().unwrap();
        let err = read_input(dir.path(), 7).unwrap_err();
        assert!(matches!(err, RunError::MissingInput { day: 7, .. }));
    }

    #[test]
    fn read_input_returns_file_contents() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("day02")).unwrap();
        fs::write(dir.path().join("day02").join("input.txt"), "a\nb\n").unwrap();

        assert_eq!(read_input(dir.path(), 2).unwrap(), "a\nb\n");
    }

    #[test]
    fn run_day_reports_missing_module_before_missing_input() {
        let dir = tempdir().unwrap();
        let err = run_day(dir.path(), 99).unwrap_err();
        assert!(matches!(err, RunError::MissingDay(99)));
    }

    #[test]
    fn run_day_with_input_runs_scaffold_days() {
        let report = run_day_with_input(1, "a\nb\nc\n").unwrap();
        assert_eq!(report.day, 1);
        assert_eq!(report.part_one.answer, None);
        assert_eq!(report.part_two.answer, None);
    }

    #[test]
    fn discover_inputs_finds_populated_day_dirs() {
        let dir = tempdir().unwrap();
        for day_dir in ["day05", "day01", "day09", "notaday"] {
            fs::create_dir(dir.path().join(day_dir)).unwrap();
        }
        fs::write(dir.path().join("day05").join("input.txt"), "x").unwrap();
        fs::write(dir.path().join("day01").join("input.txt"), "y").unwrap();
        // day09 has a directory but no input; notaday has neither.

        assert_eq!(discover_inputs(dir.path()), vec![1, 5]);
    }

    #[test]
    fn day_number_parses_zero_padded_names() {
        assert_eq!(day_number("day01"), Some(1));
        assert_eq!(day_number("day12"), Some(12));
        assert_eq!(day_number("day"), None);
        assert_eq!(day_number("input"), None);
    }
}
