//! Day 1: puzzle not yet released.

use crate::solution::Solution;
use crate::util::{self, ParseError};

/// Scaffold solution for day 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct Day01;

impl Solution for Day01 {
    type Parsed = Vec<String>;

    fn parse(&self, input: &str) -> Result<Self::Parsed, ParseError> {
        Ok(util::read_lines(input).into_iter().map(str::to_owned).collect())
    }

    fn part_one(&self, _data: &Self::Parsed) -> Option<String> {
        // TODO: implement once the day 1 puzzle unlocks
        None
    }

    fn part_two(&self, _data: &Self::Parsed) -> Option<String> {
        // TODO: implement once the day 1 puzzle unlocks
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_into_trimmed_lines() {
        let parsed = Day01.parse("  left  \nright\n").unwrap();
        assert_eq!(parsed, vec!["left".to_owned(), "right".to_owned()]);
    }

    #[test]
    fn parts_are_unimplemented() {
        let parsed = Day01.parse("x").unwrap();
        assert_eq!(Day01.part_one(&parsed), None);
        assert_eq!(Day01.part_two(&parsed), None);
    }
}
