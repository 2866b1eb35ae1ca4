//! Day 3: puzzle not yet released.

use crate::solution::Solution;
use crate::util::{self, ParseError};

/// Scaffold solution for day 3.
#[derive(Debug, Default, Clone, Copy)]
pub struct Day03;

impl Solution for Day03 {
    type Parsed = Vec<String>;

    fn parse(&self, input: &str) -> Result<Self::Parsed, ParseError> {
        Ok(util::read_lines(input).into_iter().map(str::to_owned).collect())
    }

    fn part_one(&self, _data: &Self::Parsed) -> Option<String> {
        // TODO: implement once the day 3 puzzle unlocks
        None
    }

    fn part_two(&self, _data: &Self::Parsed) -> Option<String> {
        // TODO: implement once the day 3 puzzle unlocks
        None
    }
}
