//! Day 2: puzzle not yet released.

use crate::solution::Solution;
use crate::util::{self, ParseError};

/// Scaffold solution for day 2.
#[derive(Debug, Default, Clone, Copy)]
pub struct Day02;

impl Solution for Day02 {
    type Parsed = Vec<String>;

    fn parse(&self, input: &str) -> Result<Self::Parsed, ParseError> {
        Ok(util::read_lines(input).into_iter().map(str::to_owned).collect())
    }

    fn part_one(&self, _data: &Self::Parsed) -> Option<String> {
        // TODO: implement once the day 2 puzzle unlocks
        None
    }

    fn part_two(&self, _data: &Self::Parsed) -> Option<String> {
        // TODO: implement once the day 2 puzzle unlocks
        None
    }
}
