//! The interface every day module implements.

use crate::util::ParseError;

/// A single day's puzzle solution: parse the raw input once, then answer
/// two parts against the parsed form.
///
/// Implementations are unit structs; the day registry in [`crate::days`]
/// maps day numbers to them and the runner drives the three phases,
/// timing each.
pub trait Solution {
    /// The parsed form of the puzzle input, shared by both parts.
    type Parsed;

    /// Parses the raw input text into [`Self::Parsed`].
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first malformed piece of
    /// input.
    fn parse(&self, input: &str) -> Result<Self::Parsed, ParseError>;

    /// Solves part one. `None` means the part is not implemented yet.
    fn part_one(&self, data: &Self::Parsed) -> Option<String>;

    /// Solves part two. `None` means the part is not implemented yet.
    fn part_two(&self, data: &Self::Parsed) -> Option<String>;
}
