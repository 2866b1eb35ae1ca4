//! Command-line interface of the runner binary.

pub(crate) mod cli;
