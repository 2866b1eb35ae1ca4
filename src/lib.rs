#![deny(missing_docs)]
//! A scaffold for solving the Advent of Code 2025 puzzles.
//!
//! Each day lives in its own module under [`days`], implementing the
//! [`solution::Solution`] trait: parse the raw input once, then answer two
//! parts. The [`runner`] module locates each day's `input.txt`, dispatches to
//! the registered solution and times every phase of the run. The [`util`]
//! module holds the line/number/grid parsing and geometry helpers shared
//! across days.

/// The `days` module contains one submodule per puzzle day and the registry
/// enum that maps day numbers to solutions.
pub mod days;

/// The `runner` module locates puzzle inputs on disk and executes day
/// solutions, reporting per-phase timings.
pub mod runner;

/// The `solution` module defines the interface every day module implements.
pub mod solution;

/// The `util` module provides parsing, grid and geometry helpers shared
/// across the day solutions.
pub mod util;
