//! # advent
//!
//! `advent` is the command-line runner for the Advent of Code 2025
//! scaffold. Each day's puzzle is a module implementing the `Solution`
//! trait (parse the input, answer two parts); the runner locates the day's
//! `input.txt`, dispatches to the registered module and times every phase.
//!
//! ## Features
//!
//! -   **Per-day execution**: run a single day by number, or all days 1-12
//!     sequentially.
//! -   **Recoverable failures**: a missing input file, an unregistered day
//!     or a parse error is reported on the console and never aborts an
//!     `all` run.
//! -   **Statistics**: per-day parse/part timings plus allocated and
//!     resident memory figures from `tikv-jemallocator`.
//! -   **Input discovery**: `status` lists which days already have their
//!     puzzle input on disk.
//!
//! ## Usage
//!
//! ### General syntax
//!
//! ```sh
//! advent [DAY_NUMBER] [SUBCOMMAND]
//! ```
//!
//! ### Global argument
//!
//! -   `day_number`: if provided as the *only* argument (without a
//!     subcommand), runs that day.
//!
//!     ```sh
//!     advent 5
//!     ```
//!
//! ### Subcommands
//!
//! 1.  **`all`**: run every day of the event in order, then print a
//!     `Completed X/12 days` summary with the total time.
//!     ```sh
//!     advent all
//!     ```
//!
//! 2.  **`status`**: list each registered day and whether its input file is
//!     present under the input directory.
//!     ```sh
//!     advent status
//!     ```
//!
//! 3.  **`completions`**: generate shell completion scripts.
//!     ```sh
//!     advent completions zsh
//!     ```
//!
//! ### Common options
//!
//! -   `--input-dir <DIR>`: directory holding `dayNN/input.txt` (default:
//!     `days`).
//! -   `--input <FILE>`: explicit input file, bypassing the conventional
//!     location (single-day runs only).
//! -   `-s, --stats`: print the timing/memory statistics table (default:
//!     `true`).
//! -   `-d, --debug`: print input size details before running.
//!
//! ## Example invocations
//!
//! ```sh
//! # Run day 3 with the default input layout
//! advent 3
//!
//! # Run day 3 against a sample input
//! advent 3 --input days/day03/sample.txt
//!
//! # Run the whole event
//! advent all
//!
//! # Which days have inputs so far?
//! advent status
//! ```
//!
//! Invalid day arguments (non-numeric, or outside 1-12) print an error and
//! exit non-zero.

use clap::Parser;

mod command_line;

use command_line::cli::Cli;

/// Global allocator using `tikv-jemallocator` for potentially better
/// performance and memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let cli = Cli::parse();
    command_line::cli::dispatch(cli);
}
