#![allow(clippy::cast_precision_loss)]

use advent::days::DayImpls;
use advent::runner::{self, DayReport, FIRST_DAY, LAST_DAY, PartReport, RunError};
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tikv_jemalloc_ctl::{epoch, stats};

/// Banner separating per-day sections of the console output.
const BANNER: &str = "==================================================";

/// Defines the command-line interface for the puzzle runner.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "advent", version, about = "Advent of Code 2025 puzzle runner")]
pub(crate) struct Cli {
    /// An optional global day argument. If provided without a subcommand,
    /// it's treated as the day number to run (1-12).
    #[arg(global = true)]
    pub day: Option<String>,

    /// Specifies the subcommand to execute (e.g. `all`, `status`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable when running a day directly.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands for the puzzle runner.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Run every day of the event in order and print a completion summary.
    All {
        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// List each registered day and whether its puzzle input is on disk.
    Status {
        /// Directory containing the per-day `dayNN/input.txt` files.
        #[arg(long, default_value = "days")]
        input_dir: PathBuf,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Clone)]
pub(crate) struct CommonOptions {
    /// Directory containing the per-day `dayNN/input.txt` files.
    #[arg(long, default_value = "days")]
    pub(crate) input_dir: PathBuf,

    /// Explicit input file, bypassing the conventional location.
    /// Only meaningful when running a single day.
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,

    /// Enable printing of the per-day timing and memory statistics table.
    #[arg(short, long, default_value_t = true)]
    pub(crate) stats: bool,

    /// Enable debug output, printing input size details before running.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,
}

/// Dispatches a parsed command line to the matching handler.
///
/// Exits the process with a non-zero status on invalid day arguments or
/// when no day was requested at all.
pub(crate) fn dispatch(cli: Cli) {
    // Handle the case where a day number is provided globally without a
    // subcommand. This is the `advent 5` form.
    if let Some(day_arg) = cli.day.as_deref() {
        if cli.command.is_none() {
            match parse_day_arg(day_arg) {
                Ok(day) => {
                    run_one(day, &cli.common);
                }
                Err(message) => {
                    eprintln!("{message}");
                    eprintln!("Usage: advent <day_number|all>");
                    std::process::exit(1);
                }
            }
            return;
        }
    }

    match cli.command {
        Some(Commands::All { common }) => run_all(&common),
        Some(Commands::Status { input_dir }) => status(&input_dir),
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        }
        None => {
            // Reached when neither a day number nor a subcommand was given.
            eprintln!("No day provided. Use --help for more information.");
            eprintln!("Usage: advent <day_number|all>");
            std::process::exit(1);
        }
    }
}

/// Parses the positional day argument, rejecting values outside the event.
fn parse_day_arg(arg: &str) -> Result<u8, String> {
    arg.parse::<u8>()
        .map_err(|_| format!("Invalid day argument '{arg}' (expected a day number or 'all')"))
        .and_then(|day| {
            if (FIRST_DAY..=LAST_DAY).contains(&day) {
                Ok(day)
            } else {
                Err(format!("Day must be between {FIRST_DAY} and {LAST_DAY}, got {day}"))
            }
        })
}

/// Runs a single day and reports the outcome, returning whether it
/// completed. Failures are printed and never propagate: days are published
/// one at a time, so a missing input or module is routine.
fn run_one(day: u8, common: &CommonOptions) -> bool {
    println!("\n{BANNER}");
    println!("Running Day {day}");
    println!("{BANNER}");

    let input = match read_day_input(day, common) {
        Ok(input) => input,
        Err(err) => {
            report_run_error(day, &err);
            return false;
        }
    };

    if common.debug {
        println!("Input: {} lines, {} bytes", input.lines().count(), input.len());
    }

    match runner::run_day_with_input(day, &input) {
        Ok(report) => {
            print_report(&report, common.stats);
            true
        }
        Err(err) => {
            report_run_error(day, &err);
            false
        }
    }
}

/// Runs every day of the event sequentially, then prints the completion
/// summary. Per-day failures are reported by `run_one` and counted as
/// incomplete.
fn run_all(common: &CommonOptions) {
    let mut common = common.clone();
    if common.input.take().is_some() {
        eprintln!("--input applies to single-day runs only; ignoring");
    }

    let total_start = Instant::now();
    let mut success_count = 0u32;

    for day in FIRST_DAY..=LAST_DAY {
        if run_one(day, &common) {
            success_count += 1;
        }
    }

    let total = total_start.elapsed();

    println!("\n{BANNER}");
    println!("Completed {success_count}/{LAST_DAY} days");
    println!("Total time: {:.4} seconds", total.as_secs_f64());
    println!("{BANNER}");
}

/// Lists each registered day and whether its input file is present.
fn status(input_dir: &Path) {
    let found = runner::discover_inputs(input_dir);

    println!("Inputs under {}:", input_dir.display());
    for entry in DayImpls::ALL {
        let marker = if found.contains(&entry.number()) {
            "input present"
        } else {
            "input missing"
        };
        println!("  {:<8} {marker}", entry.label());
    }
}

/// Resolves a day's input text, honoring the `--input` override.
fn read_day_input(day: u8, common: &CommonOptions) -> Result<String, RunError> {
    match &common.input {
        Some(path) => std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                RunError::MissingInput {
                    day,
                    path: path.clone(),
                }
            } else {
                RunError::Io {
                    path: path.clone(),
                    source,
                }
            }
        }),
        None => runner::read_input(&common.input_dir, day),
    }
}

/// Reports a per-day failure on the console. Missing inputs and modules get
/// the short, expected-case messages; everything else prints its error
/// chain to stderr.
fn report_run_error(day: u8, err: &RunError) {
    match err {
        RunError::MissingInput { .. } => {
            println!("Input file for day {day} not found. Please add your puzzle input.");
        }
        RunError::MissingDay(_) => {
            println!("Solution for day {day} does not exist!");
        }
        other => {
            eprintln!("Error running day {day}: {other}");
            let mut cause = other.source();
            while let Some(err) = cause {
                eprintln!("  caused by: {err}");
                cause = err.source();
            }
        }
    }
}

/// Prints a day's answers and timing, and optionally the statistics table.
fn print_report(report: &DayReport, show_stats: bool) {
    print_part(1, &report.part_one);
    print_part(2, &report.part_two);

    println!("\nTime: {:.4} seconds", report.total_time().as_secs_f64());

    if show_stats {
        print_stats(report);
    }
}

/// Prints one part's answer, or marks it unimplemented.
fn print_part(number: u8, part: &PartReport) {
    match &part.answer {
        Some(answer) => println!("Part {number}: {answer}"),
        None => println!("Part {number}: unimplemented"),
    }
}

/// Helper function to print a single statistic line in a formatted table
/// row.
fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Prints the per-day timing and memory statistics table.
fn print_stats(report: &DayReport) {
    let (allocated_mib, resident_mib) = memory_stats();

    println!("\n=========================[ Day Statistics ]==========================");
    stat_line("Parse time (s)", format!("{:.4}", report.parse_time.as_secs_f64()));
    stat_line(
        "Part 1 time (s)",
        format!("{:.4}", report.part_one.elapsed.as_secs_f64()),
    );
    stat_line(
        "Part 2 time (s)",
        format!("{:.4}", report.part_two.elapsed.as_secs_f64()),
    );
    stat_line(
        "Total time (s)",
        format!("{:.4}", report.total_time().as_secs_f64()),
    );
    stat_line("Memory usage (MiB)", format!("{allocated_mib:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident_mib:.2}"));
    println!("=====================================================================");
}

/// Reads allocated and resident memory in MiB from jemalloc.
fn memory_stats() -> (f64, f64) {
    // Advance epoch so the counters reflect the run that just finished.
    epoch::advance().unwrap();

    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();

    (
        allocated_bytes as f64 / (1024.0 * 1024.0),
        resident_bytes as f64 / (1024.0 * 1024.0),
    )
}
