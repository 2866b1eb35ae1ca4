#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! One module per puzzle day, plus the registry over them.
//!
//! Adding a day is a two-line change: declare the module and register it in
//! the [`all_days!`] invocation below. The macro generates the [`DayImpls`]
//! enum with `from_number`/`number`/`label`/`ALL` and a `run` dispatcher
//! over the day structs.

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day08;
pub mod day09;
pub mod day10;
pub mod day11;
pub mod day12;

use advent_macros::all_days;

all_days! {
    enum_name = DayImpls,
    days: [
        day01 => 1,
        day02 => 2,
        day03 => 3,
        day04 => 4,
        day05 => 5,
        day06 => 6,
        day07 => 7,
        day08 => 8,
        day09 => 9,
        day10 => 10,
        day11 => 11,
        day12 => 12,
    ],
}

#[cfg(test)]
mod tests {
    use super::DayImpls;
    use crate::runner::{FIRST_DAY, LAST_DAY};

    #[test]
    fn registry_covers_the_event_range() {
        for day in FIRST_DAY..=LAST_DAY {
            let entry = DayImpls::from_number(day)
                .unwrap_or_else(|| panic!("day {day} not registered"));
            assert_eq!(entry.number(), day);
        }
    }

    #[test]
    fn out_of_range_days_are_unregistered() {
        assert_eq!(DayImpls::from_number(0), None);
        assert_eq!(DayImpls::from_number(LAST_DAY + 1), None);
        assert_eq!(DayImpls::from_number(u8::MAX), None);
    }

    #[test]
    fn labels_match_module_names() {
        assert_eq!(DayImpls::from_number(1).unwrap().label(), "day01");
        assert_eq!(DayImpls::from_number(12).unwrap().label(), "day12");
    }

    #[test]
    fn all_lists_every_day_once() {
        assert_eq!(DayImpls::ALL.len(), usize::from(LAST_DAY));
        for (idx, entry) in DayImpls::ALL.iter().enumerate() {
            assert_eq!(usize::from(entry.number()), idx + 1);
        }
    }

    #[test]
    fn every_scaffold_day_runs_to_unimplemented() {
        for entry in DayImpls::ALL {
            let report = entry.run("line one\nline two\n").unwrap();
            assert_eq!(report.day, entry.number());
            assert_eq!(report.part_one.answer, None);
            assert_eq!(report.part_two.answer, None);
        }
    }
}
