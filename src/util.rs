#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Parsing, grid and geometry helpers shared across the day solutions.
//!
//! Puzzle inputs are overwhelmingly one of three shapes: a list of lines, a
//! list of numbers, or a rectangular character grid. The helpers here cover
//! those three, plus the grid geometry that comes up every year (Manhattan
//! distance, 4- and 8-way neighbor enumeration).
//!
//! Neighbor enumeration works on signed coordinates so that callers walking
//! off an edge see the out-of-bounds candidates when no bounds are supplied;
//! passing `Some((max_x, max_y))` filters to `0 <= x < max_x` and
//! `0 <= y < max_y`.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

/// A signed 2D coordinate, `(x, y)`.
pub type Point = (i64, i64);

/// Failures while turning raw puzzle input into a day's parsed form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A token that should have been an integer was not.
    #[error("invalid number '{token}' on line {line}")]
    InvalidNumber {
        /// The offending token.
        token: String,
        /// 1-based line number within the input.
        line: usize,
    },

    /// A grid row whose length differs from the first row's.
    #[error("grid row {line} has {found} cells, expected {expected}")]
    RaggedGrid {
        /// 1-based line number within the input.
        line: usize,
        /// Cell count of the first row.
        expected: usize,
        /// Cell count of the offending row.
        found: usize,
    },

    /// Catch-all for day-specific input shapes.
    #[error("{0}")]
    InvalidFormat(String),
}

/// Splits text into trimmed lines, dropping surrounding whitespace first.
#[must_use]
pub fn read_lines(text: &str) -> Vec<&str> {
    text.trim().lines().map(str::trim).collect()
}

/// Parses one integer per line, skipping blank lines.
///
/// # Errors
///
/// Returns [`ParseError::InvalidNumber`] for the first non-integer line,
/// with its 1-based line number.
pub fn read_numbers(text: &str) -> Result<Vec<i64>, ParseError> {
    text.trim()
        .lines()
        .map(str::trim)
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(idx, line)| {
            line.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
                token: line.to_owned(),
                line: idx + 1,
            })
        })
        .collect()
}

/// Parses text into a rectangular [`Grid`]. See [`Grid::parse`].
///
/// # Errors
///
/// Returns [`ParseError::RaggedGrid`] if the rows differ in length.
pub fn read_grid(text: &str) -> Result<Grid, ParseError> {
    Grid::parse(text)
}

/// Counts occurrences of each item, a frequency map.
pub fn counts<T, I>(items: I) -> FxHashMap<T, usize>
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    let mut map = FxHashMap::default();
    for item in items {
        *map.entry(item).or_insert(0) += 1;
    }
    map
}

/// Manhattan (taxicab) distance between two points.
///
/// Symmetric and non-negative; zero exactly when the points are equal.
#[must_use]
pub const fn manhattan_distance(p1: Point, p2: Point) -> u64 {
    p1.0.abs_diff(p2.0) + p1.1.abs_diff(p2.1)
}

/// The 4 axis-adjacent neighbors of `(x, y)`: right, left, down, up.
///
/// With `Some((max_x, max_y))` bounds, only coordinates inside
/// `[0, max_x) x [0, max_y)` are kept. With `None`, all 4 candidates are
/// returned unfiltered, including negative ones.
#[must_use]
pub fn neighbors4(x: i64, y: i64, bounds: Option<(i64, i64)>) -> SmallVec<[Point; 4]> {
    let candidates = [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)];
    filter_neighbors(candidates, bounds)
}

/// The 8 surrounding neighbors of `(x, y)`, diagonals included.
///
/// Bounds behave as in [`neighbors4`].
#[must_use]
pub fn neighbors8(x: i64, y: i64, bounds: Option<(i64, i64)>) -> SmallVec<[Point; 8]> {
    let candidates = [
        (x + 1, y),
        (x - 1, y),
        (x, y + 1),
        (x, y - 1),
        (x + 1, y + 1),
        (x + 1, y - 1),
        (x - 1, y + 1),
        (x - 1, y - 1),
    ];
    filter_neighbors(candidates, bounds)
}

fn filter_neighbors<const N: usize>(
    candidates: [Point; N],
    bounds: Option<(i64, i64)>,
) -> SmallVec<[Point; N]> {
    match bounds {
        Some((max_x, max_y)) => candidates
            .into_iter()
            .filter(|&(nx, ny)| nx >= 0 && nx < max_x && ny >= 0 && ny < max_y)
            .collect(),
        None => SmallVec::from_buf(candidates),
    }
}

/// A rectangular 2D array of characters derived from line-split input text.
///
/// Coordinates are `(x, y)` with `x` indexing columns and `y` rows, so cell
/// access is `rows[y][x]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Parses trimmed input text into a grid, one row per line.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::RaggedGrid`] if any row's length differs from
    /// the first row's.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let rows: Vec<Vec<char>> = text.trim().lines().map(|line| line.chars().collect()).collect();

        if let Some(expected) = rows.first().map(Vec::len) {
            for (idx, row) in rows.iter().enumerate() {
                if row.len() != expected {
                    return Err(ParseError::RaggedGrid {
                        line: idx + 1,
                        expected,
                        found: row.len(),
                    });
                }
            }
        }

        Ok(Self { rows })
    }

    /// Number of columns. Zero for an empty grid.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The character at `(x, y)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y)?.get(x).copied()
    }

    /// Whether `(x, y)` lies inside the grid.
    #[must_use]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    /// Iterates over the rows as character slices.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// The position of the first cell equal to `needle`, scanning row by row.
    #[must_use]
    pub fn find(&self, needle: char) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(y, row)| {
            row.iter().position(|&c| c == needle).map(|x| (x, y))
        })
    }

    /// In-bounds 4-way neighbors of `(x, y)`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn neighbors4(&self, x: usize, y: usize) -> SmallVec<[(usize, usize); 4]> {
        let bounds = Some((self.width() as i64, self.height() as i64));
        neighbors4(x as i64, y as i64, bounds)
            .into_iter()
            .map(|(nx, ny)| (nx as usize, ny as usize))
            .collect()
    }

    /// In-bounds 8-way neighbors of `(x, y)`, diagonals included.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn neighbors8(&self, x: usize, y: usize) -> SmallVec<[(usize, usize); 8]> {
        let bounds = Some((self.width() as i64, self.height() as i64));
        neighbors8(x as i64, y as i64, bounds)
            .into_iter()
            .map(|(nx, ny)| (nx as usize, ny as usize))
            .collect()
    }
}

impl From<Vec<Vec<char>>> for Grid {
    fn from(rows: Vec<Vec<char>>) -> Self {
        Self { rows }
    }
}

impl From<Grid> for Vec<Vec<char>> {
    fn from(grid: Grid) -> Self {
        grid.rows
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.rows.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            for &c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = (3, -7);
        let b = (-2, 11);
        assert_eq!(manhattan_distance(a, b), manhattan_distance(b, a));
        assert_eq!(manhattan_distance(a, b), 5 + 18);
    }

    #[test]
    fn manhattan_zero_iff_equal() {
        assert_eq!(manhattan_distance((4, 4), (4, 4)), 0);
        assert_ne!(manhattan_distance((4, 4), (4, 5)), 0);
        assert_ne!(manhattan_distance((0, 0), (-1, 0)), 0);
    }

    #[test]
    fn neighbors4_unbounded_returns_all_candidates() {
        let mut got = neighbors4(0, 0, None).into_vec();
        got.sort_unstable();
        assert_eq!(got, vec![(-1, 0), (0, -1), (0, 1), (1, 0)]);
    }

    #[test]
    fn neighbors8_unbounded_returns_all_candidates() {
        let mut got = neighbors8(0, 0, None).into_vec();
        got.sort_unstable();
        assert_eq!(
            got,
            vec![
                (-1, -1),
                (-1, 0),
                (-1, 1),
                (0, -1),
                (0, 1),
                (1, -1),
                (1, 0),
                (1, 1)
            ]
        );
    }

    #[test]
    fn neighbors_bounded_filters_corner() {
        let mut got4 = neighbors4(0, 0, Some((3, 3))).into_vec();
        got4.sort_unstable();
        assert_eq!(got4, vec![(0, 1), (1, 0)]);

        let mut got8 = neighbors8(0, 0, Some((3, 3))).into_vec();
        got8.sort_unstable();
        assert_eq!(got8, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn neighbors_bounded_interior_keeps_all() {
        assert_eq!(neighbors4(1, 1, Some((3, 3))).len(), 4);
        assert_eq!(neighbors8(1, 1, Some((3, 3))).len(), 8);
    }

    #[test]
    fn neighbors_bounded_coordinates_in_range() {
        for (nx, ny) in neighbors8(2, 2, Some((3, 3))) {
            assert!((0..3).contains(&nx));
            assert!((0..3).contains(&ny));
        }
    }

    #[test]
    fn read_lines_trims_text_and_lines() {
        let text = "\n  abc  \ndef\n  ghi\n";
        assert_eq!(read_lines(text), vec!["abc", "def", "ghi"]);
    }

    #[test]
    fn read_numbers_parses_and_skips_blanks() {
        let text = "1\n\n-42\n  7  \n";
        assert_eq!(read_numbers(text).unwrap(), vec![1, -42, 7]);
    }

    #[test]
    fn read_numbers_reports_offending_line() {
        let err = read_numbers("1\nforty\n2").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                token: "forty".to_owned(),
                line: 2,
            }
        );
    }

    #[test]
    fn read_grid_round_trips_rectangular_block() {
        let text = "#.#\n.#.\n###";
        let grid = read_grid(text).unwrap();

        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.get(0, 0), Some('#'));
        assert_eq!(grid.get(1, 1), Some('#'));
        assert_eq!(grid.get(2, 1), Some('.'));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn read_grid_rejects_ragged_rows() {
        let err = read_grid("abc\nde").unwrap_err();
        assert_eq!(
            err,
            ParseError::RaggedGrid {
                line: 2,
                expected: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn read_grid_of_empty_input_is_empty() {
        let grid = read_grid("").unwrap();
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
    }

    #[test]
    fn grid_find_scans_row_major() {
        let grid = read_grid("..a\na..").unwrap();
        assert_eq!(grid.find('a'), Some((2, 0)));
        assert_eq!(grid.find('z'), None);
    }

    #[test]
    fn grid_neighbors_stay_inside() {
        let grid = read_grid("ab\ncd").unwrap();
        let mut got = grid.neighbors4(0, 0).into_vec();
        got.sort_unstable();
        assert_eq!(got, vec![(0, 1), (1, 0)]);
        assert_eq!(grid.neighbors8(0, 0).len(), 3);
    }

    #[test]
    fn counts_builds_frequency_map() {
        let map = counts("abracadabra".chars());
        assert_eq!(map[&'a'], 5);
        assert_eq!(map[&'b'], 2);
        assert_eq!(map.get(&'z'), None);
    }
}
