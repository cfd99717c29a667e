// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements a simple, generalized N×N Sudoku engine. It supports
//! the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Checking consistency of partially filled grids according to the row,
//! column, and block uniqueness rules
//! * Solving Sudoku with a naive backtracking algorithm that re-validates the
//! entire grid after every placement
//! * Solving Sudoku with a targeted backtracking algorithm that only checks
//! the placed value's row, column, and block
//!
//! Note in this introduction we will mostly be using 4x4 Sudoku due to their
//! simpler nature. These are divided in 4 2x2 blocks, each with the digits 1
//! to 4, just like each row and column.
//!
//! # Parsing and printing Sudoku
//!
//! See [SudokuGrid::parse] for the exact format of a Sudoku code.
//!
//! Codes can be used to exchange Sudoku, while pretty prints can be used to
//! display a Sudoku in a clearer manner. An example of how to parse and
//! display a Sudoku grid is provided below.
//!
//! ```
//! use sudoku_backtrack::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("4;2, ,3, , ,1, , ,1, , ,4, ,2, ,3").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # The two empty-cell sentinels
//!
//! This engine distinguishes two sentinel values, which must not be confused:
//!
//! * The *placeholder* [UNFILLED] (the literal `0`) marks a structurally
//! unfilled cell. Both search strategies locate the cells they have to fill
//! by this exact value, independent of any configuration.
//! * The *empty marker* (configured per [Sudoku], default
//! [DEFAULT_EMPTY_MARKER]) is exempted from the consistency checks performed
//! by [Sudoku::is_valid]. A cell holding the marker is "intentionally blank"
//! as far as validity is concerned.
//!
//! The naive solver judges its trial placements with the whole-grid validity
//! predicate, so a puzzle whose open cells hold `0` should be bound with the
//! marker `0` (making the remaining open cells exempt from the duplicate
//! scan) when it is to be solved naively. The targeted solver checks only
//! row, column, and block membership of the placed value and works with any
//! marker.
//!
//! # Checking validity of Sudoku
//!
//! ```
//! use sudoku_backtrack::Sudoku;
//!
//! // Some Sudoku for which it is totally unclear whether it is valid.
//! let sudoku =
//!     Sudoku::parse("4;1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1").unwrap();
//! assert!(!sudoku.is_valid());
//! ```
//!
//! # Solving Sudoku
//!
//! Both strategies mutate the grid in place and leave it fully assigned
//! exactly if a solution exists. Any remaining placeholder cells afterwards
//! mean the puzzle is unsolvable, since the search is exhaustive.
//!
//! ```
//! use sudoku_backtrack::{Sudoku, SudokuGrid, UNFILLED};
//!
//! // A riddle posed by our app:
//! // ╔═══╤═══╦═══╤═══╗
//! // ║   │   ║   │ 4 ║
//! // ╟───┼───╫───┼───╢
//! // ║   │ 4 ║ 3 │   ║
//! // ╠═══╪═══╬═══╪═══╣
//! // ║   │ 3 ║   │   ║
//! // ╟───┼───╫───┼───╢
//! // ║   │   ║ 1 │   ║
//! // ╚═══╧═══╩═══╧═══╝
//! let grid = SudokuGrid::parse("4; , , ,4, ,4,3, , ,3, , , , ,1, ").unwrap();
//! let mut sudoku = Sudoku::with_empty_marker(grid, UNFILLED);
//! sudoku.fast_solve();
//!
//! let expected =
//!     SudokuGrid::parse("4;3,1,2,4,2,4,3,1,1,3,4,2,4,2,1,3").unwrap();
//! assert_eq!(&expected, sudoku.grid());
//! assert!(sudoku.grid().is_full());
//! ```
//!
//! The [solver] module additionally exposes both strategies behind the
//! [Solver](solver::Solver) trait, so they can be swapped freely and tested
//! against the same properties.

pub mod error;
pub mod solver;
pub mod validity;

use error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};
use solver::{NaiveBacktrackingSolver, Solver, TargetedBacktrackingSolver};

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Error, Formatter};

/// The literal placeholder value that marks a structurally unfilled cell.
/// Both search strategies look for this exact value when deciding which cell
/// to fill next, regardless of the configured empty marker.
pub const UNFILLED: i32 = 0;

/// The empty marker used by [Sudoku::new]. Cells holding the configured
/// marker are exempted from the consistency checks of [Sudoku::is_valid].
pub const DEFAULT_EMPTY_MARKER: i32 = -1;

/// A Sudoku grid is a square arrangement of integer cells, organized into
/// blocks whose side length is the integer square root of the grid size. For
/// ordinary Sudoku the size is 9 and the blocks are 3x3.
///
/// The grid itself is deliberately *not* validated at construction: jagged
/// rows, non-square shapes, out-of-range values, and the sentinels described
/// in the [crate-level documentation](crate) are all representable. Whether a
/// grid is well-formed is decided by the validity predicate (see
/// [validity::is_valid]), never by the constructor.
///
/// `SudokuGrid` implements `Display`, but only square grids with a size of
/// less than or equal to 9 can be displayed with digits 1 to 9. Grids of all
/// other shapes will raise an error.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SudokuGrid {
    rows: Vec<Vec<i32>>
}

fn to_char(value: i32) -> char {
    if (1..=9).contains(&value) {
        (b'0' + value as u8) as char
    }
    else {
        ' '
    }
}

fn line(grid: &SudokuGrid, start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let size = grid.size();
    let block_len = grid.block_len();
    let mut result = String::new();

    for x in 0..size {
        if x == 0 {
            result.push(start);
        }
        else if x % block_len == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row(grid: &SudokuGrid) -> String {
    line(grid, '╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line(grid: &SudokuGrid) -> String {
    line(grid, '╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line(grid: &SudokuGrid) -> String {
    line(grid, '╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row(grid: &SudokuGrid) -> String {
    line(grid, '╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line(grid, '║', '║', '│', |x| to_char(grid.rows[y][x]), ' ', '║', true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.size();

        if size > 9 || !self.is_square() {
            return Err(Error::default());
        }

        let top_row = top_row(self);
        let thin_separator_line = thin_separator_line(self);
        let thick_separator_line = thick_separator_line(self);
        let bottom_row = bottom_row(self);
        let block_len = self.block_len();

        for y in 0..size {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % block_len == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

fn to_string(value: i32) -> String {
    if value == UNFILLED {
        String::from("")
    }
    else {
        value.to_string()
    }
}

impl SudokuGrid {

    /// Creates a new Sudoku grid of the given size whose cells all hold the
    /// placeholder [UNFILLED].
    pub fn empty(size: usize) -> SudokuGrid {
        SudokuGrid {
            rows: vec![vec![UNFILLED; size]; size]
        }
    }

    /// Creates a Sudoku grid directly from its rows. No validation whatsoever
    /// is performed - jagged, non-square, and out-of-range content is
    /// accepted and left for the validity predicate to judge.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> SudokuGrid {
        SudokuGrid {
            rows
        }
    }

    /// Parses a code encoding a Sudoku grid. The code has to be of the format
    /// `<size>;<cells>` where `<cells>` is a comma-separated list of entries,
    /// which are either empty, denoting the placeholder [UNFILLED], or an
    /// integer. The entries are assigned left-to-right, top-to-bottom, where
    /// each row is completed before the next one is started. Whitespace in
    /// the entries is ignored to allow for more intuitive formatting. The
    /// number of entries must be the square of the given size.
    ///
    /// Note that entries are *not* required to lie in `[1, size]`. Empty
    /// markers (such as [DEFAULT_EMPTY_MARKER]) and out-of-range values are
    /// parsed verbatim; consistency is the business of the validity
    /// predicate, not of the parser.
    ///
    /// As an example, the code `4;1, ,2, , ,3, ,4, , , ,3, ,1, ,2` will parse
    /// to the following grid:
    ///
    /// ```text
    /// ╔═══╤═══╦═══╤═══╗
    /// ║ 1 │   ║ 2 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 3 ║   │ 4 ║
    /// ╠═══╪═══╬═══╪═══╣
    /// ║   │   ║ 3 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 1 ║   │ 2 ║
    /// ╚═══╧═══╩═══╧═══╝
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of [SudokuParseError] (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let parts: Vec<&str> = code.split(';').collect();

        if parts.len() != 2 {
            return Err(SudokuParseError::WrongNumberOfParts);
        }

        let size = parts[0].trim().parse::<usize>()?;
        let entries: Vec<&str> = parts[1].split(',').collect();

        if entries.len() != size * size {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut grid = SudokuGrid::empty(size);

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            grid.rows[i / size][i % size] = entry.parse::<i32>()?;
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_backtrack::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::empty(6);
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set(1, 1, 4).unwrap();
    /// grid.set(2, 1, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        let mut s = format!("{};", self.size());
        let cells = self.rows.iter()
            .flatten()
            .map(|&value| to_string(value))
            .collect::<Vec<String>>()
            .join(",");
        s.push_str(cells.as_str());
        s
    }

    /// Gets the size of the grid on one axis, that is, its number of rows.
    /// For a square grid this is also the number of columns and the largest
    /// value the cells may ordinarily hold.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Indicates whether every row of this grid has exactly as many columns
    /// as the grid has rows. Grids constructed by [SudokuGrid::empty] and
    /// [SudokuGrid::parse] are always square, grids built by
    /// [SudokuGrid::from_rows] may not be.
    pub fn is_square(&self) -> bool {
        let size = self.size();
        self.rows.iter().all(|row| row.len() == size)
    }

    /// The side length of one block, computed as the integer square root of
    /// the grid size. Block uniqueness is only meaningful if the size is a
    /// perfect square, but this is not enforced anywhere.
    pub(crate) fn block_len(&self) -> usize {
        self.size().isqrt()
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, size[`.
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range of the columns actually present in that row.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get(&self, row: usize, column: usize) -> SudokuResult<i32> {
        self.rows.get(row)
            .and_then(|r| r.get(column))
            .copied()
            .ok_or(SudokuError::OutOfBounds)
    }

    /// Sets the content of the cell at the specified position to the given
    /// value. If the cell was not empty, the old value will be overwritten.
    /// The value is not restricted to `[1, size]`; placeholders, markers, and
    /// even out-of-range values may be written.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, size[`.
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range of the columns actually present in that row.
    /// * `value`: The value to assign to the specified cell.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn set(&mut self, row: usize, column: usize, value: i32)
            -> SudokuResult<()> {
        let cell = self.rows.get_mut(row)
            .and_then(|r| r.get_mut(column))
            .ok_or(SudokuError::OutOfBounds)?;
        *cell = value;
        Ok(())
    }

    /// Resets the cell at the specified position to the placeholder
    /// [UNFILLED], making it a cell the search strategies will fill.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are out of bounds. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn clear(&mut self, row: usize, column: usize) -> SudokuResult<()> {
        self.set(row, column, UNFILLED)
    }

    /// Indicates whether this grid is fully assigned, i.e. no cell holds the
    /// placeholder [UNFILLED]. Cells holding an empty marker are *not*
    /// considered unfilled here, consistent with the search strategies'
    /// terminal condition.
    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(|&value| value != UNFILLED)
    }

    /// Gets a reference to the rows which hold the cells, outer slice
    /// top-to-bottom, inner vectors left-to-right.
    pub fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }

    /// Gets a mutable reference to the rows which hold the cells, outer
    /// slice top-to-bottom, inner vectors left-to-right.
    pub fn rows_mut(&mut self) -> &mut [Vec<i32>] {
        &mut self.rows
    }
}

/// A Sudoku represents a grid of integers together with the configured empty
/// marker (see the [crate-level documentation](crate) for the distinction
/// between the marker and the placeholder [UNFILLED]). The grid may or may
/// not be consistent, but there is a method to check it, and two strategies
/// to complete it.
///
/// There is no guarantee that the Sudoku is solveable at all. Both solving
/// strategies are exhaustive, so any placeholder cells remaining after a
/// solve call prove that no solution exists.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Sudoku {
    grid: SudokuGrid,
    empty_marker: i32
}

impl Sudoku {

    /// Creates a new Sudoku wrapping the given grid, with the empty marker
    /// set to [DEFAULT_EMPTY_MARKER]. Note that it is *not* checked whether
    /// the grid is consistent - it is perfectly legal to create an invalid
    /// Sudoku here.
    pub fn new(grid: SudokuGrid) -> Sudoku {
        Sudoku::with_empty_marker(grid, DEFAULT_EMPTY_MARKER)
    }

    /// Creates a new Sudoku wrapping the given grid with a custom empty
    /// marker. Cells holding `empty_marker` are exempted from the consistency
    /// checks of [Sudoku::is_valid], but are *not* filled by the search
    /// strategies, which only fill cells holding the placeholder [UNFILLED].
    pub fn with_empty_marker(grid: SudokuGrid, empty_marker: i32) -> Sudoku {
        Sudoku {
            grid,
            empty_marker
        }
    }

    /// Parses the code into a [SudokuGrid] using [SudokuGrid::parse] and
    /// wraps the result in a Sudoku with the default empty marker. Note that
    /// it is not required that the parsed grid is consistent.
    ///
    /// # Errors
    ///
    /// If the parsing fails. See [SudokuGrid::parse] for further information.
    pub fn parse(code: &str) -> SudokuParseResult<Sudoku> {
        Ok(Sudoku::new(SudokuGrid::parse(code)?))
    }

    /// Gets a reference to the [SudokuGrid] of this Sudoku.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// Gets a mutable reference to the [SudokuGrid] of this Sudoku.
    pub fn grid_mut(&mut self) -> &mut SudokuGrid {
        &mut self.grid
    }

    /// Consumes this Sudoku and returns its [SudokuGrid].
    pub fn into_grid(self) -> SudokuGrid {
        self.grid
    }

    /// Gets the empty marker configured for this Sudoku.
    pub fn empty_marker(&self) -> i32 {
        self.empty_marker
    }

    /// Indicates whether the grid of this Sudoku is a consistent, not
    /// necessarily complete, state with respect to the row, column, and block
    /// uniqueness rules. See [validity::is_valid] for the precise rules,
    /// including the handling of malformed grids and the deliberately
    /// permissive treatment of out-of-range values.
    pub fn is_valid(&self) -> bool {
        validity::is_valid(Some(&self.grid), self.empty_marker)
    }

    /// Attempts to solve this Sudoku with the naive backtracking strategy
    /// (see [NaiveBacktrackingSolver]), which re-validates the entire grid
    /// after every trial placement. The grid is mutated in place and returned
    /// by reference. If placeholder cells remain in the result, the Sudoku is
    /// unsolvable, since the search is exhaustive; [SudokuGrid::is_full] can
    /// be used to check this.
    pub fn solve(&mut self) -> &SudokuGrid {
        NaiveBacktrackingSolver.solve(self);
        &self.grid
    }

    /// Attempts to solve this Sudoku with the targeted backtracking strategy
    /// (see [TargetedBacktrackingSolver]), which validates a trial placement
    /// only against its row, column, and containing block. Same return
    /// contract as [Sudoku::solve].
    pub fn fast_solve(&mut self) -> &SudokuGrid {
        TargetedBacktrackingSolver.solve(self);
        &self.grid
    }
}
