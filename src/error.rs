//! This module contains some error and result definitions used in this crate.
//!
//! Note that the search itself never raises an error: "cannot solve" is
//! communicated through remaining placeholder cells and malformed grids make
//! the validity predicate return `false`. The errors here concern the
//! collaborating surface only, i.e. cell accessors and grid codes.

use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](crate). This does not exclude errors that occur when parsing
/// Sudoku, see [SudokuParseError] for that.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the specified coordinates (row and column) lie outside
    /// the Sudoku grid in question. This is the case if the row is greater
    /// than or equal to the number of rows, or the column is greater than or
    /// equal to the length of that row.
    OutOfBounds
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a `Sudoku` or
/// `SudokuGrid`.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the code has the wrong number of parts, which are
    /// separated by semicolons. The code should have two parts: size and
    /// cells (separated by ';'), so if the code does not contain exactly one
    /// semicolon, this error will be returned.
    WrongNumberOfParts,

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal the square of the given size.
    WrongNumberOfCells,

    /// Indicates that one of the numbers (size or cell content) could not be
    /// parsed.
    NumberFormatError
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}
