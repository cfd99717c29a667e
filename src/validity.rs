//! This module contains the whole-grid consistency predicate.
//!
//! The predicate decides whether a [SudokuGrid] is a *consistent*, not
//! necessarily complete, Sudoku state: no value occurs twice in a row, a
//! column, or a block, where cells holding the configured empty marker are
//! exempt. It is also the place where malformed grids (absent, jagged,
//! non-square) are absorbed: they make the predicate return `false` instead
//! of raising an error.
//!
//! Two quirks of the rules are deliberate and must not be "fixed":
//!
//! * The placeholder `0` is an ordinary value to the duplicate scan. Two
//! zeros in a row are a duplicate finding unless the marker itself is `0`.
//! * Values outside `[1, size]` that are not the marker are tolerated as
//! long as they do not collide with another cell. They fail the predicate
//! only through the duplicate scan, never through a range check.

use crate::{SudokuGrid, UNFILLED};

use std::collections::HashSet;

/// Checks whether the given grid is a consistent (not necessarily complete)
/// Sudoku state with respect to the row, column, and block uniqueness rules.
/// An absent grid is modeled as `None`. The rules, in order:
///
/// * Absent grid: invalid.
/// * Zero-size grid: valid (vacuously).
/// * A grid of one row with zero columns: invalid (malformed).
/// * Any other grid of one row: valid.
/// * 2x2 grid: invalid, regardless of contents, since no 2x2 grid can
/// satisfy the row, column, and block rules simultaneously.
/// * Non-square or jagged grid: invalid.
/// * Otherwise, every cell not holding `empty_marker` must be free of
/// duplicates in its row and column, and every block must be free of
/// duplicate non-placeholder, non-marker values.
///
/// See the [module-level documentation](self) for the treatment of the
/// placeholder and of out-of-range values.
pub fn is_valid(grid: Option<&SudokuGrid>, empty_marker: i32) -> bool {
    let grid = match grid {
        Some(grid) => grid,
        None => return false
    };
    let rows = grid.rows();

    if rows.is_empty() {
        return true;
    }

    if rows.len() == 1 && rows[0].is_empty() {
        return false;
    }

    if rows.len() == 1 {
        return true;
    }

    if rows.len() == 2 && rows[0].len() == 2 {
        return false;
    }

    if !grid.is_square() {
        return false;
    }

    let size = grid.size();

    for row in 0..size {
        for column in 0..size {
            if duplicated_in_row_or_column(grid, row, column, empty_marker) {
                return false;
            }
        }
    }

    blocks_free_of_duplicates(grid, empty_marker)
}

/// Indicates whether the value of the cell at the given position is also held
/// by another non-marker cell in the same row or the same column. The grid
/// must be square when this is called.
fn duplicated_in_row_or_column(grid: &SudokuGrid, row: usize, column: usize,
        empty_marker: i32) -> bool {
    let rows = grid.rows();
    let value = rows[row][column];

    for (other_column, &other) in rows[row].iter().enumerate() {
        if other_column != column && other == value && other != empty_marker {
            return true;
        }
    }

    for (other_row, other_cells) in rows.iter().enumerate() {
        if other_row != row && other_cells[column] == value &&
                other_cells[column] != empty_marker {
            return true;
        }
    }

    false
}

/// Indicates whether every block of the grid is free of duplicate values,
/// where the placeholder and the marker are skipped. Blocks are enumerated
/// left-to-right, top-to-bottom from their top-left corners, which are found
/// by integer division by the block side length.
fn blocks_free_of_duplicates(grid: &SudokuGrid, empty_marker: i32) -> bool {
    let rows = grid.rows();
    let size = grid.size();
    let block_len = grid.block_len();

    for block in 0..size {
        let start_row = block / block_len * block_len;
        let start_column = block % block_len * block_len;
        let mut seen = HashSet::new();

        // Blocks are clamped to the grid for sizes that are not perfect
        // squares.
        for row in start_row..(start_row + block_len).min(size) {
            for column in start_column..(start_column + block_len).min(size) {
                let value = rows[row][column];

                if value != UNFILLED && value != empty_marker &&
                        !seen.insert(value) {
                    return false;
                }
            }
        }
    }

    true
}
