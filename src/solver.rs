//! This module contains the logic for solving Sudoku.
//!
//! Most importantly, this module contains the definition of the [Solver]
//! trait and the two interchangeable backtracking strategies:
//! [NaiveBacktrackingSolver], which re-validates the entire grid after every
//! trial placement, and [TargetedBacktrackingSolver], which checks a trial
//! placement only against its row, column, and containing block.
//!
//! Both strategies fill exactly the cells holding the placeholder
//! [UNFILLED], in row-major order, trying candidates in increasing order.
//! They mutate the grid in place and undo every failed placement, so after
//! an unsuccessful solve the grid is in the same state as before. The search
//! is plain recursion; mutation and reversion are strictly nested with the
//! call stack, whose depth is bounded by the number of open cells.

use crate::{Sudoku, SudokuGrid, UNFILLED};

/// A trait for structs which have the ability to solve Sudoku. Both
/// implementations in this module are exhaustive and complete, so a `false`
/// result proves that no solution exists. The trait mainly serves as a seam
/// that lets callers and tests swap the strategies freely.
pub trait Solver {

    /// Attempts to solve the provided Sudoku by mutating its grid in place.
    /// Returns `true` if the grid was completed, i.e. no placeholder cell
    /// remains. On `false`, the grid is left in the state it was in before
    /// the call, since every explored placement is undone on failure.
    fn solve(&self, sudoku: &mut Sudoku) -> bool;
}

/// Scans the grid in row-major order and returns the coordinate
/// `(row, column)` of the first cell holding the placeholder [UNFILLED], or
/// `None` if the grid is fully assigned. Cells holding an empty marker are
/// never reported; the locator looks for the literal placeholder only.
pub fn find_first_unfilled(grid: &SudokuGrid) -> Option<(usize, usize)> {
    for (row, cells) in grid.rows().iter().enumerate() {
        for (column, &value) in cells.iter().enumerate() {
            if value == UNFILLED {
                return Some((row, column));
            }
        }
    }

    None
}

/// Indicates whether the given value is already present somewhere in the
/// given row.
fn used_in_row(grid: &SudokuGrid, row: usize, value: i32) -> bool {
    grid.rows()[row].iter().any(|&cell| cell == value)
}

/// Indicates whether the given value is already present somewhere in the
/// given column.
fn used_in_column(grid: &SudokuGrid, column: usize, value: i32) -> bool {
    grid.rows().iter().any(|cells| cells.get(column) == Some(&value))
}

/// Indicates whether the given value is already present in the block
/// containing the given cell. The block's top-left corner is found by
/// rounding the coordinates down to the next multiple of the block side
/// length.
fn used_in_block(grid: &SudokuGrid, row: usize, column: usize, value: i32)
        -> bool {
    let size = grid.size();
    let block_len = grid.block_len();
    let start_row = row - row % block_len;
    let start_column = column - column % block_len;

    for other_row in start_row..(start_row + block_len).min(size) {
        let cells = &grid.rows()[other_row];
        let end_column = (start_column + block_len).min(cells.len());

        for other_column in start_column..end_column {
            if cells[other_column] == value {
                return true;
            }
        }
    }

    false
}

/// Indicates whether placing the given value in the given cell would keep
/// the value unique within its row, column, and block.
fn fits_locally(grid: &SudokuGrid, row: usize, column: usize, value: i32)
        -> bool {
    !used_in_row(grid, row, value) &&
        !used_in_column(grid, column, value) &&
        !used_in_block(grid, row, column, value)
}

/// A [Solver] which fills the first placeholder cell it encounters in
/// row-major order, trying candidates 1 to N in increasing order and
/// re-validating the *entire* grid (see [Sudoku::is_valid]) after every
/// trial placement before recursing.
///
/// Since the judgment is the whole-grid predicate, the configured empty
/// marker matters here: open cells other than the one currently being tried
/// still hold the placeholder `0`, which the duplicate scan treats as an
/// ordinary value. A puzzle with several open cells in one row or column is
/// therefore only solvable naively when bound with the marker `0`. See the
/// [crate-level documentation](crate) on the two sentinels.
pub struct NaiveBacktrackingSolver;

impl NaiveBacktrackingSolver {
    fn solve_rec(sudoku: &mut Sudoku) -> bool {
        let size = sudoku.grid().size();

        for row in 0..size {
            let column_count = sudoku.grid().rows()[row].len();

            for column in 0..column_count {
                if sudoku.grid().rows()[row][column] != UNFILLED {
                    continue;
                }

                for candidate in 1..=size as i32 {
                    sudoku.grid_mut().rows_mut()[row][column] = candidate;

                    if sudoku.is_valid() &&
                            NaiveBacktrackingSolver::solve_rec(sudoku) {
                        return true;
                    }

                    sudoku.grid_mut().rows_mut()[row][column] = UNFILLED;
                }

                // No candidate worked, so a decision further up has to be
                // revised.
                return false;
            }
        }

        true
    }
}

impl Solver for NaiveBacktrackingSolver {
    fn solve(&self, sudoku: &mut Sudoku) -> bool {
        NaiveBacktrackingSolver::solve_rec(sudoku)
    }
}

/// A [Solver] which locates the next placeholder cell with
/// [find_first_unfilled] and places a candidate only after checking its row,
/// column, and containing block, avoiding the naive strategy's whole-grid
/// rescan. This makes a placement attempt cost O(N) instead of O(N²).
///
/// The configured empty marker plays no role here; only the literal
/// placeholder `0` identifies open cells, and the membership checks compare
/// against the candidate value directly.
pub struct TargetedBacktrackingSolver;

impl TargetedBacktrackingSolver {
    fn solve_rec(sudoku: &mut Sudoku) -> bool {
        let (row, column) = match find_first_unfilled(sudoku.grid()) {
            Some(coordinate) => coordinate,
            None => return true
        };
        let size = sudoku.grid().size();

        for candidate in 1..=size as i32 {
            if fits_locally(sudoku.grid(), row, column, candidate) {
                sudoku.grid_mut().rows_mut()[row][column] = candidate;

                if TargetedBacktrackingSolver::solve_rec(sudoku) {
                    return true;
                }

                sudoku.grid_mut().rows_mut()[row][column] = UNFILLED;
            }
        }

        false
    }
}

impl Solver for TargetedBacktrackingSolver {
    fn solve(&self, sudoku: &mut Sudoku) -> bool {
        TargetedBacktrackingSolver::solve_rec(sudoku)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    // The 9x9 example Sudoku is taken from the World Puzzle Federation
    // Sudoku Grand Prix, GP 2020 Round 8 (Puzzle 2).

    const PUZZLE_9X9: &str = "9;\
         , , , ,8,1, , , ,\
         , ,2, , ,7,8, , ,\
         ,5,3, , , ,1,7, ,\
        3,7, , , , , , , ,\
        6, , , , , , , ,3,\
         , , , , , , ,2,4,\
         ,6,9, , , ,2,3, ,\
         , ,5,9, , ,4, , ,\
         , , ,6,5, , , , ";

    const PUZZLE_9X9_SOLUTION: &str = "9;\
        7,4,6,2,8,1,3,5,9,\
        9,1,2,5,3,7,8,4,6,\
        8,5,3,4,9,6,1,7,2,\
        3,7,4,1,2,5,6,9,8,\
        6,2,8,7,4,9,5,1,3,\
        5,9,1,3,6,8,7,2,4,\
        1,6,9,8,7,4,2,3,5,\
        2,8,5,9,1,3,4,6,7,\
        4,3,7,6,5,2,9,8,1";

    const PUZZLE_4X4: &str = "4; , , ,4, ,4,3, , ,3, , , , ,1, ";

    const PUZZLE_4X4_SOLUTION: &str = "4;3,1,2,4,2,4,3,1,1,3,4,2,4,2,1,3";

    fn parse(code: &str) -> SudokuGrid {
        SudokuGrid::parse(code).unwrap()
    }

    #[test]
    fn locator_finds_first_placeholder_in_row_major_order() {
        let grid = parse("4;1,2, ,4, , , , , , , , , , , , ");
        assert_eq!(Some((0, 2)), find_first_unfilled(&grid));

        let grid = parse("4;1,2,3,4,3,4,1, , , , , , , , , ");
        assert_eq!(Some((1, 3)), find_first_unfilled(&grid));
    }

    #[test]
    fn locator_ignores_empty_markers() {
        let grid = parse("2;1,-1,3,4");
        assert_eq!(None, find_first_unfilled(&grid));
    }

    #[test]
    fn locator_reports_full_grid() {
        let grid = parse("2;1,2,3,4");
        assert_eq!(None, find_first_unfilled(&grid));
    }

    #[test]
    fn used_in_row_and_column() {
        let grid = parse("4;1,2, ,4, , , , ,3, , , , , , , ");

        assert!(used_in_row(&grid, 0, 2));
        assert!(!used_in_row(&grid, 0, 3));
        assert!(used_in_column(&grid, 0, 3));
        assert!(!used_in_column(&grid, 1, 3));
    }

    #[test]
    fn used_in_block_rounds_to_block_corner() {
        let grid = parse("4; , , , , ,1, , , , , , , , , ,2");

        assert!(used_in_block(&grid, 0, 0, 1));
        assert!(!used_in_block(&grid, 0, 2, 1));
        assert!(used_in_block(&grid, 2, 2, 2));
        assert!(!used_in_block(&grid, 2, 0, 2));
    }

    #[test]
    fn naive_leaves_full_valid_grid_unchanged() {
        let grid = parse("4;1,2,3,4,3,4,1,2,2,1,4,3,4,3,2,1");
        let mut sudoku = Sudoku::new(grid.clone());

        assert!(sudoku.is_valid());
        assert!(NaiveBacktrackingSolver.solve(&mut sudoku));
        assert_eq!(&grid, sudoku.grid());
    }

    #[test]
    fn naive_fills_single_forced_cell() {
        let mut grid = parse(PUZZLE_9X9_SOLUTION);
        grid.clear(0, 0).unwrap();
        let mut sudoku = Sudoku::new(grid);

        assert!(NaiveBacktrackingSolver.solve(&mut sudoku));
        assert_eq!(&parse(PUZZLE_9X9_SOLUTION), sudoku.grid());
    }

    #[test]
    fn targeted_fills_single_forced_cell() {
        let mut grid = parse(PUZZLE_9X9_SOLUTION);
        grid.clear(4, 4).unwrap();
        let mut sudoku = Sudoku::new(grid);

        assert!(TargetedBacktrackingSolver.solve(&mut sudoku));
        assert_eq!(&parse(PUZZLE_9X9_SOLUTION), sudoku.grid());
    }

    #[test]
    fn naive_solves_puzzle_with_zero_marker() {
        let mut sudoku = Sudoku::with_empty_marker(parse(PUZZLE_4X4), 0);

        assert!(NaiveBacktrackingSolver.solve(&mut sudoku));
        assert_eq!(&parse(PUZZLE_4X4_SOLUTION), sudoku.grid());
    }

    #[test]
    fn naive_with_default_marker_cannot_fill_colliding_placeholders() {
        // With the default marker, the open cells of the puzzle are ordinary
        // zeros to the validity predicate, and several of them share a row,
        // so every trial placement is judged inconsistent.
        let mut sudoku = Sudoku::new(parse(PUZZLE_4X4));

        assert!(!NaiveBacktrackingSolver.solve(&mut sudoku));
        assert_eq!(&parse(PUZZLE_4X4), sudoku.grid());
    }

    #[test]
    fn targeted_solves_puzzle_regardless_of_marker() {
        let mut sudoku = Sudoku::new(parse(PUZZLE_4X4));

        assert!(TargetedBacktrackingSolver.solve(&mut sudoku));
        assert_eq!(&parse(PUZZLE_4X4_SOLUTION), sudoku.grid());
    }

    #[test]
    fn targeted_solves_classic_sudoku() {
        let mut sudoku = Sudoku::new(parse(PUZZLE_9X9));

        assert!(TargetedBacktrackingSolver.solve(&mut sudoku));
        assert_eq!(&parse(PUZZLE_9X9_SOLUTION), sudoku.grid());
    }

    #[test]
    fn solved_grid_is_valid() {
        let mut sudoku = Sudoku::new(parse(PUZZLE_9X9));
        sudoku.fast_solve();

        assert!(sudoku.grid().is_full());
        assert!(sudoku.is_valid());
    }

    #[test]
    fn strategies_agree_on_solvable_puzzle() {
        let mut naive_solved =
            Sudoku::with_empty_marker(parse(PUZZLE_4X4), 0);
        let mut fast_solved = naive_solved.clone();

        assert!(NaiveBacktrackingSolver.solve(&mut naive_solved));
        assert!(TargetedBacktrackingSolver.solve(&mut fast_solved));

        assert!(naive_solved.grid().is_full());
        assert!(fast_solved.grid().is_full());
        assert!(naive_solved.is_valid());
        assert!(fast_solved.is_valid());
        assert_eq!(naive_solved.grid(), fast_solved.grid());
    }

    #[test]
    fn unsolvable_puzzle_leaves_placeholders() {
        // The top-left cell needs the 1 by its row, but its column already
        // contains the 1, so no candidate fits.
        let grid = SudokuGrid::from_rows(vec![
            vec![0, 2, 3, 4],
            vec![0, 0, 0, 0],
            vec![1, 0, 0, 0],
            vec![0, 0, 0, 0]
        ]);
        let sudoku = Sudoku::with_empty_marker(grid, 0);

        assert!(sudoku.is_valid());

        let mut naive = sudoku.clone();
        let mut targeted = sudoku.clone();

        assert!(!NaiveBacktrackingSolver.solve(&mut naive));
        assert!(!TargetedBacktrackingSolver.solve(&mut targeted));

        assert!(!naive.grid().is_full());
        assert!(!targeted.grid().is_full());
        assert_eq!(sudoku.grid(), naive.grid());
        assert_eq!(sudoku.grid(), targeted.grid());
    }

    #[test]
    fn solve_through_sudoku_methods() {
        let mut sudoku = Sudoku::new(parse(PUZZLE_9X9));
        let result = sudoku.fast_solve().clone();

        assert_eq!(parse(PUZZLE_9X9_SOLUTION), result);

        let mut sudoku = Sudoku::with_empty_marker(parse(PUZZLE_4X4), 0);
        let result = sudoku.solve().clone();

        assert_eq!(parse(PUZZLE_4X4_SOLUTION), result);
    }

    #[test]
    fn empty_grid_is_trivially_solved() {
        let mut sudoku = Sudoku::new(SudokuGrid::from_rows(vec![]));

        assert!(NaiveBacktrackingSolver.solve(&mut sudoku));
        assert!(TargetedBacktrackingSolver.solve(&mut sudoku));
    }
}
