//! Generators for raw grid arrays and lists
//!
//! Dimensions accept any numeric type and are truncated toward zero, so
//! `2.9` means two columns. Anything that does not truncate to at least 1
//! (zero, negatives, NaN, out of range) is rejected.

use num_traits::ToPrimitive;
use std::fmt::Display;

use crate::io::error::{Result, invalid_dimension};

/// Column and row of a generated cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPosition {
    /// Zero-based column index
    pub column: usize,
    /// Zero-based row index
    pub row: usize,
}

/// Generate `rows` rows of `columns` cells in row-major order
///
/// # Errors
///
/// Returns `InvalidDimension` naming `columns` or `rows` if either is not a
/// positive integer
pub fn make_grid<T, C, R, F>(columns: C, rows: R, mut callback: F) -> Result<Vec<Vec<T>>>
where
    C: ToPrimitive + Display,
    R: ToPrimitive + Display,
    F: FnMut(CellPosition) -> T,
{
    let column_count = parse_dimension("columns", &columns, "at least one column is required")?;
    let row_count = parse_dimension("rows", &rows, "at least one row is required")?;

    Ok((0..row_count)
        .map(|row| {
            (0..column_count)
                .map(|column| callback(CellPosition { column, row }))
                .collect()
        })
        .collect())
}

/// Generate a grid filled with the `None` placeholder
///
/// # Errors
///
/// Same as [`make_grid`]
pub fn make_blank_grid<T, C, R>(columns: C, rows: R) -> Result<Vec<Vec<Option<T>>>>
where
    C: ToPrimitive + Display,
    R: ToPrimitive + Display,
{
    make_grid(columns, rows, |_| None)
}

/// Generate `length` elements from their index
///
/// # Errors
///
/// Returns `InvalidDimension` naming `length` if it is not a positive integer
pub fn make_list<T, L, F>(length: L, callback: F) -> Result<Vec<T>>
where
    L: ToPrimitive + Display,
    F: FnMut(usize) -> T,
{
    let count = parse_dimension("length", &length, "a list needs at least one element")?;
    Ok((0..count).map(callback).collect())
}

/// Generate a list filled with the `None` placeholder
///
/// # Errors
///
/// Same as [`make_list`]
pub fn make_blank_list<T, L>(length: L) -> Result<Vec<Option<T>>>
where
    L: ToPrimitive + Display,
{
    make_list(length, |_| None)
}

fn parse_dimension<D>(parameter: &'static str, value: &D, reason: &str) -> Result<usize>
where
    D: ToPrimitive + Display,
{
    value
        .to_i64()
        .filter(|parsed| *parsed >= 1)
        .and_then(|parsed| usize::try_from(parsed).ok())
        .ok_or_else(|| invalid_dimension(parameter, value, &reason))
}
