//! Normalization utilities for raw two-dimensional arrays
//!
//! Raw arrays arrive as `Vec<Vec<T>>` (row-major, possibly ragged). The
//! pipeline used by the grid factory is clone, then correct empty shapes,
//! then freeze into an owned `Array2`.

use ndarray::Array2;

use crate::io::error::{Result, invalid_shape};

/// Copy the outer sequence and every row
///
/// Elements are cloned with their own `Clone`; nothing deeper is copied.
pub fn clone_array2d<T: Clone>(array: &[Vec<T>]) -> Vec<Vec<T>> {
    array.to_vec()
}

/// Canonicalize degenerate arrays to zero rows and zero columns
///
/// An array without rows, or whose rows are all empty, becomes the empty
/// array. Anything else is returned unchanged.
pub fn correct_empty_array2d<T>(array: Vec<Vec<T>>) -> Vec<Vec<T>> {
    if array.iter().all(Vec::is_empty) {
        Vec::new()
    } else {
        array
    }
}

/// Move rows into an owned, rectangular `Array2`
///
/// The result has no row-level storage left that a caller could grow or
/// shrink. Ragged input has no `Array2` representation and is rejected.
///
/// # Errors
///
/// Returns `InvalidGridShape` if rows differ in length
pub fn shallow_freeze_array2d<T>(array: Vec<Vec<T>>) -> Result<Array2<T>> {
    let rows = get_row_count(&array);
    let columns = get_column_count(&array);

    if let Some((index, length)) = find_ragged_row(&array, columns) {
        return Err(invalid_shape(&format!(
            "row {index} has {length} cells, expected {columns}"
        )));
    }

    Array2::from_shape_vec((rows, columns), flatten(array)).map_err(|e| invalid_shape(&e))
}

/// Number of columns, taken from the first row (0 without rows)
pub fn get_column_count<T>(array: &[Vec<T>]) -> usize {
    array.first().map_or(0, Vec::len)
}

/// Number of rows
pub const fn get_row_count<T>(array: &[Vec<T>]) -> usize {
    array.len()
}

/// Check that an array can back a grid instance
///
/// # Errors
///
/// Returns `InvalidGridShape` naming the first violated property: no rows,
/// an empty first row, or a row whose length differs from the first
pub fn validate_grid_array<T>(array: &[Vec<T>]) -> Result<()> {
    let Some(first) = array.first() else {
        return Err(invalid_shape(&"the grid array needs at least one row"));
    };

    if first.is_empty() {
        return Err(invalid_shape(&"rows need at least one cell"));
    }

    match find_ragged_row(array, first.len()) {
        Some((index, length)) => Err(invalid_shape(&format!(
            "row {index} has {length} cells, expected {} like the first row",
            first.len()
        ))),
        None => Ok(()),
    }
}

/// Concatenate rows into one row-major sequence
pub fn flatten<T>(array: Vec<Vec<T>>) -> Vec<T> {
    array.into_iter().flatten().collect()
}

/// Split a row-major sequence into rows of `columns` cells
///
/// A trailing partial row is kept as-is, so inconsistent input stays
/// detectable downstream.
pub fn unflatten<T: Clone>(data: &[T], columns: usize) -> Vec<Vec<T>> {
    if columns == 0 {
        return Vec::new();
    }
    data.chunks(columns).map(<[T]>::to_vec).collect()
}

fn find_ragged_row<T>(array: &[Vec<T>], columns: usize) -> Option<(usize, usize)> {
    array
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != columns)
        .map(|(index, row)| (index, row.len()))
}
