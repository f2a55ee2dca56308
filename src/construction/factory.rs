//! Entry points that build grid instances with the default plugin set

use num_traits::ToPrimitive;
use std::fmt::Display;

use crate::construction::generators::{CellPosition, make_grid};
use crate::engine::builtin::default_plugins;
use crate::engine::instance::Instance;
use crate::io::error::Result;

/// Build an instance from rectangular data
///
/// # Errors
///
/// Returns `InvalidGridShape` if `data` has no rows, empty rows or rows of
/// different lengths
pub fn instance_of<T: Clone + 'static>(data: Vec<Vec<T>>) -> Result<Instance<T>> {
    Instance::with_plugins(default_plugins(), data)
}

/// Generate data with [`make_grid`] and build an instance from it
///
/// # Errors
///
/// Returns `InvalidDimension` for a non-positive `columns` or `rows`
pub fn make<T, C, R, F>(columns: C, rows: R, callback: F) -> Result<Instance<T>>
where
    T: Clone + 'static,
    C: ToPrimitive + Display,
    R: ToPrimitive + Display,
    F: FnMut(CellPosition) -> T,
{
    instance_of(make_grid(columns, rows, callback)?)
}
