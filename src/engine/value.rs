//! Dynamically shaped arguments and results of bound operations

use crate::io::error::{Result, invalid_argument};
use crate::spatial::directions::Position;

/// Argument or return value of an operation
///
/// Operations are looked up by name at runtime, so their inputs and outputs
/// share one type. `Position` doubles as a direction argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<T> {
    /// No meaningful value
    Unit,
    /// Boolean answer
    Bool(bool),
    /// A count or length
    Count(usize),
    /// A `[x, y]` position or direction
    Position(Position),
    /// A single cell value
    Cell(T),
    /// Cells in row-major order, or a single row or column
    List(Vec<T>),
    /// Cells as rows
    Rows(Vec<Vec<T>>),
}

impl<T> Value<T> {
    /// Short name of the variant, used in error messages
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Bool(_) => "bool",
            Self::Count(_) => "count",
            Self::Position(_) => "position",
            Self::Cell(_) => "cell",
            Self::List(_) => "list",
            Self::Rows(_) => "rows",
        }
    }

    /// The boolean, if this is a `Bool`
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The count, if this is a `Count`
    pub const fn as_count(&self) -> Option<usize> {
        match self {
            Self::Count(count) => Some(*count),
            _ => None,
        }
    }

    /// The position, if this is a `Position`
    pub const fn as_position(&self) -> Option<Position> {
        match self {
            Self::Position(position) => Some(*position),
            _ => None,
        }
    }

    /// The cell, if this is a `Cell`
    pub fn into_cell(self) -> Option<T> {
        match self {
            Self::Cell(cell) => Some(cell),
            _ => None,
        }
    }

    /// The cells, if this is a `List`
    pub fn into_list(self) -> Option<Vec<T>> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// The rows, if this is `Rows`
    pub fn into_rows(self) -> Option<Vec<Vec<T>>> {
        match self {
            Self::Rows(rows) => Some(rows),
            _ => None,
        }
    }
}

/// Read a required position argument
///
/// # Errors
///
/// Returns `InvalidArgument` if the argument is missing or not a position
pub fn position_arg<T>(operation: &'static str, args: &[Value<T>], index: usize) -> Result<Position> {
    match args.get(index) {
        Some(Value::Position(position)) => Ok(*position),
        Some(other) => Err(invalid_argument(
            operation,
            &format!("argument {index} must be a position, got {}", other.kind()),
        )),
        None => Err(invalid_argument(
            operation,
            &format!("missing position argument {index}"),
        )),
    }
}
