//! Private instance state and the partial updates applied to it

use crate::io::error::{Result, invalid_shape};
use crate::spatial::array2d::{flatten, get_column_count, get_row_count, unflatten, validate_grid_array};
use crate::spatial::directions::Position;

/// Mutable record behind a grid instance
///
/// `data` holds `rows * columns` cells in row-major order. Only the state
/// provider of the owning instance can replace it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State<T> {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub columns: usize,
    /// Cells in row-major order
    pub data: Vec<T>,
    /// Current `[x, y]` position
    pub position: Position,
}

impl<T> State<T> {
    /// State with no cells at position `[0, 0]`
    pub const fn empty() -> Self {
        Self {
            rows: 0,
            columns: 0,
            data: Vec::new(),
            position: [0, 0],
        }
    }

    /// Validate and flatten a rectangular array into a fresh state
    ///
    /// # Errors
    ///
    /// Returns `InvalidGridShape` if the array is empty or ragged
    pub fn from_array2d(array: Vec<Vec<T>>) -> Result<Self> {
        validate_grid_array(&array)?;

        let rows = get_row_count(&array);
        let columns = get_column_count(&array);

        Ok(Self {
            rows,
            columns,
            data: flatten(array),
            position: [0, 0],
        })
    }

    /// Overwrite every field the patch provides
    ///
    /// Fields are replaced wholesale; `position` is never merged per axis.
    pub fn merge(&mut self, patch: StatePatch<T>) {
        let StatePatch {
            rows,
            columns,
            data,
            position,
        } = patch;

        if let Some(rows) = rows {
            self.rows = rows;
        }
        if let Some(columns) = columns {
            self.columns = columns;
        }
        if let Some(data) = data {
            self.data = data;
        }
        if let Some(position) = position {
            self.position = position;
        }
    }

    /// Number of cells the shape describes
    ///
    /// # Errors
    ///
    /// Returns `InvalidGridShape` if `rows * columns` overflows
    pub fn size(&self) -> Result<usize> {
        self.rows.checked_mul(self.columns).ok_or_else(|| {
            invalid_shape(&format!(
                "{} rows of {} columns overflow the cell count",
                self.rows, self.columns
            ))
        })
    }

    /// Check that `data` holds exactly `rows * columns` cells
    ///
    /// # Errors
    ///
    /// Returns `InvalidGridShape` if the shape overflows or disagrees with
    /// the data length
    pub fn check_shape(&self) -> Result<()> {
        let size = self.size()?;
        if self.data.len() == size {
            Ok(())
        } else {
            Err(invalid_shape(&format!(
                "data has {} cells, expected {} rows of {} columns",
                self.data.len(),
                self.rows,
                self.columns
            )))
        }
    }

    /// Cell at a `[column, row]` position, if inside the shape
    pub fn value_at(&self, position: Position) -> Option<&T> {
        let column = usize::try_from(position[0]).ok()?;
        let row = usize::try_from(position[1]).ok()?;
        if column >= self.columns || row >= self.rows {
            return None;
        }
        let index = row.checked_mul(self.columns)?.checked_add(column)?;
        self.data.get(index)
    }

    /// Copy the data out as rows of `columns` cells
    pub fn to_array2d(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        unflatten(&self.data, self.columns)
    }
}

/// Partial state accepted by `set_state`
///
/// Every field left as `None` keeps its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePatch<T> {
    /// Replacement row count
    pub rows: Option<usize>,
    /// Replacement column count
    pub columns: Option<usize>,
    /// Replacement cells in row-major order
    pub data: Option<Vec<T>>,
    /// Replacement position
    pub position: Option<Position>,
}

impl<T> Default for StatePatch<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StatePatch<T> {
    /// Patch that changes nothing
    pub const fn new() -> Self {
        Self {
            rows: None,
            columns: None,
            data: None,
            position: None,
        }
    }

    /// Set the row count
    #[must_use]
    pub fn rows(self, rows: usize) -> Self {
        Self {
            rows: Some(rows),
            ..self
        }
    }

    /// Set the column count
    #[must_use]
    pub fn columns(self, columns: usize) -> Self {
        Self {
            columns: Some(columns),
            ..self
        }
    }

    /// Set the cells
    #[must_use]
    pub fn data(self, data: Vec<T>) -> Self {
        Self {
            data: Some(data),
            ..self
        }
    }

    /// Set the position
    #[must_use]
    pub fn position(self, position: Position) -> Self {
        Self {
            position: Some(position),
            ..self
        }
    }

    /// Check whether the patch provides no field
    pub const fn is_empty(&self) -> bool {
        self.rows.is_none() && self.columns.is_none() && self.data.is_none() && self.position.is_none()
    }
}

impl<T> From<State<T>> for StatePatch<T> {
    fn from(state: State<T>) -> Self {
        Self {
            rows: Some(state.rows),
            columns: Some(state.columns),
            data: Some(state.data),
            position: Some(state.position),
        }
    }
}
