//! Immutable, position-tagged rectangular grids
//!
//! A `Grid` owns its cells in an `Array2` and hands out only shared views
//! and copies, so once constructed its shape and contents never change.
//! Construction never keeps a reference to caller storage.

use ndarray::{Array2, ArrayView1, ArrayView2};
use std::fmt;

use crate::io::configuration::CELL_SEPARATOR;
use crate::io::error::Result;
use crate::spatial::array2d::{clone_array2d, correct_empty_array2d, shallow_freeze_array2d};
use crate::spatial::directions::Position;

/// Frozen rectangular grid with an `[x, y]` position offset
///
/// The offset is carried data only; indexing is always relative to the
/// grid's own top-left cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    cells: Array2<T>,
    x: i32,
    y: i32,
}

/// Properties for generating a grid cell by cell
pub struct CreateGridProps<F> {
    /// Number of cells per row
    pub column_count: usize,
    /// Number of rows
    pub row_count: usize,
    /// Called once per cell with its `[column, row]` position and row-major index
    pub create_cell: F,
    /// Horizontal position offset
    pub x: i32,
    /// Vertical position offset
    pub y: i32,
}

impl<F> CreateGridProps<F> {
    /// Properties for a grid at the default position `[0, 0]`
    pub fn new<T>(column_count: usize, row_count: usize, create_cell: F) -> Self
    where
        F: FnMut(Position, usize) -> T,
    {
        Self {
            column_count,
            row_count,
            create_cell,
            x: 0,
            y: 0,
        }
    }

    /// Place the generated grid at the given offset
    #[must_use]
    pub fn at(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }
}

/// Generate a new grid by calling `create_cell` for every cell
///
/// Cells are created in row-major order. A zero column or row count yields
/// the empty grid (zero rows, zero columns).
pub fn create_grid<T, F>(props: CreateGridProps<F>) -> Grid<T>
where
    F: FnMut(Position, usize) -> T,
{
    let CreateGridProps {
        column_count,
        row_count,
        mut create_cell,
        x,
        y,
    } = props;

    let shape = if column_count == 0 || row_count == 0 {
        (0, 0)
    } else {
        (row_count, column_count)
    };

    let cells = Array2::from_shape_fn(shape, |(row, column)| {
        create_cell([column as i32, row as i32], row * column_count + column)
    });

    Grid { cells, x, y }
}

/// Create a grid from an existing array at position `[0, 0]`
///
/// The caller's array is cloned before freezing and is never modified.
///
/// # Errors
///
/// Returns `InvalidGridShape` if the rows differ in length
pub fn create_grid_from_array2d<T: Clone>(array2d: &[Vec<T>]) -> Result<Grid<T>> {
    create_grid_from_array2d_at(array2d, [0, 0])
}

/// Create a grid from an existing array at the given position
///
/// # Errors
///
/// Returns `InvalidGridShape` if the rows differ in length
pub fn create_grid_from_array2d_at<T: Clone>(
    array2d: &[Vec<T>],
    position: Position,
) -> Result<Grid<T>> {
    let cells = shallow_freeze_array2d(correct_empty_array2d(clone_array2d(array2d)))?;

    Ok(Grid {
        cells,
        x: position[0],
        y: position[1],
    })
}

impl<T> Grid<T> {
    /// Read-only view of the cells, indexed `[row, column]`
    pub fn array2d(&self) -> ArrayView2<'_, T> {
        self.cells.view()
    }

    /// Copy the cells out as rows
    pub fn to_array2d(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.cells.outer_iter().map(|row| row.to_vec()).collect()
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, T>> {
        self.cells.outer_iter()
    }

    /// Iterate over all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Cell at a `[column, row]` position, if inside the grid
    pub fn get(&self, position: Position) -> Option<&T> {
        let column = usize::try_from(position[0]).ok()?;
        let row = usize::try_from(position[1]).ok()?;
        self.cells.get((row, column))
    }

    /// Number of cells per row
    pub fn column_count(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.column_count() * self.row_count()
    }

    /// Check whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Horizontal position offset
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical position offset
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Position offset as `[x, y]`
    pub const fn position(&self) -> Position {
        [self.x, self.y]
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.outer_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for (column, cell) in row.iter().enumerate() {
                if column > 0 {
                    f.write_str(CELL_SEPARATOR)?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
