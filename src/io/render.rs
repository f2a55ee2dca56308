//! Plain-text rendering of grids and position lists

use crate::io::configuration::{BLANK_CELL, CELL_SEPARATOR};
use crate::spatial::directions::Position;
use crate::spatial::grid::Grid;

/// Render one line per row, cells joined by the configured separator
pub fn render_grid<T>(grid: &Grid<T>, format_cell: impl Fn(&T) -> String) -> String {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(&format_cell)
                .collect::<Vec<_>>()
                .join(CELL_SEPARATOR)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format an optional cell, using the blank placeholder for `None`
pub fn format_optional<T: ToString>(cell: &Option<T>) -> String {
    cell.as_ref()
        .map_or_else(|| BLANK_CELL.to_string(), ToString::to_string)
}

/// One-line description of a grid's shape and position
pub fn render_summary<T>(grid: &Grid<T>) -> String {
    format!(
        "{}x{} grid at [{}, {}], {} cells",
        grid.column_count(),
        grid.row_count(),
        grid.x(),
        grid.y(),
        grid.cell_count()
    )
}

/// Format positions as `[x, y]` separated by spaces
pub fn render_positions(positions: &[Position]) -> String {
    positions
        .iter()
        .map(|position| format!("[{}, {}]", position[0], position[1]))
        .collect::<Vec<_>>()
        .join(" ")
}
