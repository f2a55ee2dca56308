//! Command-line defaults and runtime configuration constants

// Grid dimensions used when none are given on the command line
/// Default number of columns for generated grids
pub const DEFAULT_COLUMNS: usize = 8;
/// Default number of rows for generated grids
pub const DEFAULT_ROWS: usize = 8;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Fixed seed for reproducible random fills
pub const DEFAULT_SEED: u64 = 42;

/// Exclusive upper bound for randomly filled cell values
pub const RANDOM_CELL_LIMIT: u32 = 10;

// Output settings
/// Separator placed between cells when rendering a row
pub const CELL_SEPARATOR: &str = " ";
/// Placeholder rendered for blank cells
pub const BLANK_CELL: &str = ".";
