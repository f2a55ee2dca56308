//! Command-line interface for generating a grid and inspecting neighbourhoods

use crate::construction::{instance_of, make_grid};
use crate::engine::value::Value;
use crate::io::configuration::{
    DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_SEED, MAX_GRID_DIMENSION, RANDOM_CELL_LIMIT,
};
use crate::io::error::{Result, WithContext};
use crate::io::render::{format_optional, render_grid, render_positions, render_summary};
use crate::spatial::adjacences::{self, AdjacencyOrdering};
use crate::spatial::directions::Position;
use crate::spatial::grid::create_grid_from_array2d_at;
use clap::{ArgAction, Parser, ValueEnum};
use rand::{Rng, SeedableRng, rngs::StdRng};

#[derive(Parser, Debug)]
#[command(name = "gridl")]
#[command(
    author,
    version,
    about = "Generate a grid and list neighbour positions in a fixed order"
)]
/// Command-line arguments for the grid tool
pub struct Cli {
    /// Number of columns
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS, value_parser = parse_grid_dimension)]
    pub columns: usize,

    /// Number of rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS, value_parser = parse_grid_dimension)]
    pub rows: usize,

    /// How cells are filled
    #[arg(short, long, value_enum, default_value_t = Fill::Index)]
    pub fill: Fill,

    /// Random seed for reproducible random fills
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Horizontal grid position
    #[arg(short = 'x', long, default_value_t = 0, allow_negative_numbers = true)]
    pub x: i32,

    /// Vertical grid position
    #[arg(short = 'y', long, default_value_t = 0, allow_negative_numbers = true)]
    pub y: i32,

    /// Cell whose neighbours are listed
    #[arg(short, long, value_name = "COLUMN,ROW", value_parser = parse_position)]
    pub at: Option<Position>,

    /// Order in which neighbours are listed
    #[arg(short, long, value_enum, default_value_t = OrderingArg::AllCw)]
    pub ordering: OrderingArg,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Cell fill strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Fill {
    /// Row-major cell index
    Index,
    /// Seeded random values below the configured limit
    Random,
    /// Blank placeholder cells
    Blank,
}

/// Adjacency orderings selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderingArg {
    /// All neighbours, reading order
    All,
    /// All neighbours, clockwise
    AllCw,
    /// All neighbours, counterclockwise
    AllCcw,
    /// Orthogonal neighbours, reading order
    Orthogonal,
    /// Orthogonal neighbours, clockwise
    OrthogonalCw,
    /// Orthogonal neighbours, counterclockwise
    OrthogonalCcw,
    /// Diagonal neighbours, reading order
    Diagonal,
    /// Diagonal neighbours, clockwise
    DiagonalCw,
    /// Diagonal neighbours, counterclockwise
    DiagonalCcw,
}

impl OrderingArg {
    /// The ordering table this argument selects
    pub const fn ordering(self) -> AdjacencyOrdering {
        match self {
            Self::All => adjacences::ALL,
            Self::AllCw => adjacences::ALL_CW,
            Self::AllCcw => adjacences::ALL_CCW,
            Self::Orthogonal => adjacences::ORTHOGONAL,
            Self::OrthogonalCw => adjacences::ORTHOGONAL_CW,
            Self::OrthogonalCcw => adjacences::ORTHOGONAL_CCW,
            Self::Diagonal => adjacences::DIAGONAL,
            Self::DiagonalCw => adjacences::DIAGONAL_CW,
            Self::DiagonalCcw => adjacences::DIAGONAL_CCW,
        }
    }
}

impl Cli {
    /// Log level implied by `--quiet` and `--verbose`
    pub const fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Builds the requested grid and renders the report
pub struct GridRunner {
    cli: Cli,
}

impl GridRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the grid and render the report
    ///
    /// # Errors
    ///
    /// Returns an error if grid generation or instance construction fails
    pub fn run(&self) -> Result<String> {
        let data = self.generate()?;
        let grid = create_grid_from_array2d_at(&data, [self.cli.x, self.cli.y])?;

        let mut lines = vec![
            render_summary(&grid),
            render_grid(&grid, format_optional),
        ];

        if let Some(at) = self.cli.at {
            let instance = instance_of(data)?;
            instance
                .apply("goto", &[Value::Position(at)])
                .with_operation("--at")?;

            let position = instance
                .call("position", &[])?
                .as_position()
                .unwrap_or(at);
            let inside: Vec<Position> =
                adjacences::neighbours(position, self.cli.ordering.ordering())
                    .into_iter()
                    .filter(|neighbour| grid.get(*neighbour).is_some())
                    .collect();

            log::info!(
                "{} of {} neighbours of [{}, {}] are inside the grid",
                inside.len(),
                self.cli.ordering.ordering().len(),
                position[0],
                position[1]
            );

            lines.push(format!(
                "neighbours of [{}, {}]: {}",
                position[0],
                position[1],
                render_positions(&inside)
            ));
        }

        Ok(lines.join("\n"))
    }

    fn generate(&self) -> Result<Vec<Vec<Option<u32>>>> {
        let columns = self.cli.columns;
        match self.cli.fill {
            Fill::Index => make_grid(columns, self.cli.rows, |cell| {
                Some((cell.row * columns + cell.column) as u32)
            }),
            Fill::Random => {
                let mut rng = StdRng::seed_from_u64(self.cli.seed);
                make_grid(columns, self.cli.rows, |_| {
                    Some(rng.random_range(0..RANDOM_CELL_LIMIT))
                })
            }
            Fill::Blank => make_grid(columns, self.cli.rows, |_| None),
        }
    }
}

fn parse_grid_dimension(value: &str) -> std::result::Result<usize, String> {
    let parsed: usize = value
        .parse()
        .map_err(|e| format!("'{value}' is not a dimension: {e}"))?;
    if (1..=MAX_GRID_DIMENSION).contains(&parsed) {
        Ok(parsed)
    } else {
        Err(format!("must be between 1 and {MAX_GRID_DIMENSION}"))
    }
}

fn parse_position(value: &str) -> std::result::Result<Position, String> {
    let (column, row) = value
        .split_once(',')
        .ok_or_else(|| format!("'{value}' is not COLUMN,ROW"))?;
    let column = column
        .trim()
        .parse()
        .map_err(|e| format!("invalid column '{column}': {e}"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row '{row}': {e}"))?;
    Ok([column, row])
}
