/// Instance entry points using the default plugin set
pub mod factory;
/// Raw array and list generators
pub mod generators;

pub use factory::{instance_of, make};
pub use generators::{CellPosition, make_blank_grid, make_blank_list, make_grid, make_list};
