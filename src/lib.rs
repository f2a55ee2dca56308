//! Immutable position-aware 2D grids and plugin-composed grid instances
//!
//! Two paths share one rectangular-array precondition. The read path turns a
//! raw array into a frozen [`Grid`]. The mutation path turns it into an
//! [`Instance`] whose operations are rebuilt from an ordered set of plugin
//! factories every time its state changes.

#![forbid(unsafe_code)]

/// Instance entry points and raw array generators
pub mod construction;
/// Plugin engine, instance state and built-in plugins
pub mod engine;
/// Command line, configuration, rendering and error handling
pub mod io;
/// Grids, array normalization and direction tables
pub mod spatial;

pub use construction::{instance_of, make, make_grid, make_list};
pub use engine::{Instance, Plugin, PluginRegistry, StatePatch, Value};
pub use io::error::{GridError, Result};
pub use spatial::{adjacences, directions};
pub use spatial::{CreateGridProps, Grid, create_grid, create_grid_from_array2d};
