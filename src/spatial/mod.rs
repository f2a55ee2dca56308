//! Spatial data structures and static direction tables
//!
//! This module contains spatial-related functionality including:
//! - Direction constants and neighbour orderings
//! - Raw 2D array normalization
//! - The immutable grid value and its factory

/// Named neighbour-enumeration orders
pub mod adjacences;
/// Raw two-dimensional array normalization utilities
pub mod array2d;
/// Direction constants and single-step movement
pub mod directions;
/// Immutable grid value and factory functions
pub mod grid;

pub use grid::{CreateGridProps, Grid, create_grid, create_grid_from_array2d};
