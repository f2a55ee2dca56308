//! Plugins registered on every instance built with the default plugin set

use crate::engine::instance::{InstanceHandle, StateProvider};
use crate::engine::plugin::{Plugin, PluginRegistry, operation};
use crate::engine::state::{State, StatePatch};
use crate::engine::value::{Value, position_arg};
use crate::io::error::Result;
use crate::spatial::directions::step;

/// Registration name of the state reader bundle
pub const STATE_PLUGIN: &str = "state";
/// Registration name of the navigation bundle
pub const NAVIGATION_PLUGIN: &str = "navigating";

/// The plugin set used by `instance_of` and `make`
pub fn default_plugins<T: Clone + 'static>() -> PluginRegistry<T> {
    PluginRegistry::new()
        .with(STATE_PLUGIN, state_plugin::<T>)
        .with(NAVIGATION_PLUGIN, navigation_plugin::<T>)
}

/// Readers for shape, cells and position
///
/// `size` is computed when the bundle is bound and refreshed on every
/// rebind; the other readers consult the state when called.
///
/// # Errors
///
/// Returns the provider's error if the state cannot be read while binding,
/// or `InvalidGridShape` if the shape overflows the cell count
pub fn state_plugin<T: Clone + 'static>(
    _instance: &InstanceHandle<T>,
    provider: &StateProvider<T>,
) -> Result<Plugin<T>> {
    let size = provider.with_state(State::size)??;

    let rows = provider.clone();
    let columns = provider.clone();
    let data = provider.clone();
    let position = provider.clone();
    let array2d = provider.clone();

    Ok(Plugin::bundle([
        (
            "rows",
            operation(move |_args| rows.with_state(|state| Value::Count(state.rows))),
        ),
        (
            "columns",
            operation(move |_args| columns.with_state(|state| Value::Count(state.columns))),
        ),
        ("size", operation(move |_args| Ok(Value::Count(size)))),
        (
            "data",
            operation(move |_args| data.with_state(|state| Value::List(state.data.clone()))),
        ),
        (
            "position",
            operation(move |_args| position.with_state(|state| Value::Position(state.position))),
        ),
        (
            "to_array2d",
            operation(move |_args| array2d.with_state(|state| Value::Rows(state.to_array2d()))),
        ),
    ]))
}

/// Position updates: `goto` jumps to a position, `walk` steps in a direction
///
/// Positions are not clipped to the grid.
///
/// # Errors
///
/// Never fails while binding; the operations fail on a missing or
/// non-position argument
pub fn navigation_plugin<T: Clone + 'static>(
    _instance: &InstanceHandle<T>,
    provider: &StateProvider<T>,
) -> Result<Plugin<T>> {
    let goto = provider.clone();
    let walk = provider.clone();

    Ok(Plugin::bundle([
        (
            "goto",
            operation(move |args: &[Value<T>]| {
                let target = position_arg("goto", args, 0)?;
                goto.set_state(StatePatch::new().position(target))?;
                Ok(Value::Unit)
            }),
        ),
        (
            "walk",
            operation(move |args: &[Value<T>]| {
                let direction = position_arg("walk", args, 0)?;
                let current = walk.with_state(|state| state.position)?;
                walk.set_state(StatePatch::new().position(step(current, direction)))?;
                Ok(Value::Unit)
            }),
        ),
    ]))
}
