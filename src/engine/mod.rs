//! Plugin-composed grid instances
//!
//! This module contains the stateful side of the crate:
//! - The private state record and partial updates
//! - Plugin factories, their registry and bound operations
//! - The instance that rebinds its operations on every state update
//! - The built-in plugin set

/// Plugins registered by default
pub mod builtin;
/// Instances, state providers and the rebinding engine
pub mod instance;
/// Plugin factories, operations and the registry
pub mod plugin;
/// Instance state and partial state updates
pub mod state;
/// Operation arguments and results
pub mod value;

pub use builtin::default_plugins;
pub use instance::{Instance, InstanceHandle, StateProvider};
pub use plugin::{Operation, Plugin, PluginFactory, PluginRegistry, operation};
pub use state::{State, StatePatch};
pub use value::Value;
