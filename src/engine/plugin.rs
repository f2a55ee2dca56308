//! Plugin factories and the ordered registry they are bound from
//!
//! A plugin factory receives the instance handle and the state provider and
//! returns either one operation or a bundle of named operations. The
//! registry keeps factories in registration order, which decides the winner
//! when two plugins bind the same name.

use indexmap::IndexMap;
use std::fmt;
use std::rc::Rc;

use crate::engine::instance::{InstanceHandle, StateProvider};
use crate::engine::value::Value;
use crate::io::error::Result;

/// A bound operation
pub type Operation<T> = Rc<dyn Fn(&[Value<T>]) -> Result<Value<T>>>;

/// Operations keyed by name, in binding order
pub type OperationTable<T> = IndexMap<String, Operation<T>>;

/// Builds the operations of one plugin against the current state
pub type PluginFactory<T> = Rc<dyn Fn(&InstanceHandle<T>, &StateProvider<T>) -> Result<Plugin<T>>>;

/// Wrap a closure as an operation
pub fn operation<T, F>(function: F) -> Operation<T>
where
    F: Fn(&[Value<T>]) -> Result<Value<T>> + 'static,
{
    Rc::new(function)
}

/// What a plugin factory produces
pub enum Plugin<T> {
    /// One operation, bound under the plugin's registration name
    Single(Operation<T>),
    /// Named operations, each bound under its own name
    Bundle(OperationTable<T>),
}

impl<T> Plugin<T> {
    /// Collect named operations into a bundle
    pub fn bundle<I, S>(operations: I) -> Self
    where
        I: IntoIterator<Item = (S, Operation<T>)>,
        S: Into<String>,
    {
        Self::Bundle(
            operations
                .into_iter()
                .map(|(name, operation)| (name.into(), operation))
                .collect(),
        )
    }
}

impl<T> fmt::Debug for Plugin<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(_) => f.write_str("Plugin::Single"),
            Self::Bundle(operations) => f
                .debug_tuple("Plugin::Bundle")
                .field(&operations.keys().collect::<Vec<_>>())
                .finish(),
        }
    }
}

/// Ordered set of plugin factories
///
/// Registering a name again replaces its factory but keeps its original
/// position in the order.
pub struct PluginRegistry<T> {
    factories: IndexMap<String, PluginFactory<T>>,
}

impl<T> Default for PluginRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for PluginRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            factories: self.factories.clone(),
        }
    }
}

impl<T> fmt::Debug for PluginRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.factories.keys()).finish()
    }
}

impl<T> PluginRegistry<T> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            factories: IndexMap::new(),
        }
    }

    /// Register a factory under a name
    pub fn register<S, F>(&mut self, name: S, factory: F) -> &mut Self
    where
        S: Into<String>,
        F: Fn(&InstanceHandle<T>, &StateProvider<T>) -> Result<Plugin<T>> + 'static,
    {
        self.factories.insert(name.into(), Rc::new(factory));
        self
    }

    /// Builder form of [`PluginRegistry::register`]
    #[must_use]
    pub fn with<S, F>(mut self, name: S, factory: F) -> Self
    where
        S: Into<String>,
        F: Fn(&InstanceHandle<T>, &StateProvider<T>) -> Result<Plugin<T>> + 'static,
    {
        self.register(name, factory);
        self
    }

    /// Number of registered plugins
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check whether no plugin is registered
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Plugin names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Factories in registration order
    pub fn factories(&self) -> impl Iterator<Item = (&str, &PluginFactory<T>)> {
        self.factories
            .iter()
            .map(|(name, factory)| (name.as_str(), factory))
    }
}
