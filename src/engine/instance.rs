//! Stateful grid instance and the rebinding engine behind it
//!
//! An instance owns a state cell and an operation table. Every state update
//! goes through one entry point, which merges the patch and then rebuilds the
//! whole table by running the registered plugin factories in order. The new
//! table replaces the old one only once every factory has succeeded.
//!
//! Factories and operations only ever hold weak references back to the
//! instance, so dropping the `Instance` frees everything.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::engine::plugin::{Operation, OperationTable, Plugin, PluginRegistry};
use crate::engine::state::{State, StatePatch};
use crate::engine::value::Value;
use crate::io::error::{GridError, Result};
use crate::spatial::grid::{Grid, create_grid_from_array2d_at};

struct Core<T> {
    state: RefCell<State<T>>,
    operations: RefCell<OperationTable<T>>,
    plugins: PluginRegistry<T>,
}

/// Read and update access to one instance's state
///
/// Handed to every plugin factory. Operations should clone it into their
/// closures and read the state when invoked.
pub struct StateProvider<T> {
    core: Weak<Core<T>>,
}

/// Weak handle to an instance, for operations that call sibling operations
pub struct InstanceHandle<T> {
    core: Weak<Core<T>>,
}

/// A grid instance extended with the operations of its plugins
pub struct Instance<T> {
    core: Rc<Core<T>>,
}

impl<T> Clone for StateProvider<T> {
    fn clone(&self) -> Self {
        Self {
            core: Weak::clone(&self.core),
        }
    }
}

impl<T> Clone for InstanceHandle<T> {
    fn clone(&self) -> Self {
        Self {
            core: Weak::clone(&self.core),
        }
    }
}

impl<T: Clone + 'static> StateProvider<T> {
    /// Snapshot of the current state
    ///
    /// # Errors
    ///
    /// Returns `Detached` if the instance was dropped, or `StateInUse` during
    /// a state update
    pub fn get_state(&self) -> Result<State<T>> {
        self.with_state(State::clone)
    }

    /// Read the current state without copying it
    ///
    /// # Errors
    ///
    /// Returns `Detached` if the instance was dropped, or `StateInUse` during
    /// a state update
    pub fn with_state<R>(&self, read: impl FnOnce(&State<T>) -> R) -> Result<R> {
        let core = upgrade(&self.core)?;
        let state = core
            .state
            .try_borrow()
            .map_err(|_borrow_error| GridError::StateInUse {
                operation: "read the state",
            })?;
        let value = read(&state);
        Ok(value)
    }

    /// Merge a partial state and rebind every plugin
    ///
    /// # Errors
    ///
    /// Returns `Detached` if the instance was dropped, `StateInUse` when
    /// called while the state is being read, or the first plugin factory error
    pub fn set_state(&self, patch: StatePatch<T>) -> Result<()> {
        let core = upgrade(&self.core)?;
        apply_patch(&core, patch)
    }
}

impl<T> InstanceHandle<T> {
    /// Invoke an operation bound on the instance
    ///
    /// # Errors
    ///
    /// Returns `Detached` if the instance was dropped, `UnknownOperation` if
    /// nothing is bound under `name`, or the operation's own error
    pub fn call(&self, name: &str, args: &[Value<T>]) -> Result<Value<T>> {
        let core = upgrade(&self.core)?;
        call_operation(&core, name, args)
    }

    /// Check whether an operation is bound under `name`
    pub fn has_operation(&self, name: &str) -> bool {
        self.core
            .upgrade()
            .is_some_and(|core| has_operation(&core, name))
    }
}

impl<T: Clone + 'static> Instance<T> {
    /// Build an instance from rectangular data and a plugin set
    ///
    /// The initial state is installed through the regular update path, so
    /// all plugins are bound before the instance is returned.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGridShape` if `data` is empty or ragged, or the first
    /// plugin factory error
    pub fn with_plugins(plugins: PluginRegistry<T>, data: Vec<Vec<T>>) -> Result<Self> {
        let initial = State::from_array2d(data)?;

        log::debug!(
            "building grid instance: {} rows, {} columns, {} plugins",
            initial.rows,
            initial.columns,
            plugins.len()
        );

        let core = Rc::new(Core {
            state: RefCell::new(State::empty()),
            operations: RefCell::new(OperationTable::new()),
            plugins,
        });

        apply_patch(&core, StatePatch::from(initial))?;

        Ok(Self { core })
    }

    /// Invoke an operation by name
    ///
    /// # Errors
    ///
    /// Returns `UnknownOperation` if nothing is bound under `name`, or the
    /// operation's own error
    pub fn call(&self, name: &str, args: &[Value<T>]) -> Result<Value<T>> {
        call_operation(&self.core, name, args)
    }

    /// Invoke an operation for its effect and return the instance for chaining
    ///
    /// # Errors
    ///
    /// Same as [`Instance::call`]
    pub fn apply(&self, name: &str, args: &[Value<T>]) -> Result<&Self> {
        self.call(name, args)?;
        Ok(self)
    }

    /// Check whether an operation is bound under `name`
    pub fn has_operation(&self, name: &str) -> bool {
        has_operation(&self.core, name)
    }

    /// Names of all bound operations, in binding order
    pub fn operation_names(&self) -> Vec<String> {
        self.core
            .operations
            .try_borrow()
            .map(|operations| operations.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// State provider bound to this instance
    pub fn state_provider(&self) -> StateProvider<T> {
        StateProvider {
            core: Rc::downgrade(&self.core),
        }
    }

    /// Weak handle to this instance
    pub fn handle(&self) -> InstanceHandle<T> {
        InstanceHandle {
            core: Rc::downgrade(&self.core),
        }
    }

    /// Snapshot of the current state
    ///
    /// # Errors
    ///
    /// Returns `StateInUse` during a state update
    pub fn get_state(&self) -> Result<State<T>> {
        self.state_provider().get_state()
    }

    /// Merge a partial state and rebind every plugin
    ///
    /// # Errors
    ///
    /// Returns `StateInUse` when called while the state is being read, or the
    /// first plugin factory error
    pub fn set_state(&self, patch: StatePatch<T>) -> Result<()> {
        apply_patch(&self.core, patch)
    }

    /// Freeze the current state into an immutable grid at the current position
    ///
    /// # Errors
    ///
    /// Returns `InvalidGridShape` if a patch left `data` inconsistent with
    /// `rows * columns`
    pub fn to_grid(&self) -> Result<Grid<T>> {
        let (rows, position) = self.state_provider().with_state(|state| {
            state
                .check_shape()
                .map(|()| (state.to_array2d(), state.position))
        })??;
        create_grid_from_array2d_at(&rows, position)
    }
}

impl<T> fmt::Debug for Instance<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operations: Vec<String> = self
            .core
            .operations
            .try_borrow()
            .map(|operations| operations.keys().cloned().collect())
            .unwrap_or_default();

        f.debug_struct("Instance")
            .field("plugins", &self.core.plugins)
            .field("operations", &operations)
            .finish_non_exhaustive()
    }
}

fn upgrade<T>(core: &Weak<Core<T>>) -> Result<Rc<Core<T>>> {
    core.upgrade().ok_or(GridError::Detached)
}

fn apply_patch<T: Clone + 'static>(core: &Rc<Core<T>>, patch: StatePatch<T>) -> Result<()> {
    core.state
        .try_borrow_mut()
        .map_err(|_borrow_error| GridError::StateInUse {
            operation: "update the state",
        })?
        .merge(patch);

    rebind(core)
}

fn rebind<T: Clone + 'static>(core: &Rc<Core<T>>) -> Result<()> {
    let handle = InstanceHandle {
        core: Rc::downgrade(core),
    };
    let provider = StateProvider {
        core: Rc::downgrade(core),
    };

    let mut table = OperationTable::new();
    for (key, factory) in core.plugins.factories() {
        match factory(&handle, &provider)? {
            Plugin::Single(operation) => bind(&mut table, key, operation),
            Plugin::Bundle(operations) => {
                for (name, operation) in operations {
                    bind(&mut table, &name, operation);
                }
            }
        }
    }

    log::trace!(
        "rebound {} operations from {} plugins",
        table.len(),
        core.plugins.len()
    );

    *core
        .operations
        .try_borrow_mut()
        .map_err(|_borrow_error| GridError::StateInUse {
            operation: "rebind operations",
        })? = table;

    Ok(())
}

fn bind<T>(table: &mut OperationTable<T>, name: &str, operation: Operation<T>) {
    if table.insert(name.to_owned(), operation).is_some() {
        log::trace!("operation '{name}' replaced by a later plugin");
    }
}

fn has_operation<T>(core: &Core<T>, name: &str) -> bool {
    core.operations
        .try_borrow()
        .is_ok_and(|operations| operations.contains_key(name))
}

fn call_operation<T>(core: &Core<T>, name: &str, args: &[Value<T>]) -> Result<Value<T>> {
    let operation = core
        .operations
        .try_borrow()
        .map_err(|_borrow_error| GridError::StateInUse {
            operation: "look up an operation",
        })?
        .get(name)
        .cloned()
        .ok_or_else(|| GridError::UnknownOperation {
            name: name.to_owned(),
        })?;

    operation(args)
}
