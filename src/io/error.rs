//! Error types and context management for grid construction and instance operations

use std::fmt;

/// Main error type for all grid operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A generator helper received a dimension that is not a positive integer
    InvalidDimension {
        /// Name of the invalid argument (`columns`, `rows` or `length`)
        parameter: &'static str,
        /// Provided value, as given by the caller
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A two-dimensional array is empty, ragged or otherwise not rectangular
    InvalidGridShape {
        /// Description of the offending shape property
        reason: String,
    },

    /// No operation is bound under the requested name
    UnknownOperation {
        /// Name that was looked up
        name: String,
    },

    /// An operation received arguments it cannot work with
    InvalidArgument {
        /// Name of the operation that rejected its arguments
        operation: &'static str,
        /// Description of the mismatch
        reason: String,
    },

    /// The instance state is borrowed by a reader while a write was requested
    ///
    /// Occurs when `set_state` is called from inside a `with_state` closure.
    StateInUse {
        /// Access that could not be granted
        operation: &'static str,
    },

    /// A state provider or instance handle outlived the instance it belongs to
    Detached,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid dimension '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidGridShape { reason } => {
                write!(f, "Invalid grid shape: {reason}")
            }
            Self::UnknownOperation { name } => {
                write!(f, "No operation named '{name}' is bound on this instance")
            }
            Self::InvalidArgument { operation, reason } => {
                write!(f, "Invalid argument for '{operation}': {reason}")
            }
            Self::StateInUse { operation } => {
                write!(f, "Cannot {operation} while the state is being read")
            }
            Self::Detached => {
                write!(f, "The grid instance this handle belongs to was dropped")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with the operation that produced them
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the operation context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the operation context applied
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<GridError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only argument errors are raised without knowing their operation
            if let GridError::InvalidArgument { operation, .. } = &mut error {
                if let Some(name) = context.operation {
                    *operation = name;
                }
            }
            error
        })
    }

    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.with_context(ErrorContext {
            operation: Some(operation),
        })
    }
}

/// Create an invalid dimension error
pub fn invalid_dimension(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidDimension {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid grid shape error
pub fn invalid_shape(reason: &impl ToString) -> GridError {
    GridError::InvalidGridShape {
        reason: reason.to_string(),
    }
}

/// Create an invalid argument error
pub fn invalid_argument(operation: &'static str, reason: &impl ToString) -> GridError {
    GridError::InvalidArgument {
        operation,
        reason: reason.to_string(),
    }
}
