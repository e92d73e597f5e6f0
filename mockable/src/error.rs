use thiserror::Error;

use crate::entities::MockValueKind;

/// Result type of the mock constructors.
pub type MockResult<T> = Result<T, MockError>;

/// Error raised while building mock values.
#[derive(Error, Debug)]
pub enum MockError {
    /// An override value does not match the declared type of its target field.
    #[error("Bad injection for field '{field}': expected a '{expected}' value, got a '{supplied}' value")]
    BadInjection {
        /// Name of the overridden field
        field: String,
        /// Kind of value the field accepts
        expected: MockValueKind,
        /// Kind of value that was supplied
        supplied: MockValueKind,
    },

    /// The number of elements requested for a batch is not allowed.
    #[error("Invalid number of elements: {requested} requested, at most {max} can be generated")]
    InvalidCount {
        /// Number of elements requested
        requested: usize,
        /// Configured maximum
        max: usize,
    },

    /// An element of a batch could not be built, the whole batch is discarded.
    #[error("Could not build the element at position {position} of the batch")]
    ElementFailure {
        /// 1-based position of the failing element
        position: usize,
        /// Error raised by the element constructor
        #[source]
        source: Box<MockError>,
    },
}

impl MockError {
    /// Wrap this error as the failure of the element at the given 1-based `position`.
    pub fn at_position(self, position: usize) -> Self {
        Self::ElementFailure {
            position,
            source: Box::new(self),
        }
    }

    /// Return the innermost error, unwrapping batch element failures.
    pub fn root_cause(&self) -> &MockError {
        match self {
            Self::ElementFailure { source, .. } => source.root_cause(),
            error => error,
        }
    }
}
