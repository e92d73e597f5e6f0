#![warn(missing_docs)]

//! Mock value generation for unit tests and previews.
//!
//! Provide:
//! - The [Mockable] capability: a type builds a default instance of itself, with some
//!   of its fields overridden by an [InjectedValues] map.
//! - Collection generation with the [MockGenerator] (or the [MockableCollection] shortcuts on
//!   `Vec<T>`): repeated mocks, mocks with distinct identifiers and mocks built from several
//!   override maps.
//! - The [IdentifierCastable] capability used to derive an identifier from a sequence number.
//! - [Fake data][test_utils::fake_data] fixture types (with the `test_tools` feature).

pub mod configuration;
pub mod entities;
mod error;
pub mod generator;
pub mod identifier;
pub mod injected_values;
pub mod logging;
mod mockable;

#[cfg(any(test, feature = "test_tools"))]
pub mod test_utils;

pub use configuration::GenerationConfiguration;
pub use entities::{FromMockValue, MockValue, MockValueKind};
pub use error::{MockError, MockResult};
pub use generator::{MockGenerator, MockableCollection};
pub use identifier::{Identifiable, IdentifierCastable};
pub use injected_values::{FieldSelector, InjectedValues, NoField};
pub use mockable::Mockable;

/// Generic error type
pub type StdError = anyhow::Error;

/// Generic result type
pub type StdResult<T> = anyhow::Result<T>;
