//! The entities stored in field override maps.

mod mock_value;

pub use mock_value::{FromMockValue, MockValue, MockValueKind};
