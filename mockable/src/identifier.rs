//! Derivation of identifiers from batch sequence numbers.

use uuid::Uuid;

use crate::{MockValue, Mockable};

/// A type that can be derived from the 1-based position of an element in a generated batch.
///
/// Used to give each element of a batch a distinct identity field, see
/// [MockGenerator::mock_values_with_ids][crate::MockGenerator::mock_values_with_ids].
pub trait IdentifierCastable: Into<MockValue> + Sized {
    /// Highest sequence number mapped to a distinct identifier.
    ///
    /// Batches of more elements are refused by the generator.
    const MAX_SEQUENCE_NUMBER: u64 = u64::MAX;

    /// Build the identifier of the `sequence_number`-th element.
    ///
    /// Integer identifiers saturate at their type maximum past [Self::MAX_SEQUENCE_NUMBER],
    /// giving duplicated identifiers.
    fn cast_from_sequence_number(sequence_number: u64) -> Self;
}

/// A [Mockable] type with an identity field, used to generate batches of distinct elements
/// without naming the identifier type at each call.
pub trait Identifiable: Mockable {
    /// Type of the identity field
    type Identifier: IdentifierCastable;

    /// Selector of the identity field
    const IDENTIFIER_FIELD: Self::Field;
}

macro_rules! impl_integer_identifier {
    ($($integer:ty),*) => {
        $(
            impl IdentifierCastable for $integer {
                const MAX_SEQUENCE_NUMBER: u64 = <$integer>::MAX as u64;

                fn cast_from_sequence_number(sequence_number: u64) -> Self {
                    <$integer>::try_from(sequence_number).unwrap_or(<$integer>::MAX)
                }
            }
        )*
    };
}

impl_integer_identifier!(i32, i64, u32, u64, usize);

impl IdentifierCastable for String {
    fn cast_from_sequence_number(sequence_number: u64) -> Self {
        sequence_number.to_string()
    }
}

/// The sequence number is not used: every call returns a new random (v4) uuid.
impl IdentifierCastable for Uuid {
    fn cast_from_sequence_number(_sequence_number: u64) -> Self {
        Uuid::new_v4()
    }
}
