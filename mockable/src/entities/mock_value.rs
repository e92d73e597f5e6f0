use chrono::{DateTime, Utc};
use strum::{Display, EnumDiscriminants};
use uuid::Uuid;

/// A dynamically typed value assigned to a field by an override map.
///
/// The kind of the value is checked against the declared type of the field when the
/// override is applied, see [FromMockValue].
#[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(name(MockValueKind))]
#[strum_discriminants(derive(Display, Hash))]
pub enum MockValue {
    /// Boolean value
    Bool(bool),

    /// Signed integer value
    Int(i64),

    /// Unsigned integer value
    UInt(u64),

    /// Floating point value
    Float(f64),

    /// Text value
    Text(String),

    /// Universally unique identifier
    Uuid(Uuid),

    /// Point in time
    DateTime(DateTime<Utc>),
}

impl MockValue {
    /// Kind of this value
    pub fn kind(&self) -> MockValueKind {
        self.into()
    }
}

/// Conversion from a [MockValue] to the declared type of a field.
pub trait FromMockValue: Sized {
    /// Kind of [MockValue] expected by this type
    const KIND: MockValueKind;

    /// Extract `Self` from the given value, `None` if the value kind does not match.
    fn from_mock_value(value: MockValue) -> Option<Self>;
}

macro_rules! impl_integer_mock_value {
    ($($integer:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$integer> for MockValue {
                fn from(value: $integer) -> Self {
                    Self::$variant(value.into())
                }
            }

            impl FromMockValue for $integer {
                const KIND: MockValueKind = MockValueKind::$variant;

                fn from_mock_value(value: MockValue) -> Option<Self> {
                    match value {
                        MockValue::Int(value) => <$integer>::try_from(value).ok(),
                        MockValue::UInt(value) => <$integer>::try_from(value).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_integer_mock_value!(
    i32 => Int,
    i64 => Int,
    u32 => UInt,
    u64 => UInt,
);

impl From<usize> for MockValue {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl FromMockValue for usize {
    const KIND: MockValueKind = MockValueKind::UInt;

    fn from_mock_value(value: MockValue) -> Option<Self> {
        match value {
            MockValue::Int(value) => usize::try_from(value).ok(),
            MockValue::UInt(value) => usize::try_from(value).ok(),
            _ => None,
        }
    }
}

impl From<bool> for MockValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl FromMockValue for bool {
    const KIND: MockValueKind = MockValueKind::Bool;

    fn from_mock_value(value: MockValue) -> Option<Self> {
        match value {
            MockValue::Bool(value) => Some(value),
            _ => None,
        }
    }
}

impl From<f64> for MockValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl FromMockValue for f64 {
    const KIND: MockValueKind = MockValueKind::Float;

    fn from_mock_value(value: MockValue) -> Option<Self> {
        match value {
            MockValue::Float(value) => Some(value),
            _ => None,
        }
    }
}

impl From<String> for MockValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for MockValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl FromMockValue for String {
    const KIND: MockValueKind = MockValueKind::Text;

    fn from_mock_value(value: MockValue) -> Option<Self> {
        match value {
            MockValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Uuid> for MockValue {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl FromMockValue for Uuid {
    const KIND: MockValueKind = MockValueKind::Uuid;

    fn from_mock_value(value: MockValue) -> Option<Self> {
        match value {
            MockValue::Uuid(value) => Some(value),
            _ => None,
        }
    }
}

impl From<DateTime<Utc>> for MockValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl FromMockValue for DateTime<Utc> {
    const KIND: MockValueKind = MockValueKind::DateTime;

    fn from_mock_value(value: MockValue) -> Option<Self> {
        match value {
            MockValue::DateTime(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(MockValueKind::Text, MockValue::from("Camry").kind());
        assert_eq!(MockValueKind::Int, MockValue::from(7_i64).kind());
        assert_eq!(MockValueKind::UInt, MockValue::from(7_usize).kind());
        assert_eq!(MockValueKind::Bool, MockValue::from(true).kind());
        assert_eq!(MockValueKind::Uuid, MockValue::from(Uuid::nil()).kind());
    }

    #[test]
    fn kind_is_displayed_with_its_variant_name() {
        assert_eq!("Text", MockValueKind::Text.to_string());
        assert_eq!("DateTime", MockValueKind::DateTime.to_string());
    }

    #[test]
    fn extract_value_of_the_matching_kind() {
        assert_eq!(
            Some("Camry".to_string()),
            String::from_mock_value(MockValue::from("Camry"))
        );
        assert_eq!(Some(false), bool::from_mock_value(MockValue::Bool(false)));
        assert_eq!(Some(1.5), f64::from_mock_value(MockValue::Float(1.5)));
    }

    #[test]
    fn refuse_value_of_another_kind() {
        assert_eq!(None, String::from_mock_value(MockValue::Int(7)));
        assert_eq!(None, i64::from_mock_value(MockValue::from("7")));
        assert_eq!(None, f64::from_mock_value(MockValue::Int(7)));
        assert_eq!(None, Uuid::from_mock_value(MockValue::from("not-an-uuid")));
    }

    #[test]
    fn integers_convert_between_signedness_when_lossless() {
        assert_eq!(Some(3_u64), u64::from_mock_value(MockValue::Int(3)));
        assert_eq!(Some(3_i64), i64::from_mock_value(MockValue::UInt(3)));
        assert_eq!(Some(3_i32), i32::from_mock_value(MockValue::UInt(3)));
    }

    #[test]
    fn integers_refuse_lossy_conversion() {
        assert_eq!(None, u64::from_mock_value(MockValue::Int(-1)));
        assert_eq!(None, i64::from_mock_value(MockValue::UInt(u64::MAX)));
        assert_eq!(None, i32::from_mock_value(MockValue::Int(i64::MAX)));
        assert_eq!(None, usize::from_mock_value(MockValue::Int(-3)));
    }
}
