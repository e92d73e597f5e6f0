//! Field override maps given to the mock constructors.

use std::collections::HashMap;
use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;

use crate::{FromMockValue, MockError, MockResult, MockValue, Mockable};

/// Reference to one named field of a [Mockable] type, used as a key of [InjectedValues].
///
/// Usually a fieldless enum with one variant per overridable field:
///
/// ```
/// use mockable::FieldSelector;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
/// #[strum(serialize_all = "snake_case")]
/// enum CarField {
///     Make,
///     Model,
/// }
///
/// impl FieldSelector for CarField {}
/// ```
pub trait FieldSelector: Copy + Eq + Hash + Debug + Display {}

/// Field selector of types that have no overridable field.
///
/// This enum has no variant: an [InjectedValues] map keyed by it is always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoField {}

impl Display for NoField {
    fn fmt(&self, _f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {}
    }
}

impl FieldSelector for NoField {}

/// Mapping from the fields of `T` to the values they must be given by [Mockable::mock_value].
///
/// A field without entry, or with a `None` entry, keeps the default value chosen by `T`.
pub struct InjectedValues<T: Mockable> {
    values: HashMap<T::Field, Option<MockValue>>,
}

impl<T: Mockable> InjectedValues<T> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Set the value of the given field, replacing any previous value.
    pub fn with<V: Into<MockValue>>(mut self, field: T::Field, value: V) -> Self {
        self.values.insert(field, Some(value.into()));
        self
    }

    /// Set the entry of the given field, returning the previous entry if any.
    pub fn insert(
        &mut self,
        field: T::Field,
        value: Option<MockValue>,
    ) -> Option<Option<MockValue>> {
        self.values.insert(field, value)
    }

    /// Remove the entry of the given field, returning it if any.
    pub fn remove(&mut self, field: &T::Field) -> Option<Option<MockValue>> {
        self.values.remove(field)
    }

    /// Get the value injected for the given field, `None` if absent or explicitly empty.
    pub fn get(&self, field: &T::Field) -> Option<&MockValue> {
        self.values.get(field).and_then(Option::as_ref)
    }

    /// Check if the map holds an entry for the given field (even an empty one).
    pub fn contains(&self, field: &T::Field) -> bool {
        self.values.contains_key(field)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the map has no entry
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&T::Field, Option<&MockValue>)> {
        self.values
            .iter()
            .map(|(field, value)| (field, value.as_ref()))
    }

    /// Resolve the value of a field: the injected value if any, else `default`.
    ///
    /// Fails with [MockError::BadInjection] if the injected value kind does not match `V`.
    pub fn value_or<V: FromMockValue>(&self, field: T::Field, default: V) -> MockResult<V> {
        self.value_or_else(field, || default)
    }

    /// Same as [value_or][Self::value_or] but the default is only computed when needed.
    pub fn value_or_else<V, F>(&self, field: T::Field, default: F) -> MockResult<V>
    where
        V: FromMockValue,
        F: FnOnce() -> V,
    {
        match self.get(&field) {
            None => Ok(default()),
            Some(value) => {
                let supplied = value.kind();
                V::from_mock_value(value.clone()).ok_or_else(|| MockError::BadInjection {
                    field: field.to_string(),
                    expected: V::KIND,
                    supplied,
                })
            }
        }
    }
}

impl<T: Mockable> Default for InjectedValues<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Mockable> Clone for InjectedValues<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
        }
    }
}

impl<T: Mockable> Debug for InjectedValues<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.values.iter()).finish()
    }
}

impl<T: Mockable> PartialEq for InjectedValues<T> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<T: Mockable, V: Into<MockValue>> FromIterator<(T::Field, V)> for InjectedValues<T> {
    fn from_iter<I: IntoIterator<Item = (T::Field, V)>>(iter: I) -> Self {
        let mut injected_values = Self::new();
        injected_values.extend(iter);
        injected_values
    }
}

impl<T: Mockable, V: Into<MockValue>> Extend<(T::Field, V)> for InjectedValues<T> {
    fn extend<I: IntoIterator<Item = (T::Field, V)>>(&mut self, iter: I) {
        for (field, value) in iter {
            self.values.insert(field, Some(value.into()));
        }
    }
}

/// Build an [InjectedValues] map from `field => value` pairs.
///
/// The target type is inferred from the field selectors.
///
/// ```
/// # use mockable::{FieldSelector, InjectedValues, MockResult, Mockable};
/// # #[derive(Debug, PartialEq)]
/// # struct Car {
/// #     make: String,
/// #     model: String,
/// # }
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
/// # enum CarField {
/// #     Make,
/// #     Model,
/// # }
/// # impl FieldSelector for CarField {}
/// # impl Mockable for Car {
/// #     type Field = CarField;
/// #     fn mock_value(injected_values: &InjectedValues<Self>) -> MockResult<Self> {
/// #         Ok(Self {
/// #             make: injected_values.value_or(CarField::Make, "Ford".to_string())?,
/// #             model: injected_values.value_or(CarField::Model, "Mustang".to_string())?,
/// #         })
/// #     }
/// # }
/// use mockable::injected_values;
///
/// let injected_values: InjectedValues<Car> = injected_values! {
///     CarField::Make => "Toyota",
///     CarField::Model => "Camry",
/// };
/// let car = Car::mock_value(&injected_values).unwrap();
/// assert_eq!(Car { make: "Toyota".to_string(), model: "Camry".to_string() }, car);
/// ```
#[macro_export]
macro_rules! injected_values {
    () => {
        $crate::InjectedValues::new()
    };
    ($($field:expr => $value:expr),+ $(,)?) => {{
        let mut injected_values = $crate::InjectedValues::new();
        $(
            injected_values.insert($field, Some($crate::MockValue::from($value)));
        )+
        injected_values
    }};
}

#[cfg(test)]
mod tests {
    use crate::MockValueKind;
    use crate::test_utils::fake_data::{Car, CarField};

    use super::*;

    #[test]
    fn new_map_is_empty() {
        let injected_values = InjectedValues::<Car>::new();

        assert!(injected_values.is_empty());
        assert_eq!(0, injected_values.len());
        assert_eq!(InjectedValues::<Car>::default(), injected_values);
    }

    #[test]
    fn with_replaces_previous_value_of_the_same_field() {
        let injected_values = InjectedValues::<Car>::new()
            .with(CarField::Model, "Corolla")
            .with(CarField::Model, "Camry");

        assert_eq!(1, injected_values.len());
        assert_eq!(
            Some(&MockValue::from("Camry")),
            injected_values.get(&CarField::Model)
        );
    }

    #[test]
    fn insert_returns_previous_entry() {
        let mut injected_values = InjectedValues::<Car>::new();

        assert_eq!(None, injected_values.insert(CarField::Make, None));
        assert_eq!(
            Some(None),
            injected_values.insert(CarField::Make, Some("Toyota".into()))
        );
        assert_eq!(
            Some(Some(MockValue::from("Toyota"))),
            injected_values.remove(&CarField::Make)
        );
        assert!(injected_values.is_empty());
    }

    #[test]
    fn empty_entry_is_contained_but_has_no_value() {
        let mut injected_values = InjectedValues::<Car>::new();
        injected_values.insert(CarField::Make, None);

        assert!(injected_values.contains(&CarField::Make));
        assert_eq!(None, injected_values.get(&CarField::Make));
        assert_eq!(
            "Ford".to_string(),
            injected_values
                .value_or(CarField::Make, "Ford".to_string())
                .unwrap()
        );
    }

    #[test]
    fn value_or_returns_injected_value_when_present() {
        let injected_values = InjectedValues::<Car>::new().with(CarField::Model, "Camry");

        let model = injected_values
            .value_or(CarField::Model, "Mustang".to_string())
            .unwrap();

        assert_eq!("Camry", model);
    }

    #[test]
    fn value_or_else_does_not_compute_default_when_value_is_injected() {
        let injected_values = InjectedValues::<Car>::new().with(CarField::Model, "Camry");

        let model: String = injected_values
            .value_or_else(CarField::Model, || panic!("default should not be computed"))
            .unwrap();

        assert_eq!("Camry", model);
    }

    #[test]
    fn value_of_the_wrong_kind_is_a_bad_injection() {
        let injected_values = InjectedValues::<Car>::new().with(CarField::Model, 42_i64);

        let error = injected_values
            .value_or(CarField::Model, "Mustang".to_string())
            .expect_err("An integer should not be injected in a text field");

        assert!(
            matches!(
                &error,
                MockError::BadInjection { field, expected: MockValueKind::Text, supplied: MockValueKind::Int }
                    if field == "model"
            ),
            "unexpected error: {error:?}"
        );
    }

    #[test]
    fn collect_from_field_value_pairs() {
        let injected_values: InjectedValues<Car> =
            [(CarField::Make, "Toyota"), (CarField::Model, "Camry")]
                .into_iter()
                .collect();

        assert_eq!(2, injected_values.len());
        assert_eq!(
            Some(&MockValue::from("Toyota")),
            injected_values.get(&CarField::Make)
        );
    }

    #[test]
    fn macro_builds_the_same_map_as_the_builder() {
        let from_macro: InjectedValues<Car> = crate::injected_values! {
            CarField::Make => "Toyota",
            CarField::Model => "Camry",
        };
        let from_builder = InjectedValues::<Car>::new()
            .with(CarField::Make, "Toyota")
            .with(CarField::Model, "Camry");

        assert_eq!(from_builder, from_macro);
    }

    #[test]
    fn macro_without_pairs_builds_an_empty_map() {
        let injected_values: InjectedValues<Car> = crate::injected_values! {};

        assert!(injected_values.is_empty());
    }

    #[test]
    fn clone_is_independent_from_the_original() {
        let original = InjectedValues::<Car>::new().with(CarField::Model, "Camry");
        let mut copy = original.clone();
        copy.insert(CarField::Model, Some("Corolla".into()));

        assert_eq!(
            Some(&MockValue::from("Camry")),
            original.get(&CarField::Model)
        );
    }
}
