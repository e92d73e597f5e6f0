use crate::{FieldSelector, InjectedValues, MockResult, NoField};

/// A type able to build a synthetic instance of itself for tests and previews.
///
/// Each field takes the value injected for it, if any, or a default chosen by the type.
/// Implementations resolve their fields with [InjectedValues::value_or] so a value of the
/// wrong kind fails with a [bad injection][crate::MockError::BadInjection].
///
/// ```
/// use mockable::{FieldSelector, InjectedValues, MockResult, Mockable};
///
/// #[derive(Debug, PartialEq)]
/// struct Car {
///     make: String,
///     model: String,
/// }
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
/// enum CarField {
///     Make,
///     Model,
/// }
///
/// impl FieldSelector for CarField {}
///
/// impl Mockable for Car {
///     type Field = CarField;
///
///     fn mock_value(injected_values: &InjectedValues<Self>) -> MockResult<Self> {
///         Ok(Self {
///             make: injected_values.value_or(CarField::Make, "Ford".to_string())?,
///             model: injected_values.value_or(CarField::Model, "Mustang".to_string())?,
///         })
///     }
/// }
///
/// let car = Car::mock_value(&InjectedValues::new().with(CarField::Model, "Focus")).unwrap();
/// assert_eq!("Ford", car.make);
/// assert_eq!("Focus", car.model);
/// ```
pub trait Mockable: Sized {
    /// Selector of the fields that can be overridden
    type Field: FieldSelector;

    /// Build an instance, applying the given overrides.
    fn mock_value(injected_values: &InjectedValues<Self>) -> MockResult<Self>;

    /// Build an instance with only default values.
    fn mock() -> MockResult<Self> {
        Self::mock_value(&InjectedValues::new())
    }
}

/// A sequence has no field of its own: mocking it yields a single default element.
///
/// Use the [MockableCollection][crate::MockableCollection] functions to generate actual batches.
impl<T: Mockable> Mockable for Vec<T> {
    type Field = NoField;

    fn mock_value(_injected_values: &InjectedValues<Self>) -> MockResult<Self> {
        Ok(vec![T::mock()?])
    }
}
