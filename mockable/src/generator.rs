//! Generation of batches of mock values.

use slog::{Logger, debug, warn};

use crate::logging::{LoggerExtensions, short_type_name};
use crate::{
    GenerationConfiguration, Identifiable, IdentifierCastable, InjectedValues, MockError,
    MockResult, Mockable,
};

/// Builds sequences of [Mockable] values.
///
/// A batch is built atomically: if one element fails the whole batch fails with a
/// [MockError::ElementFailure] giving the position of the faulty element.
pub struct MockGenerator {
    configuration: GenerationConfiguration,
    logger: Logger,
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new(GenerationConfiguration::default())
    }
}

impl MockGenerator {
    /// [MockGenerator] factory
    pub fn new(configuration: GenerationConfiguration) -> Self {
        Self {
            configuration,
            logger: Logger::root(slog::Discard, slog::o!()),
        }
    }

    /// Set the [Logger] to use.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger.new_with_component_name::<Self>();
        self
    }

    /// Configuration used by this generator
    pub fn configuration(&self) -> &GenerationConfiguration {
        &self.configuration
    }

    fn check_number_of_elements<T>(
        &self,
        number_of_elements: usize,
        max_elements: Option<usize>,
    ) -> MockResult<()> {
        match max_elements {
            Some(max) if number_of_elements > max => {
                warn!(
                    self.logger, "Refused to generate mock values";
                    "mock_type" => short_type_name::<T>(),
                    "number_of_elements" => number_of_elements,
                    "max_elements" => max
                );
                Err(MockError::InvalidCount {
                    requested: number_of_elements,
                    max,
                })
            }
            _ => Ok(()),
        }
    }

    /// Build `number_of_elements` values, all built with the same overrides.
    pub fn mock_values<T: Mockable>(
        &self,
        number_of_elements: usize,
        injected_values: &InjectedValues<T>,
    ) -> MockResult<Vec<T>> {
        self.check_number_of_elements::<T>(number_of_elements, self.configuration.max_elements)?;
        debug!(
            self.logger, "Generating mock values";
            "mock_type" => short_type_name::<T>(),
            "number_of_elements" => number_of_elements,
            "injected_fields" => injected_values.len()
        );

        (1..=number_of_elements)
            .map(|position| {
                T::mock_value(injected_values).map_err(|error| error.at_position(position))
            })
            .collect()
    }

    /// Build `number_of_elements` values where the `id_field` of the n-th element is
    /// `V::cast_from_sequence_number(n)`, `n` starting at 1.
    ///
    /// Each element gets its own copy of `injected_values` where the identity entry, even
    /// one provided by the caller, is replaced: `injected_values` itself is left untouched.
    ///
    /// Fails with [MockError::InvalidCount] if `V` can't give a distinct identifier to each
    /// element (i.e. more than `i32::MAX` elements with `i32` identifiers).
    pub fn mock_values_with_ids<T, V>(
        &self,
        number_of_elements: usize,
        id_field: T::Field,
        injected_values: &InjectedValues<T>,
    ) -> MockResult<Vec<T>>
    where
        T: Mockable,
        V: IdentifierCastable,
    {
        let identifiers_capacity =
            usize::try_from(V::MAX_SEQUENCE_NUMBER).unwrap_or(usize::MAX);
        let max_elements = self
            .configuration
            .max_elements
            .map_or(identifiers_capacity, |max| max.min(identifiers_capacity));
        self.check_number_of_elements::<T>(number_of_elements, Some(max_elements))?;
        debug!(
            self.logger, "Generating identified mock values";
            "mock_type" => short_type_name::<T>(),
            "identifier_type" => short_type_name::<V>(),
            "id_field" => %id_field,
            "number_of_elements" => number_of_elements
        );

        (1..=number_of_elements)
            .map(|position| {
                let identifier = V::cast_from_sequence_number(position as u64);
                let mut element_values = injected_values.clone();
                element_values.insert(id_field, Some(identifier.into()));

                T::mock_value(&element_values).map_err(|error| error.at_position(position))
            })
            .collect()
    }

    /// Same as [mock_values_with_ids][Self::mock_values_with_ids] using the identity field
    /// declared by the [Identifiable] type.
    pub fn mock_identified_values<T: Identifiable>(
        &self,
        number_of_elements: usize,
        injected_values: &InjectedValues<T>,
    ) -> MockResult<Vec<T>> {
        self.mock_values_with_ids::<T, T::Identifier>(
            number_of_elements,
            T::IDENTIFIER_FIELD,
            injected_values,
        )
    }

    /// Build one value per given override map, in the same order.
    ///
    /// The number of maps is subject to the same limit as the number of elements of the other
    /// batches.
    pub fn mock_values_from<T, I>(&self, injected_values_list: I) -> MockResult<Vec<T>>
    where
        T: Mockable,
        I: IntoIterator<Item = InjectedValues<T>>,
    {
        let injected_values_list: Vec<InjectedValues<T>> =
            injected_values_list.into_iter().collect();
        self.check_number_of_elements::<T>(
            injected_values_list.len(),
            self.configuration.max_elements,
        )?;

        let mocks = injected_values_list
            .iter()
            .enumerate()
            .map(|(index, injected_values)| {
                T::mock_value(injected_values).map_err(|error| error.at_position(index + 1))
            })
            .collect::<MockResult<Vec<T>>>()?;
        debug!(
            self.logger, "Generated mock values from override maps";
            "mock_type" => short_type_name::<T>(),
            "number_of_elements" => mocks.len()
        );

        Ok(mocks)
    }
}

/// Batch generation shortcuts on `Vec<T>`, using a default [MockGenerator].
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
/// use mockable::MockableCollection;
///
/// let cars = Vec::<Car>::mock_values(5, &InjectedValues::new().with(CarField::Model, "Camry"))
///     .unwrap();
/// assert_eq!(5, cars.len());
/// assert!(cars.iter().all(|car| car.make == "Ford" && car.model == "Camry"));
/// ```
pub trait MockableCollection: Sized {
    /// Type of the generated elements
    type Element: Mockable;

    /// See [MockGenerator::mock_values]
    fn mock_values(
        number_of_elements: usize,
        injected_values: &InjectedValues<Self::Element>,
    ) -> MockResult<Self>;

    /// See [MockGenerator::mock_values_with_ids]
    fn mock_values_with_ids<V: IdentifierCastable>(
        number_of_elements: usize,
        id_field: <Self::Element as Mockable>::Field,
        injected_values: &InjectedValues<Self::Element>,
    ) -> MockResult<Self>;

    /// See [MockGenerator::mock_identified_values]
    fn mock_identified_values(
        number_of_elements: usize,
        injected_values: &InjectedValues<Self::Element>,
    ) -> MockResult<Self>
    where
        Self::Element: Identifiable;

    /// See [MockGenerator::mock_values_from]
    fn mock_values_from<I>(injected_values_list: I) -> MockResult<Self>
    where
        I: IntoIterator<Item = InjectedValues<Self::Element>>;
}

impl<T: Mockable> MockableCollection for Vec<T> {
    type Element = T;

    fn mock_values(
        number_of_elements: usize,
        injected_values: &InjectedValues<T>,
    ) -> MockResult<Self> {
        MockGenerator::default().mock_values(number_of_elements, injected_values)
    }

    fn mock_values_with_ids<V: IdentifierCastable>(
        number_of_elements: usize,
        id_field: T::Field,
        injected_values: &InjectedValues<T>,
    ) -> MockResult<Self> {
        MockGenerator::default().mock_values_with_ids::<T, V>(
            number_of_elements,
            id_field,
            injected_values,
        )
    }

    fn mock_identified_values(
        number_of_elements: usize,
        injected_values: &InjectedValues<T>,
    ) -> MockResult<Self>
    where
        T: Identifiable,
    {
        MockGenerator::default().mock_identified_values(number_of_elements, injected_values)
    }

    fn mock_values_from<I>(injected_values_list: I) -> MockResult<Self>
    where
        I: IntoIterator<Item = InjectedValues<T>>,
    {
        MockGenerator::default().mock_values_from(injected_values_list)
    }
}

/// Build one mock value per given override map, in the given order.
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
/// use mockable::mock_values;
///
/// let cars: Vec<Car> = mock_values![
///     InjectedValues::new().with(CarField::Model, "Camry"),
///     InjectedValues::new().with(CarField::Model, "Corolla"),
/// ]
/// .unwrap();
/// assert_eq!(vec!["Camry", "Corolla"], cars.iter().map(|car| car.model.as_str()).collect::<Vec<_>>());
/// ```
#[macro_export]
macro_rules! mock_values {
    ($($injected_values:expr),* $(,)?) => {
        $crate::MockGenerator::default().mock_values_from([$($injected_values),*])
    };
}
