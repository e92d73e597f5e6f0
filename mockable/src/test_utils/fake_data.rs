//! Fake record types implementing [Mockable], used in tests and documentation.

use chrono::{DateTime, Utc};
use strum::Display;
use uuid::Uuid;

use crate::{FieldSelector, Identifiable, InjectedValues, MockResult, Mockable};

/// Fake car record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    /// Car manufacturer
    pub make: String,

    /// Car model
    pub model: String,
}

/// Fields of a [Car]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum CarField {
    /// See [Car::make]
    Make,

    /// See [Car::model]
    Model,
}

impl FieldSelector for CarField {}

impl Car {
    /// Make of a car mocked without override
    pub fn default_make() -> String {
        "Ford".to_string()
    }

    /// Model of a car mocked without override
    pub fn default_model() -> String {
        "Mustang".to_string()
    }
}

impl Mockable for Car {
    type Field = CarField;

    fn mock_value(injected_values: &InjectedValues<Self>) -> MockResult<Self> {
        Ok(Self {
            make: injected_values.value_or_else(CarField::Make, Self::default_make)?,
            model: injected_values.value_or_else(CarField::Model, Self::default_model)?,
        })
    }
}

/// Fake driver record, identified by an integer
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    /// Driver identifier
    pub id: i64,

    /// Driver name
    pub name: String,

    /// Number of races won
    pub wins: u32,

    /// Is the driver still racing
    pub active: bool,

    /// Mean lap time in seconds
    pub mean_lap_time: f64,
}

/// Fields of a [Driver]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum DriverField {
    /// See [Driver::id]
    Id,

    /// See [Driver::name]
    Name,

    /// See [Driver::wins]
    Wins,

    /// See [Driver::active]
    Active,

    /// See [Driver::mean_lap_time]
    MeanLapTime,
}

impl FieldSelector for DriverField {}

impl Mockable for Driver {
    type Field = DriverField;

    fn mock_value(injected_values: &InjectedValues<Self>) -> MockResult<Self> {
        Ok(Self {
            id: injected_values.value_or(DriverField::Id, 0)?,
            name: injected_values.value_or_else(DriverField::Name, || "Jim Clark".to_string())?,
            wins: injected_values.value_or(DriverField::Wins, 25)?,
            active: injected_values.value_or(DriverField::Active, false)?,
            mean_lap_time: injected_values.value_or(DriverField::MeanLapTime, 92.5)?,
        })
    }
}

impl Identifiable for Driver {
    type Identifier = i64;

    const IDENTIFIER_FIELD: Self::Field = DriverField::Id;
}

/// Fake badge record, identified by a text code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Badge code
    pub id: String,

    /// Label displayed on the badge
    pub label: String,
}

/// Fields of a [Badge]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum BadgeField {
    /// See [Badge::id]
    Id,

    /// See [Badge::label]
    Label,
}

impl FieldSelector for BadgeField {}

impl Mockable for Badge {
    type Field = BadgeField;

    fn mock_value(injected_values: &InjectedValues<Self>) -> MockResult<Self> {
        Ok(Self {
            id: injected_values.value_or_else(BadgeField::Id, || "badge".to_string())?,
            label: injected_values.value_or_else(BadgeField::Label, || "Pit crew".to_string())?,
        })
    }
}

impl Identifiable for Badge {
    type Identifier = String;

    const IDENTIFIER_FIELD: Self::Field = BadgeField::Id;
}

/// Fake session record, identified by an uuid
///
/// Its default identifier is a fresh uuid: two mocks built without override differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Session identifier
    pub id: Uuid,

    /// Session start
    pub started_at: DateTime<Utc>,
}

/// Fields of a [Session]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SessionField {
    /// See [Session::id]
    Id,

    /// See [Session::started_at]
    StartedAt,
}

impl FieldSelector for SessionField {}

impl Session {
    /// Start of a session mocked without override
    pub fn default_started_at() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(1_136_214_245, 0).unwrap_or_default()
    }
}

impl Mockable for Session {
    type Field = SessionField;

    fn mock_value(injected_values: &InjectedValues<Self>) -> MockResult<Self> {
        Ok(Self {
            id: injected_values.value_or_else(SessionField::Id, Uuid::new_v4)?,
            started_at: injected_values
                .value_or_else(SessionField::StartedAt, Self::default_started_at)?,
        })
    }
}

impl Identifiable for Session {
    type Identifier = Uuid;

    const IDENTIFIER_FIELD: Self::Field = SessionField::Id;
}

#[cfg(test)]
mod tests {
    use crate::{MockError, MockValueKind};

    use super::*;

    #[test]
    fn field_selectors_are_displayed_in_snake_case() {
        assert_eq!("make", CarField::Make.to_string());
        assert_eq!("mean_lap_time", DriverField::MeanLapTime.to_string());
        assert_eq!("started_at", SessionField::StartedAt.to_string());
    }

    #[test]
    fn driver_accepts_every_supported_field_override() {
        let injected_values = InjectedValues::<Driver>::new()
            .with(DriverField::Id, 7_i64)
            .with(DriverField::Name, "Graham Hill")
            .with(DriverField::Wins, 14_u32)
            .with(DriverField::Active, true)
            .with(DriverField::MeanLapTime, 88.1);

        let driver = Driver::mock_value(&injected_values).unwrap();

        assert_eq!(
            Driver {
                id: 7,
                name: "Graham Hill".to_string(),
                wins: 14,
                active: true,
                mean_lap_time: 88.1,
            },
            driver
        );
    }

    #[test]
    fn driver_refuses_a_negative_number_of_wins() {
        let error = Driver::mock_value(&InjectedValues::new().with(DriverField::Wins, -1_i64))
            .expect_err("A negative number of wins should be refused");

        assert!(matches!(
            error,
            MockError::BadInjection { field, expected: MockValueKind::UInt, supplied: MockValueKind::Int }
                if field == "wins"
        ));
    }

    #[test]
    fn session_accepts_fixed_identifier_and_start() {
        let id = Uuid::nil();
        let started_at = DateTime::<Utc>::from_timestamp(0, 0).unwrap();

        let session = Session::mock_value(
            &InjectedValues::new()
                .with(SessionField::Id, id)
                .with(SessionField::StartedAt, started_at),
        )
        .unwrap();

        assert_eq!(Session { id, started_at }, session);
    }

    #[test]
    fn sessions_mocked_without_override_have_distinct_identifiers() {
        let first = Session::mock().unwrap();
        let second = Session::mock().unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.started_at, second.started_at);
    }
}
