//! Configuration of the collection generation.

use std::path::Path;

use anyhow::Context;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::StdResult;

/// Prefix of the environment variables read by [GenerationConfiguration::load].
pub const ENVIRONMENT_PREFIX: &str = "MOCKABLE";

/// Settings of a [MockGenerator][crate::MockGenerator].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenerationConfiguration {
    /// Maximum number of elements a single batch can hold, larger requests are refused.
    ///
    /// Applies to every batch, including the ones built from a list of override maps.
    /// No limit when unset (the default).
    pub max_elements: Option<usize>,
}

impl GenerationConfiguration {
    /// Configuration refusing batches of more than `max_elements` elements.
    pub fn with_max_elements(max_elements: usize) -> Self {
        Self {
            max_elements: Some(max_elements),
        }
    }

    /// Load the configuration from an optional file, overridden by the `MOCKABLE_*`
    /// environment variables (i.e. `MOCKABLE_MAX_ELEMENTS`).
    pub fn load(config_file: Option<&Path>) -> StdResult<Self> {
        Self::load_with_environment(config_file, Environment::with_prefix(ENVIRONMENT_PREFIX))
    }

    fn load_with_environment(
        config_file: Option<&Path>,
        environment: Environment,
    ) -> StdResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }
        let config = builder
            .add_source(environment.try_parsing(true))
            .build()
            .with_context(|| "Could not read the mock generation configuration sources")?;

        Self::from_config(config)
    }

    /// Extract the configuration from an already built [Config].
    pub fn from_config(config: Config) -> StdResult<Self> {
        config
            .try_deserialize()
            .with_context(|| "Invalid mock generation configuration")
    }
}
