#![warn(missing_docs, clippy::missing_docs_in_private_items)]

//! # Country Search Settings
//!
//! Configuration is specified in several ways, with later methods overriding earlier ones.
//!
//! 1. A base configuration checked into the repository, in `config/base.yaml`.
//!    This provides the default values for every setting.
//! 2. Per-environment configuration files in the `config` directory. The
//!    environment is selected using the environment variable
//!    `COUNTRY_SEARCH_ENV`. The settings for that environment are then loaded
//!    from `config/${env}.yaml`, if it exists. The default environment is
//!    "development". A "production" environment is also provided.
//! 3. A local configuration file not checked into the repository, at
//!    `config/local.yaml`. This file is in `.gitignore` and is the place for
//!    secrets such as the image search key.
//! 4. Environment variables that begin with `COUNTRY_SEARCH_` and use `__` as a
//!    separator between levels. For example, `Settings::search::max_list_matches`
//!    can be controlled from `COUNTRY_SEARCH_SEARCH__MAX_LIST_MATCHES`.
//!
//! Tests should use `Settings::load_for_tests` which only reads from
//! `config/base.yaml`, `config/test.yaml`, and `config/local_test.yaml` (if it
//! exists). It does not read from environment variables.
//!
//! Configuration files are canonically YAML files. However, any format supported
//! by the [config] crate can be used, including JSON and TOML.

mod logging;

pub use logging::{DirectiveWrapper, LogFormat, LoggingSettings};

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};
use std::time::Duration;

/// Top level settings object for country search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    /// The environment the application is running in. Should only be set with
    /// the `COUNTRY_SEARCH_ENV` environment variable.
    pub env: String,

    /// Enable additional features to debug the application.
    pub debug: bool,

    /// Settings for the country lookup API.
    pub countries: CountriesSettings,

    /// Settings for the image search API.
    pub images: ImageSearchSettings,

    /// Settings for the search page itself.
    pub search: SearchSettings,

    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Settings for the REST Countries API.
#[serde_as]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CountriesSettings {
    /// Base URL of the API. The `name/{name}` resource is resolved relative to it.
    pub endpoint: String,

    /// The response fields to request. Everything else is filtered out by the server.
    pub fields: Vec<String>,

    /// How long to wait for a connection to be established.
    #[serde_as(as = "DurationMilliSeconds")]
    #[serde(rename = "connect_timeout_ms")]
    pub connect_timeout: Duration,

    /// How long to wait for a complete response.
    #[serde_as(as = "DurationMilliSeconds")]
    #[serde(rename = "request_timeout_ms")]
    pub request_timeout: Duration,
}

/// Settings for the Pixabay image search API.
#[serde_as]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImageSearchSettings {
    /// Base URL of the API.
    pub endpoint: String,

    /// The API key sent with every request.
    pub key: String,

    /// Value of the `image_type` filter, such as "photo".
    pub image_type: String,

    /// Value of the `orientation` filter, such as "horizontal".
    pub orientation: String,

    /// Whether to only return images suitable for all ages.
    pub safesearch: bool,

    /// The page size used when the caller does not choose one.
    pub per_page: u32,

    /// How long to wait for a complete response.
    #[serde_as(as = "DurationMilliSeconds")]
    #[serde(rename = "request_timeout_ms")]
    pub request_timeout: Duration,
}

/// Settings for the search page.
#[serde_as]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Input events are coalesced until this much time passes without a new one.
    #[serde_as(as = "DurationMilliSeconds")]
    #[serde(rename = "debounce_delay_ms")]
    pub debounce_delay: Duration,

    /// The largest number of matches that will be shown as a list.
    pub max_list_matches: usize,
}

impl Settings {
    /// Load settings from configuration files and environment variables.
    ///
    /// # Errors
    /// If any of the configured values are invalid, or if any of the required
    /// configuration files are missing.
    pub fn load() -> Result<Self, ConfigError> {
        let env =
            std::env::var("COUNTRY_SEARCH_ENV").unwrap_or_else(|_| "development".to_string());

        Config::builder()
            // Start off with the base config.
            .add_source(File::with_name("./config/base"))
            // Merge in an environment specific config.
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            // Add a local configuration file that is `.gitignore`ed.
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables that start with "COUNTRY_SEARCH_" and
            // have "__" to separate levels. For example,
            // `COUNTRY_SEARCH_IMAGES__KEY` maps to `Settings::images::key`.
            .add_source(
                Environment::with_prefix("COUNTRY_SEARCH")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override("env", env.as_str())?
            .build()?
            .try_deserialize()
    }

    /// Load settings from configuration files for tests.
    ///
    /// `changer` is applied to the loaded settings before they are returned.
    ///
    /// # Panics
    /// If the test configuration files are missing or invalid.
    pub fn load_for_tests<F: FnOnce(&mut Self)>(changer: F) -> Self {
        let mut settings: Self = Config::builder()
            // Start off with the base config.
            .add_source(File::with_name("../config/base"))
            // Merge in test specific config.
            .add_source(File::with_name("../config/test"))
            // Add a local configuration file that is `.gitignore`ed.
            .add_source(File::with_name("../config/local_test").required(false))
            .set_override("env", "test")
            .expect("Could not set env for tests")
            .build()
            .expect("Could not load settings for tests")
            .try_deserialize()
            .expect("Could not convert settings");

        changer(&mut settings);
        settings
    }
}
