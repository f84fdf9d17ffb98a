use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub search: SearchSettings,
    pub scraper: ScraperSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    /// Passed to the search API as the location of every query.
    pub location: String,
    pub credentials_path: PathBuf,
    pub categories_path: PathBuf,
    pub output_path: PathBuf,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub seed: u64,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct SearchSettings {
    pub base_url: String,
    pub term: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub page_limit: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub result_cap: usize,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ScraperSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub delay_unit_millis: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_secs: u64,
}

impl ScraperSettings {
    pub fn delay_unit(&self) -> Duration {
        Duration::from_millis(self.delay_unit_millis)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    load_configuration(&configuration_directory, environment)
}

/// Layers `base.yaml`, the optional `{environment}.yaml` and `APP_*` env vars.
pub fn load_configuration(
    configuration_directory: &Path,
    environment: Environment,
) -> Result<Settings, config::ConfigError> {
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename))
                .required(false),
        )
        // E.g. `APP_SEARCH__PAGE_LIMIT=50` would set `Settings.search.page_limit`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
