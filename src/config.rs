use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub max_limit: Option<u16>,
    pub max_pool_size: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_species_weight")]
    pub species: f64,
    #[serde(default = "default_breed_weight")]
    pub breed: f64,
    #[serde(default = "default_age_weight")]
    pub age: f64,
    #[serde(default = "default_size_weight")]
    pub size: f64,
    #[serde(default = "default_energy_weight")]
    pub energy: f64,
    #[serde(default = "default_training_weight")]
    pub training: f64,
    #[serde(default = "default_family_weight")]
    pub family_friendly: f64,
    #[serde(default = "default_kids_weight")]
    pub good_with_kids: f64,
    #[serde(default = "default_pets_weight")]
    pub good_with_pets: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            species: default_species_weight(),
            breed: default_breed_weight(),
            age: default_age_weight(),
            size: default_size_weight(),
            energy: default_energy_weight(),
            training: default_training_weight(),
            family_friendly: default_family_weight(),
            good_with_kids: default_kids_weight(),
            good_with_pets: default_pets_weight(),
        }
    }
}

fn default_species_weight() -> f64 { 0.25 }
fn default_breed_weight() -> f64 { 0.20 }
fn default_age_weight() -> f64 { 0.15 }
fn default_size_weight() -> f64 { 0.12 }
fn default_energy_weight() -> f64 { 0.10 }
fn default_training_weight() -> f64 { 0.08 }
fn default_family_weight() -> f64 { 0.05 }
fn default_kids_weight() -> f64 { 0.03 }
fn default_pets_weight() -> f64 { 0.02 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PAWMART_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PAWMART__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("PAWMART")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PAWMART")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
