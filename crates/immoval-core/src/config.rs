use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ImmovalError, Result};

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Default map center: Brussels
pub const DEFAULT_MAP_CENTER: (f64, f64) = (50.8503, 4.3517);

/// Calibrated offline against the held-out test split; display-only, never
/// recomputed at runtime.
pub const DEFAULT_MAE: f64 = 48_726.73;

/// Layered configuration for Immoval
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// Path to the property feature table (CSV)
    pub features_path: ConfigValue<PathBuf>,
    /// Path to the location coordinate table (CSV)
    pub locations_path: ConfigValue<PathBuf>,
    /// Path to the serialized price model artifact
    pub model_path: ConfigValue<PathBuf>,
    /// Fixed mean absolute error used for the displayed confidence band
    pub mae: ConfigValue<f64>,
    /// Port the HTTP adapter binds to
    pub api_port: ConfigValue<u16>,
    /// Default map center (lat, lon) used when no bounds are supplied
    pub map_center: ConfigValue<(f64, f64)>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            features_path: ConfigValue::new(
                PathBuf::from("data/property_features.csv"),
                ConfigSource::Default,
            ),
            locations_path: ConfigValue::new(
                PathBuf::from("data/location_coordinates.csv"),
                ConfigSource::Default,
            ),
            model_path: ConfigValue::new(
                PathBuf::from("model/price_model.json"),
                ConfigSource::Default,
            ),
            mae: ConfigValue::new(DEFAULT_MAE, ConfigSource::Default),
            api_port: ConfigValue::new(3001, ConfigSource::Default),
            map_center: ConfigValue::new(DEFAULT_MAP_CENTER, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ImmovalError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| ImmovalError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(features_path) = file_config.features_path {
            self.features_path.update(features_path, ConfigSource::File);
        }

        if let Some(locations_path) = file_config.locations_path {
            self.locations_path.update(locations_path, ConfigSource::File);
        }

        if let Some(model_path) = file_config.model_path {
            self.model_path.update(model_path, ConfigSource::File);
        }

        if let Some(mae) = file_config.mae {
            self.mae.update(mae, ConfigSource::File);
        }

        if let Some(api_port) = file_config.api_port {
            self.api_port.update(api_port, ConfigSource::File);
        }

        if let Some(center) = file_config.map_center {
            self.map_center.update((center[0], center[1]), ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        if let Ok(path) = env::var("IMMOVAL_FEATURES_PATH") {
            self.features_path.update(PathBuf::from(path), ConfigSource::Environment);
        }

        if let Ok(path) = env::var("IMMOVAL_LOCATIONS_PATH") {
            self.locations_path.update(PathBuf::from(path), ConfigSource::Environment);
        }

        if let Ok(path) = env::var("IMMOVAL_MODEL_PATH") {
            self.model_path.update(PathBuf::from(path), ConfigSource::Environment);
        }

        if let Ok(mae_str) = env::var("IMMOVAL_MAE") {
            match mae_str.parse::<f64>() {
                Ok(mae) if mae.is_finite() && mae >= 0.0 => {
                    self.mae.update(mae, ConfigSource::Environment);
                }
                _ => tracing::warn!(
                    "Invalid IMMOVAL_MAE value '{}': expected non-negative number",
                    mae_str
                ),
            }
        }

        if let Ok(port_str) = env::var("IMMOVAL_PORT") {
            match port_str.parse::<u16>() {
                Ok(port) => self.api_port.update(port, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid IMMOVAL_PORT value '{}': expected integer port",
                    port_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(features_path) = overrides.features_path {
            self.features_path.update(features_path, ConfigSource::Cli);
        }

        if let Some(locations_path) = overrides.locations_path {
            self.locations_path.update(locations_path, ConfigSource::Cli);
        }

        if let Some(model_path) = overrides.model_path {
            self.model_path.update(model_path, ConfigSource::Cli);
        }

        if let Some(mae) = overrides.mae {
            self.mae.update(mae, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "features_path".to_string(),
            (self.features_path.value.display().to_string(), self.features_path.source),
        );

        map.insert(
            "locations_path".to_string(),
            (self.locations_path.value.display().to_string(), self.locations_path.source),
        );

        map.insert(
            "model_path".to_string(),
            (self.model_path.value.display().to_string(), self.model_path.source),
        );

        map.insert("mae".to_string(), (format!("{:.2}", self.mae.value), self.mae.source));

        map.insert(
            "api_port".to_string(),
            (self.api_port.value.to_string(), self.api_port.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    features_path: Option<PathBuf>,
    locations_path: Option<PathBuf>,
    model_path: Option<PathBuf>,
    mae: Option<f64>,
    api_port: Option<u16>,
    map_center: Option<[f64; 2]>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub features_path: Option<PathBuf>,
    pub locations_path: Option<PathBuf>,
    pub model_path: Option<PathBuf>,
    pub mae: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.mae.value, DEFAULT_MAE);
        assert_eq!(config.mae.source, ConfigSource::Default);
        assert_eq!(config.api_port.value, 3001);
        assert_eq!(config.map_center.value, DEFAULT_MAP_CENTER);
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        // File should override default
        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        // Environment should override file
        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);

        // File must not override environment
        value.update(400, ConfigSource::File);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
features_path = "custom/features.csv"
mae = 51000.0
api_port = 8088
map_center = [51.2194, 4.4025]
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.features_path.value, PathBuf::from("custom/features.csv"));
        assert_eq!(config.features_path.source, ConfigSource::File);
        assert_eq!(config.mae.value, 51000.0);
        assert_eq!(config.api_port.value, 8088);
        assert_eq!(config.map_center.value, (51.2194, 4.4025));
        // Untouched keys keep their defaults
        assert_eq!(config.model_path.source, ConfigSource::Default);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "mae = [not toml").unwrap();

        let err = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ImmovalError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut config = LayeredConfig::with_defaults();
        config.update_from_cli(CliConfigOverrides {
            model_path: Some(PathBuf::from("elsewhere/model.json")),
            mae: Some(40000.0),
            ..Default::default()
        });

        assert_eq!(config.model_path.value, PathBuf::from("elsewhere/model.json"));
        assert_eq!(config.model_path.source, ConfigSource::Cli);
        assert_eq!(config.mae.value, 40000.0);
    }
}
