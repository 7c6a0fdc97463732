//! Demo configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`VECMATH_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main demo configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output formatting
    #[serde(default)]
    pub display: DisplayConfig,
    /// Vectors the demo operates on
    #[serde(default)]
    pub scenario: ScenarioConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`VECMATH_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // VECMATH_SCENARIO__SCALE=3 -> scenario.scale = 3
        figment = figment.merge(Env::prefixed("VECMATH_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Output formatting
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Digits after the decimal point; shortest round-trip form when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}

/// Demo input vectors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Primary vector `v`
    pub vector: Vec<f64>,
    /// Second operand `w`, expected to match `vector` in size
    pub other: Vec<f64>,
    /// Operand of a different size, used to show the size check
    pub mismatched: Vec<f64>,
    /// Scalar multiplier
    pub scale: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            vector: vec![1.0, 2.0, 3.0, 4.0],
            other: vec![2.0, 3.0, 4.0, 5.0],
            mismatched: vec![1.0, 2.0, 3.0],
            scale: 2.0,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Default log level when `RUST_LOG` is unset (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.scenario.vector, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(config.scenario.scale, 2.0);
        assert_eq!(config.display.precision, None);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("scale"));
        assert!(toml.contains("log_level"));
        assert!(!toml.contains("precision"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("[display]\nprecision = 2\n").unwrap();
        assert_eq!(config.display.precision, Some(2));
        assert_eq!(config.scenario.scale, 2.0);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError { message: "bad value".to_string() };
        assert_eq!(err.to_string(), "Configuration error: bad value");
    }
}
