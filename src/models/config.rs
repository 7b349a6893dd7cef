use crate::{CountryCode, CountryError};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_COUNTRY: &str = "ru";

/// Host-side selection settings, read from TOML.
///
/// ```toml
/// default_country = "cn"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CountryConfig {
    #[serde(default = "default_country")]
    pub default_country: String,
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

impl Default for CountryConfig {
    fn default() -> Self {
        Self {
            default_country: default_country(),
        }
    }
}

impl CountryConfig {
    pub fn new<S: Into<String>>(default_country: S) -> Self {
        Self {
            default_country: default_country.into(),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CountryError> {
        let config: Self = toml::from_str(contents)?;
        config.default_code()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CountryError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Returns the configured default as a normalized identifier.
    pub fn default_code(&self) -> Result<CountryCode, CountryError> {
        CountryCode::new(&self.default_country).map_err(|_| {
            CountryError::config(format!(
                "Invalid default_country: '{}'",
                self.default_country
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_country() {
        let config = CountryConfig::from_toml_str("default_country = \"India\"").unwrap();

        assert_eq!(config.default_country, "India");
        assert_eq!(config.default_code().unwrap().as_str(), "india");
    }

    #[test]
    fn test_missing_key_uses_default() {
        let config = CountryConfig::from_toml_str("").unwrap();
        assert_eq!(config, CountryConfig::default());
    }

    #[test]
    fn test_blank_default_is_config_error() {
        let result = CountryConfig::from_toml_str("default_country = \" \"");
        assert!(matches!(result, Err(CountryError::ConfigError(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = CountryConfig::from_toml_str("default_country = ");
        assert!(matches!(result, Err(CountryError::TomlError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = CountryConfig::load("/nonexistent/country-factory/config.toml");
        assert!(matches!(result, Err(CountryError::IoError(_))));
    }
}
