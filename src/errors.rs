use thiserror::Error;

#[derive(Error, Debug)]
pub enum CountryError {
    #[error("Country `{0}` not found")]
    UnknownCountry(String),

    #[error("Country `{0}` is registered more than once")]
    DuplicateCountry(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl CountryError {
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }
}
