use crate::{Capital, CountryConfig, CountryError, CountryProfile, factories::CountryRegistry};
use tracing::debug;

/// Entry point for hosts: picks a factory by identifier and assembles its
/// symbols into a [`CountryProfile`].
pub struct CountryService {
    registry: CountryRegistry,
    config: CountryConfig,
}

impl CountryService {
    pub fn new(registry: CountryRegistry, config: CountryConfig) -> Result<Self, CountryError> {
        let default_code = config.default_code()?;
        if !registry.contains(default_code.as_str()) {
            return Err(CountryError::config(format!(
                "Default country `{}` is not registered",
                config.default_country
            )));
        }

        Ok(Self { registry, config })
    }

    /// Service over the built-in countries with the default configuration.
    pub fn builtin() -> Result<Self, CountryError> {
        Self::new(CountryRegistry::builtin()?, CountryConfig::default())
    }

    pub fn registry(&self) -> &CountryRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CountryConfig {
        &self.config
    }

    pub fn profile(&self, id: &str) -> Result<CountryProfile, CountryError> {
        let factory = self.registry.factory(id)?;
        let profile = CountryProfile::from_factory(factory.as_ref());
        debug!(country = id, capital = %profile.capital.name(), "Assembled country profile");
        Ok(profile)
    }

    pub fn default_profile(&self) -> Result<CountryProfile, CountryError> {
        self.profile(&self.config.default_country)
    }

    /// Display names of the registered countries, in registration order.
    pub fn available_countries(&self) -> Vec<&str> {
        self.registry.countries().map(|entry| entry.name()).collect()
    }
}
