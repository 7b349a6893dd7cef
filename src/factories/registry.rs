// src/factories/registry.rs

use super::{ChinaFactory, IndiaFactory, RussiaFactory};
use crate::{CountryCode, CountryError, CountryFactory};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Builds a fresh factory for one country.
pub type FactoryConstructor = fn() -> Box<dyn CountryFactory>;

/// One row of the country lookup table.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    code: CountryCode,
    name: String,
    constructor: FactoryConstructor,
}

impl RegistryEntry {
    /// Creates a table row.
    ///
    /// # Arguments
    /// * `code` - Short identifier, e.g. `"ru"`
    /// * `name` - Display name, also accepted as a lookup key
    /// * `constructor` - Function producing the country's factory
    ///
    /// # Returns
    /// * `Ok(RegistryEntry)` - Row ready for [`CountryRegistry::new`]
    /// * `Err(CountryError)` - Code or name is blank
    pub fn new<S: Into<String>>(
        code: &str,
        name: S,
        constructor: FactoryConstructor,
    ) -> Result<Self, CountryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CountryError::validation(format!(
                "Country `{}` needs a display name",
                code
            )));
        }

        Ok(Self {
            code: CountryCode::new(code)?,
            name,
            constructor,
        })
    }

    pub fn code(&self) -> &CountryCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn create_factory(&self) -> Box<dyn CountryFactory> {
        (self.constructor)()
    }
}

/// Lookup table from country identifier to factory constructor.
///
/// The table is fixed once built: every factory is validated up front, so a
/// resolved factory always produces complete data. Rows keep the order they
/// were registered in; codes and display names both index into them.
#[derive(Debug, Clone)]
pub struct CountryRegistry {
    entries: Vec<RegistryEntry>,
    index: HashMap<CountryCode, usize>,
}

impl CountryRegistry {
    /// Builds a registry from table rows.
    ///
    /// # Returns
    /// * `Ok(CountryRegistry)` - All rows are unique and their factories valid
    /// * `Err(CountryError::DuplicateCountry)` - A code or name is already taken
    /// * `Err(CountryError::ValidationError)` - A factory produces blank data
    pub fn new<I>(entries: I) -> Result<Self, CountryError>
    where
        I: IntoIterator<Item = RegistryEntry>,
    {
        let mut registry = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };

        for entry in entries {
            registry.insert(entry)?;
        }

        Ok(registry)
    }

    /// Registry with every country this crate ships.
    pub fn builtin() -> Result<Self, CountryError> {
        Self::new(Self::builtin_entries()?)
    }

    pub fn builtin_entries() -> Result<Vec<RegistryEntry>, CountryError> {
        let table: [(&str, &str, FactoryConstructor); 3] = [
            ("ru", "Russia", || Box::new(RussiaFactory)),
            ("cn", "China", || Box::new(ChinaFactory)),
            ("in", "India", || Box::new(IndiaFactory)),
        ];

        table
            .into_iter()
            .map(|(code, name, constructor)| RegistryEntry::new(code, name, constructor))
            .collect()
    }

    fn insert(&mut self, entry: RegistryEntry) -> Result<(), CountryError> {
        let name_key = CountryCode::new(&entry.name)?;

        if self.is_taken(&entry.code) {
            return Err(CountryError::DuplicateCountry(entry.code.to_string()));
        }
        if name_key != entry.code && self.is_taken(&name_key) {
            return Err(CountryError::DuplicateCountry(entry.name.clone()));
        }

        entry.create_factory().validate()?;

        debug!(code = %entry.code, name = %entry.name, "Registered country factory");

        let position = self.entries.len();
        self.index.insert(entry.code.clone(), position);
        self.index.insert(name_key, position);
        self.entries.push(entry);
        Ok(())
    }

    fn is_taken(&self, key: &CountryCode) -> bool {
        self.index.contains_key(key)
    }

    /// Finds the row for a code or display name, ignoring case.
    pub fn resolve(&self, id: &str) -> Result<&RegistryEntry, CountryError> {
        let key = CountryCode::new(id)?;
        match self.index.get(&key).and_then(|&i| self.entries.get(i)) {
            Some(entry) => Ok(entry),
            None => {
                warn!(country = %key, "Unknown country requested");
                Err(CountryError::UnknownCountry(id.trim().to_string()))
            }
        }
    }

    /// Returns a fresh factory for the given code or display name.
    pub fn factory(&self, id: &str) -> Result<Box<dyn CountryFactory>, CountryError> {
        let entry = self.resolve(id)?;
        debug!(code = %entry.code, "Resolved country factory");
        Ok(entry.create_factory())
    }

    pub fn contains(&self, id: &str) -> bool {
        match CountryCode::new(id) {
            Ok(key) => self.is_taken(&key),
            Err(_) => false,
        }
    }

    /// Rows in registration order.
    pub fn countries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
