use crate::Capital;
use serde::{Deserialize, Serialize};

/// Capital city value object.
///
/// Population is unsigned, so a negative head count cannot be expressed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleCapital {
    name: String,
    population: u64,
}

impl SimpleCapital {
    pub fn new<S: Into<String>>(name: S, population: u64) -> Self {
        Self {
            name: name.into(),
            population,
        }
    }
}

impl Capital for SimpleCapital {
    fn name(&self) -> &str {
        &self.name
    }

    fn population(&self) -> u64 {
        self.population
    }
}

impl From<&dyn Capital> for SimpleCapital {
    fn from(capital: &dyn Capital) -> Self {
        Self::new(capital.name(), capital.population())
    }
}
