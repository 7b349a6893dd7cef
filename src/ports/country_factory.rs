// src/ports/country_factory.rs

use crate::{Anthem, Capital, CountryError, Flag};

/// Abstract factory producing the symbols of a single country.
///
/// Every call builds a fresh value object. All three operations of one
/// implementation must describe the same country; the returned traits carry
/// no country tag, so mixing them up is only caught by tests.
pub trait CountryFactory: Send + Sync {
    fn create_flag(&self) -> Box<dyn Flag>;

    fn create_anthem(&self) -> Box<dyn Anthem>;

    fn create_capital(&self) -> Box<dyn Capital>;

    /// Builds one product of each kind and checks that no text field is blank.
    ///
    /// # Returns
    /// * `Ok(())` - All products carry usable data
    /// * `Err(CountryError)` - A flag, anthem or capital field is empty
    fn validate(&self) -> Result<(), CountryError> {
        let flag = self.create_flag();
        require_text("Flag description", flag.description())?;
        require_text("Flag emoji", flag.emoji())?;

        let anthem = self.create_anthem();
        require_text("Anthem title", anthem.title())?;

        let capital = self.create_capital();
        require_text("Capital name", capital.name())?;

        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<(), CountryError> {
    if value.trim().is_empty() {
        return Err(CountryError::validation(format!(
            "{} cannot be empty or whitespace",
            field
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SimpleAnthem, SimpleCapital, SimpleFlag};

    struct BlankAnthemFactory;

    impl CountryFactory for BlankAnthemFactory {
        fn create_flag(&self) -> Box<dyn Flag> {
            Box::new(SimpleFlag::new("Plain white field", "🏳️"))
        }

        fn create_anthem(&self) -> Box<dyn Anthem> {
            Box::new(SimpleAnthem::new("   "))
        }

        fn create_capital(&self) -> Box<dyn Capital> {
            Box::new(SimpleCapital::new("Nowhere", 0))
        }
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let result = BlankAnthemFactory.validate();

        match result {
            Err(CountryError::ValidationError(msg)) => assert!(msg.contains("Anthem title")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_population_is_valid() {
        let capital = BlankAnthemFactory.create_capital();
        assert_eq!(capital.population(), 0);
    }
}
