// src/factories/russia_factory.rs

use crate::{Anthem, Capital, CountryFactory, Flag, SimpleAnthem, SimpleCapital, SimpleFlag};

#[derive(Debug, Clone, Copy, Default)]
pub struct RussiaFactory;

impl CountryFactory for RussiaFactory {
    fn create_flag(&self) -> Box<dyn Flag> {
        Box::new(SimpleFlag::new(
            "Three horizontal stripes: white, blue and red.",
            "🇷🇺",
        ))
    }

    fn create_anthem(&self) -> Box<dyn Anthem> {
        Box::new(SimpleAnthem::new("State Anthem of the Russian Federation"))
    }

    fn create_capital(&self) -> Box<dyn Capital> {
        Box::new(SimpleCapital::new("Moscow", 12_680_000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_russia_capital() {
        let capital = RussiaFactory.create_capital();

        assert_eq!(capital.name(), "Moscow");
        assert_eq!(capital.population(), 12_680_000);
    }

    #[test]
    fn test_russia_flag_and_anthem() {
        assert_eq!(RussiaFactory.create_flag().emoji(), "🇷🇺");
        assert_eq!(
            RussiaFactory.create_anthem().title(),
            "State Anthem of the Russian Federation"
        );
    }
}
