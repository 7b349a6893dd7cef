// src/factories/china_factory.rs

use crate::{Anthem, Capital, CountryFactory, Flag, SimpleAnthem, SimpleCapital, SimpleFlag};

#[derive(Debug, Clone, Copy, Default)]
pub struct ChinaFactory;

impl CountryFactory for ChinaFactory {
    fn create_flag(&self) -> Box<dyn Flag> {
        Box::new(SimpleFlag::new(
            "Red field with one large and four smaller yellow stars.",
            "🇨🇳",
        ))
    }

    fn create_anthem(&self) -> Box<dyn Anthem> {
        Box::new(SimpleAnthem::new("March of the Volunteers"))
    }

    fn create_capital(&self) -> Box<dyn Capital> {
        Box::new(SimpleCapital::new("Beijing", 21_890_000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_china_symbols() {
        assert_eq!(ChinaFactory.create_flag().emoji(), "🇨🇳");
        assert_eq!(ChinaFactory.create_anthem().title(), "March of the Volunteers");
        assert_eq!(ChinaFactory.create_capital().name(), "Beijing");
    }
}
