// src/factories/india_factory.rs

use crate::{Anthem, Capital, CountryFactory, Flag, SimpleAnthem, SimpleCapital, SimpleFlag};

#[derive(Debug, Clone, Copy, Default)]
pub struct IndiaFactory;

impl CountryFactory for IndiaFactory {
    fn create_flag(&self) -> Box<dyn Flag> {
        Box::new(SimpleFlag::new(
            "Three horizontal stripes: saffron, white with the blue Ashoka Chakra, and green.",
            "🇮🇳",
        ))
    }

    fn create_anthem(&self) -> Box<dyn Anthem> {
        Box::new(SimpleAnthem::new("Jana Gana Mana"))
    }

    fn create_capital(&self) -> Box<dyn Capital> {
        Box::new(SimpleCapital::new("New Delhi", 16_790_000))
    }
}
