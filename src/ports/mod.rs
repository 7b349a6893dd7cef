// src/ports/mod.rs

pub use anthem::Anthem;
pub use capital::Capital;
pub use country_factory::CountryFactory;
pub use flag::Flag;

pub mod anthem;
pub mod capital;
pub mod country_factory;
pub mod flag;
