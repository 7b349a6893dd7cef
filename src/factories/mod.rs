// src/factories/mod.rs

mod china_factory;
mod india_factory;
mod registry;
mod russia_factory;

pub use china_factory::ChinaFactory;
pub use india_factory::IndiaFactory;
pub use registry::{CountryRegistry, FactoryConstructor, RegistryEntry};
pub use russia_factory::RussiaFactory;
