pub mod config;
pub mod country_code;
pub mod profile;

pub use config::*;
pub use country_code::*;
pub use profile::*;
