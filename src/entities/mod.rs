mod anthem;
mod capital;
mod flag;

pub use anthem::*;
pub use capital::*;
pub use flag::*;
