pub mod language;
pub mod token;

pub use language::*;
pub use token::*;
