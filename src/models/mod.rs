pub mod language;
pub mod product;

pub use language::*;
pub use product::*;
