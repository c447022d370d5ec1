pub use cursor::*;
pub use lex::*;

pub mod cursor;
pub mod lex;
