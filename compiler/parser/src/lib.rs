pub use parser::*;

pub mod parser;
