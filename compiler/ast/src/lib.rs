pub use ast_def::*;

pub mod ast_def;
