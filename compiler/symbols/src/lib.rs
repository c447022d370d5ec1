pub use table::*;

pub mod table;
