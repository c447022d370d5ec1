pub use types::*;

pub mod types;
