pub mod parser;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use parser::{ParseError, Parser};
pub use store::QueryStore;
